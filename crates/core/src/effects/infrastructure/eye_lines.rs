use crate::draw;
use crate::effects::domain::face_effect::{EffectContext, FaceEffect};
use crate::shared::constants::EYE_LINE_COLOR;
use crate::shared::frame::Frame;

/// Draws line segments from each eye center to the last recorded click
/// point. Draws nothing until a click has been recorded.
pub struct EyeLines {
    color: [u8; 3],
    thickness: i32,
}

impl EyeLines {
    pub fn new(color: [u8; 3], thickness: i32) -> Self {
        Self { color, thickness }
    }
}

impl Default for EyeLines {
    fn default() -> Self {
        Self::new(EYE_LINE_COLOR, 2)
    }
}

impl FaceEffect for EyeLines {
    fn apply(
        &self,
        frame: &mut Frame,
        ctx: &EffectContext,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let Some(click) = ctx.click else {
            return Ok(());
        };
        for eye in ctx.eyes {
            draw::line(frame, eye, click, self.color, self.thickness);
        }
        Ok(())
    }
}
