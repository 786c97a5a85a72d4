use crate::effects::domain::face_effect::{EffectContext, FaceEffect};
use crate::shared::constants::{GREEN_HUE, SKIN_HUE_MAX};
use crate::shared::frame::Frame;

use super::hsv;

/// Recolors skin-toned pixels inside the face region.
///
/// Pixel selection mirrors an HSV in-range mask with full saturation and
/// value spans: only the hue bound matters. Masked pixels get their hue
/// overwritten and are converted back; everything else is untouched.
pub struct SkinRecolor {
    hue_max: u8,
    target_hue: u8,
}

impl SkinRecolor {
    pub fn new(hue_max: u8, target_hue: u8) -> Self {
        Self {
            hue_max,
            target_hue,
        }
    }
}

impl Default for SkinRecolor {
    fn default() -> Self {
        Self::new(SKIN_HUE_MAX, GREEN_HUE)
    }
}

impl FaceEffect for SkinRecolor {
    fn apply(
        &self,
        frame: &mut Frame,
        ctx: &EffectContext,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let face = ctx.face;
        let y0 = face.y.max(0) as u32;
        let y1 = face.bottom().clamp(0, frame.height() as i32) as u32;
        let x0 = face.x.max(0) as u32;
        let x1 = face.right().clamp(0, frame.width() as i32) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let [h, s, v] = hsv::rgb_to_hsv(frame.rgb(x, y));
                if h <= self.hue_max {
                    frame.set_rgb(x, y, hsv::hsv_to_rgb([self.target_hue, s, v]));
                }
            }
        }
        Ok(())
    }
}
