use crate::effects::domain::face_effect::{EffectContext, FaceEffect};
use crate::shared::constants::MOSAIC_SCALE;
use crate::shared::frame::Frame;

/// Pixelates the face region: nearest-neighbor downsample to `scale`, then
/// nearest-neighbor upsample back to the original size.
///
/// Floor index mapping in both directions makes the operation idempotent
/// for a fixed scale.
pub struct Mosaic {
    scale: f32,
}

impl Mosaic {
    pub fn new(scale: f32) -> Self {
        debug_assert!(scale > 0.0 && scale <= 1.0, "scale must be in (0, 1]");
        Self { scale }
    }
}

impl Default for Mosaic {
    fn default() -> Self {
        Self::new(MOSAIC_SCALE)
    }
}

impl FaceEffect for Mosaic {
    fn apply(
        &self,
        frame: &mut Frame,
        ctx: &EffectContext,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let face = ctx.face;
        let y0 = face.y.max(0) as usize;
        let y1 = face.bottom().clamp(0, frame.height() as i32) as usize;
        let x0 = face.x.max(0) as usize;
        let x1 = face.right().clamp(0, frame.width() as i32) as usize;
        let (rw, rh) = (x1.saturating_sub(x0), y1.saturating_sub(y0));
        if rw == 0 || rh == 0 {
            return Ok(());
        }

        let small_w = ((rw as f32 * self.scale).round() as usize).max(1);
        let small_h = ((rh as f32 * self.scale).round() as usize).max(1);

        // Downsample
        let mut small = vec![0u8; small_w * small_h * 3];
        for sy in 0..small_h {
            let src_y = y0 + sy * rh / small_h;
            for sx in 0..small_w {
                let src_x = x0 + sx * rw / small_w;
                let px = frame.rgb(src_x as u32, src_y as u32);
                small[(sy * small_w + sx) * 3..][..3].copy_from_slice(&px);
            }
        }

        // Upsample back over the region
        for y in 0..rh {
            let sy = y * small_h / rh;
            for x in 0..rw {
                let sx = x * small_w / rw;
                let i = (sy * small_w + sx) * 3;
                frame.set_rgb(
                    (x0 + x) as u32,
                    (y0 + y) as u32,
                    [small[i], small[i + 1], small[i + 2]],
                );
            }
        }
        Ok(())
    }
}
