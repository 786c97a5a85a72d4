use ndarray::Array3;

use crate::effects::domain::face_effect::{EffectContext, FaceEffect};
use crate::shared::constants::SLIM_STRENGTH;
use crate::shared::frame::Frame;

/// Pinches the face region horizontally.
///
/// Every row is resampled at `j + offset(j)` where the offset peaks at the
/// region's horizontal center and falls linearly to zero at its edges.
/// Samples use linear interpolation with edge replication.
pub struct FaceSlim {
    strength: f32,
}

impl FaceSlim {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }
}

impl Default for FaceSlim {
    fn default() -> Self {
        Self::new(SLIM_STRENGTH)
    }
}

impl FaceEffect for FaceSlim {
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
        if rw < 2 || rh == 0 {
            return Ok(());
        }

        let cx = rw as f32 / 2.0;
        let sample_x: Vec<f32> = (0..rw)
            .map(|j| j as f32 + (cx - (j as f32 - cx).abs()) * self.strength / cx)
            .collect();

        // Snapshot the region, then resample each row from the copy.
        let view = frame.as_ndarray();
        let src: Array3<u8> = view
            .slice(ndarray::s![y0..y1, x0..x1, ..])
            .to_owned();
        let mut dst = frame.as_ndarray_mut();

        for i in 0..rh {
            for (j, &sx) in sample_x.iter().enumerate() {
                let left = sx.floor();
                let frac = sx - left;
                let j0 = (left as i64).clamp(0, rw as i64 - 1) as usize;
                let j1 = (left as i64 + 1).clamp(0, rw as i64 - 1) as usize;
                for c in 0..3 {
                    let a = src[[i, j0, c]] as f32;
                    let b = src[[i, j1, c]] as f32;
                    dst[[y0 + i, x0 + j, c]] = (a + (b - a) * frac).round() as u8;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::point::Point;
    use crate::shared::region::Region;

    fn ctx(face: Region) -> EffectContext {
        EffectContext {
            face,
            eyes: [Point::new(0, 0), Point::new(0, 0)],
            click: None,
        }
    }

    /// Horizontal ramp: channel 0 encodes the column index.
    fn ramp_frame(w: u32, h: u32) -> Frame {
        let mut frame = Frame::filled(w, h, [0, 0, 0]);
        for y in 0..h {
            for x in 0..w {
                frame.set_rgb(x, y, [x as u8, 0, 0]);
            }
        }
        frame
    }

    #[test]
    fn test_zero_strength_is_identity() {
        let mut frame = ramp_frame(40, 20);
        let before = frame.data().to_vec();
        let effect = FaceSlim::new(0.0);
        effect.apply(&mut frame, &ctx(Region::new(5, 5, 30, 10))).unwrap();
        assert_eq!(frame.data(), &before[..]);
    }

    #[test]
    fn test_constant_region_unchanged() {
        let mut frame = Frame::filled(40, 20, [80, 90, 100]);
        let effect = FaceSlim::new(10.0);
        effect.apply(&mut frame, &ctx(Region::new(0, 0, 40, 20))).unwrap();
        assert_eq!(frame.rgb(20, 10), [80, 90, 100]);
    }

    #[test]
    fn test_center_column_samples_shifted_source() {
        let mut frame = ramp_frame(64, 8);
        let effect = FaceSlim::new(4.0);
        effect.apply(&mut frame, &ctx(Region::new(0, 0, 64, 8))).unwrap();
        // At the exact center the offset equals the strength, so the center
        // column shows what used to be four columns to the right.
        assert_eq!(frame.rgb(32, 4)[0], 36);
    }

    #[test]
    fn test_leftmost_column_has_zero_offset() {
        let mut frame = ramp_frame(64, 8);
        let effect = FaceSlim::new(8.0);
        effect.apply(&mut frame, &ctx(Region::new(0, 0, 64, 8))).unwrap();
        assert_eq!(frame.rgb(0, 4)[0], 0);
    }

    #[test]
    fn test_out_of_range_samples_replicate_edge() {
        let mut frame = ramp_frame(16, 4);
        // Huge strength pushes center samples far past the right edge
        let effect = FaceSlim::new(100.0);
        effect.apply(&mut frame, &ctx(Region::new(0, 0, 16, 4))).unwrap();
        assert_eq!(frame.rgb(8, 2)[0], 15); // clamped to last column
    }

    #[test]
    fn test_pixels_outside_region_untouched() {
        let mut frame = ramp_frame(64, 16);
        let effect = FaceSlim::new(6.0);
        effect.apply(&mut frame, &ctx(Region::new(16, 4, 32, 8))).unwrap();
        assert_eq!(frame.rgb(2, 2)[0], 2);
        assert_eq!(frame.rgb(60, 14)[0], 60);
    }

    #[test]
    fn test_degenerate_region_is_noop() {
        let mut frame = ramp_frame(16, 4);
        let before = frame.data().to_vec();
        let effect = FaceSlim::default();
        effect.apply(&mut frame, &ctx(Region::new(4, 1, 1, 2))).unwrap();
        assert_eq!(frame.data(), &before[..]);
    }
}
