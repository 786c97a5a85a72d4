use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::eye_detector::EyeDetector;
use crate::shared::constants::{EYE_MIN_NEIGHBORS, EYE_MIN_SIZE, EYE_SCALE_FACTOR};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::cascade::{self, CascadeError};

/// Eye detection via a Haar cascade, restricted to the face rectangle.
///
/// The face sub-image is extracted, converted to equalized grayscale, and
/// scanned; results are translated back to frame coordinates.
pub struct HaarEyeDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
    min_size: i32,
}

// Same single-thread ownership as the face detector.
unsafe impl Send for HaarEyeDetector {}

impl HaarEyeDetector {
    pub fn from_file(path: &Path) -> Result<Self, CascadeError> {
        Ok(Self {
            classifier: cascade::load_cascade(path)?,
            scale_factor: EYE_SCALE_FACTOR,
            min_neighbors: EYE_MIN_NEIGHBORS,
            min_size: EYE_MIN_SIZE,
        })
    }
}

impl EyeDetector for HaarEyeDetector {
    fn detect(
        &mut self,
        frame: &Frame,
        face: &Region,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let y0 = face.y.max(0) as u32;
        let y1 = face.bottom().clamp(0, frame.height() as i32) as u32;
        let x0 = face.x.max(0) as u32;
        let x1 = face.right().clamp(0, frame.width() as i32) as u32;
        if x1 <= x0 || y1 <= y0 {
            return Ok(Vec::new());
        }

        let mut roi = Vec::with_capacity(((x1 - x0) * (y1 - y0) * 3) as usize);
        for y in y0..y1 {
            let start = frame.pixel_offset(x0, y);
            let end = frame.pixel_offset(x1 - 1, y) + 3;
            roi.extend_from_slice(&frame.data()[start..end]);
        }
        let gray = cascade::equalized_gray(&roi, (x1 - x0) as i32, (y1 - y0) as i32)?;

        let mut eyes = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &gray,
            &mut eyes,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::new(self.min_size, self.min_size),
            Size::new(0, 0),
        )?;

        Ok(eyes
            .iter()
            .map(|r| {
                let local = cascade::rect_to_region(r);
                Region::new(
                    local.x + x0 as i32,
                    local.y + y0 as i32,
                    local.width,
                    local.height,
                )
            })
            .collect())
    }
}
