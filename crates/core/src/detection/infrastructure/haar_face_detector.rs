use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::constants::{FACE_MIN_NEIGHBORS, FACE_MIN_SIZE, FACE_SCALE_FACTOR};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::cascade::{self, CascadeError};

/// Frontal-face detection via a Haar cascade classifier.
///
/// Frames are converted to an equalized grayscale image before detection,
/// which runs with a fixed scale factor, neighbor count, and minimum size.
pub struct HaarFaceDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
    min_size: i32,
}

// The classifier holds raw OpenCV pointers that are never shared across
// threads; the detector lives on the pipeline thread only.
unsafe impl Send for HaarFaceDetector {}

impl HaarFaceDetector {
    pub fn from_file(path: &Path) -> Result<Self, CascadeError> {
        Ok(Self {
            classifier: cascade::load_cascade(path)?,
            scale_factor: FACE_SCALE_FACTOR,
            min_neighbors: FACE_MIN_NEIGHBORS,
            min_size: FACE_MIN_SIZE,
        })
    }
}

impl FaceDetector for HaarFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = cascade::equalized_gray(
            frame.data(),
            frame.width() as i32,
            frame.height() as i32,
        )?;

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &gray,
            &mut faces,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::new(self.min_size, self.min_size),
            Size::new(0, 0),
        )?;

        Ok(faces.iter().map(cascade::rect_to_region).collect())
    }
}
