use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection.
///
/// Returns candidate rectangles in frame coordinates. Implementations may
/// keep per-stream state, hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
