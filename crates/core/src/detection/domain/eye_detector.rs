use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for eye detection restricted to a face rectangle.
///
/// Returns candidate rectangles in frame coordinates (implementations
/// translate ROI-local results before returning them).
pub trait EyeDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        face: &Region,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
