use crate::shared::constants::FACE_MARGIN;
use crate::shared::region::Region;

/// Selects the face rectangle effects operate on: the largest detection,
/// grown by a fixed margin and clamped to frame bounds.
pub struct FaceRegionBuilder {
    margin: i32,
}

impl FaceRegionBuilder {
    pub fn new(margin: i32) -> Self {
        Self { margin }
    }

    pub fn build(&self, detections: &[Region], frame_w: u32, frame_h: u32) -> Option<Region> {
        Region::largest(detections).map(|r| r.expanded(self.margin, frame_w, frame_h))
    }
}

impl Default for FaceRegionBuilder {
    fn default() -> Self {
        Self::new(FACE_MARGIN)
    }
}
