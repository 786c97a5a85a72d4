use crate::shared::point::Point;

/// Playback state for the click-triggered overlay animation.
///
/// Idle until `start`; each pipeline iteration calls `advance` exactly once
/// while playing, whether or not an overlay frame was actually composited.
/// Playback ends when the counter reaches the source's total frame count.
#[derive(Debug, Default)]
pub struct OverlayAnimation {
    playing: bool,
    frames_shown: usize,
    anchor: Option<Point>,
}

impl OverlayAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, anchor: Point) {
        self.playing = true;
        self.frames_shown = 0;
        self.anchor = Some(anchor);
    }

    pub fn advance(&mut self, total_frames: usize) {
        if !self.playing {
            return;
        }
        self.frames_shown += 1;
        if self.frames_shown >= total_frames {
            self.playing = false;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }

    /// Anchor of the most recent playback, kept after playback ends.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}
