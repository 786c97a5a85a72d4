use crate::shared::constants::OVERLAY_BLACK_THRESHOLD;
use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::video::domain::frame_source::FrameSource;

use super::compositor;
use super::overlay_animation::OverlayAnimation;

/// Drives the click-triggered overlay animation.
///
/// Owns the overlay frame source, advances the playback counter once per
/// pipeline iteration, and composites the half-scaled, background-masked
/// overlay frame around the anchor. A source that runs dry mid-playback
/// skips compositing but still advances the counter.
pub struct OverlayPlayer {
    source: Box<dyn FrameSource>,
    animation: OverlayAnimation,
    total_frames: usize,
    black_threshold: u8,
}

impl OverlayPlayer {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        let total_frames = source.metadata().total_frames;
        Self {
            source,
            animation: OverlayAnimation::new(),
            total_frames,
            black_threshold: OVERLAY_BLACK_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.black_threshold = threshold;
        self
    }

    /// Restarts the animation from its first frame, anchored at `anchor`.
    pub fn trigger(&mut self, anchor: Point) -> Result<(), Box<dyn std::error::Error>> {
        self.source.rewind()?;
        self.animation.start(anchor);
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.animation.is_playing()
    }

    pub fn frames_shown(&self) -> usize {
        self.animation.frames_shown()
    }

    /// Composites the next overlay frame onto `frame` when playing.
    pub fn compose_onto(&mut self, frame: &mut Frame) -> Result<(), Box<dyn std::error::Error>> {
        if !self.animation.is_playing() {
            return Ok(());
        }
        let anchor = self
            .animation
            .anchor()
            .expect("playing implies an anchor was recorded");

        if let Some(overlay_frame) = self.source.next_frame()? {
            let scaled = compositor::downscale_half(&overlay_frame);
            compositor::composite_masked(frame, &scaled, anchor, self.black_threshold);
        } else {
            log::debug!("overlay source empty at frame {}", self.animation.frames_shown());
        }
        self.animation.advance(self.total_frames);
        Ok(())
    }
}
