use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::shared::region::Region;

/// Which effect is applied to the detected face region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectMode {
    Recolor,
    Slim,
    Mosaic,
    OverlayLine,
}

impl EffectMode {
    pub const ALL: &[EffectMode] = &[
        EffectMode::Recolor,
        EffectMode::Slim,
        EffectMode::Mosaic,
        EffectMode::OverlayLine,
    ];
}

/// Per-frame inputs an effect kernel may use.
///
/// `click` is the last recorded pointer position; it stays `None` until the
/// user clicks somewhere outside the selection strip.
#[derive(Clone, Copy, Debug)]
pub struct EffectContext {
    pub face: Region,
    pub eyes: [Point; 2],
    pub click: Option<Point>,
}

/// Domain interface for applying a visual effect to the face region of a
/// frame.
///
/// Implementations modify the frame in place and must not touch pixels
/// outside the face region (overlay-line drawing excepted, which draws
/// toward the click point).
pub trait FaceEffect: Send {
    fn apply(&self, frame: &mut Frame, ctx: &EffectContext)
        -> Result<(), Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_each_mode_once() {
        assert_eq!(EffectMode::ALL.len(), 4);
        let mut seen = std::collections::HashSet::new();
        for mode in EffectMode::ALL {
            assert!(seen.insert(mode), "duplicate mode {mode:?}");
        }
    }
}
