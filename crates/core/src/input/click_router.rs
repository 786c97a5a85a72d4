use crate::effects::domain::face_effect::EffectMode;
use crate::shared::constants::{STRIP_BAND_WIDTH, STRIP_HEIGHT};
use crate::shared::point::Point;

/// What a pointer click should do, resolved against the selection strip and
/// the current face-detection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    SelectMode(EffectMode),
    TriggerOverlay(Point),
    Ignore,
}

/// Maps a click to an action.
///
/// Clicks inside the bottom selection strip always choose an effect mode,
/// band by band; the rightmost remainder selects the default (overlay-line)
/// mode. Clicks elsewhere trigger the overlay only while a face is
/// detected, and are otherwise ignored.
pub fn route_click(click: Point, frame_height: i32, face_detected: bool) -> ClickAction {
    if click.y > frame_height - STRIP_HEIGHT {
        let mode = match click.x / STRIP_BAND_WIDTH {
            0 => EffectMode::Recolor,
            1 => EffectMode::Slim,
            2 => EffectMode::Mosaic,
            _ => EffectMode::OverlayLine,
        };
        ClickAction::SelectMode(mode)
    } else if face_detected {
        ClickAction::TriggerOverlay(click)
    } else {
        ClickAction::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FRAME_H: i32 = 480;
    const STRIP_Y: i32 = FRAME_H - STRIP_HEIGHT + 1; // inside the strip

    #[rstest]
    #[case::band_start(0, EffectMode::Recolor)]
    #[case::band_interior(57, EffectMode::Recolor)]
    #[case::band_last_pixel(99, EffectMode::Recolor)]
    #[case::second_band_start(100, EffectMode::Slim)]
    #[case::second_band_end(199, EffectMode::Slim)]
    #[case::third_band_start(200, EffectMode::Mosaic)]
    #[case::third_band_end(299, EffectMode::Mosaic)]
    #[case::default_band_start(300, EffectMode::OverlayLine)]
    #[case::default_band_far(639, EffectMode::OverlayLine)]
    fn test_strip_bands(#[case] x: i32, #[case] expected: EffectMode) {
        let action = route_click(Point::new(x, STRIP_Y), FRAME_H, false);
        assert_eq!(action, ClickAction::SelectMode(expected));
    }

    #[test]
    fn test_strip_works_without_a_face() {
        let action = route_click(Point::new(150, FRAME_H - 5), FRAME_H, false);
        assert_eq!(action, ClickAction::SelectMode(EffectMode::Slim));
    }

    #[test]
    fn test_strip_boundary_row_is_not_strip() {
        // y == frame_height - STRIP_HEIGHT is outside the strip (strict >)
        let action = route_click(Point::new(50, FRAME_H - STRIP_HEIGHT), FRAME_H, false);
        assert_eq!(action, ClickAction::Ignore);
    }

    #[test]
    fn test_outside_strip_with_face_triggers_overlay() {
        let click = Point::new(320, 200);
        let action = route_click(click, FRAME_H, true);
        assert_eq!(action, ClickAction::TriggerOverlay(click));
    }

    #[test]
    fn test_outside_strip_without_face_is_ignored() {
        let action = route_click(Point::new(320, 200), FRAME_H, false);
        assert_eq!(action, ClickAction::Ignore);
    }

    #[test]
    fn test_strip_takes_precedence_over_face() {
        // In-strip click with a face present still selects a mode
        let action = route_click(Point::new(250, FRAME_H - 1), FRAME_H, true);
        assert_eq!(action, ClickAction::SelectMode(EffectMode::Mosaic));
    }
}
