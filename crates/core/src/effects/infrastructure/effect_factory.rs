use std::collections::HashMap;

use crate::effects::domain::face_effect::{EffectMode, FaceEffect};
use crate::shared::constants::{EYE_LINE_COLOR, GREEN_HUE, SKIN_HUE_MAX};

use super::eye_lines::EyeLines;
use super::face_slim::FaceSlim;
use super::mosaic::Mosaic;
use super::skin_recolor::SkinRecolor;

/// Builds one kernel per effect mode with the given tuning.
pub fn create_effects(
    slim_strength: f32,
    mosaic_scale: f32,
) -> HashMap<EffectMode, Box<dyn FaceEffect>> {
    let mut effects: HashMap<EffectMode, Box<dyn FaceEffect>> = HashMap::new();
    effects.insert(
        EffectMode::Recolor,
        Box::new(SkinRecolor::new(SKIN_HUE_MAX, GREEN_HUE)),
    );
    effects.insert(EffectMode::Slim, Box::new(FaceSlim::new(slim_strength)));
    effects.insert(EffectMode::Mosaic, Box::new(Mosaic::new(mosaic_scale)));
    effects.insert(
        EffectMode::OverlayLine,
        Box::new(EyeLines::new(EYE_LINE_COLOR, 2)),
    );
    effects
}
