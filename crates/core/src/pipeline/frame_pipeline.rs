use std::collections::HashMap;

use crate::detection::domain::eye_centers::eye_centers;
use crate::detection::domain::eye_detector::EyeDetector;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_region_builder::FaceRegionBuilder;
use crate::draw;
use crate::effects::domain::face_effect::{EffectContext, EffectMode, FaceEffect};
use crate::input::click_router::{route_click, ClickAction};
use crate::overlay::overlay_player::OverlayPlayer;
use crate::shared::constants::{FACE_BOX_COLOR, FACE_LABEL, STRIP_TEXT_COLOR};
use crate::shared::frame::Frame;
use crate::shared::point::Point;

use super::session_state::SessionState;

/// Labels along the selection strip, one per band.
const STRIP_LABELS: &[&str] = &["GREEN", "SLIM", "MOSAIC"];

/// Per-frame orchestration: detect the face, locate the eyes, apply the
/// active effect, draw the chrome, composite the overlay.
///
/// All mutable session state lives in an explicit `SessionState`, so the
/// pipeline is testable with stub detectors and no live video source.
pub struct FramePipeline {
    detector: Box<dyn FaceDetector>,
    eye_detector: Box<dyn EyeDetector>,
    region_builder: FaceRegionBuilder,
    effects: HashMap<EffectMode, Box<dyn FaceEffect>>,
    overlay: OverlayPlayer,
    state: SessionState,
}

impl FramePipeline {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        eye_detector: Box<dyn EyeDetector>,
        region_builder: FaceRegionBuilder,
        effects: HashMap<EffectMode, Box<dyn FaceEffect>>,
        overlay: OverlayPlayer,
    ) -> Self {
        Self {
            detector,
            eye_detector,
            region_builder,
            effects,
            overlay,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn overlay(&self) -> &OverlayPlayer {
        &self.overlay
    }

    /// Applies a click that arrived before this frame.
    pub fn handle_click(
        &mut self,
        click: Point,
        frame_height: i32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match route_click(click, frame_height, self.state.face_detected) {
            ClickAction::SelectMode(mode) => {
                log::debug!("effect mode set to {mode:?}");
                self.state.mode = mode;
            }
            ClickAction::TriggerOverlay(anchor) => {
                log::debug!("overlay triggered at ({}, {})", anchor.x, anchor.y);
                self.state.mode = EffectMode::OverlayLine;
                self.state.click = Some(anchor);
                self.overlay.trigger(anchor)?;
            }
            ClickAction::Ignore => {}
        }
        Ok(())
    }

    pub fn process(&mut self, frame: &mut Frame) -> Result<(), Box<dyn std::error::Error>> {
        let detections = self.detector.detect(frame)?;
        self.state.face_detected = !detections.is_empty();

        if let Some(face) = self
            .region_builder
            .build(&detections, frame.width(), frame.height())
        {
            let eye_boxes = self.eye_detector.detect(frame, &face)?;
            let eyes = eye_centers(&face, &eye_boxes);
            self.state.eyes = Some(eyes);

            self.draw_strip(frame);

            let ctx = EffectContext {
                face,
                eyes,
                click: self.state.click,
            };
            if let Some(effect) = self.effects.get(&self.state.mode) {
                effect.apply(frame, &ctx)?;
            }

            // Chrome goes on after the effect so it is never distorted
            draw::rect_outline(frame, &face, FACE_BOX_COLOR, 2);
            draw::text(frame, face.x, face.y - 18, FACE_LABEL, FACE_BOX_COLOR, 2);
        }

        self.overlay.compose_onto(frame)?;
        Ok(())
    }

    fn draw_strip(&self, frame: &mut Frame) {
        let y = frame.height() as i32 - 34;
        for (band, label) in STRIP_LABELS.iter().enumerate() {
            draw::text(frame, 10 + band as i32 * 100, y, label, STRIP_TEXT_COLOR, 2);
        }
    }
}
