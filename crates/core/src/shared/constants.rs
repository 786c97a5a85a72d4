/// Margin added on every side of the detected face rectangle, in pixels.
pub const FACE_MARGIN: i32 = 10;

/// Height of the effect selection strip along the bottom edge, in pixels.
pub const STRIP_HEIGHT: i32 = 50;

/// Horizontal span of each selection-strip band, in pixels.
pub const STRIP_BAND_WIDTH: i32 = 100;

/// Face cascade parameters (scale factor, neighbors, minimum size).
pub const FACE_SCALE_FACTOR: f64 = 1.1;
pub const FACE_MIN_NEIGHBORS: i32 = 4;
pub const FACE_MIN_SIZE: i32 = 80;

/// Eye cascade parameters, applied within the face rectangle.
pub const EYE_SCALE_FACTOR: f64 = 1.1;
pub const EYE_MIN_NEIGHBORS: i32 = 2;
pub const EYE_MIN_SIZE: i32 = 30;

/// Upper hue bound of the skin mask, OpenCV scale (0..180).
pub const SKIN_HUE_MAX: u8 = 40;

/// Replacement hue for masked skin pixels, OpenCV scale.
pub const GREEN_HUE: u8 = 60;

/// Peak horizontal displacement of the slim remap, in pixels.
pub const SLIM_STRENGTH: f32 = 50.0;

/// Mosaic downsample factor.
pub const MOSAIC_SCALE: f32 = 0.1;

/// Channel ceiling below which an overlay pixel counts as background.
pub const OVERLAY_BLACK_THRESHOLD: u8 = 30;

/// Label drawn above the detected face.
pub const FACE_LABEL: &str = "FACETOY";

pub const FACE_BOX_COLOR: [u8; 3] = [0, 255, 0];
pub const EYE_LINE_COLOR: [u8; 3] = [255, 0, 0];
pub const STRIP_TEXT_COLOR: [u8; 3] = [0, 255, 0];
