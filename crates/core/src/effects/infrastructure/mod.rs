pub mod effect_factory;
pub mod eye_lines;
pub mod face_slim;
pub mod hsv;
pub mod mosaic;
pub mod skin_recolor;
