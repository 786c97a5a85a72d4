pub mod detection;
pub mod display;
pub mod draw;
pub mod effects;
pub mod input;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod video;
