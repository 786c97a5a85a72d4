pub mod compositor;
pub mod overlay_animation;
pub mod overlay_player;
