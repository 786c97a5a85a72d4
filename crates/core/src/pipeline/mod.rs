pub mod frame_pipeline;
pub mod pipeline_logger;
pub mod play_effects_use_case;
pub mod session_state;
