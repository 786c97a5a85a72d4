use crate::shared::frame::Frame;

/// Output surface for composited frames.
///
/// Implementations surface user input (pointer clicks, quit requests) as
/// `ControlEvent` messages on the channel supplied at construction, so the
/// pipeline consumes input as ordered state-transition messages instead of
/// callbacks mutating shared state.
pub trait FrameDisplay {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// False once the user has closed the window.
    fn is_open(&self) -> bool;
}
