mod app_events;
mod app_render;
mod app_state;
mod input_state;
mod mouse_capture;
mod mouse_click;

// Re-export public types
pub use app_state::{App, SelectCallback};
pub use input_state::InputState;
pub use mouse_capture::MouseCaptureGuard;
