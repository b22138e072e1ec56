//! State management module
//!
//! Host-side state: the rendered display, the published timer status and
//! the shared application state handed to HTTP handlers.

pub mod app_state;
pub mod display_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use display_state::DisplayState;
pub use timer_state::TimerStatus;
