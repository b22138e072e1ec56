//! Focus Dial - A slider-driven focus/break countdown timer
//!
//! A slider picks a duration of 0 to 60 minutes; releasing it starts a
//! one-second countdown that loops a ticking cue and rings a bell at zero.
//! The countdown core lives in [`timer`]; the HTTP surface, audio backend
//! and tokio tasks host it.

pub mod api;
pub mod audio;
pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AudioError, TimerError};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
