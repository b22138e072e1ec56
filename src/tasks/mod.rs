//! Background tasks module
//!
//! This module contains the tasks that run alongside the HTTP server: the
//! UI loop owning the countdown, the countdown scheduler and the optional
//! console renderer.

pub mod console;
pub mod countdown;
pub mod ui_loop;

// Re-export main types
pub use console::console_task;
pub use countdown::{CountdownTask, TokioScheduler};
pub use ui_loop::{ui_loop, LifecycleEvent, UiCommand, UiRequest};
