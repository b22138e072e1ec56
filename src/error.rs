//! Error types shared by the timer core and the audio layer

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the countdown state machine and its value types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A countdown was requested with a duration that cannot run
    #[error("cannot start a countdown of {0} minutes; expected 1..=60")]
    InvalidDuration(u32),
    /// A slider position fell outside the dial's range
    #[error("slider position {0} is outside 0..=60")]
    OutOfRange(u32),
}

/// Errors raised while preparing audio cues
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("cue file not found: {}", .0.display())]
    MissingCue(PathBuf),
    #[error("audio player `{0}` is not available")]
    PlayerUnavailable(String),
    #[error("audio resources have already been released")]
    Disposed,
}
