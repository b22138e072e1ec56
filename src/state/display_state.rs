//! Display state rendered by the countdown

use serde::{Deserialize, Serialize};

use crate::timer::{DisplaySink, Minutes};

/// In-memory render target: the two text fields and the slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub minutes: String,
    pub seconds: String,
    pub slider_position: u32,
}

impl DisplayState {
    /// Create a display showing `00:00` with the slider at zero
    pub fn new() -> Self {
        Self {
            minutes: "00".to_string(),
            seconds: "00".to_string(),
            slider_position: 0,
        }
    }

    /// The display as `MM:SS`
    pub fn clock(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for DisplayState {
    fn set_minutes(&mut self, text: &str) {
        self.minutes.clear();
        self.minutes.push_str(text);
    }

    fn set_seconds(&mut self, text: &str) {
        self.seconds.clear();
        self.seconds.push_str(text);
    }

    fn set_slider_position(&mut self, position: Minutes) {
        self.slider_position = position.get();
    }
}
