//! Timer status snapshot published by the UI loop

use serde::{Deserialize, Serialize};

use super::DisplayState;
use crate::{
    audio::AudioCue,
    timer::{duration::MILLIS_PER_MINUTE, InputCoordinator, Scheduler, TimerPhase},
};

/// Point-in-time view of the countdown, as served on `/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatus {
    pub phase: TimerPhase,
    pub active: bool,
    pub generation: Option<u64>,
    pub selected_minutes: Option<u32>,
    pub remaining_millis: Option<u64>,
    pub completions: u64,
    pub pending_minutes: Option<u32>,
    pub dragging: bool,
    pub display: DisplayState,
}

impl TimerStatus {
    /// Status of a timer that has never run
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            active: false,
            generation: None,
            selected_minutes: None,
            remaining_millis: None,
            completions: 0,
            pending_minutes: None,
            dragging: false,
            display: DisplayState::new(),
        }
    }

    /// Capture the coordinator's current state
    pub fn capture<A, S>(input: &InputCoordinator<DisplayState, A, S>) -> Self
    where
        A: AudioCue,
        S: Scheduler,
    {
        let timer = input.controller();
        Self {
            phase: timer.phase(),
            active: timer.is_running(),
            generation: timer.generation().map(|generation| generation.get()),
            selected_minutes: timer.selected().map(|minutes| minutes.get()),
            remaining_millis: timer.remaining().map(|remaining| remaining.as_millis()),
            completions: timer.completions(),
            pending_minutes: input.pending().map(|minutes| minutes.get()),
            dragging: input.is_dragging(),
            display: timer.display().clone(),
        }
    }

    /// Check if a countdown is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fraction of the running countdown already elapsed
    pub fn progress(&self) -> Option<f64> {
        let total = u64::from(self.selected_minutes?) * MILLIS_PER_MINUTE;
        let remaining = self.remaining_millis?;
        if total == 0 {
            return None;
        }
        Some(1.0 - remaining as f64 / total as f64)
    }

    /// Remaining seconds if a countdown is running
    pub fn remaining_seconds(&self) -> Option<u64> {
        self.remaining_millis.map(|millis| millis / 1000)
    }
}

impl Default for TimerStatus {
    fn default() -> Self {
        Self::new()
    }
}
