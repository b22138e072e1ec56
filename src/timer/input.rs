//! Slider input handling
//!
//! Bridges slider notifications to the [`TimerController`]. The
//! controller's own display updates move the slider too; those arrive
//! tagged as programmatic and are never read back as a user selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    controller::{EventOutcome, TimerController},
    display::DisplaySink,
    duration::Minutes,
    scheduler::Scheduler,
    session::TimerEvent,
};
use crate::audio::AudioCue;

/// Who moved the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputOrigin {
    User,
    Programmatic,
}

impl InputOrigin {
    pub fn from_user(from_user: bool) -> Self {
        if from_user {
            InputOrigin::User
        } else {
            InputOrigin::Programmatic
        }
    }
}

/// Notifications from the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    PositionChanged { position: Minutes, origin: InputOrigin },
    DragStart,
    DragEnd { position: Minutes },
}

/// What the coordinator did with a slider notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    Previewed,
    Cancelled,
    Started,
}

pub struct InputCoordinator<D, A, S: Scheduler> {
    controller: TimerController<D, A, S>,
    pending: Option<Minutes>,
    dragging: bool,
}

impl<D, A, S> InputCoordinator<D, A, S>
where
    D: DisplaySink,
    A: AudioCue,
    S: Scheduler,
{
    pub fn new(controller: TimerController<D, A, S>) -> Self {
        Self {
            controller,
            pending: None,
            dragging: false,
        }
    }

    pub fn handle(&mut self, event: SliderEvent) -> InputOutcome {
        match event {
            SliderEvent::PositionChanged { position, origin } => self.on_position_changed(position, origin),
            SliderEvent::DragStart => self.on_drag_start(),
            SliderEvent::DragEnd { position } => self.on_drag_end(position),
        }
    }

    pub fn on_position_changed(&mut self, position: Minutes, origin: InputOrigin) -> InputOutcome {
        if origin == InputOrigin::Programmatic {
            return InputOutcome::Ignored;
        }

        self.pending = Some(position);
        if self.controller.preview(position) {
            InputOutcome::Previewed
        } else {
            debug!("Position {} noted while a countdown is running", position.get());
            InputOutcome::Ignored
        }
    }

    /// Any drag means a new duration is being picked
    pub fn on_drag_start(&mut self) -> InputOutcome {
        self.dragging = true;
        self.controller.cancel();
        InputOutcome::Cancelled
    }

    pub fn on_drag_end(&mut self, position: Minutes) -> InputOutcome {
        self.dragging = false;
        self.pending = None;

        if position.is_zero() {
            self.controller.cancel();
            return InputOutcome::Cancelled;
        }

        // start only refuses zero, which never gets here
        self.controller
            .start(position)
            .map_or(InputOutcome::Ignored, |_| InputOutcome::Started)
    }

    /// Forward a scheduler event to the controller
    pub fn handle_timer_event(&mut self, event: TimerEvent) -> EventOutcome {
        self.controller.handle_event(event)
    }

    /// Duration the user is currently hovering over, if any
    pub fn pending(&self) -> Option<Minutes> {
        self.pending
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn controller(&self) -> &TimerController<D, A, S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TimerController<D, A, S> {
        &mut self.controller
    }
}
