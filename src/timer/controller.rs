//! Countdown state machine

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{
    display::{self, DisplaySink},
    duration::{Minutes, RemainingTime, TICK_INTERVAL},
    scheduler::{CountdownHandle, Scheduler},
    session::{CountdownSession, Generation, GenerationCounter, SessionTicket, TimerEvent},
};
use crate::{
    audio::{AudioCue, CueSet},
    error::TimerError,
};

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    /// Transient: entered on natural expiry, left right after the bell
    Completed,
}

/// What applying a scheduler event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ticked(RemainingTime),
    Completed,
    /// The event belonged to a cancelled or replaced session
    Stale,
}

/// Owns the single countdown session and everything it writes to.
///
/// Every scheduler event is checked against the live session's
/// generation before it may touch the display or the audio.
pub struct TimerController<D, A, S: Scheduler> {
    display: D,
    audio: A,
    scheduler: S,
    cues: CueSet,
    generations: GenerationCounter,
    session: Option<CountdownSession<S::Handle>>,
    phase: TimerPhase,
    completions: u64,
}

impl<D, A, S> TimerController<D, A, S>
where
    D: DisplaySink,
    A: AudioCue,
    S: Scheduler,
{
    pub fn new(display: D, audio: A, scheduler: S, cues: CueSet) -> Self {
        Self {
            display,
            audio,
            scheduler,
            cues,
            generations: GenerationCounter::default(),
            session: None,
            phase: TimerPhase::Idle,
            completions: 0,
        }
    }

    /// Start a fresh countdown, replacing any running one
    pub fn start(&mut self, minutes: Minutes) -> Result<Generation, TimerError> {
        if minutes.is_zero() {
            return Err(TimerError::InvalidDuration(minutes.get()));
        }

        if let Some(mut previous) = self.session.take() {
            previous.handle.cancel();
            self.audio.pause_all();
            debug!("Replaced countdown session {}", previous.generation.get());
        }

        let generation = self.generations.advance();
        let total = minutes.to_remaining();
        let handle = self
            .scheduler
            .schedule(total, TICK_INTERVAL, SessionTicket::new(generation));

        self.session = Some(CountdownSession {
            generation,
            selected: minutes,
            remaining: total,
            handle,
        });
        self.phase = TimerPhase::Running;

        display::render_countdown(&mut self.display, total);
        if let Some(cue) = self.cues.ticking {
            self.audio.play_looping(cue);
        }

        info!(
            "Started {} minute countdown (session {})",
            minutes.get(),
            generation.get()
        );
        Ok(generation)
    }

    /// Stop the running countdown. Does nothing when idle.
    pub fn cancel(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        session.handle.cancel();
        self.phase = TimerPhase::Idle;
        self.audio.pause_all();

        info!(
            "Cancelled countdown session {} with {} ms left",
            session.generation.get(),
            session.remaining.as_millis()
        );
    }

    /// Apply a scheduler event, dropping it if its session is gone
    pub fn handle_event(&mut self, event: TimerEvent) -> EventOutcome {
        let live = self
            .session
            .as_ref()
            .is_some_and(|session| session.owns(event.generation()));
        if !live {
            trace!("Dropping stale event from session {}", event.generation().get());
            return EventOutcome::Stale;
        }

        match event {
            TimerEvent::Tick { remaining, .. } => self.on_tick(remaining),
            TimerEvent::Finish { .. } => self.on_finish(),
        }
    }

    /// Show a duration the user is still choosing. Ignored while running.
    pub fn preview(&mut self, minutes: Minutes) -> bool {
        if self.session.is_some() {
            return false;
        }
        display::render_countdown(&mut self.display, minutes.to_remaining());
        true
    }

    fn on_tick(&mut self, reported: RemainingTime) -> EventOutcome {
        let Some(session) = self.session.as_mut() else {
            return EventOutcome::Stale;
        };

        let remaining = session.advance_to(reported);
        display::render_countdown(&mut self.display, remaining);

        debug!("Tick: {} ms left", remaining.as_millis());
        EventOutcome::Ticked(remaining)
    }

    fn on_finish(&mut self) -> EventOutcome {
        let Some(session) = self.session.take() else {
            return EventOutcome::Stale;
        };

        self.phase = TimerPhase::Completed;
        display::render_countdown(&mut self.display, RemainingTime::ZERO);
        self.audio.pause_all();
        if let Some(cue) = self.cues.bell {
            self.audio.play_once(cue);
        }
        self.completions += 1;

        info!(
            "Countdown session {} completed after {} minutes",
            session.generation.get(),
            session.selected.get()
        );
        self.phase = TimerPhase::Idle;
        EventOutcome::Completed
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Remaining time of the live session
    pub fn remaining(&self) -> Option<RemainingTime> {
        self.session.as_ref().map(|session| session.remaining)
    }

    /// Duration the live session was started with
    pub fn selected(&self) -> Option<Minutes> {
        self.session.as_ref().map(|session| session.selected)
    }

    /// Generation of the live session
    pub fn generation(&self) -> Option<Generation> {
        self.session.as_ref().map(|session| session.generation)
    }

    /// Number of countdowns that ran to natural completion
    pub fn completions(&self) -> u64 {
        self.completions
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Audio backend, for the host's lifecycle hooks
    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
