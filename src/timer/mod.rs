//! Countdown core
//!
//! [`TimerController`] owns the countdown session and its generation
//! check; [`InputCoordinator`] turns slider notifications into start and
//! cancel requests. Rendering, audio and scheduling are reached through
//! the [`DisplaySink`], [`AudioCue`](crate::audio::AudioCue) and
//! [`Scheduler`] traits.

pub mod controller;
pub mod display;
pub mod duration;
pub mod input;
pub mod scheduler;
pub mod session;

pub use controller::{EventOutcome, TimerController, TimerPhase};
pub use display::DisplaySink;
pub use duration::{Minutes, RemainingTime, TICK_INTERVAL};
pub use input::{InputCoordinator, InputOrigin, InputOutcome, SliderEvent};
pub use scheduler::{CountdownHandle, Scheduler};
pub use session::{Generation, SessionTicket, TimerEvent};

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic collaborators for driving the state machine by hand

    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use crate::audio::{AudioCue, CueHandle, CueSet};

    pub const TICKING: CueHandle = CueHandle(0);
    pub const BELL: CueHandle = CueHandle(1);

    pub fn minutes(value: u32) -> Minutes {
        Minutes::new(value).unwrap()
    }

    pub fn controller() -> TimerController<RecordingDisplay, RecordingAudio, ManualScheduler> {
        TimerController::new(
            RecordingDisplay::default(),
            RecordingAudio::default(),
            ManualScheduler::default(),
            CueSet {
                ticking: Some(TICKING),
                bell: Some(BELL),
            },
        )
    }

    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        pub minutes: String,
        pub seconds: String,
        pub slider: u32,
        pub writes: usize,
    }

    impl DisplaySink for RecordingDisplay {
        fn set_minutes(&mut self, text: &str) {
            self.minutes = text.to_string();
            self.writes += 1;
        }

        fn set_seconds(&mut self, text: &str) {
            self.seconds = text.to_string();
            self.writes += 1;
        }

        fn set_slider_position(&mut self, position: Minutes) {
            self.slider = position.get();
            self.writes += 1;
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AudioCall {
        Looping(CueHandle),
        Once(CueHandle),
        PauseAll,
        Suspend,
        Resume,
        Dispose,
    }

    #[derive(Debug, Default)]
    pub struct RecordingAudio {
        pub calls: Vec<AudioCall>,
    }

    impl AudioCue for RecordingAudio {
        fn play_looping(&mut self, cue: CueHandle) {
            self.calls.push(AudioCall::Looping(cue));
        }

        fn play_once(&mut self, cue: CueHandle) {
            self.calls.push(AudioCall::Once(cue));
        }

        fn pause_all(&mut self) {
            self.calls.push(AudioCall::PauseAll);
        }

        fn suspend(&mut self) {
            self.calls.push(AudioCall::Suspend);
        }

        fn resume(&mut self) {
            self.calls.push(AudioCall::Resume);
        }

        fn dispose(&mut self) {
            self.calls.push(AudioCall::Dispose);
        }
    }

    /// Records countdowns instead of running them; tests fire the events
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        pub scheduled: Vec<(SessionTicket, RemainingTime)>,
        cancelled: Rc<RefCell<Vec<Generation>>>,
    }

    impl ManualScheduler {
        pub fn ticket(&self, generation: Generation) -> SessionTicket {
            self.scheduled
                .iter()
                .map(|(ticket, _)| *ticket)
                .find(|ticket| ticket.generation() == generation)
                .expect("no countdown scheduled for generation")
        }

        pub fn is_cancelled(&self, generation: Generation) -> bool {
            self.cancelled.borrow().contains(&generation)
        }
    }

    #[derive(Debug)]
    pub struct ManualHandle {
        generation: Generation,
        cancelled: Rc<RefCell<Vec<Generation>>>,
    }

    impl CountdownHandle for ManualHandle {
        fn cancel(&mut self) {
            self.cancelled.borrow_mut().push(self.generation);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&mut self, total: RemainingTime, _interval: Duration, ticket: SessionTicket) -> ManualHandle {
            self.scheduled.push((ticket, total));
            ManualHandle {
                generation: ticket.generation(),
                cancelled: Rc::clone(&self.cancelled),
            }
        }
    }
}
