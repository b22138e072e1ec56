//! Countdown sessions and the generation check that guards them

use serde::Serialize;

use super::duration::{Minutes, RemainingTime};

/// Identity of one countdown session.
///
/// Generations only ever grow, so an event carrying an older generation
/// belongs to a session that was cancelled or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out fresh generations
#[derive(Debug, Default)]
pub(crate) struct GenerationCounter {
    last: u64,
}

impl GenerationCounter {
    pub(crate) fn advance(&mut self) -> Generation {
        self.last += 1;
        Generation(self.last)
    }
}

/// Tick/finish handler pair bound to a single session.
///
/// The scheduler keeps the ticket and turns each firing into a
/// [`TimerEvent`] stamped with the ticket's generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    generation: Generation,
}

impl SessionTicket {
    pub(crate) fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn tick(&self, remaining: RemainingTime) -> TimerEvent {
        TimerEvent::Tick {
            generation: self.generation,
            remaining,
        }
    }

    pub fn finish(&self) -> TimerEvent {
        TimerEvent::Finish {
            generation: self.generation,
        }
    }
}

/// Scheduler output delivered back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick {
        generation: Generation,
        remaining: RemainingTime,
    },
    Finish {
        generation: Generation,
    },
}

impl TimerEvent {
    pub fn generation(&self) -> Generation {
        match self {
            TimerEvent::Tick { generation, .. } | TimerEvent::Finish { generation } => *generation,
        }
    }
}

/// The single live countdown, owned by the controller
#[derive(Debug)]
pub(crate) struct CountdownSession<H> {
    pub(crate) generation: Generation,
    pub(crate) selected: Minutes,
    pub(crate) remaining: RemainingTime,
    pub(crate) handle: H,
}

impl<H> CountdownSession<H> {
    pub(crate) fn owns(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Apply a reported remaining time, never letting it grow
    pub(crate) fn advance_to(&mut self, reported: RemainingTime) -> RemainingTime {
        self.remaining = self.remaining.min(reported);
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_strictly_increasing() {
        let mut counter = GenerationCounter::default();
        let first = counter.advance();
        let second = counter.advance();
        assert!(second > first);
        assert_ne!(first, second);
    }

    #[test]
    fn ticket_stamps_its_generation() {
        let mut counter = GenerationCounter::default();
        let ticket = SessionTicket::new(counter.advance());
        let event = ticket.tick(RemainingTime::from_millis(5_000));
        assert_eq!(event.generation(), ticket.generation());
        assert_eq!(ticket.finish().generation(), ticket.generation());
    }

    #[test]
    fn session_remaining_never_increases() {
        let mut session = CountdownSession {
            generation: GenerationCounter::default().advance(),
            selected: Minutes::new(1).unwrap(),
            remaining: RemainingTime::from_millis(60_000),
            handle: (),
        };
        assert_eq!(session.advance_to(RemainingTime::from_millis(59_000)).as_millis(), 59_000);
        assert_eq!(session.advance_to(RemainingTime::from_millis(59_500)).as_millis(), 59_000);
    }
}
