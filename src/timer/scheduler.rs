//! Scheduler contract for the platform countdown timer

use std::time::Duration;

use super::{duration::RemainingTime, session::SessionTicket};

/// Starts interval-driven countdowns.
///
/// An implementation reports `ticket.tick(remaining)` once per `interval`
/// and `ticket.finish()` exactly once when `total` has elapsed.
pub trait Scheduler {
    type Handle: CountdownHandle;

    fn schedule(&mut self, total: RemainingTime, interval: Duration, ticket: SessionTicket) -> Self::Handle;
}

/// Control over one scheduled countdown
pub trait CountdownHandle {
    /// Stop further ticks and the finish signal for this countdown
    fn cancel(&mut self);
}
