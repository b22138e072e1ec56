//! Countdown scheduler backed by tokio tasks

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, sleep_until, Instant},
};
use tracing::{debug, trace};

use crate::timer::{CountdownHandle, RemainingTime, Scheduler, SessionTicket, TimerEvent};

/// Runs each countdown as its own task and posts its events to the UI loop
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    events_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TokioScheduler {
    pub fn new(events_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self { events_tx }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = CountdownTask;

    fn schedule(&mut self, total: RemainingTime, interval: Duration, ticket: SessionTicket) -> CountdownTask {
        let task = tokio::spawn(countdown_task(
            total.as_duration(),
            interval,
            ticket,
            self.events_tx.clone(),
        ));
        CountdownTask { task }
    }
}

/// Handle to a running countdown task; aborted on cancel or drop
#[derive(Debug)]
pub struct CountdownTask {
    task: JoinHandle<()>,
}

impl CountdownHandle for CountdownTask {
    fn cancel(&mut self) {
        self.task.abort();
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Report the time left once per `interval`, then finish at the deadline.
///
/// Events already queued when the task is aborted may still be delivered;
/// the controller's generation check discards them.
async fn countdown_task(
    total: Duration,
    interval: Duration,
    ticket: SessionTicket,
    events_tx: mpsc::UnboundedSender<TimerEvent>,
) {
    let start = Instant::now();
    let deadline = start + total;
    debug!(
        "Countdown task for session {} running for {:?}",
        ticket.generation().get(),
        total
    );

    let mut ticker = interval_at(start + interval, interval);

    loop {
        let now = ticker.tick().await;
        if now >= deadline {
            break;
        }

        let remaining = deadline - now;
        if events_tx
            .send(ticket.tick(RemainingTime::from_duration(remaining)))
            .is_err()
        {
            trace!("Timer event receiver closed, stopping countdown");
            return;
        }

        // A final partial interval finishes at the deadline, not a full tick later
        if remaining < interval {
            sleep_until(deadline).await;
            break;
        }
    }

    if events_tx.send(ticket.finish()).is_err() {
        trace!("Timer event receiver closed before finish");
    }
}
