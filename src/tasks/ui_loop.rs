//! The UI loop: single owner of the countdown core

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use crate::{
    audio::AudioCue,
    state::{DisplayState, TimerStatus},
    timer::{EventOutcome, InputCoordinator, Scheduler, SliderEvent, TimerEvent},
};

/// Host lifecycle notifications forwarded to the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Pause,
    Resume,
    Dispose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Slider(SliderEvent),
    Lifecycle(LifecycleEvent),
}

/// A command plus an optional reply slot for the resulting status
#[derive(Debug)]
pub struct UiRequest {
    pub command: UiCommand,
    respond_to: Option<oneshot::Sender<TimerStatus>>,
}

impl UiRequest {
    pub fn new(command: UiCommand) -> Self {
        Self {
            command,
            respond_to: None,
        }
    }

    pub fn with_reply(command: UiCommand, respond_to: oneshot::Sender<TimerStatus>) -> Self {
        Self {
            command,
            respond_to: Some(respond_to),
        }
    }
}

/// Run the countdown core until every request sender is dropped.
///
/// Slider requests and scheduler events are handled one at a time on this
/// task, requests first, so a drag always lands before any tick still
/// queued for the session it cancels. Returns the coordinator after
/// releasing its audio.
pub async fn ui_loop<A, S>(
    mut input: InputCoordinator<DisplayState, A, S>,
    mut requests: mpsc::Receiver<UiRequest>,
    mut timer_events: mpsc::UnboundedReceiver<TimerEvent>,
    status_tx: watch::Sender<TimerStatus>,
) -> InputCoordinator<DisplayState, A, S>
where
    A: AudioCue,
    S: Scheduler,
{
    info!("Starting UI loop");
    status_tx.send_replace(TimerStatus::capture(&input));

    loop {
        tokio::select! {
            biased;

            request = requests.recv() => {
                let Some(request) = request else {
                    info!("All UI handles dropped, stopping UI loop");
                    break;
                };

                apply_command(&mut input, request.command);

                let status = TimerStatus::capture(&input);
                status_tx.send_replace(status.clone());
                if let Some(respond_to) = request.respond_to {
                    let _ = respond_to.send(status);
                }
            }

            Some(event) = timer_events.recv() => {
                if input.handle_timer_event(event) == EventOutcome::Stale {
                    continue;
                }
                status_tx.send_replace(TimerStatus::capture(&input));
            }
        }
    }

    input.controller_mut().audio_mut().dispose();
    input
}

fn apply_command<A, S>(input: &mut InputCoordinator<DisplayState, A, S>, command: UiCommand)
where
    A: AudioCue,
    S: Scheduler,
{
    match command {
        UiCommand::Slider(event) => {
            let outcome = input.handle(event);
            debug!("Slider {:?} -> {:?}", event, outcome);
        }
        UiCommand::Lifecycle(LifecycleEvent::Pause) => {
            info!("Host paused, suspending audio");
            input.controller_mut().audio_mut().suspend();
        }
        UiCommand::Lifecycle(LifecycleEvent::Resume) => {
            info!("Host resumed, resuming audio");
            input.controller_mut().audio_mut().resume();
        }
        UiCommand::Lifecycle(LifecycleEvent::Dispose) => {
            info!("Host disposing, releasing audio");
            input.controller_mut().audio_mut().dispose();
        }
    }
}
