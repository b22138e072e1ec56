//! Focus Dial - A slider-driven focus/break countdown timer
//!
//! This is the main entry point for the focus-dial application.

use std::{path::Path, sync::Arc};
use tokio::{
    net::TcpListener,
    sync::{mpsc, watch},
};
use tracing::{info, warn};

use focus_dial::{
    api::create_router,
    audio::{AudioCue, CueHandle, CueSet, ProcessAudio, SilentAudio},
    config::Config,
    state::{AppState, DisplayState, TimerStatus},
    tasks::{console_task, ui_loop, LifecycleEvent, TokioScheduler, UiCommand},
    timer::{InputCoordinator, Minutes, SliderEvent, TimerController},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_dial={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-dial v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, player={}, sound={}",
        config.host, config.port, config.player, !config.no_sound
    );

    let (audio, cues) = build_audio(&config).await;

    // The UI loop owns the countdown core; everything else talks to it over channels
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (ui_tx, ui_rx) = mpsc::channel(64);
    let (status_tx, status_rx) = watch::channel(TimerStatus::new());

    let controller = TimerController::new(
        DisplayState::new(),
        audio,
        TokioScheduler::new(events_tx),
        cues,
    );
    tokio::spawn(ui_loop(
        InputCoordinator::new(controller),
        ui_rx,
        events_rx,
        status_tx,
    ));

    if config.console {
        tokio::spawn(console_task(status_rx.clone()));
    }

    let state = Arc::new(AppState::new(ui_tx, status_rx, config.port, config.host.clone()));

    if let Some(minutes) = config.start {
        let position = Minutes::new(minutes)?;
        state
            .submit("startup", UiCommand::Slider(SliderEvent::DragEnd { position }))
            .await
            .map_err(anyhow::Error::msg)?;
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /slider/drag-start - Begin picking a duration");
    info!("  POST /slider/position   - Move the slider");
    info!("  POST /slider/drag-end   - Release the slider");
    info!("  POST /lifecycle/pause   - Suspend audio");
    info!("  POST /lifecycle/resume  - Resume audio");
    info!("  GET  /status            - Current countdown");
    info!("  GET  /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state
        .submit("dispose", UiCommand::Lifecycle(LifecycleEvent::Dispose))
        .await
    {
        warn!("Failed to release audio: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Pick the audio backend, falling back to silence when cues can't play
async fn build_audio(config: &Config) -> (Box<dyn AudioCue + Send>, CueSet) {
    if config.no_sound {
        info!("Sound disabled");
        return (Box::new(SilentAudio), CueSet::default());
    }

    let mut audio = ProcessAudio::new(config.player.clone());
    if let Err(e) = audio.check_player().await {
        warn!("{}, continuing without sound", e);
        return (Box::new(SilentAudio), CueSet::default());
    }

    let cues = CueSet {
        ticking: load_cue(&mut audio, &config.ticking_cue),
        bell: load_cue(&mut audio, &config.bell_cue),
    };
    (Box::new(audio), cues)
}

fn load_cue(audio: &mut ProcessAudio, path: &Path) -> Option<CueHandle> {
    audio
        .load_cue(path)
        .map_err(|e| warn!("{}, cue will stay silent", e))
        .ok()
}
