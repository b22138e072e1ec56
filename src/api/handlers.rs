//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::{AppState, TimerStatus},
    tasks::{LifecycleEvent, UiCommand},
    timer::{InputOrigin, Minutes, SliderEvent},
};
use super::responses::{ApiResponse, DragEndRequest, HealthResponse, PositionRequest, StatusResponse};

type ApiResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

/// Handle POST /slider/drag-start - Cancel any running countdown
pub async fn drag_start_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let timer = submit(&state, "drag-start", UiCommand::Slider(SliderEvent::DragStart)).await?;
    info!("Drag started - countdown cancelled");
    Ok(Json(ApiResponse::inactive("Countdown cancelled".to_string(), timer)))
}

/// Handle POST /slider/position - Report a slider move
pub async fn position_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PositionRequest>,
) -> ApiResult {
    let position = parse_position(&state, request.position)?;
    let origin = InputOrigin::from_user(request.from_user);

    let timer = submit(
        &state,
        "position",
        UiCommand::Slider(SliderEvent::PositionChanged { position, origin }),
    )
    .await?;

    let message = match origin {
        InputOrigin::User => format!("Selected {} minutes", position.get()),
        InputOrigin::Programmatic => "Programmatic position ignored".to_string(),
    };
    Ok(Json(ApiResponse::from_timer(message, timer)))
}

/// Handle POST /slider/drag-end - Start a countdown, or cancel at zero
pub async fn drag_end_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DragEndRequest>,
) -> ApiResult {
    let position = parse_position(&state, request.position)?;

    let timer = submit(
        &state,
        "drag-end",
        UiCommand::Slider(SliderEvent::DragEnd { position }),
    )
    .await?;

    if timer.is_active() {
        info!("Drag ended at {} - countdown started", position.get());
        Ok(Json(ApiResponse::active(
            format!("Countdown started for {} minutes", position.get()),
            timer,
        )))
    } else {
        info!("Drag ended at zero - countdown cancelled");
        Ok(Json(ApiResponse::inactive("Countdown cancelled".to_string(), timer)))
    }
}

/// Handle POST /lifecycle/pause - Host went to the background
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let timer = submit(&state, "pause", UiCommand::Lifecycle(LifecycleEvent::Pause)).await?;
    Ok(Json(ApiResponse::from_timer("Audio suspended".to_string(), timer)))
}

/// Handle POST /lifecycle/resume - Host came back to the foreground
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    let timer = submit(&state, "resume", UiCommand::Lifecycle(LifecycleEvent::Resume)).await?;
    Ok(Json(ApiResponse::from_timer("Audio resumed".to_string(), timer)))
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_timer_status(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn parse_position(state: &AppState, raw: u32) -> Result<Minutes, (StatusCode, Json<ApiResponse>)> {
    Minutes::new(raw).map_err(|e| {
        warn!("Rejected slider position: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string(), state.get_timer_status())),
        )
    })
}

async fn submit(
    state: &AppState,
    action: &str,
    command: UiCommand,
) -> Result<TimerStatus, (StatusCode, Json<ApiResponse>)> {
    state.submit(action, command).await.map_err(|e| {
        error!("Failed to apply {}: {}", action, e);
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(e, state.get_timer_status())),
        )
    })
}
