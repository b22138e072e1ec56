use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::{mpsc, watch};
use tower::ServiceExt;

use focus_dial::{
    audio::{CueSet, SilentAudio},
    create_router,
    state::{AppState, DisplayState, TimerStatus},
    tasks::{ui_loop, TokioScheduler},
    timer::{InputCoordinator, TimerController},
};

fn app() -> Router {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (ui_tx, ui_rx) = mpsc::channel(16);
    let (status_tx, status_rx) = watch::channel(TimerStatus::new());

    let controller = TimerController::new(
        DisplayState::new(),
        SilentAudio,
        TokioScheduler::new(events_tx),
        CueSet::default(),
    );
    tokio::spawn(ui_loop(InputCoordinator::new(controller), ui_rx, events_rx, status_tx));

    create_router(Arc::new(AppState::new(
        ui_tx,
        status_rx,
        20560,
        "127.0.0.1".to_string(),
    )))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(body) => Body::from(body.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test(start_paused = true)]
async fn drag_end_starts_countdown() {
    let app = app();
    let (status, body) = call(&app, "POST", "/slider/drag-end", Some(json!({ "position": 25 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["timer"]["phase"], "running");
    assert_eq!(body["timer"]["remaining_millis"], 1_500_000);
    assert_eq!(body["timer"]["display"]["minutes"], "25");
    assert_eq!(body["timer"]["display"]["seconds"], "00");

    let (_, status_body) = call(&app, "GET", "/status", None).await;
    assert_eq!(status_body["timer"]["active"], true);
    assert_eq!(status_body["last_action"], "drag-end");
}

#[tokio::test(start_paused = true)]
async fn drag_start_and_zero_release_cancel() {
    let app = app();
    call(&app, "POST", "/slider/drag-end", Some(json!({ "position": 10 }))).await;

    let (status, body) = call(&app, "POST", "/slider/drag-start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "inactive");
    assert_eq!(body["timer"]["phase"], "idle");
    assert_eq!(body["timer"]["dragging"], true);

    let (_, body) = call(&app, "POST", "/slider/drag-end", Some(json!({ "position": 0 }))).await;
    assert_eq!(body["status"], "inactive");
    assert_eq!(body["timer"]["active"], false);
    assert_eq!(body["timer"]["dragging"], false);
}

#[tokio::test(start_paused = true)]
async fn programmatic_position_is_ignored() {
    let app = app();
    call(&app, "POST", "/slider/drag-end", Some(json!({ "position": 20 }))).await;

    let (status, body) = call(
        &app,
        "POST",
        "/slider/position",
        Some(json!({ "position": 3, "from_user": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Programmatic position ignored");
    assert_eq!(body["timer"]["active"], true);
    assert_eq!(body["timer"]["remaining_millis"], 1_200_000);
    assert_eq!(body["timer"]["display"]["slider_position"], 20);
}

#[tokio::test]
async fn user_position_previews_selection() {
    let app = app();
    let (status, body) = call(&app, "POST", "/slider/position", Some(json!({ "position": 45 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "inactive");
    assert_eq!(body["timer"]["pending_minutes"], 45);
    assert_eq!(body["timer"]["display"]["minutes"], "45");
}

#[tokio::test]
async fn out_of_range_position_is_rejected() {
    let app = app();
    let (status, body) = call(&app, "POST", "/slider/drag-end", Some(json!({ "position": 61 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["timer"]["active"], false);
}

#[tokio::test]
async fn lifecycle_endpoints_respond() {
    let app = app();
    let (status, body) = call(&app, "POST", "/lifecycle/pause", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Audio suspended");

    let (status, body) = call(&app, "POST", "/lifecycle/resume", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Audio resumed");
}
