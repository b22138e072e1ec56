//! Main application state shared with the HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

use super::TimerStatus;
use crate::tasks::{UiCommand, UiRequest};

/// Handles to the UI loop plus server metadata.
///
/// The countdown itself lives on the UI loop; handlers only post
/// commands to it and read the status it publishes.
#[derive(Debug)]
pub struct AppState {
    /// Commands for the UI loop
    pub ui_tx: mpsc::Sender<UiRequest>,
    /// Latest status published by the UI loop
    pub status_rx: watch::Receiver<TimerStatus>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        ui_tx: mpsc::Sender<UiRequest>,
        status_rx: watch::Receiver<TimerStatus>,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            ui_tx,
            status_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Post a command to the UI loop and wait for the status right after it
    pub async fn submit(&self, action: &str, command: UiCommand) -> Result<TimerStatus, String> {
        let (respond_to, response) = oneshot::channel();
        self.ui_tx
            .send(UiRequest::with_reply(command, respond_to))
            .await
            .map_err(|_| "UI loop is not running".to_string())?;

        let status = response
            .await
            .map_err(|_| format!("UI loop dropped the {} request", action))?;

        debug!("{} applied, phase={:?}", action, status.phase);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(status)
    }

    /// Get the latest published timer status
    pub fn get_timer_status(&self) -> TimerStatus {
        self.status_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
