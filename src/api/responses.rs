//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerStatus;

/// Body of `POST /slider/position`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequest {
    pub position: u32,
    #[serde(default = "default_from_user")]
    pub from_user: bool,
}

fn default_from_user() -> bool {
    true
}

/// Body of `POST /slider/drag-end`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragEndRequest {
    pub position: u32,
}

/// API response structure for slider and lifecycle endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerStatus,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerStatus) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create an active response
    pub fn active(message: String, timer: TimerStatus) -> Self {
        Self::new("active".to_string(), message, timer)
    }

    /// Create an inactive response
    pub fn inactive(message: String, timer: TimerStatus) -> Self {
        Self::new("inactive".to_string(), message, timer)
    }

    /// Create an error response
    pub fn error(message: String, timer: TimerStatus) -> Self {
        Self::new("error".to_string(), message, timer)
    }

    /// Active or inactive depending on whether a countdown is running
    pub fn from_timer(message: String, timer: TimerStatus) -> Self {
        if timer.is_active() {
            Self::active(message, timer)
        } else {
            Self::inactive(message, timer)
        }
    }
}

/// Status response with server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerStatus,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
