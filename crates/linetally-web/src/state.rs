//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use linetally_store::FloorStore;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// An hourly production count was logged
    ProductionLogged { line: String, date: String, hour: u8 },
    /// A quality inspection was logged
    InspectionLogged { line: String, date: String },
    /// A summary/comparison ranking was computed
    SummaryComputed { from: String, to: String, best_label: Option<String>, lines: usize },
    /// General system notification
    Notification { level: String, message: String },
}

impl AppEvent {
    /// SSE event name, so wallboard clients can `addEventListener` per
    /// kind instead of parsing every payload.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::ProductionLogged { .. } => "production_logged",
            AppEvent::InspectionLogged { .. } => "inspection_logged",
            AppEvent::SummaryComputed { .. } => "summary_computed",
            AppEvent::Notification { .. } => "notification",
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub store: FloorStore,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            store: FloorStore::new(),
            event_tx,
            started_at: Instant::now(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Fire-and-forget event publish; nobody listening is fine.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
