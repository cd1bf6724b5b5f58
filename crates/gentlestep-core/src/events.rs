use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::navigation::Route;

/// Every state change in the system produces an Event.
/// The terminal front-end prints them in `--json` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        progress: f64,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        progress: f64,
        at: DateTime<Utc>,
    },
    SessionFinished {
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    RoutePushed {
        route: Route,
        depth: usize,
        at: DateTime<Utc>,
    },
    PoppedToRoot {
        /// How many routes were cleared.
        cleared: usize,
        at: DateTime<Utc>,
    },
    CompletionRecorded {
        total: u64,
        at: DateTime<Utc>,
    },
}
