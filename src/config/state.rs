// Application state module
// Immutable state shared by every connection

use chrono::{DateTime, Local};

use super::types::Config;

/// Application state
///
/// The service has no runtime-mutable configuration, so this is a plain
/// read-only snapshot shared behind an `Arc`.
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Local>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            started_at: Local::now(),
        }
    }

    /// Seconds since the service started
    pub fn uptime_seconds(&self) -> i64 {
        (Local::now() - self.started_at).num_seconds()
    }
}
