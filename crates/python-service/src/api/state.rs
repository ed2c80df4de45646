//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::Settings;

/// Application state shared across handlers.
///
/// Settings are loaded once at startup and never mutated, so handlers read
/// them through the `Arc` without synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new app state.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
