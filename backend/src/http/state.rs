//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::EventRepository;
use crate::services::{DashboardSettings, SelectionStore, SessionLimits};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable event table loaded at startup
    pub repository: Arc<dyn EventRepository>,
    /// Per-session map selections
    pub selections: SelectionStore,
    /// Pipeline tunables
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn EventRepository>, settings: DashboardSettings) -> Self {
        Self {
            repository,
            selections: SelectionStore::new(),
            settings: Arc::new(settings),
        }
    }

    /// Replace the selection store with one bounded by `limits`.
    pub fn with_session_limits(mut self, limits: SessionLimits) -> Self {
        self.selections = SelectionStore::with_limits(limits);
        self
    }
}
