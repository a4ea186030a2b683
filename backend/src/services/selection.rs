//! Per-session country selection set by map clicks.
//!
//! This module provides a simple in-memory store keyed by session id, in the
//! same shape as a background job tracker: a shared `RwLock<HashMap>` behind an
//! `Arc`, cheap to clone into handler state.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::routes::selection::SelectionState;

/// Extract the clicked country from a map click payload.
///
/// Expected shape: `{"points": [{"location": "Chile", ...}]}`. When
/// `location` is absent, `hovertext` and then `customdata[0]` are tried.
/// Any other shape yields `None`.
pub fn parse_click_payload(payload: &Value) -> Option<String> {
    let point = payload.get("points")?.as_array()?.first()?;

    let candidate = point
        .get("location")
        .and_then(Value::as_str)
        .or_else(|| point.get("hovertext").and_then(Value::as_str))
        .or_else(|| {
            point
                .get("customdata")
                .and_then(Value::as_array)
                .and_then(|data| data.first())
                .and_then(Value::as_str)
        })?;

    let country = candidate.trim();
    (!country.is_empty()).then(|| country.to_string())
}

/// Default idle time after which a session may be dropped.
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Default upper bound on concurrently held sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Bounds on the selection store, enforced when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for longer than this are dropped
    pub idle_timeout: Duration,
    /// Least recently used sessions are evicted beyond this count
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    country: Option<String>,
    last_seen: Instant,
}

/// In-memory selection store.
///
/// Every read or write of a session refreshes its idle clock.
#[derive(Clone, Default)]
pub struct SelectionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    limits: SessionLimits,
}

impl SelectionStore {
    /// Create an empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given limits.
    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::default(),
            limits,
        }
    }

    /// Create a session with no selection and return its ID.
    pub fn create_session(&self) -> String {
        self.create_session_at(Instant::now())
    }

    fn create_session_at(&self, now: Instant) -> String {
        let session_id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write();

        let before = sessions.len();
        let idle_timeout = self.limits.idle_timeout;
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) <= idle_timeout);

        let max_sessions = self.limits.max_sessions.max(1);
        while sessions.len() >= max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let dropped = before - sessions.len();
        if dropped > 0 {
            log::debug!("Dropped {} expired or evicted selection sessions", dropped);
        }

        sessions.insert(
            session_id.clone(),
            Session {
                country: None,
                last_seen: now,
            },
        );
        session_id
    }

    /// Run `f` on a live session after refreshing its idle clock.
    fn touch<T>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(session_id)?;
        session.last_seen = Instant::now();
        Some(f(session))
    }

    /// Currently selected country, if any.
    pub fn selected_country(&self, session_id: &str) -> Option<String> {
        self.touch(session_id, |s| s.country.clone()).flatten()
    }

    /// Apply a raw click payload. A malformed payload clears the selection.
    ///
    /// Returns `None` when the session does not exist.
    pub fn apply_click(&self, session_id: &str, payload: &Value) -> Option<SelectionState> {
        let country = parse_click_payload(payload);
        self.touch(session_id, |s| s.country = country.clone())?;
        Some(SelectionState {
            session_id: session_id.to_string(),
            country,
        })
    }

    /// Clear the selection. Idempotent; unknown sessions are left untouched.
    pub fn reset(&self, session_id: &str) -> SelectionState {
        self.touch(session_id, |s| s.country = None);
        SelectionState {
            session_id: session_id.to_string(),
            country: None,
        }
    }

    /// Selection state of a session, or `None` when it does not exist.
    pub fn state(&self, session_id: &str) -> Option<SelectionState> {
        self.touch(session_id, |s| SelectionState {
            session_id: session_id.to_string(),
            country: s.country.clone(),
        })
    }

    /// Number of sessions held.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
