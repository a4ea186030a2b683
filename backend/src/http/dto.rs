//! Data Transfer Objects for the HTTP API.
//!
//! Chart DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize. The query types here carry raw control values
//! as sent by the frontend and are validated before reaching the services.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Dashboard
    DashboardData,
    // Landing
    DashboardOptions, MetricOption,
    // Events
    EventList,
    // Map
    MapChart, MapRow,
    // Ranking
    RankingChart, RankingRow,
    // Selection
    SelectionState,
    // Timeline
    TimelineChart, TimelinePoint, TimelineSegment,
};

use crate::models::{Metric, ParseResult, YearFilter};

/// Query parameters shared by the dashboard and chart endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartQuery {
    /// Disaster group, or `All`
    #[serde(default)]
    pub group: Option<String>,
    /// Metric wire name or dashboard label (default: deaths)
    #[serde(default)]
    pub metric: Option<String>,
    /// Single year (map slider)
    #[serde(default)]
    pub year: Option<i32>,
    /// Lower bound of a year range (inclusive)
    #[serde(default)]
    pub year_from: Option<i32>,
    /// Upper bound of a year range (inclusive)
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Explicit country restriction; takes precedence over the session
    #[serde(default)]
    pub country: Option<String>,
    /// Selection session whose clicked country applies
    #[serde(default)]
    pub session: Option<String>,
}

impl ChartQuery {
    pub fn metric(&self) -> ParseResult<Metric> {
        match self.metric.as_deref() {
            Some(m) if !m.trim().is_empty() => m.parse(),
            _ => Ok(Metric::default()),
        }
    }

    /// Year predicate from the request, or `None` when it names no year.
    pub fn years(&self, bounds: Option<(i32, i32)>) -> ParseResult<Option<YearFilter>> {
        year_filter(self.year, self.year_from, self.year_to, bounds)
    }
}

/// Query parameters for the event listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventsQuery {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub year_from: Option<i32>,
    #[serde(default)]
    pub year_to: Option<i32>,
    #[serde(default)]
    pub country: Option<String>,
    /// Maximum number of records returned (default: 100)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl EventsQuery {
    pub fn years(&self, bounds: Option<(i32, i32)>) -> ParseResult<Option<YearFilter>> {
        year_filter(self.year, self.year_from, self.year_to, bounds)
    }
}

/// `year` wins over a range. A range with one bound missing takes the other
/// from `bounds`, or mirrors the given bound when the table has no years.
fn year_filter(
    year: Option<i32>,
    year_from: Option<i32>,
    year_to: Option<i32>,
    bounds: Option<(i32, i32)>,
) -> ParseResult<Option<YearFilter>> {
    if let Some(year) = year {
        return Ok(Some(YearFilter::single(year)));
    }
    let (from, to) = match (year_from, year_to) {
        (None, None) => return Ok(None),
        (Some(from), Some(to)) => (from, to),
        (Some(from), None) => (from, bounds.map_or(from, |(_, hi)| hi.max(from))),
        (None, Some(to)) => (bounds.map_or(to, |(lo, _)| lo.min(to)), to),
    };
    YearFilter::range(from, to).map(Some)
}

/// Request body for applying a map click.
///
/// The click payload is kept raw; a body that is not JSON, or a shape that
/// carries no country, clears the selection instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickRequest(pub serde_json::Value);

impl ClickRequest {
    /// Decode a raw request body. Invalid JSON becomes `null`.
    pub fn from_body(body: &[u8]) -> Self {
        Self(serde_json::from_slice(body).unwrap_or(serde_json::Value::Null))
    }
}

/// Response for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of loaded event records
    pub events: usize,
    /// Number of live selection sessions
    pub sessions: usize,
    /// SHA-256 of the loaded file, if loaded from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_checksum: Option<String>,
}
