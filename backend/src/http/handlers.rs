//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the pipeline itself.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ChartQuery, ClickRequest, DashboardData, DashboardOptions, EventList, EventsQuery,
    HealthResponse, MapChart, RankingChart, SelectionState, SessionResponse, TimelineChart,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{EventFilter, EventRecord, YearFilter};
use crate::routes::events::DEFAULT_EVENT_LIMIT;
use crate::services::{self, DashboardQuery};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Turn raw chart query parameters into a validated pipeline query.
///
/// Without year parameters the configured default year applies. An explicit
/// `country` wins over the session's map selection.
fn dashboard_query(state: &AppState, query: &ChartQuery) -> Result<DashboardQuery, AppError> {
    let metric = query.metric()?;
    let years = query
        .years(state.repository.year_bounds())?
        .unwrap_or_else(|| YearFilter::single(state.settings.default_year));

    let country = match query.country.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => Some(c.to_string()),
        _ => query
            .session
            .as_deref()
            .and_then(|id| state.selections.selected_country(id)),
    };

    Ok(DashboardQuery {
        group: query.group.clone(),
        metric,
        years: Some(years),
        country,
    })
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the size and provenance of the loaded table.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let status = if state.repository.is_healthy() {
        "ok"
    } else {
        "degraded"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: "v1".to_string(),
        events: state.repository.events().len(),
        sessions: state.selections.session_count(),
        dataset_checksum: state
            .repository
            .dataset_info()
            .map(|info| info.checksum.clone()),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/options
///
/// Values for populating the dashboard controls.
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<DashboardOptions> {
    Ok(Json(services::compute_options(
        state.repository.as_ref(),
        &state.settings,
    )))
}

/// GET /v1/dashboard
///
/// All three charts for one set of control values.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<DashboardData> {
    let query = dashboard_query(&state, &query)?;
    Ok(Json(services::compute_dashboard(
        state.repository.as_ref(),
        &query,
        &state.settings,
    )))
}

/// GET /v1/charts/map
pub async fn get_map_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<MapChart> {
    let query = dashboard_query(&state, &query)?;
    Ok(Json(services::map_chart(state.repository.as_ref(), &query)))
}

/// GET /v1/charts/ranking
pub async fn get_ranking_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<RankingChart> {
    let query = dashboard_query(&state, &query)?;
    Ok(Json(services::ranking_chart(
        state.repository.as_ref(),
        &query,
        &state.settings,
    )))
}

/// GET /v1/charts/timeline
pub async fn get_timeline_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<TimelineChart> {
    let query = dashboard_query(&state, &query)?;
    Ok(Json(services::timeline_chart(
        state.repository.as_ref(),
        &query,
        &state.settings,
    )))
}

// =============================================================================
// Events
// =============================================================================

/// GET /v1/events
///
/// Raw records matching the filter. Unlike the charts, no default year applies.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> HandlerResult<EventList> {
    let mut filter = EventFilter::new();
    if let Some(group) = &query.group {
        filter = filter.with_group(group.clone());
    }
    if let Some(years) = query.years(state.repository.year_bounds())? {
        filter = filter.with_years(years);
    }
    if let Some(country) = &query.country {
        filter = filter.with_country(country.clone());
    }

    let limit = query.limit.unwrap_or(DEFAULT_EVENT_LIMIT);
    Ok(Json(services::list_events(
        state.repository.as_ref(),
        &filter,
        limit,
    )))
}

/// GET /v1/events/{dis_no}
pub async fn get_event(
    State(state): State<AppState>,
    Path(dis_no): Path<String>,
) -> HandlerResult<EventRecord> {
    let event = state.repository.find_event(&dis_no)?;
    Ok(Json(event.clone()))
}

// =============================================================================
// Selection Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Create a selection session with no country selected.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session_id = state.selections.create_session();
    tracing::debug!(%session_id, "Created selection session");
    Ok((StatusCode::CREATED, Json(SessionResponse { session_id })))
}

/// GET /v1/sessions/{session_id}/selection
pub async fn get_selection(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SelectionState> {
    state
        .selections
        .state(&session_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))
}

/// POST /v1/sessions/{session_id}/selection
///
/// Apply a raw map click. A body that is not JSON, or a payload without a
/// country, clears the selection.
pub async fn apply_selection(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Bytes,
) -> HandlerResult<SelectionState> {
    let ClickRequest(payload) = ClickRequest::from_body(&body);
    state
        .selections
        .apply_click(&session_id, &payload)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", session_id)))
}

/// DELETE /v1/sessions/{session_id}/selection
///
/// Clear the selection. Idempotent.
pub async fn reset_selection(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SelectionState> {
    Ok(Json(state.selections.reset(&session_id)))
}
