//! Service layer for the dashboard pipeline.
//!
//! Services sit between the repository and the HTTP layer. Each chart is
//! computed in two stages: filtering (`filtering`) and aggregation
//! (`aggregation`), composed per chart in `map`, `ranking` and `timeline`.
//! `dashboard` wires the stages to request controls; `selection` keeps the
//! per-session country picked on the map.

pub mod aggregation;
pub mod dashboard;
pub mod filtering;
pub mod map;
pub mod ranking;
pub mod selection;
pub mod timeline;

pub use aggregation::{aggregate_by, aggregate_by_country, aggregate_by_subtype, aggregate_by_year, top_n};
pub use dashboard::{
    applied_country, compute_dashboard, compute_options, list_events, map_chart, ranking_chart,
    timeline_chart, DashboardQuery, DashboardSettings, DEFAULT_YEAR,
};
pub use filtering::{filter_by_country, filter_events, filter_with_country_fallback};
pub use map::{compute_map_chart, compute_map_rows};
pub use ranking::{compute_ranking_chart, compute_ranking_rows};
pub use selection::{
    parse_click_payload, SelectionStore, SessionLimits, DEFAULT_MAX_SESSIONS,
    DEFAULT_SESSION_IDLE_TIMEOUT,
};
pub use timeline::{compute_time_series, compute_timeline_chart, split_at_cutoff, TimelineParams};
