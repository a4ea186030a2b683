//! # Disaster Dashboard Backend
//!
//! Aggregation engine for an interactive dashboard over EM-DAT disaster
//! records.
//!
//! The crate loads one spreadsheet of disaster events at startup and, for a
//! set of control values (disaster group, metric, year or year range, and an
//! optional country picked on the map), computes three charts:
//!
//! - a choropleth of the metric per country,
//! - a ranking of the top disaster subtypes,
//! - a per-year time series split at a data-reliability cutoff year.
//!
//! ## Architecture
//!
//! - [`io`]: Spreadsheet and CSV loading
//! - [`models`]: Event records, metrics and filter predicates
//! - [`db`]: Read-only repository over the loaded table
//! - [`services`]: Filtering, aggregation and per-session selection
//! - [`routes`]: Chart DTOs and route paths
//! - [`api`]: Re-exported DTOs for API consumers
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use disaster_dash::db::LocalRepository;
//! use disaster_dash::models::{EventRecord, Metric, YearFilter};
//! use disaster_dash::services::{compute_dashboard, DashboardQuery, DashboardSettings};
//!
//! let repo = LocalRepository::new(vec![EventRecord {
//!     dis_no: "2020-0001-CHL".to_string(),
//!     disaster_group: Some("Natural".to_string()),
//!     disaster_subtype: Some("Flood".to_string()),
//!     country: Some("Chile".to_string()),
//!     start_year: Some(2020),
//!     total_deaths: Some(12),
//!     ..Default::default()
//! }]);
//!
//! let query = DashboardQuery {
//!     metric: Metric::Deaths,
//!     years: Some(YearFilter::single(2020)),
//!     ..Default::default()
//! };
//! let data = compute_dashboard(&repo, &query, &DashboardSettings::default());
//! assert_eq!(data.map.rows[0].value, 12.0);
//! ```

// Allow large error types - RepositoryError carries structured context
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
