//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::EventFilter;
pub use crate::models::EventRecord;
pub use crate::models::Metric;
pub use crate::models::YearFilter;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::events::EventList;
pub use crate::routes::landing::DashboardOptions;
pub use crate::routes::landing::MetricOption;
pub use crate::routes::map::MapChart;
pub use crate::routes::map::MapRow;
pub use crate::routes::ranking::RankingChart;
pub use crate::routes::ranking::RankingRow;
pub use crate::routes::selection::SelectionState;
pub use crate::routes::timeline::Reliability;
pub use crate::routes::timeline::TimelineChart;
pub use crate::routes::timeline::TimelinePoint;
pub use crate::routes::timeline::TimelineSegment;
