use serde::{Deserialize, Serialize};

use super::map::MapChart;
use super::ranking::RankingChart;
use super::timeline::TimelineChart;

/// All three charts for one set of control values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub map: MapChart,
    pub ranking: RankingChart,
    pub timeline: TimelineChart,
    /// Number of records matching group and year.
    pub matched_events: usize,
}

/// Route path
pub const GET_DASHBOARD: &str = "/dashboard";
