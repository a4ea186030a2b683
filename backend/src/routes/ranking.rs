use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// Aggregated metric value for one disaster subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub subtype: String,
    pub value: f64,
}

/// Horizontal bar chart of the top subtypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingChart {
    pub title: String,
    pub metric: Metric,
    pub value_label: String,
    pub limit: usize,
    /// Country restriction actually applied, after fallback.
    pub country: Option<String>,
    /// Sorted by value, descending.
    pub rows: Vec<RankingRow>,
}

/// Route path
pub const GET_RANKING_CHART: &str = "/charts/ranking";

/// Number of subtypes shown in the ranking.
pub const DEFAULT_RANKING_LIMIT: usize = 7;
