use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// Selectable metric with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOption {
    pub value: Metric,
    pub label: String,
}

/// Values for the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// `All` followed by the sorted distinct groups of the table.
    pub groups: Vec<String>,
    pub metrics: Vec<MetricOption>,
    pub countries: Vec<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub default_year: i32,
    pub default_metric: Metric,
    pub cutoff_year: i32,
    pub ranking_limit: usize,
}

/// Route path
pub const GET_OPTIONS: &str = "/options";
