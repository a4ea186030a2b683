use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// Aggregated metric value for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub value: f64,
}

/// Data reliability class of a series segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    /// Years before the cutoff.
    Low,
    /// Cutoff year onwards.
    High,
}

impl Reliability {
    /// Plotly line dash style.
    pub fn line_dash(&self) -> &'static str {
        match self {
            Reliability::Low => "dash",
            Reliability::High => "solid",
        }
    }
}

/// One contiguous, uniformly styled part of the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub reliability: Reliability,
    pub line_dash: String,
    pub points: Vec<TimelinePoint>,
}

impl TimelineSegment {
    pub fn new(reliability: Reliability, points: Vec<TimelinePoint>) -> Self {
        Self {
            reliability,
            line_dash: reliability.line_dash().to_string(),
            points,
        }
    }
}

/// Line chart of the metric per year, split at the cutoff year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineChart {
    pub title: String,
    pub metric: Metric,
    pub value_label: String,
    pub cutoff_year: i32,
    pub pre_cutoff: TimelineSegment,
    pub post_cutoff: TimelineSegment,
    /// Year selected on the map slider, if a single year is selected.
    pub highlight_year: Option<i32>,
    /// Country restriction actually applied, after fallback.
    pub country: Option<String>,
}

impl TimelineChart {
    /// The full series in year order.
    pub fn points(&self) -> impl Iterator<Item = &TimelinePoint> {
        self.pre_cutoff.points.iter().chain(self.post_cutoff.points.iter())
    }
}

/// Route path
pub const GET_TIMELINE_CHART: &str = "/charts/timeline";

/// Year before which EM-DAT data is considered less reliable.
pub const DEFAULT_CUTOFF_YEAR: i32 = 2000;
