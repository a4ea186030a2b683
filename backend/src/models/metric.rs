//! Metric selector for the aggregation stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;
use super::event::EventRecord;

/// The quantity aggregated per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Number of events.
    Count,
    /// Sum of `Total Deaths`.
    #[default]
    Deaths,
    /// Sum of damages, reported in millions of US$.
    Damages,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Count, Metric::Deaths, Metric::Damages];

    /// Wire name used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Count => "count",
            Metric::Deaths => "deaths",
            Metric::Damages => "damages",
        }
    }

    /// Human-readable label used in chart titles and axes.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Count => "Number of Disasters",
            Metric::Deaths => "Total Deaths",
            Metric::Damages => "Total Damages (million US$)",
        }
    }

    /// Whether the metric counts records rather than summing a column.
    pub fn is_count(&self) -> bool {
        matches!(self, Metric::Count)
    }

    /// Contribution of a single record, or `None` when the record has no
    /// value for this metric.
    pub fn value_of(&self, event: &EventRecord) -> Option<f64> {
        match self {
            Metric::Count => Some(1.0),
            Metric::Deaths => event.total_deaths.map(|d| d as f64),
            Metric::Damages => event.total_damages_musd(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" | "number of disasters" | "number disaster" => Ok(Metric::Count),
            "deaths" | "total deaths" => Ok(Metric::Deaths),
            "damages" | "total damages" | "total damage ('000 us$)" => Ok(Metric::Damages),
            _ => Err(ParseError::UnknownMetric(s.to_string())),
        }
    }
}
