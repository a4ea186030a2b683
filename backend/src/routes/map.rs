use serde::{Deserialize, Serialize};

use crate::models::Metric;

/// Aggregated metric value for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRow {
    pub country: String,
    pub value: f64,
}

/// Choropleth map specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapChart {
    pub title: String,
    pub metric: Metric,
    /// Color bar title.
    pub value_label: String,
    pub color_scale: String,
    /// How `rows[].country` is matched to map geometry.
    pub location_mode: String,
    pub year_label: String,
    pub rows: Vec<MapRow>,
}

/// Route path
pub const GET_MAP_CHART: &str = "/charts/map";

/// Continuous color scale used for every metric.
pub const MAP_COLOR_SCALE: &str = "Reds";

/// Countries are matched by English name.
pub const MAP_LOCATION_MODE: &str = "country names";
