use crate::models::{EventFilter, EventRecord, Metric, YearFilter};
use crate::routes::map::{MapChart, MapRow, MAP_COLOR_SCALE, MAP_LOCATION_MODE};

use super::aggregation::aggregate_by_country;

/// Aggregate the metric per country.
pub fn compute_map_rows(events: &[&EventRecord], metric: Metric) -> Vec<MapRow> {
    aggregate_by_country(events, metric)
        .into_iter()
        .map(|(country, value)| MapRow { country, value })
        .collect()
}

/// Build the choropleth specification for an already filtered subset.
///
/// `filter` only supplies the title labels; `events` must already be
/// filtered by group and year.
pub fn compute_map_chart(events: &[&EventRecord], metric: Metric, filter: &EventFilter) -> MapChart {
    let year_label = filter
        .years
        .as_ref()
        .map(YearFilter::to_string)
        .unwrap_or_else(|| "All Years".to_string());

    MapChart {
        title: format!(
            "{} by Country in {} ({})",
            metric.label(),
            year_label,
            filter.group_label()
        ),
        metric,
        value_label: metric.label().to_string(),
        color_scale: MAP_COLOR_SCALE.to_string(),
        location_mode: MAP_LOCATION_MODE.to_string(),
        year_label,
        rows: compute_map_rows(events, metric),
    }
}
