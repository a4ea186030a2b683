//! Group-by aggregation of a metric over a filtered subset.

use std::collections::BTreeMap;

use crate::models::{EventRecord, Metric};

/// Aggregate `metric` over `events` grouped by `key`.
///
/// Records with no key are skipped. For sum metrics, records with no value
/// are skipped and a group with no values at all is omitted, so an absent
/// country stays absent instead of showing up as zero. Groups come back in
/// key order.
pub fn aggregate_by<'a, K, F>(events: &[&'a EventRecord], metric: Metric, key: F) -> Vec<(K, f64)>
where
    K: Ord,
    F: Fn(&'a EventRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, f64> = BTreeMap::new();

    for &event in events {
        let Some(k) = key(event) else {
            continue;
        };
        if let Some(value) = metric.value_of(event) {
            *groups.entry(k).or_insert(0.0) += value;
        }
    }

    groups.into_iter().collect()
}

/// Aggregate the metric per country.
pub fn aggregate_by_country(events: &[&EventRecord], metric: Metric) -> Vec<(String, f64)> {
    aggregate_by(events, metric, |e| e.country.clone())
}

/// Aggregate the metric per disaster subtype.
pub fn aggregate_by_subtype(events: &[&EventRecord], metric: Metric) -> Vec<(String, f64)> {
    aggregate_by(events, metric, |e| e.disaster_subtype.clone())
}

/// Aggregate the metric per start year.
pub fn aggregate_by_year(events: &[&EventRecord], metric: Metric) -> Vec<(i32, f64)> {
    aggregate_by(events, metric, |e| e.start_year)
}

/// Sort descending by value and keep the first `limit` groups.
///
/// The sort is stable: ties keep their incoming (key) order.
pub fn top_n<K>(mut groups: Vec<(K, f64)>, limit: usize) -> Vec<(K, f64)> {
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    groups.truncate(limit);
    groups
}
