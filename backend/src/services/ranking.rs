use crate::models::{EventFilter, EventRecord, Metric};
use crate::routes::ranking::{RankingChart, RankingRow};

use super::aggregation::{aggregate_by_subtype, top_n};

/// Top `limit` subtypes by metric, descending.
pub fn compute_ranking_rows(events: &[&EventRecord], metric: Metric, limit: usize) -> Vec<RankingRow> {
    top_n(aggregate_by_subtype(events, metric), limit)
        .into_iter()
        .map(|(subtype, value)| RankingRow { subtype, value })
        .collect()
}

/// Build the bar chart specification.
///
/// `country` is the restriction already applied to `events`.
pub fn compute_ranking_chart(
    events: &[&EventRecord],
    metric: Metric,
    limit: usize,
    filter: &EventFilter,
    country: Option<String>,
) -> RankingChart {
    let scope = match &country {
        Some(c) => format!("{}, {}", filter.group_label(), c),
        None => filter.group_label().to_string(),
    };

    RankingChart {
        title: format!(
            "Top {} Disaster Subtypes by {} ({})",
            limit,
            metric.label(),
            scope
        ),
        metric,
        value_label: metric.label().to_string(),
        limit,
        country,
        rows: compute_ranking_rows(events, metric, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(subtype: &str, deaths: u64) -> EventRecord {
        EventRecord {
            disaster_subtype: Some(subtype.to_string()),
            total_deaths: Some(deaths),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranking_truncated_and_sorted() {
        let events: Vec<EventRecord> = (0..10)
            .map(|i| event(&format!("subtype-{}", i), i * 10))
            .collect();
        let refs: Vec<&EventRecord> = events.iter().collect();

        let rows = compute_ranking_rows(&refs, Metric::Deaths, 7);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].subtype, "subtype-9");
        assert!(rows.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_ranking_count_metric() {
        let events = [event("Flood", 1), event("Flood", 1), event("Drought", 100)];
        let refs: Vec<&EventRecord> = events.iter().collect();
        let rows = compute_ranking_rows(&refs, Metric::Count, 7);
        assert_eq!(rows[0], RankingRow { subtype: "Flood".to_string(), value: 2.0 });
        assert_eq!(rows[1], RankingRow { subtype: "Drought".to_string(), value: 1.0 });
    }

    #[test]
    fn test_ranking_chart_title_mentions_country() {
        let chart = compute_ranking_chart(
            &[],
            Metric::Deaths,
            7,
            &EventFilter::new().with_group("Natural"),
            Some("Chile".to_string()),
        );
        assert_eq!(chart.title, "Top 7 Disaster Subtypes by Total Deaths (Natural, Chile)");
        assert!(chart.rows.is_empty());
    }
}
