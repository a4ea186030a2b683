use chrono::Datelike;

use crate::models::{EventFilter, EventRecord, Metric};
use crate::routes::timeline::{Reliability, TimelineChart, TimelinePoint, TimelineSegment};

use super::aggregation::aggregate_by_year;

/// Calendar year of the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Per-year series in ascending order, without years after `current_year`.
pub fn compute_time_series(
    events: &[&EventRecord],
    metric: Metric,
    current_year: i32,
) -> Vec<TimelinePoint> {
    aggregate_by_year(events, metric)
        .into_iter()
        .filter(|(year, _)| *year <= current_year)
        .map(|(year, value)| TimelinePoint { year, value })
        .collect()
}

/// Split an ordered series at `cutoff_year`: years before the cutoff go to
/// the first part, the cutoff year and later to the second.
pub fn split_at_cutoff(
    points: Vec<TimelinePoint>,
    cutoff_year: i32,
) -> (Vec<TimelinePoint>, Vec<TimelinePoint>) {
    points.into_iter().partition(|p| p.year < cutoff_year)
}

/// Parameters of the time-series chart that do not come from the filter.
#[derive(Debug, Clone, Copy)]
pub struct TimelineParams {
    pub cutoff_year: i32,
    pub current_year: i32,
    pub highlight_year: Option<i32>,
}

/// Build the line chart specification.
///
/// `country` is the restriction already applied to `events`.
pub fn compute_timeline_chart(
    events: &[&EventRecord],
    metric: Metric,
    filter: &EventFilter,
    country: Option<String>,
    params: TimelineParams,
) -> TimelineChart {
    let series = compute_time_series(events, metric, params.current_year);
    let (pre, post) = split_at_cutoff(series, params.cutoff_year);

    let scope = match &country {
        Some(c) => format!("{}, {}", filter.group_label(), c),
        None => filter.group_label().to_string(),
    };

    TimelineChart {
        title: format!("{} per Year ({})", metric.label(), scope),
        metric,
        value_label: metric.label().to_string(),
        cutoff_year: params.cutoff_year,
        pre_cutoff: TimelineSegment::new(Reliability::Low, pre),
        post_cutoff: TimelineSegment::new(Reliability::High, post),
        highlight_year: params.highlight_year,
        country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(year: i32, deaths: Option<u64>) -> EventRecord {
        EventRecord {
            start_year: Some(year),
            total_deaths: deaths,
            ..Default::default()
        }
    }

    fn params(current_year: i32) -> TimelineParams {
        TimelineParams {
            cutoff_year: 2000,
            current_year,
            highlight_year: None,
        }
    }

    #[test]
    fn test_time_series_excludes_future_years() {
        let events = [event(2024, Some(1)), event(2025, Some(2)), event(2026, Some(3))];
        let refs: Vec<&EventRecord> = events.iter().collect();
        let series = compute_time_series(&refs, Metric::Deaths, 2025);
        assert_eq!(
            series,
            vec![
                TimelinePoint { year: 2024, value: 1.0 },
                TimelinePoint { year: 2025, value: 2.0 },
            ]
        );
    }

    #[test]
    fn test_time_series_ascending() {
        let events = [event(2010, None), event(1990, None), event(2010, None)];
        let refs: Vec<&EventRecord> = events.iter().collect();
        let series = compute_time_series(&refs, Metric::Count, 2025);
        assert_eq!(series.iter().map(|p| p.year).collect::<Vec<_>>(), vec![1990, 2010]);
        assert_eq!(series[1].value, 2.0);
    }

    #[test]
    fn test_split_at_cutoff_boundary() {
        let points = vec![
            TimelinePoint { year: 1999, value: 1.0 },
            TimelinePoint { year: 2000, value: 2.0 },
            TimelinePoint { year: 2001, value: 3.0 },
        ];
        let (pre, post) = split_at_cutoff(points, 2000);
        assert_eq!(pre.iter().map(|p| p.year).collect::<Vec<_>>(), vec![1999]);
        assert_eq!(post.iter().map(|p| p.year).collect::<Vec<_>>(), vec![2000, 2001]);
    }

    #[test]
    fn test_timeline_chart_partitions_cover_series() {
        let events: Vec<EventRecord> = (1980..2020).map(|y| event(y, Some(1))).collect();
        let refs: Vec<&EventRecord> = events.iter().collect();
        let chart = compute_timeline_chart(
            &refs,
            Metric::Deaths,
            &EventFilter::new(),
            None,
            params(2025),
        );

        assert!(chart.pre_cutoff.points.iter().all(|p| p.year < 2000));
        assert!(chart.post_cutoff.points.iter().all(|p| p.year >= 2000));
        let all: Vec<i32> = chart.points().map(|p| p.year).collect();
        assert_eq!(all, (1980..2020).collect::<Vec<_>>());
        assert_eq!(chart.pre_cutoff.line_dash, "dash");
        assert_eq!(chart.post_cutoff.line_dash, "solid");
        assert_eq!(chart.title, "Total Deaths per Year (All)");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
