//! Composition of the filter and aggregation stages into the three charts.
//!
//! Which predicates each chart sees:
//!
//! | chart    | group | year                  | country (with fallback) |
//! |----------|-------|-----------------------|-------------------------|
//! | map      | yes   | yes                   | no                      |
//! | ranking  | yes   | yes                   | yes                     |
//! | timeline | yes   | ranges only           | yes                     |
//!
//! A single-year filter leaves the timeline spanning all years and is
//! reported back as the highlighted year instead. Whether the country applies
//! is decided once on the group and year filter, for both charts.

use log::debug;

use crate::db::repository::EventRepository;
use crate::models::{EventFilter, Metric, YearFilter, ALL_GROUPS};
use crate::routes::dashboard::DashboardData;
use crate::routes::events::EventList;
use crate::routes::landing::{DashboardOptions, MetricOption};
use crate::routes::map::MapChart;
use crate::routes::ranking::{RankingChart, DEFAULT_RANKING_LIMIT};
use crate::routes::timeline::{TimelineChart, DEFAULT_CUTOFF_YEAR};

use super::filtering::{filter_events, filter_with_country_fallback};
use super::map::compute_map_chart;
use super::ranking::compute_ranking_chart;
use super::timeline::{compute_timeline_chart, current_year, TimelineParams};

/// Default map year when the request names none.
pub const DEFAULT_YEAR: i32 = 2020;

/// Tunables of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub cutoff_year: i32,
    pub ranking_limit: usize,
    pub default_year: i32,
    /// Fixed "current year"; the local clock is used when unset.
    pub current_year: Option<i32>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            cutoff_year: DEFAULT_CUTOFF_YEAR,
            ranking_limit: DEFAULT_RANKING_LIMIT,
            default_year: DEFAULT_YEAR,
            current_year: None,
        }
    }
}

impl DashboardSettings {
    pub fn effective_current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(current_year)
    }
}

/// Control values of one dashboard request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub group: Option<String>,
    pub metric: Metric,
    pub years: Option<YearFilter>,
    pub country: Option<String>,
}

impl DashboardQuery {
    /// Full predicate set of the query.
    pub fn filter(&self) -> EventFilter {
        let mut filter = EventFilter::new();
        if let Some(group) = &self.group {
            filter = filter.with_group(group.clone());
        }
        if let Some(years) = self.years {
            filter = filter.with_years(years);
        }
        if let Some(country) = &self.country {
            filter = filter.with_country(country.clone());
        }
        filter
    }

    fn timeline_filter(&self) -> EventFilter {
        let filter = self.filter();
        match self.years {
            Some(years) if years.is_range() => filter,
            _ => filter.without_years(),
        }
    }

    fn highlight_year(&self) -> Option<i32> {
        match self.years {
            Some(YearFilter::Single { year }) => Some(year),
            _ => None,
        }
    }
}

/// Choropleth by country over group and year.
pub fn map_chart(repo: &dyn EventRepository, query: &DashboardQuery) -> MapChart {
    let filter = query.filter().without_country();
    let subset = filter_events(repo.events(), &filter);
    compute_map_chart(&subset, query.metric, &filter)
}

/// Country restriction shared by the ranking and the timeline.
///
/// Decided on the full group and year filter: a country with no events
/// there is dropped for both charts, even when it has events in other years.
pub fn applied_country(repo: &dyn EventRepository, query: &DashboardQuery) -> Option<String> {
    filter_with_country_fallback(repo.events(), &query.filter()).1
}

/// Top subtypes over group, year and (if it matches anything) country.
pub fn ranking_chart(
    repo: &dyn EventRepository,
    query: &DashboardQuery,
    settings: &DashboardSettings,
) -> RankingChart {
    let country = applied_country(repo, query);
    let filter = restrict_to(query.filter(), country.as_deref());
    let subset = filter_events(repo.events(), &filter);
    compute_ranking_chart(&subset, query.metric, settings.ranking_limit, &filter, country)
}

/// Per-year series over group, range and (if it matches anything) country.
pub fn timeline_chart(
    repo: &dyn EventRepository,
    query: &DashboardQuery,
    settings: &DashboardSettings,
) -> TimelineChart {
    let country = applied_country(repo, query);
    let filter = restrict_to(query.timeline_filter(), country.as_deref());
    let subset = filter_events(repo.events(), &filter);
    compute_timeline_chart(
        &subset,
        query.metric,
        &filter,
        country,
        TimelineParams {
            cutoff_year: settings.cutoff_year,
            current_year: settings.effective_current_year(),
            highlight_year: query.highlight_year(),
        },
    )
}

fn restrict_to(filter: EventFilter, country: Option<&str>) -> EventFilter {
    match country {
        Some(c) => filter.with_country(c),
        None => filter.without_country(),
    }
}

/// All three charts for one set of control values.
pub fn compute_dashboard(
    repo: &dyn EventRepository,
    query: &DashboardQuery,
    settings: &DashboardSettings,
) -> DashboardData {
    let matched_events = filter_events(repo.events(), &query.filter().without_country()).len();
    debug!(
        "Dashboard query group={:?} metric={} years={:?} country={:?}: {} of {} events",
        query.group,
        query.metric,
        query.years,
        query.country,
        matched_events,
        repo.events().len()
    );

    DashboardData {
        map: map_chart(repo, query),
        ranking: ranking_chart(repo, query, settings),
        timeline: timeline_chart(repo, query, settings),
        matched_events,
    }
}

/// Values for populating the dashboard controls.
pub fn compute_options(repo: &dyn EventRepository, settings: &DashboardSettings) -> DashboardOptions {
    let mut groups = vec![ALL_GROUPS.to_string()];
    groups.extend(repo.disaster_groups());
    let bounds = repo.year_bounds();

    DashboardOptions {
        groups,
        metrics: Metric::ALL
            .iter()
            .map(|m| MetricOption {
                value: *m,
                label: m.label().to_string(),
            })
            .collect(),
        countries: repo.countries(),
        year_min: bounds.map(|(lo, _)| lo),
        year_max: bounds.map(|(_, hi)| hi),
        default_year: settings.default_year,
        default_metric: Metric::default(),
        cutoff_year: settings.cutoff_year,
        ranking_limit: settings.ranking_limit,
    }
}

/// Filtered records, truncated to `limit`.
pub fn list_events(repo: &dyn EventRepository, filter: &EventFilter, limit: usize) -> EventList {
    let subset = filter_events(repo.events(), filter);
    EventList {
        total: subset.len(),
        events: subset.into_iter().take(limit).cloned().collect(),
    }
}
