mod support;

use disaster_dash::db::repository::EventRepository;
use disaster_dash::models::{EventFilter, Metric, YearFilter};
use disaster_dash::services::{
    compute_dashboard, compute_options, filter_events, map_chart, ranking_chart, timeline_chart,
    DashboardQuery, DashboardSettings, SelectionStore,
};
use serde_json::json;

use support::{approx_eq, fixed_settings, fixture_repository};

fn year_filters() -> Vec<Option<YearFilter>> {
    vec![
        None,
        Some(YearFilter::single(1985)),
        Some(YearFilter::single(2020)),
        Some(YearFilter::range(1990, 2020).unwrap()),
        Some(YearFilter::single(1950)),
    ]
}

fn queries() -> Vec<DashboardQuery> {
    let mut queries = Vec::new();
    for group in [None, Some("All"), Some("Natural"), Some("Technological")] {
        for metric in Metric::ALL {
            for years in year_filters() {
                queries.push(DashboardQuery {
                    group: group.map(str::to_string),
                    metric,
                    years,
                    country: None,
                });
            }
        }
    }
    queries
}

#[test]
fn test_map_values_equal_subset_aggregate() {
    let repo = fixture_repository();

    for query in queries() {
        let chart = map_chart(&repo, &query);
        let filter = query.filter();

        for row in &chart.rows {
            let matching: Vec<_> = repo
                .events()
                .iter()
                .filter(|e| filter.matches(e) && e.in_country(&row.country))
                .collect();
            let expected: f64 = if query.metric.is_count() {
                matching.len() as f64
            } else {
                matching.iter().filter_map(|e| query.metric.value_of(e)).sum()
            };
            assert!(
                approx_eq(row.value, expected),
                "{:?}: {} got {} expected {}",
                query,
                row.country,
                row.value,
                expected
            );
        }

        let countries: Vec<&str> = chart.rows.iter().map(|r| r.country.as_str()).collect();
        let mut sorted = countries.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(countries, sorted, "map rows should be unique and ordered");
    }
}

#[test]
fn test_map_deaths_for_2020_natural() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Deaths,
        years: Some(YearFilter::single(2020)),
        country: None,
    };
    let chart = map_chart(&repo, &query);

    let find = |country: &str| chart.rows.iter().find(|r| r.country == country).map(|r| r.value);
    assert_eq!(find("Japan"), Some(90.0));
    assert_eq!(find("India"), Some(60.0));
    assert_eq!(find("Peru"), Some(20.0));
    assert_eq!(find("Germany"), None);
    assert_eq!(chart.title, "Total Deaths by Country in 2020 (Natural)");
}

#[test]
fn test_map_count_includes_records_without_values() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        metric: Metric::Count,
        years: Some(YearFilter::single(2020)),
        ..Default::default()
    };
    let chart = map_chart(&repo, &query);
    let india = chart.rows.iter().find(|r| r.country == "India").unwrap();
    assert_eq!(india.value, 2.0);
}

#[test]
fn test_ranking_bounded_and_descending() {
    let repo = fixture_repository();
    let settings = fixed_settings();

    for query in queries() {
        let chart = ranking_chart(&repo, &query, &settings);
        assert!(chart.rows.len() <= settings.ranking_limit);
        assert!(
            chart.rows.windows(2).all(|w| w[0].value >= w[1].value),
            "{:?} not descending",
            query
        );
    }
}

#[test]
fn test_ranking_truncates_to_top_seven() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Deaths,
        years: Some(YearFilter::single(2020)),
        country: None,
    };
    let chart = ranking_chart(&repo, &query, &fixed_settings());

    assert_eq!(chart.rows.len(), 7);
    assert_eq!(chart.rows[0].subtype, "Tropical cyclone");
    assert_eq!(chart.rows[0].value, 90.0);
    assert!(chart.rows.iter().all(|r| r.subtype != "Tsunami"));
}

#[test]
fn test_ranking_limit_is_configurable() {
    let repo = fixture_repository();
    let settings = DashboardSettings {
        ranking_limit: 3,
        ..fixed_settings()
    };
    let query = DashboardQuery {
        years: Some(YearFilter::single(2020)),
        ..Default::default()
    };
    let chart = ranking_chart(&repo, &query, &settings);
    assert_eq!(chart.rows.len(), 3);
    assert_eq!(chart.limit, 3);
}

#[test]
fn test_timeline_partitions_cover_series() {
    let repo = fixture_repository();
    let settings = fixed_settings();

    for query in queries() {
        let chart = timeline_chart(&repo, &query, &settings);

        assert!(chart.pre_cutoff.points.iter().all(|p| p.year < chart.cutoff_year));
        assert!(chart.post_cutoff.points.iter().all(|p| p.year >= chart.cutoff_year));

        let years: Vec<i32> = chart.points().map(|p| p.year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(years, sorted, "{:?}: series should be disjoint and ascending", query);
    }
}

#[test]
fn test_timeline_union_equals_series() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Count,
        years: Some(YearFilter::single(2020)),
        country: None,
    };
    let chart = timeline_chart(&repo, &query, &fixed_settings());

    let pre: Vec<i32> = chart.pre_cutoff.points.iter().map(|p| p.year).collect();
    let post: Vec<i32> = chart.post_cutoff.points.iter().map(|p| p.year).collect();
    assert_eq!(pre, vec![1985, 1998]);
    assert_eq!(post, vec![2000, 2010, 2020]);
    assert_eq!(chart.highlight_year, Some(2020));
}

#[test]
fn test_timeline_excludes_future_years() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        years: None,
        ..Default::default()
    };
    let chart = timeline_chart(&repo, &query, &fixed_settings());
    assert!(chart.points().all(|p| p.year <= 2025));
    assert!(!chart.points().any(|p| p.year == 2099));
}

#[test]
fn test_absent_country_falls_back_to_unrestricted_charts() {
    let repo = fixture_repository();
    let settings = fixed_settings();
    let base = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Deaths,
        years: Some(YearFilter::single(2020)),
        country: None,
    };
    let with_germany = DashboardQuery {
        country: Some("Germany".to_string()),
        ..base.clone()
    };

    let ranking = ranking_chart(&repo, &with_germany, &settings);
    assert_eq!(ranking.country, None);
    assert_eq!(ranking.rows, ranking_chart(&repo, &base, &settings).rows);
    assert!(!ranking.rows.is_empty());

    let timeline = timeline_chart(&repo, &with_germany, &settings);
    assert_eq!(timeline.country, None);
    assert_eq!(
        timeline.points().collect::<Vec<_>>(),
        timeline_chart(&repo, &base, &settings).points().collect::<Vec<_>>()
    );
}

#[test]
fn test_country_without_events_in_selected_year_falls_back_everywhere() {
    let repo = fixture_repository();
    let settings = fixed_settings();
    let base = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Count,
        years: Some(YearFilter::single(2010)),
        country: None,
    };
    // Peru has natural events in 1998 and 2020 but none in 2010
    let with_peru = DashboardQuery {
        country: Some("Peru".to_string()),
        ..base.clone()
    };

    let ranking = ranking_chart(&repo, &with_peru, &settings);
    let timeline = timeline_chart(&repo, &with_peru, &settings);
    assert_eq!(ranking.country, None);
    assert_eq!(timeline.country, None);

    let years: Vec<i32> = timeline.points().map(|p| p.year).collect();
    assert_eq!(years, vec![1985, 1998, 2000, 2010, 2020]);
    assert_eq!(
        timeline.points().collect::<Vec<_>>(),
        timeline_chart(&repo, &base, &settings).points().collect::<Vec<_>>()
    );
}

#[test]
fn test_present_country_restricts_ranking_and_timeline() {
    let repo = fixture_repository();
    let settings = fixed_settings();
    let query = DashboardQuery {
        group: Some("Natural".to_string()),
        metric: Metric::Deaths,
        years: Some(YearFilter::single(2010)),
        country: Some("Chile".to_string()),
    };

    let ranking = ranking_chart(&repo, &query, &settings);
    assert_eq!(ranking.country.as_deref(), Some("Chile"));
    assert_eq!(ranking.rows.len(), 1);
    assert_eq!(ranking.rows[0].subtype, "Ground movement");

    let timeline = timeline_chart(&repo, &query, &settings);
    let years: Vec<i32> = timeline.points().map(|p| p.year).collect();
    assert_eq!(years, vec![1985, 2000, 2010, 2020]);

    let map = map_chart(&repo, &query);
    assert_eq!(map.rows.len(), 1);
}

#[test]
fn test_damages_in_millions() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        metric: Metric::Damages,
        years: Some(YearFilter::single(1985)),
        ..Default::default()
    };
    let data = compute_dashboard(&repo, &query, &fixed_settings());

    assert_eq!(data.map.rows.len(), 1);
    assert!(approx_eq(data.map.rows[0].value, 1046.0));
    assert!(approx_eq(data.ranking.rows[0].value, 1046.0));
    assert_eq!(data.map.value_label, "Total Damages (million US$)");

    let series = timeline_chart(&repo, &DashboardQuery { years: None, ..query }, &fixed_settings());
    let y2010 = series.points().find(|p| p.year == 2010).unwrap();
    assert!(approx_eq(y2010.value, 30_000.0));
}

#[test]
fn test_no_match_gives_empty_charts() {
    let repo = fixture_repository();
    let query = DashboardQuery {
        group: Some("Complex".to_string()),
        years: Some(YearFilter::single(2020)),
        ..Default::default()
    };
    let data = compute_dashboard(&repo, &query, &fixed_settings());
    assert!(data.map.rows.is_empty());
    assert!(data.ranking.rows.is_empty());
    assert_eq!(data.timeline.points().count(), 0);
    assert_eq!(data.matched_events, 0);
}

#[test]
fn test_filter_events_group_all_matches_everything() {
    let repo = fixture_repository();
    let all = filter_events(repo.events(), &EventFilter::new().with_group("All"));
    assert_eq!(all.len(), repo.events().len());
}

#[test]
fn test_options_from_fixture() {
    let repo = fixture_repository();
    let options = compute_options(&repo, &fixed_settings());
    assert_eq!(options.groups, vec!["All", "Natural", "Technological"]);
    assert_eq!(options.year_min, Some(1985));
    assert_eq!(options.year_max, Some(2099));
    assert!(options.countries.contains(&"United States of America".to_string()));
}

#[test]
fn test_reset_clears_country_restriction() {
    let repo = fixture_repository();
    let settings = fixed_settings();
    let store = SelectionStore::new();
    let session = store.create_session();

    let query_for = |store: &SelectionStore| DashboardQuery {
        group: Some("Natural".to_string()),
        years: Some(YearFilter::single(2020)),
        country: store.selected_country(&session),
        ..Default::default()
    };

    store.apply_click(&session, &json!({"points": [{"location": "Peru"}]}));
    let restricted = ranking_chart(&repo, &query_for(&store), &settings);
    assert_eq!(restricted.country.as_deref(), Some("Peru"));

    store.reset(&session);
    let cleared = ranking_chart(&repo, &query_for(&store), &settings);
    assert_eq!(cleared.country, None);
    assert_eq!(cleared.rows.len(), 7);

    store.reset(&session);
    assert_eq!(store.selected_country(&session), None);
}
