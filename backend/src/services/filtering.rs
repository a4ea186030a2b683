use log::debug;

use crate::models::{EventFilter, EventRecord};

/// Filter records by the group, year and country predicates of `filter`.
///
/// Input order is preserved. No match yields an empty subset.
pub fn filter_events<'a>(events: &'a [EventRecord], filter: &EventFilter) -> Vec<&'a EventRecord> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// Narrow an already filtered subset to a single country.
pub fn filter_by_country<'a>(events: &[&'a EventRecord], country: &str) -> Vec<&'a EventRecord> {
    events.iter().copied().filter(|e| e.in_country(country)).collect()
}

/// Subset restricted to the filter's country, falling back to the
/// country-agnostic subset when that restriction matches nothing.
///
/// Returns the subset together with the country actually applied.
pub fn filter_with_country_fallback<'a>(
    events: &'a [EventRecord],
    filter: &EventFilter,
) -> (Vec<&'a EventRecord>, Option<String>) {
    let base = filter_events(events, &filter.without_country());

    let Some(country) = filter.country.as_deref() else {
        return (base, None);
    };

    let narrowed = filter_by_country(&base, country);
    if narrowed.is_empty() {
        debug!(
            "No events for country '{}' under current filter; using country-agnostic subset",
            country
        );
        (base, None)
    } else {
        (narrowed, Some(country.to_string()))
    }
}
