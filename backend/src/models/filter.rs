//! Filter predicates built from dashboard controls.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ParseError, ParseResult};
use super::event::{is_all_groups, EventRecord};

/// Year predicate applied to `start_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum YearFilter {
    /// Exactly one year (map slider).
    Single { year: i32 },
    /// Inclusive range (range slider).
    Range { from: i32, to: i32 },
}

impl YearFilter {
    pub fn single(year: i32) -> Self {
        YearFilter::Single { year }
    }

    /// Inclusive range; `from` must not be after `to`.
    pub fn range(from: i32, to: i32) -> ParseResult<Self> {
        if from > to {
            return Err(ParseError::InvertedYearRange { from, to });
        }
        Ok(YearFilter::Range { from, to })
    }

    pub fn contains(&self, year: i32) -> bool {
        match *self {
            YearFilter::Single { year: y } => year == y,
            YearFilter::Range { from, to } => (from..=to).contains(&year),
        }
    }

    /// Records with no start year never match a year predicate.
    pub fn matches(&self, event: &EventRecord) -> bool {
        event.start_year.is_some_and(|y| self.contains(y))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, YearFilter::Range { .. })
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::Single { year } => write!(f, "{}", year),
            YearFilter::Range { from, to } => write!(f, "{}–{}", from, to),
        }
    }
}

/// Conjunction of the optional group, year and country predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub group: Option<String>,
    pub years: Option<YearFilter>,
    pub country: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a disaster group. `All` and blank values clear the predicate.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = if group.trim().is_empty() || is_all_groups(&group) {
            None
        } else {
            Some(group)
        };
        self
    }

    pub fn with_years(mut self, years: YearFilter) -> Self {
        self.years = Some(years);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        let country = country.into();
        self.country = if country.trim().is_empty() {
            None
        } else {
            Some(country)
        };
        self
    }

    /// The same filter without its country predicate.
    pub fn without_country(&self) -> Self {
        Self {
            country: None,
            ..self.clone()
        }
    }

    /// The same filter without its year predicate.
    pub fn without_years(&self) -> Self {
        Self {
            years: None,
            ..self.clone()
        }
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        if let Some(group) = &self.group {
            if !event.in_group(group) {
                return false;
            }
        }
        if let Some(years) = &self.years {
            if !years.matches(event) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !event.in_country(country) {
                return false;
            }
        }
        true
    }

    /// Group label for chart titles.
    pub fn group_label(&self) -> &str {
        self.group.as_deref().unwrap_or(super::event::ALL_GROUPS)
    }
}
