//! Disaster event records as loaded from the EM-DAT spreadsheet.

use serde::{Deserialize, Serialize};

/// Sentinel accepted in place of a disaster group meaning "no group filter".
pub const ALL_GROUPS: &str = "All";

/// One row of the event table.
///
/// Every attribute besides the identifier is optional: empty or unparsable
/// cells are kept as `None` so that they drop out of the aggregations that
/// need them instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// `DisNo.` identifier, e.g. `2020-0123-DEU`.
    pub dis_no: String,
    pub historic: Option<bool>,
    pub classification_key: Option<String>,
    pub disaster_group: Option<String>,
    pub disaster_subgroup: Option<String>,
    pub disaster_type: Option<String>,
    pub disaster_subtype: Option<String>,
    pub event_name: Option<String>,
    pub country: Option<String>,
    pub subregion: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub associated_types: Option<String>,
    pub start_year: Option<i32>,
    pub start_month: Option<u32>,
    pub start_day: Option<u32>,
    pub end_year: Option<i32>,
    pub end_month: Option<u32>,
    pub end_day: Option<u32>,
    pub total_deaths: Option<u64>,
    pub no_injured: Option<u64>,
    pub no_affected: Option<u64>,
    pub no_homeless: Option<u64>,
    pub total_affected: Option<u64>,
    /// Total damages in thousands of US$ (`Total Damage ('000 US$)`).
    pub total_damages_kusd: Option<f64>,
}

impl EventRecord {
    /// Total damages in millions of US$.
    pub fn total_damages_musd(&self) -> Option<f64> {
        self.total_damages_kusd.map(kusd_to_musd)
    }

    /// Whether the record belongs to `group`. `All` matches every record.
    pub fn in_group(&self, group: &str) -> bool {
        if is_all_groups(group) {
            return true;
        }
        self.disaster_group.as_deref() == Some(group)
    }

    /// Whether the record was registered for `country`.
    pub fn in_country(&self, country: &str) -> bool {
        self.country.as_deref() == Some(country)
    }
}

/// Convert a damages figure in thousands of US$ to millions of US$.
pub fn kusd_to_musd(value: f64) -> f64 {
    value / 1000.0
}

/// Whether a group control value is the "All" sentinel.
pub fn is_all_groups(group: &str) -> bool {
    group.trim().eq_ignore_ascii_case(ALL_GROUPS)
}
