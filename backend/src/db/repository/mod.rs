//! Repository trait for read access to the event table.
//!
//! The event table is loaded once and never written; the trait only exposes
//! read operations. Handlers receive it as an explicitly passed
//! `Arc<dyn EventRepository>` held in the application state.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use std::collections::BTreeSet;

use crate::io::DatasetInfo;
use crate::models::EventRecord;

/// Read-only access to the immutable event table.
pub trait EventRepository: Send + Sync {
    /// All loaded events in spreadsheet order.
    fn events(&self) -> &[EventRecord];

    /// Provenance of the loaded table, if it came from a file.
    fn dataset_info(&self) -> Option<&DatasetInfo>;

    /// Look up one event by its `DisNo.` identifier.
    fn find_event(&self, dis_no: &str) -> RepositoryResult<&EventRecord> {
        self.events()
            .iter()
            .find(|e| e.dis_no == dis_no)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Event {} not found", dis_no),
                    ErrorContext::new("find_event")
                        .with_entity("event")
                        .with_entity_id(dis_no),
                )
            })
    }

    /// Distinct disaster groups, sorted.
    fn disaster_groups(&self) -> Vec<String> {
        distinct(self.events().iter().filter_map(|e| e.disaster_group.as_deref()))
    }

    /// Distinct countries, sorted.
    fn countries(&self) -> Vec<String> {
        distinct(self.events().iter().filter_map(|e| e.country.as_deref()))
    }

    /// Smallest and largest start year, if any record has one.
    fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.events().iter().filter_map(|e| e.start_year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Health check for the backing table.
    fn is_healthy(&self) -> bool {
        true
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
