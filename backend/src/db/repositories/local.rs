//! In-memory local repository implementation.
//!
//! The whole event table is held in an `Arc<[EventRecord]>`. Clones share the
//! same allocation, so the repository can be handed to every request without
//! copying rows.

use std::path::Path;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, EventRepository, RepositoryError, RepositoryResult};
use crate::io::{DatasetInfo, EventLoader};
use crate::models::EventRecord;

/// Immutable in-memory event repository.
///
/// # Example
/// ```
/// use disaster_dash::db::repositories::LocalRepository;
/// use disaster_dash::db::repository::EventRepository;
/// use disaster_dash::models::EventRecord;
///
/// let repo = LocalRepository::new(vec![EventRecord {
///     dis_no: "2020-0001-CHL".to_string(),
///     country: Some("Chile".to_string()),
///     ..Default::default()
/// }]);
/// assert_eq!(repo.countries(), vec!["Chile".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct LocalRepository {
    events: Arc<[EventRecord]>,
    info: Option<DatasetInfo>,
}

impl LocalRepository {
    /// Create a repository over an already loaded table.
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events: events.into(),
            info: None,
        }
    }

    /// Attach provenance information.
    pub fn with_info(mut self, info: DatasetInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Load the event table from a spreadsheet or CSV export.
    pub fn from_file(path: &Path, sheet: &str) -> RepositoryResult<Self> {
        let (events, info) = EventLoader::load_from_file(path, sheet).map_err(|e| {
            RepositoryError::load(
                e,
                ErrorContext::new("load")
                    .with_entity("dataset")
                    .with_details(path.display().to_string()),
            )
        })?;
        Ok(Self::new(events).with_info(info))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EventRepository for LocalRepository {
    fn events(&self) -> &[EventRecord] {
        &self.events
    }

    fn dataset_info(&self) -> Option<&DatasetInfo> {
        self.info.as_ref()
    }
}
