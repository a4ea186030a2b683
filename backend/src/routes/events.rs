use serde::{Deserialize, Serialize};

use crate::models::EventRecord;

/// Page of filtered event records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    /// Number of records matching the filter, before truncation.
    pub total: usize,
    pub events: Vec<EventRecord>,
}

/// Route path for listing events.
pub const LIST_EVENTS: &str = "/events";

/// Route path for a single event.
pub const GET_EVENT: &str = "/events/{dis_no}";

/// Page size when the request does not name one.
pub const DEFAULT_EVENT_LIMIT: usize = 100;
