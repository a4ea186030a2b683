use serde::{Deserialize, Serialize};

/// Country selection of one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub session_id: String,
    pub country: Option<String>,
}

/// Route path for session creation.
pub const POST_SESSION: &str = "/sessions";

/// Route path for reading, applying and resetting a selection.
pub const SESSION_SELECTION: &str = "/sessions/{session_id}/selection";
