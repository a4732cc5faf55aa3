//! Record types shared between the store, the workflow, and the API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog entry with its metadata and popularity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NameRecord {
    pub id: i64,
    pub name: String,
    pub meaning: Option<String>,
    pub origin: Option<String>,
    pub reason: Option<String>,
    pub search_count: i64,
}

/// Fields for registering a new record. `search_count` always starts at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewName {
    pub name: String,
    pub meaning: Option<String>,
    pub origin: Option<String>,
    pub reason: Option<String>,
}

impl NewName {
    pub fn new(
        name: impl Into<String>,
        meaning: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            meaning: Some(meaning.into()),
            origin: Some(origin.into()),
            reason: Some(reason.into()),
        }
    }
}

/// One page of filtered results plus the totals the caller needs for
/// pagination controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPage {
    pub records: Vec<NameRecord>,
    pub total_count: i64,
    /// The page actually served, after clamping.
    pub page_index: i64,
    pub page_count: i64,
}

/// Grouped origin counts, descending by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OriginCount {
    pub origin: String,
    pub count: i64,
}
