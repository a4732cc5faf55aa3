//! Aggregate statistics over the catalog.
//!
//! Summarization is a pure function over the store's aggregate query
//! results; anything visual (charts) belongs to whoever renders the
//! summary, not to this crate.

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::models::{NameRecord, OriginCount};
use crate::store::NameStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_records: i64,
    /// Name of the most-searched record, if any records exist.
    pub most_searched: Option<String>,
    /// Origin with the most records, if any record carries an origin.
    pub most_common_origin: Option<String>,
    pub origin_distribution: Vec<OriginCount>,
}

/// Build a summary from already-fetched aggregates.
pub fn summarize(
    total_records: i64,
    top: &[NameRecord],
    origin_distribution: Vec<OriginCount>,
) -> StatsSummary {
    StatsSummary {
        total_records,
        most_searched: top.first().map(|r| r.name.clone()),
        most_common_origin: origin_distribution.first().map(|o| o.origin.clone()),
        origin_distribution,
    }
}

/// Run the aggregate queries and summarize them.
pub async fn gather(store: &dyn NameStore) -> CatalogResult<StatsSummary> {
    let total = store.count_all().await?;
    let top = store.top_by_search_count(1).await?;
    let origins = store.count_by_origin().await?;
    Ok(summarize(total, &top, origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, search_count: i64) -> NameRecord {
        NameRecord {
            id: 1,
            name: name.to_string(),
            meaning: None,
            origin: None,
            reason: None,
            search_count,
        }
    }

    #[test]
    fn empty_catalog_summarizes_to_nothing() {
        let summary = summarize(0, &[], Vec::new());
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.most_searched, None);
        assert_eq!(summary.most_common_origin, None);
        assert!(summary.origin_distribution.is_empty());
    }

    #[test]
    fn leaders_come_from_the_head_of_each_aggregate() {
        let origins = vec![
            OriginCount {
                origin: "Hebrew".to_string(),
                count: 3,
            },
            OriginCount {
                origin: "Latin".to_string(),
                count: 1,
            },
        ];
        let summary = summarize(4, &[record("Alice", 9)], origins);
        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.most_searched.as_deref(), Some("Alice"));
        assert_eq!(summary.most_common_origin.as_deref(), Some("Hebrew"));
        assert_eq!(summary.origin_distribution.len(), 2);
    }
}
