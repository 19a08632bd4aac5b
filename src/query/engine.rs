//! Query evaluation against a record store.
//!
//! Single-pass conjunction filter over a point-in-time snapshot. The
//! result is a stable subsequence of the store's insertion order; no
//! re-sorting happens anywhere on this path.

use crate::query::filter::RecordFilter;
use crate::record::model::ModerationRecord;
use crate::record::store::RecordStore;

/// Evaluate `filter` against `store`.
///
/// Takes a snapshot under the store's read lock, so the result is
/// unaffected by mutations that begin after this call. A pure read: an
/// empty store yields an empty result, never an error.
pub fn run_query(store: &RecordStore, filter: &RecordFilter) -> Vec<ModerationRecord> {
    let snapshot = store.list_all();
    let total = snapshot.len();

    let matches: Vec<ModerationRecord> = snapshot
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect();

    log::debug!(
        "{} QUERY_COMPLETE matched={} total={}",
        store.log_context(),
        matches.len(),
        total
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::{SourceFilter, VerdictFilter};
    use crate::record::model::{RecordDraft, Verdict};

    fn seeded_store() -> RecordStore {
        let store = RecordStore::new();
        store
            .insert(RecordDraft {
                content: "Breaking: Major earthquake hits California, thousands evacuated"
                    .to_string(),
                verdict: Verdict::False,
                reason: "No seismic activity detected by USGS monitoring systems".to_string(),
                confidence: 98.5,
                source: "social-media".to_string(),
                platform: "Twitter".to_string(),
            })
            .unwrap();
        store
            .insert(RecordDraft {
                content: "New Harvard study links coffee consumption to longevity".to_string(),
                verdict: Verdict::True,
                reason: "Verified peer-reviewed research".to_string(),
                confidence: 95.2,
                source: "news-article".to_string(),
                platform: "CNN Health".to_string(),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_text_filter_selects_matching_record() {
        let store = seeded_store();
        let filter = RecordFilter {
            text_contains: Some("coffee".to_string()),
            ..Default::default()
        };

        let result = run_query(&store, &filter);
        assert_eq!(result.len(), 1);
        assert!(result[0].content.contains("coffee"));
        assert_eq!(result[0].confidence_band(), crate::record::model::ConfidenceBand::High);
    }

    #[test]
    fn test_verdict_filter_selects_matching_record() {
        let store = seeded_store();
        let filter = RecordFilter {
            verdict: VerdictFilter::Is(Verdict::False),
            ..Default::default()
        };

        let result = run_query(&store, &filter);
        assert_eq!(result.len(), 1);
        assert!(result[0].content.contains("earthquake"));
    }

    #[test]
    fn test_all_filters_return_everything_in_order() {
        let store = seeded_store();
        let filter = RecordFilter {
            verdict: VerdictFilter::All,
            source: SourceFilter::All,
            ..Default::default()
        };

        let result = run_query(&store, &filter);
        assert_eq!(result, store.list_all());
    }

    #[test]
    fn test_empty_store_yields_empty_result() {
        let store = RecordStore::new();
        assert!(run_query(&store, &RecordFilter::default()).is_empty());
    }

    #[test]
    fn test_conjunction_of_clauses() {
        let store = seeded_store();
        let filter = RecordFilter {
            text_contains: Some("earthquake".to_string()),
            verdict: VerdictFilter::Is(Verdict::True),
            ..Default::default()
        };
        // Text matches the first record, verdict does not.
        assert!(run_query(&store, &filter).is_empty());
    }
}
