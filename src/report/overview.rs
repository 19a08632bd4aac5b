//! Dashboard and analytics aggregates.
//!
//! Pure derivations over a record snapshot, kept separate from any
//! rendering concern. Callers pass the snapshot (and the clock where it
//! matters) explicitly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::model::{ModerationRecord, Verdict};
use crate::report::summary::{percentage, summarize};

/// Headline metrics for the overview dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewMetrics {
    pub total_flagged: usize,
    pub flagged_today: usize,
    pub accuracy: f64,
}

/// Compute overview metrics as of `now`.
///
/// `flagged_today` counts records observed on `now`'s UTC calendar date.
pub fn overview(records: &[ModerationRecord], now: DateTime<Utc>) -> OverviewMetrics {
    let today = now.date_naive();
    let flagged_today = records
        .iter()
        .filter(|r| r.observed_at.date_naive() == today)
        .count();

    OverviewMetrics {
        total_flagged: records.len(),
        flagged_today,
        accuracy: summarize(records).accuracy,
    }
}

/// One slice of the verdict distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictShare {
    pub verdict: Verdict,
    pub count: usize,
    pub percentage: f64,
}

/// Verdict distribution in fixed True/False/Doubtful order.
pub fn verdict_distribution(records: &[ModerationRecord]) -> Vec<VerdictShare> {
    let counts = summarize(records).counts_by_verdict;
    Verdict::ALL
        .iter()
        .map(|&verdict| VerdictShare {
            verdict,
            count: counts.count(verdict),
            percentage: percentage(counts.count(verdict), records.len()),
        })
        .collect()
}

/// One row of the content-sources breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBreakdown {
    pub source: String,
    pub count: usize,
    pub percentage: f64,
}

/// Per-source record counts, descending by count, ties by source name.
pub fn source_breakdown(records: &[ModerationRecord]) -> Vec<SourceBreakdown> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.source.as_str()).or_default() += 1;
    }

    let mut rows: Vec<SourceBreakdown> = counts
        .into_iter()
        .map(|(source, count)| SourceBreakdown {
            source: source.to_string(),
            count,
            percentage: percentage(count, records.len()),
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.source.cmp(&b.source)));
    rows
}
