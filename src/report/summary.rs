//! Aggregate summaries over record snapshots.

use serde::{Deserialize, Serialize};

use crate::record::model::{ModerationRecord, Verdict};

/// Per-verdict record counts.
///
/// Serializes with the verdict names as keys (`True`/`False`/`Doubtful`),
/// matching the report summary wire shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictCounts {
    #[serde(rename = "True")]
    pub verified: usize,
    #[serde(rename = "False")]
    pub debunked: usize,
    #[serde(rename = "Doubtful")]
    pub doubtful: usize,
}

impl VerdictCounts {
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::True => self.verified,
            Verdict::False => self.debunked,
            Verdict::Doubtful => self.doubtful,
        }
    }

    fn bump(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::True => self.verified += 1,
            Verdict::False => self.debunked += 1,
            Verdict::Doubtful => self.doubtful += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.verified + self.debunked + self.doubtful
    }
}

/// Summary statistics computed over a snapshot of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_count: usize,
    pub counts_by_verdict: VerdictCounts,
    /// Share of records resolved to True or False, in percent. A
    /// classification-coverage measure; there is no ground truth to
    /// compare against in this model.
    pub accuracy: f64,
    /// Share of records resolved to False, in percent.
    pub false_positive_rate: f64,
}

/// Compute summary statistics for a record snapshot.
///
/// An empty snapshot yields zeros across the board; there is no division
/// by zero. Percentages are rounded to one decimal.
pub fn summarize(records: &[ModerationRecord]) -> ReportSummary {
    let mut counts = VerdictCounts::default();
    for record in records {
        counts.bump(record.verdict);
    }

    let total = records.len();
    ReportSummary {
        total_count: total,
        counts_by_verdict: counts,
        accuracy: percentage(counts.verified + counts.debunked, total),
        false_positive_rate: percentage(counts.debunked, total),
    }
}

/// Percentage of `part` in `total`, rounded to one decimal. Zero when
/// `total` is zero.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
