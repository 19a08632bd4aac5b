//! Moderation record models.
//!
//! A moderation record is one flagged content item together with its
//! classification outcome. Verdicts are a closed set; unrecognized values
//! are rejected when parsing, not propagated.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification outcome assigned to a flagged content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Doubtful,
}

impl Verdict {
    /// All verdicts, in display order.
    pub const ALL: [Verdict; 3] = [Verdict::True, Verdict::False, Verdict::Doubtful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "True",
            Verdict::False => "False",
            Verdict::Doubtful => "Doubtful",
        }
    }

    /// True and False are resolved classifications; Doubtful is not.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Verdict::True | Verdict::False)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = Error;

    /// Case-insensitive parse. Review clients send lowercased verdict
    /// values, the wire shape uses capitalized ones.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "true" => Ok(Verdict::True),
            "false" => Ok(Verdict::False),
            "doubtful" => Ok(Verdict::Doubtful),
            _ => Err(Error::Validation {
                field: "verdict",
                message: format!("unrecognized verdict: {}", s),
            }),
        }
    }
}

/// Confidence banding used by the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Band thresholds: >= 95 high, >= 80 medium, low otherwise.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 95.0 {
            ConfidenceBand::High
        } else if confidence >= 80.0 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

/// One flagged content item held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRecord {
    pub id: u64,
    pub content: String,
    pub verdict: Verdict,
    pub reason: String,
    pub confidence: f64,
    pub source: String,
    pub platform: String,
    pub observed_at: DateTime<Utc>,
}

impl ModerationRecord {
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Fields supplied by a caller when inserting a record.
///
/// The store assigns `id` and `observed_at`; everything else comes from
/// the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub content: String,
    pub verdict: Verdict,
    pub reason: String,
    pub confidence: f64,
    pub source: String,
    pub platform: String,
}

/// Validate that a confidence value is a percentage in [0, 100].
///
/// Non-finite values are rejected; NaN would poison ordering and
/// aggregate math downstream.
pub(crate) fn validate_confidence(confidence: f64) -> Result<()> {
    if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
        return Err(Error::Validation {
            field: "confidence",
            message: format!("confidence must be within [0, 100], got {}", confidence),
        });
    }
    Ok(())
}
