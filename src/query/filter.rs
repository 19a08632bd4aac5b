//! Composite record filters.
//!
//! A filter is the conjunction of three clauses: free-text substring over
//! content and reason, verdict equality, and source equality. Each clause
//! defaults to match-everything.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::model::{ModerationRecord, Verdict};

/// Verdict clause of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerdictFilter {
    #[default]
    All,
    Is(Verdict),
}

/// Source clause of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Is(String),
}

/// Composite filter evaluated by the query engine.
///
/// The default filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub text_contains: Option<String>,
    pub verdict: VerdictFilter,
    pub source: SourceFilter,
}

impl RecordFilter {
    /// Whether `record` satisfies every clause.
    pub fn matches(&self, record: &ModerationRecord) -> bool {
        self.matches_text(record) && self.matches_verdict(record) && self.matches_source(record)
    }

    /// Free-text clause: case-insensitive substring of content or reason.
    /// An empty or omitted needle matches everything.
    fn matches_text(&self, record: &ModerationRecord) -> bool {
        let needle = match &self.text_contains {
            Some(needle) if !needle.is_empty() => needle.to_lowercase(),
            _ => return true,
        };
        record.content.to_lowercase().contains(&needle)
            || record.reason.to_lowercase().contains(&needle)
    }

    fn matches_verdict(&self, record: &ModerationRecord) -> bool {
        match self.verdict {
            VerdictFilter::All => true,
            VerdictFilter::Is(verdict) => record.verdict == verdict,
        }
    }

    /// Source tags are compared exactly; they are machine identifiers, not
    /// free text.
    fn matches_source(&self, record: &ModerationRecord) -> bool {
        match &self.source {
            SourceFilter::All => true,
            SourceFilter::Is(source) => record.source == *source,
        }
    }

    /// Convert the wire shape into a typed filter.
    ///
    /// Unrecognized verdict values are rejected here rather than silently
    /// matching nothing downstream.
    pub fn from_request(request: FilterRequest) -> Result<Self> {
        let verdict = match request.verdict.as_deref() {
            None => VerdictFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => VerdictFilter::All,
            Some(v) => VerdictFilter::Is(v.parse()?),
        };
        let source = match request.source {
            None => SourceFilter::All,
            Some(ref s) if s == "all" => SourceFilter::All,
            Some(s) => SourceFilter::Is(s),
        };
        Ok(Self {
            text_contains: request.text_contains,
            verdict,
            source,
        })
    }

    /// Parse a filter from its JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: FilterRequest = serde_json::from_str(json).map_err(|e| Error::Validation {
            field: "filter",
            message: format!("malformed filter request: {}", e),
        })?;
        Self::from_request(request)
    }
}

/// Wire shape of a filter request.
///
/// All fields are optional and default to the match-everything value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterRequest {
    pub text_contains: Option<String>,
    pub verdict: Option<String>,
    pub source: Option<String>,
}
