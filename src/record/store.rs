//! In-memory record store.
//!
//! Holds moderation records in insertion order behind a single lock.
//! Insertion order is the canonical ordering consumed by the query engine
//! and the report aggregator, so all mutations serialize on the write
//! lock; reads copy a point-in-time snapshot under the read lock and
//! release it before returning.

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::logging::structured::LogContext;
use crate::record::model::{validate_confidence, ModerationRecord, RecordDraft, Verdict};

/// Mutable state guarded by the store lock.
///
/// `next_id` only ever increases, so ids are never reassigned even after
/// a delete.
#[derive(Debug)]
struct StoreInner {
    records: Vec<ModerationRecord>,
    next_id: u64,
}

/// In-memory moderation record store.
pub struct RecordStore {
    store_id: String,
    inner: RwLock<StoreInner>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        let store_id = format!("store-{}", &Uuid::new_v4().to_string()[..8]);
        log::debug!("{} STORE_CREATED", LogContext::new(&store_id));
        Self {
            store_id,
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.store_id)
    }

    /// Insert a new record, assigning a fresh id.
    ///
    /// Rejects drafts with empty content or confidence outside [0, 100];
    /// the store is unchanged on rejection.
    pub fn insert(&self, draft: RecordDraft) -> Result<u64> {
        if let Err(e) = validate_draft(&draft) {
            log::warn!("{} RECORD_REJECTED error={}", self.log_context(), e);
            return Err(e);
        }

        let verdict = draft.verdict;
        let source = draft.source.clone();

        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(ModerationRecord {
            id,
            content: draft.content,
            verdict: draft.verdict,
            reason: draft.reason,
            confidence: draft.confidence,
            source: draft.source,
            platform: draft.platform,
            observed_at: Utc::now(),
        });
        drop(inner);

        log::info!(
            "{} RECORD_INSERTED verdict={} source={}",
            self.log_context().with_record(id),
            verdict,
            source
        );
        Ok(id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Result<ModerationRecord> {
        let inner = self.inner.read();
        inner
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    /// Snapshot of every record, in insertion order.
    pub fn list_all(&self) -> Vec<ModerationRecord> {
        self.inner.read().records.clone()
    }

    /// The newest `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ModerationRecord> {
        let inner = self.inner.read();
        inner.records.iter().rev().take(limit).cloned().collect()
    }

    /// Remove a record. Its id is never reassigned.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write();
        match inner.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                inner.records.remove(idx);
                drop(inner);
                log::info!("{} RECORD_DELETED", self.log_context().with_record(id));
                Ok(())
            }
            None => {
                log::warn!("{} RECORD_NOT_FOUND op=delete", self.log_context().with_record(id));
                Err(Error::NotFound(id))
            }
        }
    }

    /// Re-classify a record with a new verdict, reason, and confidence.
    ///
    /// The only way a verdict changes after insert. `id` and `observed_at`
    /// stay untouched; the record is unchanged if confidence fails
    /// validation.
    pub fn reclassify(
        &self,
        id: u64,
        verdict: Verdict,
        reason: &str,
        confidence: f64,
    ) -> Result<()> {
        validate_confidence(confidence)?;

        let previous = {
            let mut inner = self.inner.write();
            match inner.records.iter_mut().find(|r| r.id == id) {
                Some(record) => {
                    let previous = record.verdict;
                    record.verdict = verdict;
                    record.reason = reason.to_string();
                    record.confidence = confidence;
                    Some(previous)
                }
                None => None,
            }
        };

        match previous {
            Some(previous) => {
                log::info!(
                    "{} RECORD_RECLASSIFIED from={} to={}",
                    self.log_context().with_record(id),
                    previous,
                    verdict
                );
                Ok(())
            }
            None => {
                log::warn!(
                    "{} RECORD_NOT_FOUND op=reclassify",
                    self.log_context().with_record(id)
                );
                Err(Error::NotFound(id))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

fn validate_draft(draft: &RecordDraft) -> Result<()> {
    if draft.content.trim().is_empty() {
        return Err(Error::Validation {
            field: "content",
            message: "content must not be empty".to_string(),
        });
    }
    validate_confidence(draft.confidence)
}
