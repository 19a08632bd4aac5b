//! Report job lifecycle.
//!
//! A report job is a tracked request to compute an aggregate summary.
//! Jobs move Pending -> Generating -> {Completed, Failed}; the terminal
//! states admit no further transitions, and a failure isolates to the
//! single job it belongs to.

use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::logging::structured::LogContext;
use crate::record::model::ModerationRecord;
use crate::record::store::RecordStore;
use crate::report::summary::{summarize, ReportSummary};

/// Lifecycle state of a report job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Generating,
    Completed,
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Generating => "generating",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Completed | ReportStatus::Failed)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report template taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Weekly,
    Monthly,
    Quarterly,
    Custom,
}

/// A tracked request to compute an aggregate summary.
///
/// `metrics` and `generated_at` are set together, atomically with the
/// flip to Completed; both stay absent in every other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportJob {
    pub job_id: String,
    pub title: String,
    pub period: String,
    pub kind: ReportKind,
    pub status: ReportStatus,
    pub metrics: Option<ReportSummary>,
    pub requested_at: DateTime<Utc>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Source of record snapshots for report aggregation.
///
/// [`RecordStore`] is the in-memory implementation. A real backing store
/// would implement the same contract behind its transactional boundary.
pub trait RecordSource {
    fn snapshot(&self) -> Result<Vec<ModerationRecord>>;
}

impl RecordSource for RecordStore {
    /// Holds the store's read lock for the duration of the copy only.
    fn snapshot(&self) -> Result<Vec<ModerationRecord>> {
        Ok(self.list_all())
    }
}

/// Registry of report jobs, in creation order.
#[derive(Debug, Default)]
pub struct ReportRegistry {
    jobs: RwLock<Vec<ReportJob>>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a job in Pending state.
    pub fn create_job(&self, title: &str, period: &str, kind: ReportKind) -> ReportJob {
        let job = ReportJob {
            job_id: format!("report-{}", &Uuid::new_v4().to_string()[..8]),
            title: title.to_string(),
            period: period.to_string(),
            kind,
            status: ReportStatus::Pending,
            metrics: None,
            requested_at: Utc::now(),
            generated_at: None,
        };

        log::info!(
            "{} JOB_CREATED kind={:?} title={:?}",
            LogContext::for_job(&job.job_id),
            kind,
            title
        );

        self.jobs.write().push(job.clone());
        job
    }

    /// Look up a job by id.
    pub fn get_job(&self, job_id: &str) -> Result<ReportJob> {
        self.jobs
            .read()
            .iter()
            .find(|j| j.job_id == job_id)
            .cloned()
            .ok_or_else(|| Error::JobNotFound(job_id.to_string()))
    }

    /// Every job, in creation order.
    pub fn list_jobs(&self) -> Vec<ReportJob> {
        self.jobs.read().clone()
    }

    /// Run a Pending job against `source`.
    ///
    /// The Pending -> Generating flip happens under the registry write
    /// lock, so exactly one caller can run a given job: a racing caller
    /// observes a non-Pending status and gets `InvalidState` with no
    /// mutation. The snapshot is taken outside the registry lock; the
    /// source's own read lock covers only the copy, never the
    /// aggregation. A snapshot failure lands the job in Failed with
    /// metrics absent; a job is never left in Generating.
    pub fn run_job<S: RecordSource>(&self, job_id: &str, source: &S) -> Result<ReportJob> {
        let ctx = LogContext::for_job(job_id);

        {
            let mut jobs = self.jobs.write();
            let job = jobs
                .iter_mut()
                .find(|j| j.job_id == job_id)
                .ok_or_else(|| Error::JobNotFound(job_id.to_string()))?;

            if job.status != ReportStatus::Pending {
                log::warn!("{} JOB_RUN_REJECTED status={}", ctx, job.status);
                return Err(Error::InvalidState {
                    job_id: job_id.to_string(),
                    status: job.status.to_string(),
                });
            }
            job.status = ReportStatus::Generating;
        }

        log::info!("{} JOB_RUN_START", ctx);

        match source.snapshot() {
            Ok(records) => {
                let metrics = summarize(&records);
                self.finish_job(job_id, |job| {
                    job.status = ReportStatus::Completed;
                    job.metrics = Some(metrics);
                    job.generated_at = Some(Utc::now());
                })
                .map(|job| {
                    log::info!(
                        "{} JOB_COMPLETED total_count={} accuracy={}",
                        ctx,
                        metrics.total_count,
                        metrics.accuracy
                    );
                    job
                })
            }
            Err(e) => {
                log::error!("{} JOB_FAILED error={}", ctx, e);
                self.finish_job(job_id, |job| {
                    job.status = ReportStatus::Failed;
                })
            }
        }
    }

    /// Apply a terminal transition to a Generating job and return the
    /// updated job.
    fn finish_job<F>(&self, job_id: &str, apply: F) -> Result<ReportJob>
    where
        F: FnOnce(&mut ReportJob),
    {
        let mut jobs = self.jobs.write();
        match jobs.iter_mut().find(|j| j.job_id == job_id) {
            Some(job) => {
                apply(job);
                Ok(job.clone())
            }
            // Jobs are never removed, so a Generating job cannot vanish;
            // kept as an error path rather than a panic.
            None => Err(Error::JobNotFound(job_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::model::{RecordDraft, Verdict};

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn snapshot(&self) -> Result<Vec<ModerationRecord>> {
            Err(Error::Validation {
                field: "snapshot",
                message: "backing store unavailable".to_string(),
            })
        }
    }

    fn seeded_store() -> RecordStore {
        let store = RecordStore::new();
        for (content, verdict) in [
            ("a", Verdict::True),
            ("b", Verdict::True),
            ("c", Verdict::False),
            ("d", Verdict::Doubtful),
        ] {
            store
                .insert(RecordDraft {
                    content: content.to_string(),
                    verdict,
                    reason: "automated analysis".to_string(),
                    confidence: 90.0,
                    source: "social-media".to_string(),
                    platform: "Twitter".to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_create_job_starts_pending() {
        let registry = ReportRegistry::new();
        let job = registry.create_job("Weekly Misinformation Analysis", "Jan 8-14", ReportKind::Weekly);

        assert_eq!(job.status, ReportStatus::Pending);
        assert!(job.metrics.is_none());
        assert!(job.generated_at.is_none());
        assert_eq!(registry.get_job(&job.job_id).unwrap(), job);
    }

    #[test]
    fn test_run_job_completes_with_metrics() {
        let registry = ReportRegistry::new();
        let store = seeded_store();
        let job = registry.create_job("Weekly Summary", "Jan 8-14", ReportKind::Weekly);

        let done = registry.run_job(&job.job_id, &store).unwrap();
        assert_eq!(done.status, ReportStatus::Completed);
        assert!(done.generated_at.is_some());

        let metrics = done.metrics.unwrap();
        assert_eq!(metrics.total_count, 4);
        assert_eq!(metrics.accuracy, 75.0);
        assert_eq!(metrics.false_positive_rate, 25.0);

        // The registry's stored copy matches the returned job.
        assert_eq!(registry.get_job(&job.job_id).unwrap().status, ReportStatus::Completed);
    }

    #[test]
    fn test_run_job_twice_is_invalid_state() {
        let registry = ReportRegistry::new();
        let store = seeded_store();
        let job = registry.create_job("Weekly Summary", "Jan 8-14", ReportKind::Weekly);

        let done = registry.run_job(&job.job_id, &store).unwrap();
        let err = registry.run_job(&job.job_id, &store).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));

        // No mutation from the rejected call.
        assert_eq!(registry.get_job(&job.job_id).unwrap(), done);
    }

    #[test]
    fn test_run_unknown_job() {
        let registry = ReportRegistry::new();
        let store = RecordStore::new();
        let err = registry.run_job("report-missing", &store).unwrap_err();
        assert_eq!(err, Error::JobNotFound("report-missing".to_string()));
    }

    #[test]
    fn test_snapshot_failure_fails_the_job() {
        let registry = ReportRegistry::new();
        let job = registry.create_job("Custom Analysis", "Q4", ReportKind::Custom);

        let failed = registry.run_job(&job.job_id, &FailingSource).unwrap();
        assert_eq!(failed.status, ReportStatus::Failed);
        assert!(failed.metrics.is_none());
        assert!(failed.generated_at.is_none());

        // Failed is terminal.
        let store = RecordStore::new();
        let err = registry.run_job(&job.job_id, &store).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
    }

    #[test]
    fn test_failure_does_not_affect_other_jobs() {
        let registry = ReportRegistry::new();
        let store = seeded_store();
        let doomed = registry.create_job("Doomed", "Q4", ReportKind::Custom);
        let healthy = registry.create_job("Healthy", "Q4", ReportKind::Quarterly);

        registry.run_job(&doomed.job_id, &FailingSource).unwrap();
        let done = registry.run_job(&healthy.job_id, &store).unwrap();
        assert_eq!(done.status, ReportStatus::Completed);
    }

    #[test]
    fn test_list_jobs_in_creation_order() {
        let registry = ReportRegistry::new();
        let first = registry.create_job("First", "W1", ReportKind::Weekly);
        let second = registry.create_job("Second", "W2", ReportKind::Weekly);

        let ids: Vec<String> = registry.list_jobs().into_iter().map(|j| j.job_id).collect();
        assert_eq!(ids, vec![first.job_id, second.job_id]);
    }

    #[test]
    fn test_terminal_states() {
        assert!(ReportStatus::Completed.is_terminal());
        assert!(ReportStatus::Failed.is_terminal());
        assert!(!ReportStatus::Pending.is_terminal());
        assert!(!ReportStatus::Generating.is_terminal());
    }
}
