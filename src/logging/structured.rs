//! Structured logging utilities.
//!
//! Provides context-aware logging with store_id, record_id, and job_id
//! included in every log message.

use std::fmt;

/// Logging context naming the store, record, and job a line concerns.
///
/// Store-scoped operations start from [`LogContext::new`]; registry
/// operations that have no store at hand start from [`LogContext::for_job`].
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    pub store_id: Option<String>,
    pub record_id: Option<u64>,
    pub job_id: Option<String>,
}

impl LogContext {
    pub fn new(store_id: &str) -> Self {
        Self {
            store_id: Some(store_id.to_string()),
            ..Default::default()
        }
    }

    pub fn for_job(job_id: &str) -> Self {
        Self {
            job_id: Some(job_id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_record(&self, record_id: u64) -> Self {
        Self {
            record_id: Some(record_id),
            ..self.clone()
        }
    }

    pub fn with_job(&self, job_id: &str) -> Self {
        Self {
            job_id: Some(job_id.to_string()),
            ..self.clone()
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(store_id) = &self.store_id {
            parts.push(format!("[store={}]", store_id));
        }
        if let Some(record_id) = self.record_id {
            parts.push(format!("[record={}]", record_id));
        }
        if let Some(job_id) = &self.job_id {
            parts.push(format!("[job={}]", job_id));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Log an info message with context.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::info!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!($(concat!(stringify!($key), "={:?} "), $value),*)
        );
    };
}

/// Log a warning message with context.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::warn!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!($(concat!(stringify!($key), "={:?} "), $value),*)
        );
    };
}

/// Log an error message with context.
#[macro_export]
macro_rules! log_error {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::error!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!($(concat!(stringify!($key), "={:?} "), $value),*)
        );
    };
}

/// Log a debug message with context.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        log::debug!(
            "{} {} {}",
            $ctx,
            $event,
            format_args!($(concat!(stringify!($key), "={:?} "), $value),*)
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("store-123");
        assert_eq!(format!("{}", ctx), "[store=store-123]");

        let ctx_with_record = ctx.with_record(42);
        assert_eq!(
            format!("{}", ctx_with_record),
            "[store=store-123] [record=42]"
        );

        let ctx_with_job = ctx.with_job("report-456");
        assert_eq!(
            format!("{}", ctx_with_job),
            "[store=store-123] [job=report-456]"
        );
    }

    #[test]
    fn test_job_only_context() {
        let ctx = LogContext::for_job("report-789");
        assert_eq!(format!("{}", ctx), "[job=report-789]");
    }

    #[test]
    fn test_context_macros_expand() {
        let ctx = LogContext::new("store-123");
        crate::log_info!(ctx, "TEST_EVENT", count = 3);
        crate::log_debug!(ctx, "TEST_EVENT", detail = "fine");
    }
}
