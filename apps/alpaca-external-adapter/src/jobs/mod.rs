//! Job request/response contract shared by all adapter operations.
//!
//! Every operation accepts a `{ id, data }` envelope and returns an HTTP
//! status plus either its result or the fixed error envelope. Success
//! mirrors the upstream status; any failure between validation and
//! response interpretation becomes `(500, envelope)`.

pub mod quotes;
pub mod trade;

use std::future::Future;

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Job run ID used when the inbound request carries no `id`.
pub const DEFAULT_JOB_RUN_ID: i64 = 1;

/// Inbound job envelope.
///
/// The payload is defaulted when absent so a missing `data` object
/// degrades into per-field validation errors rather than a rejection
/// with a different shape.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest<D: Default> {
    /// Job run identifier, echoed in every reply.
    #[serde(default)]
    pub id: Option<i64>,
    /// Operation-specific payload.
    #[serde(default)]
    pub data: D,
}

impl<D: Default> JobRequest<D> {
    /// The job run ID, defaulting when the request carries none.
    pub fn job_run_id(&self) -> i64 {
        self.id.unwrap_or(DEFAULT_JOB_RUN_ID)
    }
}

/// Reply from a job operation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JobReply<T> {
    /// The operation result; the upstream HTTP status is mirrored.
    Success(T),
    /// The error envelope; the HTTP status is fixed at 500.
    Errored(JobError),
}

/// Fixed error envelope returned for any job failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobError {
    /// Job run identifier.
    pub job_run_id: i64,
    /// Always `errored`.
    pub status: &'static str,
    /// Always `AdapterError`.
    pub error: &'static str,
    /// Human-readable failure message.
    pub message: String,
    /// Always 500.
    pub status_code: u16,
}

impl JobError {
    /// Build the envelope for a failed job run.
    #[must_use]
    pub fn new(job_run_id: i64, source: &AdapterError) -> Self {
        Self {
            job_run_id,
            status: "errored",
            error: "AdapterError",
            message: source.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        }
    }
}

/// Run one job attempt, recovering any failure into the error envelope.
pub(crate) async fn run<T, F>(job_run_id: i64, attempt: F) -> (StatusCode, JobReply<T>)
where
    F: Future<Output = Result<(StatusCode, T), AdapterError>>,
{
    match attempt.await {
        Ok((status, result)) => (status, JobReply::Success(result)),
        Err(err) => {
            tracing::warn!(job_run_id, error = %err, "Job run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                JobReply::Errored(JobError::new(job_run_id, &err)),
            )
        }
    }
}

/// A required string field: present and non-empty.
pub(crate) fn require_str(value: Option<String>, field: &str) -> Result<String, AdapterError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(AdapterError::missing(field)),
    }
}

/// A required quantity: present and non-zero.
pub(crate) fn require_qty(value: Option<Decimal>, field: &str) -> Result<Decimal, AdapterError> {
    match value {
        Some(q) if !q.is_zero() => Ok(q),
        _ => Err(AdapterError::missing(field)),
    }
}
