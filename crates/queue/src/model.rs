//! Queue job row model and status values.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use reachout_core::types::{DbId, Timestamp};

/// Lifecycle of a queued job.
///
/// `PENDING -> RUNNING -> COMPLETED`, or back to `PENDING` on failure
/// until the attempt cap parks the job `FAILED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueJobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl QueueJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueJobStatus::Pending => "PENDING",
            QueueJobStatus::Running => "RUNNING",
            QueueJobStatus::Completed => "COMPLETED",
            QueueJobStatus::Failed => "FAILED",
        }
    }
}

/// A row from the `queue_jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueueJob {
    pub id: DbId,
    pub job_type: String,
    pub payload: serde_json::Value,
    pub status: String,
    pub run_at: Timestamp,
    pub attempts: i32,
    pub last_error: Option<String>,
    pub claimed_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
