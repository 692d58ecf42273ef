//! Repository for the `queue_jobs` table.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::job::DispatchJob;
use crate::model::{QueueJob, QueueJobStatus};

/// Column list for `queue_jobs` queries.
const COLUMNS: &str = "id, job_type, payload, status, run_at, attempts, \
    last_error, claimed_at, completed_at, created_at, updated_at";

/// Visibility timeout for claimed jobs, in seconds.
///
/// A RUNNING row whose `claimed_at` is older than this is treated as
/// abandoned (its worker died before acking) and becomes claimable again.
const STALE_CLAIM_SECS: f64 = 300.0;

/// Provides durable enqueue/claim/complete operations for dispatch jobs.
pub struct QueueJobRepo;

impl QueueJobRepo {
    /// Persist a job, eligible for execution no earlier than `now + delay`.
    ///
    /// A zero delay means eligible immediately.
    pub async fn enqueue(
        pool: &PgPool,
        job: &DispatchJob,
        delay: Duration,
    ) -> Result<QueueJob, sqlx::Error> {
        let payload =
            serde_json::to_value(job).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let run_at = Utc::now() + delay;
        let query = format!(
            "INSERT INTO queue_jobs (job_type, payload, run_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueJob>(&query)
            .bind(job.job_type())
            .bind(&payload)
            .bind(run_at)
            .fetch_one(pool)
            .await
    }

    /// Atomically claim the next eligible job.
    ///
    /// Uses `FOR UPDATE SKIP LOCKED` so concurrent workers never claim the
    /// same row. The attempt counter is incremented at claim time.
    /// Eligibility order is by `run_at`, then insertion order.
    ///
    /// Besides due PENDING rows, this also reclaims RUNNING rows whose
    /// claim is older than [`STALE_CLAIM_SECS`]: a worker that crashed
    /// after claiming never acks, and its job must not be stranded.
    /// Reclaims count as a fresh attempt toward the cap.
    pub async fn claim_next(pool: &PgPool) -> Result<Option<QueueJob>, sqlx::Error> {
        let query = format!(
            "UPDATE queue_jobs \
             SET status = $1, claimed_at = NOW(), attempts = attempts + 1, \
                 updated_at = NOW() \
             WHERE id = ( \
                 SELECT id FROM queue_jobs \
                 WHERE (status = $2 AND run_at <= NOW()) \
                    OR (status = $1 AND claimed_at < NOW() - make_interval(secs => $3)) \
                 ORDER BY run_at ASC, id ASC \
                 LIMIT 1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueueJob>(&query)
            .bind(QueueJobStatus::Running.as_str())
            .bind(QueueJobStatus::Pending.as_str())
            .bind(STALE_CLAIM_SECS)
            .fetch_optional(pool)
            .await
    }

    /// Mark a job successfully executed.
    pub async fn complete(pool: &PgPool, job_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE queue_jobs \
             SET status = $2, completed_at = NOW(), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(job_id)
        .bind(QueueJobStatus::Completed.as_str())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Release a failed job back to PENDING for redelivery.
    pub async fn release(pool: &PgPool, job_id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE queue_jobs \
             SET status = $2, last_error = $3, claimed_at = NULL, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(job_id)
        .bind(QueueJobStatus::Pending.as_str())
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Park a job FAILED once the attempt cap is exhausted (or the payload
    /// is unreadable). No further redelivery happens.
    pub async fn park_failed(pool: &PgPool, job_id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE queue_jobs \
             SET status = $2, last_error = $3, completed_at = NOW(), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(job_id)
        .bind(QueueJobStatus::Failed.as_str())
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a job by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QueueJob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queue_jobs WHERE id = $1");
        sqlx::query_as::<_, QueueJob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
