//! The dispatch worker: claims eligible jobs and runs them through an
//! executor.
//!
//! Constructed once during process initialization with injected pool and
//! executor dependencies, and driven by an explicit [`run`] call — no
//! import-time side effects. Shutdown is cooperative via
//! [`CancellationToken`].

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use reachout_db::DbPool;

use crate::job::DispatchJob;
use crate::model::QueueJob;
use crate::repo::QueueJobRepo;

/// Executor-side error type: anything the job body can fail with.
pub type ExecutorError = Box<dyn std::error::Error + Send + Sync>;

/// A job body. Implementations must be idempotent: the queue is
/// at-least-once and a job can be delivered again after a failure.
#[async_trait::async_trait]
pub trait JobExecutor: Send + Sync {
    async fn execute(&self, job: &DispatchJob) -> Result<(), ExecutorError>;
}

/// How often the worker polls for eligible jobs when the queue is idle.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Redelivery cap: after this many attempts a job is parked FAILED.
const MAX_ATTEMPTS: i32 = 5;

/// Polls the queue and executes dispatch jobs.
pub struct DispatchWorker {
    pool: DbPool,
    executor: Arc<dyn JobExecutor>,
    poll_interval: Duration,
}

impl DispatchWorker {
    /// Create a worker with the default poll interval.
    pub fn new(pool: DbPool, executor: Arc<dyn JobExecutor>) -> Self {
        Self {
            pool,
            executor,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the idle poll interval (tests use a short one).
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Run the claim/execute loop until `cancel` fires.
    ///
    /// Eligible jobs are drained back-to-back; when the queue is empty the
    /// worker sleeps for the poll interval. Claim errors are logged and
    /// retried after a poll interval rather than crashing the loop.
    pub async fn run(self, cancel: CancellationToken) {
        tracing::info!("Dispatch worker started");
        loop {
            if cancel.is_cancelled() {
                break;
            }

            match QueueJobRepo::claim_next(&self.pool).await {
                Ok(Some(job)) => {
                    self.process(job).await;
                    // Keep draining without sleeping while work is available.
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to claim next dispatch job");
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
        tracing::info!("Dispatch worker stopped");
    }

    /// Execute one claimed job and record the outcome.
    async fn process(&self, job: QueueJob) {
        let payload: DispatchJob = match serde_json::from_value(job.payload.clone()) {
            Ok(p) => p,
            Err(e) => {
                // Unreadable payloads can never succeed; park immediately.
                tracing::error!(job_id = job.id, error = %e, "Unreadable job payload");
                let msg = format!("unreadable payload: {e}");
                if let Err(e) = QueueJobRepo::park_failed(&self.pool, job.id, &msg).await {
                    tracing::error!(job_id = job.id, error = %e, "Failed to park job");
                }
                return;
            }
        };

        tracing::debug!(job_id = job.id, job_type = job.job_type, "Executing dispatch job");

        match self.executor.execute(&payload).await {
            Ok(()) => {
                if let Err(e) = QueueJobRepo::complete(&self.pool, job.id).await {
                    // The work is committed; a lost ack only risks redelivery,
                    // which executors tolerate.
                    tracing::error!(job_id = job.id, error = %e, "Failed to mark job complete");
                }
            }
            Err(e) => {
                let msg = e.to_string();
                tracing::error!(
                    job_id = job.id,
                    job_type = job.job_type,
                    attempts = job.attempts,
                    error = %msg,
                    "Dispatch job failed"
                );
                let result = if job.attempts >= MAX_ATTEMPTS {
                    QueueJobRepo::park_failed(&self.pool, job.id, &msg).await
                } else {
                    QueueJobRepo::release(&self.pool, job.id, &msg).await
                };
                if let Err(e) = result {
                    tracing::error!(job_id = job.id, error = %e, "Failed to record job failure");
                }
            }
        }
    }
}
