//! Durable, delay-capable dispatch job queue.
//!
//! Building blocks:
//!
//! - [`DispatchJob`] — tagged-union payload, one variant per job kind.
//! - [`QueueJobRepo`] — persistence over the `queue_jobs` table: enqueue
//!   with delay, `FOR UPDATE SKIP LOCKED` claiming, completion/release.
//! - [`DispatchWorker`] — poll loop executing claimed jobs through a
//!   [`JobExecutor`], with at-least-once redelivery on failure and
//!   `CancellationToken` shutdown.
//!
//! The queue guarantees durability (enqueued jobs survive restarts) and
//! eligibility-time ordering; executors must be idempotent because a job
//! can be delivered more than once.

pub mod job;
pub mod model;
pub mod repo;
pub mod worker;

pub use job::DispatchJob;
pub use model::{QueueJob, QueueJobStatus};
pub use repo::QueueJobRepo;
pub use worker::{DispatchWorker, JobExecutor};
