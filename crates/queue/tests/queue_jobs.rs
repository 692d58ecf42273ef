//! Integration tests for the durable dispatch queue.
//!
//! - Enqueue persists a claimable row (durability across restarts is the
//!   row itself; nothing lives in memory)
//! - Delayed jobs stay invisible until their run_at
//! - Claim increments attempts and is exclusive per row
//! - Failure handling: release for redelivery, park at the attempt cap

use chrono::Duration;
use sqlx::PgPool;
use reachout_queue::{DispatchJob, QueueJobRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enqueue_then_claim_immediately(pool: PgPool) {
    let job = DispatchJob::SendCampaign { campaign_id: 11 };
    let row = QueueJobRepo::enqueue(&pool, &job, Duration::zero())
        .await
        .unwrap();
    assert_eq!(row.job_type, "sendCampaign");
    assert_eq!(row.status, "PENDING");
    assert_eq!(row.attempts, 0);

    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(claimed.id, row.id);
    assert_eq!(claimed.status, "RUNNING");
    assert_eq!(claimed.attempts, 1);
    assert!(claimed.claimed_at.is_some());

    let parsed: DispatchJob = serde_json::from_value(claimed.payload).unwrap();
    assert_eq!(parsed, job);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delayed_job_not_claimable_before_run_at(pool: PgPool) {
    QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::PublishNewsletter { newsletter_id: 5 },
        Duration::hours(1),
    )
    .await
    .unwrap();

    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap();
    assert!(claimed.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claim_order_is_run_at_then_insertion(pool: PgPool) {
    // Insert out of eligibility order: the later job first.
    let late = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 2 },
        Duration::zero(),
    )
    .await
    .unwrap();
    let early = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 1 },
        Duration::seconds(-60),
    )
    .await
    .unwrap();

    let first = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(first.id, early.id);
    let second = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(second.id, late.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claimed_job_is_invisible_to_other_claims(pool: PgPool) {
    QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 9 },
        Duration::zero(),
    )
    .await
    .unwrap();

    let first = QueueJobRepo::claim_next(&pool).await.unwrap();
    assert!(first.is_some());
    let second = QueueJobRepo::claim_next(&pool).await.unwrap();
    assert!(second.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stale_claim_is_redelivered_after_visibility_timeout(pool: PgPool) {
    // A worker claims the job and dies before acking: the row stays
    // RUNNING with a claimed_at timestamp and nothing releases it.
    let row = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 7 },
        Duration::zero(),
    )
    .await
    .unwrap();
    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(claimed.id, row.id);

    // Within the visibility timeout the claim is still honored.
    let next = QueueJobRepo::claim_next(&pool).await.unwrap();
    assert!(next.is_none());

    // Age the claim past the timeout instead of waiting it out.
    sqlx::query(
        "UPDATE queue_jobs SET claimed_at = NOW() - INTERVAL '10 minutes' WHERE id = $1",
    )
    .bind(row.id)
    .execute(&pool)
    .await
    .unwrap();

    let reclaimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(reclaimed.id, row.id);
    assert_eq!(reclaimed.status, "RUNNING");
    assert_eq!(reclaimed.attempts, 2);
    assert!(reclaimed.claimed_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_complete_marks_job_done(pool: PgPool) {
    let row = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 3 },
        Duration::zero(),
    )
    .await
    .unwrap();
    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    QueueJobRepo::complete(&pool, claimed.id).await.unwrap();

    let done = QueueJobRepo::find_by_id(&pool, row.id).await.unwrap().unwrap();
    assert_eq!(done.status, "COMPLETED");
    assert!(done.completed_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_release_returns_job_for_redelivery(pool: PgPool) {
    let row = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 4 },
        Duration::zero(),
    )
    .await
    .unwrap();

    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    QueueJobRepo::release(&pool, claimed.id, "transient database error")
        .await
        .unwrap();

    let pending = QueueJobRepo::find_by_id(&pool, row.id).await.unwrap().unwrap();
    assert_eq!(pending.status, "PENDING");
    assert_eq!(pending.last_error.as_deref(), Some("transient database error"));
    assert!(pending.claimed_at.is_none());

    // Attempt counter survives the release; redelivery increments again.
    let reclaimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    assert_eq!(reclaimed.id, row.id);
    assert_eq!(reclaimed.attempts, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_park_failed_stops_redelivery(pool: PgPool) {
    let row = QueueJobRepo::enqueue(
        &pool,
        &DispatchJob::SendCampaign { campaign_id: 6 },
        Duration::zero(),
    )
    .await
    .unwrap();
    let claimed = QueueJobRepo::claim_next(&pool).await.unwrap().unwrap();
    QueueJobRepo::park_failed(&pool, claimed.id, "attempt cap exhausted")
        .await
        .unwrap();

    let parked = QueueJobRepo::find_by_id(&pool, row.id).await.unwrap().unwrap();
    assert_eq!(parked.status, "FAILED");
    assert_eq!(parked.last_error.as_deref(), Some("attempt cap exhausted"));

    let next = QueueJobRepo::claim_next(&pool).await.unwrap();
    assert!(next.is_none());
}
