//! Repository for the `campaigns` table.

use sqlx::PgPool;
use reachout_core::status::CampaignStatus;
use reachout_core::types::{DbId, Timestamp};

use crate::models::campaign::Campaign;

/// Column list for `campaigns` queries.
const COLUMNS: &str = "id, campaign_name, notification_type, city_filter, \
    status, scheduled_at, created_at, updated_at";

/// Provides CRUD operations and status transitions for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Create a new DRAFT campaign.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        notification_type: &str,
        city_filter: Option<&str>,
    ) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns (campaign_name, notification_type, city_filter) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(name)
            .bind(notification_type)
            .bind(city_filter)
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all campaigns, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns ORDER BY created_at DESC");
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    /// Update name and/or city filter, guarded to DRAFT status.
    ///
    /// Returns `None` when the campaign exists but is no longer DRAFT,
    /// so the caller can distinguish the conflict from a missing row.
    pub async fn update_if_draft(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        city_filter: Option<&str>,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns \
             SET campaign_name = COALESCE($2, campaign_name), \
                 city_filter = COALESCE($3, city_filter), \
                 updated_at = NOW() \
             WHERE id = $1 AND status = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(name)
            .bind(city_filter)
            .bind(CampaignStatus::Draft.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Mark a campaign SCHEDULED and persist its scheduled send time.
    pub async fn mark_scheduled(
        pool: &PgPool,
        id: DbId,
        scheduled_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaigns \
             SET status = $2, scheduled_at = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(CampaignStatus::Scheduled.as_str())
        .bind(scheduled_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a campaign SENT. Idempotent: the dispatch job re-applies this
    /// on redelivery without error.
    pub async fn mark_sent<'e, E: sqlx::PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaigns SET status = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(CampaignStatus::Sent.as_str())
        .execute(executor)
        .await?;
        Ok(())
    }
}
