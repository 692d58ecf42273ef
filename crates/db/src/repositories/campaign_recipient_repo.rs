//! Repository for the `campaign_recipients` snapshot table.

use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::models::campaign::RecipientWithUser;

/// Provides snapshot insertion and recipient listing for campaigns.
pub struct CampaignRecipientRepo;

impl CampaignRecipientRepo {
    /// Insert recipient snapshot rows, skipping duplicates.
    ///
    /// `ON CONFLICT DO NOTHING` on the (campaign_id, user_id) unique pair
    /// makes the snapshot idempotent under at-least-once redelivery.
    /// Returns the number of rows actually inserted.
    pub async fn insert_snapshot<'e, E: sqlx::PgExecutor<'e>>(
        executor: E,
        campaign_id: DbId,
        user_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if user_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "INSERT INTO campaign_recipients (campaign_id, user_id) \
             SELECT $1, user_id FROM UNNEST($2::BIGINT[]) AS t(user_id) \
             ON CONFLICT ON CONSTRAINT uq_campaign_recipients_campaign_user \
             DO NOTHING",
        )
        .bind(campaign_id)
        .bind(user_ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count snapshot rows for a campaign.
    pub async fn count(pool: &PgPool, campaign_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM campaign_recipients WHERE campaign_id = $1")
                .bind(campaign_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// List the frozen snapshot joined to user contact fields.
    pub async fn list_with_users(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<RecipientWithUser>, sqlx::Error> {
        sqlx::query_as::<_, RecipientWithUser>(
            "SELECT cr.user_id, u.name, u.email, u.phone, u.city, \
                    cr.created_at AS captured_at \
             FROM campaign_recipients cr \
             JOIN users u ON u.id = cr.user_id \
             WHERE cr.campaign_id = $1 \
             ORDER BY cr.id",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
