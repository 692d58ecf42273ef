//! Repository for the `newsletter_subscriptions` table.

use sqlx::PgPool;
use reachout_core::types::DbId;

use crate::models::newsletter::NewsletterSubscription;

/// Column list for `newsletter_subscriptions` queries.
const COLUMNS: &str =
    "id, newsletter_id, user_id, email, sms, push, created_at, updated_at";

/// Provides subscription management for newsletters.
pub struct NewsletterSubscriptionRepo;

impl NewsletterSubscriptionRepo {
    /// Subscribe a user with the default flags (email on, sms/push off).
    ///
    /// Re-subscribing an already subscribed user is a no-op returning the
    /// existing row.
    pub async fn subscribe(
        pool: &PgPool,
        newsletter_id: DbId,
        user_id: DbId,
    ) -> Result<NewsletterSubscription, sqlx::Error> {
        let query = format!(
            "INSERT INTO newsletter_subscriptions (newsletter_id, user_id) \
             VALUES ($1, $2) \
             ON CONFLICT (newsletter_id, user_id) DO UPDATE SET \
                updated_at = newsletter_subscriptions.updated_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .bind(newsletter_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Update a subscription's channel flags. Omitted flags are kept.
    pub async fn update_flags(
        pool: &PgPool,
        newsletter_id: DbId,
        user_id: DbId,
        email: Option<bool>,
        sms: Option<bool>,
        push: Option<bool>,
    ) -> Result<Option<NewsletterSubscription>, sqlx::Error> {
        let query = format!(
            "UPDATE newsletter_subscriptions \
             SET email = COALESCE($3, email), \
                 sms = COALESCE($4, sms), \
                 push = COALESCE($5, push), \
                 updated_at = NOW() \
             WHERE newsletter_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .bind(newsletter_id)
            .bind(user_id)
            .bind(email)
            .bind(sms)
            .bind(push)
            .fetch_optional(pool)
            .await
    }

    /// List every subscription for a newsletter, regardless of flags.
    ///
    /// Channel filtering happens at dispatch time, not here.
    pub async fn list_for_newsletter(
        pool: &PgPool,
        newsletter_id: DbId,
    ) -> Result<Vec<NewsletterSubscription>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM newsletter_subscriptions \
             WHERE newsletter_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .bind(newsletter_id)
            .fetch_all(pool)
            .await
    }
}
