//! Repository for the `notification_preferences` table.

use sqlx::PgPool;
use reachout_core::preference::ChannelFlags;
use reachout_core::types::DbId;

use crate::models::preference::NotificationPreference;

/// Column list for `notification_preferences` queries.
const COLUMNS: &str =
    "id, user_id, notification_type, email, sms, push, created_at, updated_at";

/// Provides read and upsert operations for notification preferences.
///
/// Rows are never deleted; once a user has touched a category the row
/// exists for good.
pub struct NotificationPreferenceRepo;

impl NotificationPreferenceRepo {
    /// List all preference rows for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<NotificationPreference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_preferences \
             WHERE user_id = $1 \
             ORDER BY notification_type"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Get the preference row for a (user, category) pair, if present.
    ///
    /// Callers must apply the default-all-true fallback via
    /// [`effective_channels`](reachout_core::preference::effective_channels)
    /// when this returns `None`.
    pub async fn get(
        pool: &PgPool,
        user_id: DbId,
        notification_type: &str,
    ) -> Result<Option<NotificationPreference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notification_preferences \
             WHERE user_id = $1 AND notification_type = $2"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(user_id)
            .bind(notification_type)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update a preference row in a single round-trip.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        notification_type: &str,
        flags: ChannelFlags,
    ) -> Result<NotificationPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_preferences \
                (user_id, notification_type, email, sms, push) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (user_id, notification_type) DO UPDATE SET \
                email = EXCLUDED.email, \
                sms = EXCLUDED.sms, \
                push = EXCLUDED.push, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(user_id)
            .bind(notification_type)
            .bind(flags.email)
            .bind(flags.sms)
            .bind(flags.push)
            .fetch_one(pool)
            .await
    }
}
