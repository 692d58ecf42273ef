//! Recipient resolution: who is currently eligible for a campaign or
//! newsletter. Pure reads; recomputed on demand.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use reachout_core::category::NotificationType;
use reachout_core::types::DbId;
use reachout_db::models::newsletter::NewsletterSubscription;
use reachout_db::repositories::NewsletterSubscriptionRepo;

/// A currently-eligible user with contact fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EligibleUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

/// Resolve the current eligible-user set for a campaign.
///
/// Eligibility requires all of:
/// - the user is active;
/// - the city matches, when a filter is set;
/// - an OFFERS preference row exists with at least one channel enabled.
///
/// The existence requirement intentionally excludes users with no
/// preference row, even though dispatch fan-out treats an absent row as
/// all channels enabled. The asymmetry reproduces the targeting query
/// this engine replaces; see DESIGN.md before changing either side.
pub async fn resolve_campaign_recipients(
    pool: &PgPool,
    city_filter: Option<&str>,
) -> Result<Vec<EligibleUser>, sqlx::Error> {
    sqlx::query_as::<_, EligibleUser>(
        "SELECT u.id, u.name, u.email, u.phone, u.city \
         FROM users u \
         WHERE u.is_active = true \
           AND ($1::TEXT IS NULL OR u.city = $1) \
           AND EXISTS ( \
               SELECT 1 FROM notification_preferences p \
               WHERE p.user_id = u.id \
                 AND p.notification_type = $2 \
                 AND (p.email OR p.sms OR p.push)) \
         ORDER BY u.id",
    )
    .bind(city_filter)
    .bind(NotificationType::Offers.as_str())
    .fetch_all(pool)
    .await
}

/// Resolve the recipient set for a newsletter: every subscription row,
/// regardless of channel flags. Filtering to enabled channels happens at
/// dispatch time, not here.
pub async fn resolve_newsletter_recipients(
    pool: &PgPool,
    newsletter_id: DbId,
) -> Result<Vec<NewsletterSubscription>, sqlx::Error> {
    NewsletterSubscriptionRepo::list_for_newsletter(pool, newsletter_id).await
}
