//! Dispatch job bodies and the synchronous order-notification hook.
//!
//! All bodies are idempotent with respect to queue redelivery: the
//! recipient snapshot uses skip-duplicates and the SENT status write
//! re-applies cleanly. Log insertion is committed atomically with both,
//! so a retried job never leaves a partially-dispatched campaign.

use reachout_core::category::NotificationType;
use reachout_core::preference::effective_channels;
use reachout_core::types::DbId;
use reachout_db::models::notification_log::NewNotificationLog;
use reachout_db::repositories::{
    CampaignRecipientRepo, CampaignRepo, NewsletterRepo, NotificationLogRepo,
    NotificationPreferenceRepo,
};
use reachout_db::DbPool;
use reachout_queue::worker::ExecutorError;
use reachout_queue::{DispatchJob, JobExecutor};

use crate::resolver;

/// Executes dispatch jobs against the database.
pub struct DispatchExecutor {
    pool: DbPool,
}

impl DispatchExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Campaign job body.
    ///
    /// Re-resolves the *current* eligible set rather than reading the
    /// snapshot captured at send time; preferences changed in between are
    /// honored and the union of both resolutions lands in the snapshot.
    /// Channel fan-out reads each user's OFFERS preference fresh, with
    /// the absent-row default of all channels enabled.
    async fn dispatch_campaign(&self, campaign_id: DbId) -> Result<(), sqlx::Error> {
        let campaign = match CampaignRepo::find_by_id(&self.pool, campaign_id).await? {
            Some(c) => c,
            None => {
                tracing::warn!(campaign_id, "Campaign vanished before dispatch, skipping");
                return Ok(());
            }
        };

        let eligible =
            resolver::resolve_campaign_recipients(&self.pool, campaign.city_filter.as_deref())
                .await?;
        if eligible.is_empty() {
            tracing::info!(campaign_id, "No eligible recipients, nothing to dispatch");
            return Ok(());
        }

        let mut logs: Vec<NewNotificationLog> = Vec::new();
        for user in &eligible {
            let pref = NotificationPreferenceRepo::get(
                &self.pool,
                user.id,
                NotificationType::Offers.as_str(),
            )
            .await?;
            let flags = effective_channels(pref.map(|p| p.flags()));
            for channel in flags.enabled_channels() {
                logs.push(NewNotificationLog::campaign(user.id, campaign_id, channel));
            }
        }

        let user_ids: Vec<DbId> = eligible.iter().map(|u| u.id).collect();

        // Snapshot, logs, and the SENT flip commit together or not at all.
        let mut tx = self.pool.begin().await?;
        CampaignRecipientRepo::insert_snapshot(&mut *tx, campaign_id, &user_ids).await?;
        let written = NotificationLogRepo::insert_many(&mut *tx, &logs).await?;
        CampaignRepo::mark_sent(&mut *tx, campaign_id).await?;
        tx.commit().await?;

        tracing::info!(
            campaign_id,
            recipients = eligible.len(),
            log_rows = written,
            "Campaign dispatched"
        );
        Ok(())
    }

    /// Newsletter job body.
    ///
    /// A missing or deactivated newsletter terminates silently, as does an
    /// empty subscription list. Each subscription fans out across its own
    /// enabled channels.
    async fn dispatch_newsletter(&self, newsletter_id: DbId) -> Result<(), sqlx::Error> {
        let newsletter = match NewsletterRepo::find_by_id(&self.pool, newsletter_id).await? {
            Some(n) if n.is_active => n,
            Some(_) => {
                tracing::info!(newsletter_id, "Newsletter deactivated before dispatch");
                return Ok(());
            }
            None => {
                tracing::warn!(newsletter_id, "Newsletter vanished before dispatch");
                return Ok(());
            }
        };

        let subscriptions =
            resolver::resolve_newsletter_recipients(&self.pool, newsletter_id).await?;
        if subscriptions.is_empty() {
            tracing::info!(newsletter_id, "No subscriptions, nothing to dispatch");
            return Ok(());
        }

        let mut logs: Vec<NewNotificationLog> = Vec::new();
        for sub in &subscriptions {
            for channel in sub.flags().enabled_channels() {
                logs.push(NewNotificationLog::newsletter(
                    sub.user_id,
                    newsletter_id,
                    channel,
                ));
            }
        }

        let written = NotificationLogRepo::insert_many(&self.pool, &logs).await?;
        tracing::info!(
            newsletter_id = newsletter.id,
            subscriptions = subscriptions.len(),
            log_rows = written,
            "Newsletter dispatched"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl JobExecutor for DispatchExecutor {
    async fn execute(&self, job: &DispatchJob) -> Result<(), ExecutorError> {
        match job {
            DispatchJob::SendCampaign { campaign_id } => {
                self.dispatch_campaign(*campaign_id).await?
            }
            DispatchJob::PublishNewsletter { newsletter_id } => {
                self.dispatch_newsletter(*newsletter_id).await?
            }
        }
        Ok(())
    }
}

/// Synchronous order-notification hook.
///
/// Invoked by the order handlers on creation and every status change.
/// Reads the user's ORDER_UPDATES preference (absent row means all
/// channels enabled) and appends one log row per enabled channel.
/// Callers must catch and log errors without failing the order mutation.
pub async fn record_order_notification(
    pool: &DbPool,
    user_id: DbId,
    order_id: DbId,
) -> Result<u64, sqlx::Error> {
    let pref =
        NotificationPreferenceRepo::get(pool, user_id, NotificationType::OrderUpdates.as_str())
            .await?;
    let flags = effective_channels(pref.map(|p| p.flags()));

    let logs: Vec<NewNotificationLog> = flags
        .enabled_channels()
        .into_iter()
        .map(|channel| NewNotificationLog::order(user_id, order_id, channel))
        .collect();

    NotificationLogRepo::insert_many(pool, &logs).await
}
