//! Caller-facing dispatch operations: the campaign/newsletter state
//! machines and the send/publish entry points.
//!
//! Handlers stay thin; everything with a state-machine or consistency
//! concern lives here so the worker binary and tests share it.

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;
use reachout_core::category::normalize_campaign_type;
use reachout_core::error::CoreError;
use reachout_core::scheduling::dispatch_delay;
use reachout_core::status::CampaignStatus;
use reachout_core::types::{DbId, Timestamp};
use reachout_db::models::campaign::{
    Campaign, CreateCampaign, RecipientWithUser, SendCampaign, UpdateCampaign,
};
use reachout_db::models::newsletter::{
    CreateNewsletter, Newsletter, NewsletterSubscription, PublishNewsletter, UpdateNewsletter,
    UpsertSubscription,
};
use reachout_db::repositories::{
    CampaignRecipientRepo, CampaignRepo, NewsletterRepo, NewsletterSubscriptionRepo,
};
use reachout_queue::{DispatchJob, QueueJobRepo};

use crate::error::{DispatchError, DispatchResult};
use crate::resolver;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Result of a send/publish request.
#[derive(Debug, Serialize)]
pub struct SendReceipt {
    /// Size of the eligible set resolved at send time.
    pub recipient_count: usize,
    /// Echo of the requested schedule; `None` means dispatched immediately.
    pub scheduled_at: Option<Timestamp>,
}

/// Result of a newsletter publish request.
#[derive(Debug, Serialize)]
pub struct PublishReceipt {
    pub scheduled_at: Option<Timestamp>,
}

/// A campaign preview: live eligibility for drafts, the frozen snapshot
/// otherwise.
#[derive(Debug, Serialize)]
pub struct CampaignPreview {
    /// `"draft"` when previewing live eligibility, `"sent"` once the
    /// recipient set is frozen.
    pub status: &'static str,
    pub users: Vec<PreviewUser>,
}

/// User fields shown in previews and recipient listings.
#[derive(Debug, Serialize)]
pub struct PreviewUser {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// Campaign lifecycle operations.
pub struct CampaignService;

impl CampaignService {
    /// Create a DRAFT campaign. The notification type must normalize to
    /// OFFERS; it defaults to OFFERS when omitted.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> DispatchResult<Campaign> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        let notification_type =
            normalize_campaign_type(input.notification_type.as_deref().unwrap_or("OFFERS"))?;

        Ok(CampaignRepo::create(
            pool,
            &input.name,
            notification_type.as_str(),
            input.city_filter.as_deref(),
        )
        .await?)
    }

    /// Update name and/or city filter. Only DRAFT campaigns are editable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
    ) -> DispatchResult<Campaign> {
        let campaign = Self::load(pool, id).await?;
        Self::require_draft(&campaign)?;

        // The guarded update re-checks status; a send racing past the
        // check above still cannot edit a non-draft row.
        CampaignRepo::update_if_draft(
            pool,
            id,
            input.name.as_deref(),
            input.city_filter.as_deref(),
        )
        .await?
        .ok_or_else(|| {
            DispatchError::Core(CoreError::Conflict(
                "Campaign can only be updated while in DRAFT status".to_string(),
            ))
        })
    }

    /// Preview who a campaign would reach (draft) or did target (sent).
    pub async fn preview(pool: &PgPool, id: DbId) -> DispatchResult<CampaignPreview> {
        let campaign = Self::load(pool, id).await?;

        if campaign.status == CampaignStatus::Draft.as_str() {
            let users = resolver::resolve_campaign_recipients(pool, campaign.city_filter.as_deref())
                .await?
                .into_iter()
                .map(|u| PreviewUser {
                    user_id: u.id,
                    name: u.name,
                    email: u.email,
                    phone: u.phone,
                    city: u.city,
                })
                .collect();
            return Ok(CampaignPreview {
                status: "draft",
                users,
            });
        }

        let users = Self::snapshot_users(pool, id).await?;
        Ok(CampaignPreview {
            status: "sent",
            users,
        })
    }

    /// List the frozen recipient snapshot with user details.
    pub async fn recipients(pool: &PgPool, id: DbId) -> DispatchResult<Vec<PreviewUser>> {
        Self::load(pool, id).await?;
        Self::snapshot_users(pool, id).await
    }

    /// Send a campaign, immediately or at a future instant.
    ///
    /// Resolves current eligibility, freezes it into the recipient
    /// snapshot (skip-duplicates), and enqueues the deferred dispatch
    /// job. The schedule is validated before anything is written so a
    /// ValidationError mutates no state.
    pub async fn send(
        pool: &PgPool,
        id: DbId,
        input: &SendCampaign,
    ) -> DispatchResult<SendReceipt> {
        let campaign = Self::load(pool, id).await?;
        Self::require_draft(&campaign)?;

        let delay = dispatch_delay(input.scheduled_at, Utc::now())?;

        let eligible =
            resolver::resolve_campaign_recipients(pool, campaign.city_filter.as_deref()).await?;
        let user_ids: Vec<DbId> = eligible.iter().map(|u| u.id).collect();
        CampaignRecipientRepo::insert_snapshot(pool, id, &user_ids).await?;

        QueueJobRepo::enqueue(pool, &DispatchJob::SendCampaign { campaign_id: id }, delay).await?;

        // Deferred sends flip to SCHEDULED now; immediate sends stay DRAFT
        // until the job commits SENT together with the log rows.
        if let Some(scheduled_at) = input.scheduled_at {
            CampaignRepo::mark_scheduled(pool, id, scheduled_at).await?;
        }

        tracing::info!(
            campaign_id = id,
            recipients = eligible.len(),
            scheduled = input.scheduled_at.is_some(),
            "Campaign send accepted"
        );

        Ok(SendReceipt {
            recipient_count: eligible.len(),
            scheduled_at: input.scheduled_at,
        })
    }

    async fn load(pool: &PgPool, id: DbId) -> DispatchResult<Campaign> {
        CampaignRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| {
                DispatchError::Core(CoreError::NotFound {
                    entity: "Campaign",
                    id,
                })
            })
    }

    fn require_draft(campaign: &Campaign) -> DispatchResult<()> {
        if campaign.status != CampaignStatus::Draft.as_str() {
            return Err(DispatchError::Core(CoreError::Conflict(format!(
                "Campaign is {} and can no longer be modified or sent",
                campaign.status
            ))));
        }
        Ok(())
    }

    async fn snapshot_users(pool: &PgPool, id: DbId) -> DispatchResult<Vec<PreviewUser>> {
        let rows = CampaignRecipientRepo::list_with_users(pool, id).await?;
        Ok(rows
            .into_iter()
            .map(|r: RecipientWithUser| PreviewUser {
                user_id: r.user_id,
                name: r.name,
                email: r.email,
                phone: r.phone,
                city: r.city,
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Newsletters
// ---------------------------------------------------------------------------

/// Newsletter lifecycle and subscription operations.
pub struct NewsletterService;

impl NewsletterService {
    /// Create a newsletter. Duplicate titles surface as a conflict via the
    /// `uq_newsletters_title` constraint.
    pub async fn create(pool: &PgPool, input: &CreateNewsletter) -> DispatchResult<Newsletter> {
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(NewsletterRepo::create(pool, &input.title, input.description.as_deref()).await?)
    }

    /// Update a newsletter's metadata or active flag.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsletter,
    ) -> DispatchResult<Newsletter> {
        NewsletterRepo::update(
            pool,
            id,
            input.title.as_deref(),
            input.description.as_deref(),
            input.is_active,
        )
        .await?
        .ok_or_else(|| {
            DispatchError::Core(CoreError::NotFound {
                entity: "Newsletter",
                id,
            })
        })
    }

    /// Subscribe a user (default flags) or update an existing
    /// subscription's channel flags.
    pub async fn upsert_subscription(
        pool: &PgPool,
        newsletter_id: DbId,
        input: &UpsertSubscription,
    ) -> DispatchResult<NewsletterSubscription> {
        Self::load(pool, newsletter_id).await?;

        let subscription =
            NewsletterSubscriptionRepo::subscribe(pool, newsletter_id, input.user_id).await?;

        if input.email.is_none() && input.sms.is_none() && input.push.is_none() {
            return Ok(subscription);
        }

        NewsletterSubscriptionRepo::update_flags(
            pool,
            newsletter_id,
            input.user_id,
            input.email,
            input.sms,
            input.push,
        )
        .await?
        .ok_or_else(|| {
            DispatchError::Core(CoreError::NotFound {
                entity: "NewsletterSubscription",
                id: input.user_id,
            })
        })
    }

    /// Publish a newsletter, immediately or at a future instant.
    ///
    /// Newsletters carry no DRAFT/SENT lifecycle; only the queued job
    /// matters. Inactive newsletters cannot be published.
    pub async fn publish(
        pool: &PgPool,
        id: DbId,
        input: &PublishNewsletter,
    ) -> DispatchResult<PublishReceipt> {
        let newsletter = Self::load(pool, id).await?;
        if !newsletter.is_active {
            return Err(DispatchError::Core(CoreError::Conflict(
                "Newsletter is inactive and cannot be published".to_string(),
            )));
        }

        let delay = dispatch_delay(input.scheduled_at, Utc::now())?;

        QueueJobRepo::enqueue(
            pool,
            &DispatchJob::PublishNewsletter { newsletter_id: id },
            delay,
        )
        .await?;

        tracing::info!(
            newsletter_id = id,
            scheduled = input.scheduled_at.is_some(),
            "Newsletter publish accepted"
        );

        Ok(PublishReceipt {
            scheduled_at: input.scheduled_at,
        })
    }

    async fn load(pool: &PgPool, id: DbId) -> DispatchResult<Newsletter> {
        NewsletterRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| {
                DispatchError::Core(CoreError::NotFound {
                    entity: "Newsletter",
                    id,
                })
            })
    }
}
