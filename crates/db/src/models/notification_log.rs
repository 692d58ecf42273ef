//! Notification log entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use reachout_core::channel::Channel;
use reachout_core::category::NotificationType;
use reachout_core::status::LogStatus;
use reachout_core::types::{DbId, Timestamp};

/// A row from the append-only `notification_logs` table.
///
/// Exactly one row per (recipient, enabled channel) per dispatch event.
/// Immutable once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationLog {
    pub id: DbId,
    pub user_id: DbId,
    pub notification_type: String,
    pub channel: String,
    pub status: String,
    pub campaign_id: Option<DbId>,
    pub newsletter_id: Option<DbId>,
    pub order_id: Option<DbId>,
    pub sent_at: Timestamp,
}

/// A log row to be inserted. Built by the dispatch executor and the
/// order hook; always carries exactly one source reference.
#[derive(Debug, Clone)]
pub struct NewNotificationLog {
    pub user_id: DbId,
    pub notification_type: NotificationType,
    pub channel: Channel,
    pub status: LogStatus,
    pub campaign_id: Option<DbId>,
    pub newsletter_id: Option<DbId>,
    pub order_id: Option<DbId>,
}

impl NewNotificationLog {
    /// A successful campaign delivery attempt.
    pub fn campaign(user_id: DbId, campaign_id: DbId, channel: Channel) -> Self {
        Self {
            user_id,
            notification_type: NotificationType::Offers,
            channel,
            status: LogStatus::Success,
            campaign_id: Some(campaign_id),
            newsletter_id: None,
            order_id: None,
        }
    }

    /// A successful newsletter delivery attempt.
    pub fn newsletter(user_id: DbId, newsletter_id: DbId, channel: Channel) -> Self {
        Self {
            user_id,
            notification_type: NotificationType::Newsletter,
            channel,
            status: LogStatus::Success,
            campaign_id: None,
            newsletter_id: Some(newsletter_id),
            order_id: None,
        }
    }

    /// A successful order-update delivery attempt.
    pub fn order(user_id: DbId, order_id: DbId, channel: Channel) -> Self {
        Self {
            user_id,
            notification_type: NotificationType::OrderUpdates,
            channel,
            status: LogStatus::Success,
            campaign_id: None,
            newsletter_id: None,
            order_id: Some(order_id),
        }
    }
}

/// Query parameters for `GET /notification-logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub campaign_id: Option<DbId>,
    pub user_id: Option<DbId>,
    /// Filter by log status (SUCCESS or FAILED).
    pub status: Option<String>,
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}
