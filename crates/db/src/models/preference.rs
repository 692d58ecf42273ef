//! Notification preference entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use reachout_core::preference::ChannelFlags;
use reachout_core::types::{DbId, Timestamp};

/// A row from the `notification_preferences` table.
///
/// Absence of a row for a (user, category) pair means all three channels
/// enabled; consumers must go through
/// [`effective_channels`](reachout_core::preference::effective_channels)
/// rather than defaulting ad hoc.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationPreference {
    pub id: DbId,
    pub user_id: DbId,
    pub notification_type: String,
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NotificationPreference {
    /// The row's tri-channel flags.
    pub fn flags(&self) -> ChannelFlags {
        ChannelFlags {
            email: self.email,
            sms: self.sms,
            push: self.push,
        }
    }
}

/// DTO for upserting a preference. Omitted flags keep the opt-in default.
#[derive(Debug, Deserialize)]
pub struct UpsertPreference {
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub push: Option<bool>,
}
