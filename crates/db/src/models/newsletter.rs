//! Newsletter entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use reachout_core::preference::ChannelFlags;
use reachout_core::types::{DbId, Timestamp};

/// A row from the `newsletters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Newsletter {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `newsletter_subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsletterSubscription {
    pub id: DbId,
    pub newsletter_id: DbId,
    pub user_id: DbId,
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewsletterSubscription {
    /// The subscription's tri-channel flags.
    pub fn flags(&self) -> ChannelFlags {
        ChannelFlags {
            email: self.email,
            sms: self.sms,
            push: self.push,
        }
    }
}

/// DTO for `POST /newsletters`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNewsletter {
    #[validate(length(min = 1, message = "newsletter title is required"))]
    pub title: String,
    pub description: Option<String>,
}

/// DTO for `PUT /newsletters/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateNewsletter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for `POST /newsletters/{id}/publish`.
#[derive(Debug, Default, Deserialize)]
pub struct PublishNewsletter {
    pub scheduled_at: Option<Timestamp>,
}

/// DTO for subscribing a user / updating a subscription's flags.
///
/// Creation defaults are email on, sms and push off.
#[derive(Debug, Deserialize)]
pub struct UpsertSubscription {
    pub user_id: DbId,
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub push: Option<bool>,
}
