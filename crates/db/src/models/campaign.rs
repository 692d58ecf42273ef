//! Campaign entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use reachout_core::types::{DbId, Timestamp};

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub campaign_name: String,
    pub notification_type: String,
    pub city_filter: Option<String>,
    /// One of DRAFT, SCHEDULED, SENT. Parse via
    /// [`CampaignStatus`](reachout_core::status::CampaignStatus).
    pub status: String,
    pub scheduled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `campaign_recipients` snapshot table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignRecipient {
    pub id: DbId,
    pub campaign_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A snapshot row joined to the user's contact fields, for preview and
/// recipient listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecipientWithUser {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub captured_at: Timestamp,
}

/// DTO for `POST /campaigns`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCampaign {
    #[validate(length(min = 1, message = "campaign name is required"))]
    pub name: String,
    /// Must normalize to OFFERS. Defaults to OFFERS when omitted.
    pub notification_type: Option<String>,
    pub city_filter: Option<String>,
}

/// DTO for `PUT /campaigns/{id}`. Only DRAFT campaigns accept updates.
#[derive(Debug, Deserialize)]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub city_filter: Option<String>,
}

/// DTO for `POST /campaigns/{id}/send`.
#[derive(Debug, Default, Deserialize)]
pub struct SendCampaign {
    pub scheduled_at: Option<Timestamp>,
}
