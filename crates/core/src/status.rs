//! Entity status enums stored as TEXT columns.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Campaign lifecycle
// ---------------------------------------------------------------------------

/// Campaign lifecycle: `DRAFT -> SCHEDULED -> SENT` or `DRAFT -> SENT`.
///
/// `Scheduled` and `Sent` are both terminal with respect to edits and
/// re-sends; only the dispatch job writes `Sent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sent,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "DRAFT",
            CampaignStatus::Scheduled => "SCHEDULED",
            CampaignStatus::Sent => "SENT",
        }
    }

    pub fn parse(s: &str) -> Option<CampaignStatus> {
        match s {
            "DRAFT" => Some(CampaignStatus::Draft),
            "SCHEDULED" => Some(CampaignStatus::Scheduled),
            "SENT" => Some(CampaignStatus::Sent),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Order lifecycle
// ---------------------------------------------------------------------------

/// Order fulfilment status. Every transition fans out ORDER_UPDATES logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s {
            "CREATED" => Some(OrderStatus::Created),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Delivery log status
// ---------------------------------------------------------------------------

/// Outcome recorded on a notification log row.
///
/// `Failed` is reserved taxonomy for a future provider integration;
/// the engine currently only ever writes `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    Success,
    Failed,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "SUCCESS",
            LogStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<LogStatus> {
        match s {
            "SUCCESS" => Some(LogStatus::Success),
            "FAILED" => Some(LogStatus::Failed),
            _ => None,
        }
    }
}
