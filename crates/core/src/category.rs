//! Notification categories.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The classification a preference row or log entry belongs to.
///
/// `Offers` and `OrderUpdates` are valid preference categories;
/// `Newsletter` appears only on log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Offers,
    OrderUpdates,
    Newsletter,
}

impl NotificationType {
    /// The TEXT value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Offers => "OFFERS",
            NotificationType::OrderUpdates => "ORDER_UPDATES",
            NotificationType::Newsletter => "NEWSLETTER",
        }
    }

    /// Parse the stored TEXT value.
    pub fn parse(s: &str) -> Option<NotificationType> {
        match s {
            "OFFERS" => Some(NotificationType::Offers),
            "ORDER_UPDATES" => Some(NotificationType::OrderUpdates),
            "NEWSLETTER" => Some(NotificationType::Newsletter),
            _ => None,
        }
    }

    /// Whether the category may appear on a preference row.
    pub fn is_preference_category(&self) -> bool {
        matches!(
            self,
            NotificationType::Offers | NotificationType::OrderUpdates
        )
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a caller-supplied campaign type and require it to be OFFERS.
///
/// The input is uppercased with spaces collapsed to underscores, so
/// `"offers"`, `"Offers"`, and `"OFFERS"` all pass. Campaigns may only
/// carry the OFFERS category; anything else is a validation failure.
pub fn normalize_campaign_type(raw: &str) -> Result<NotificationType, CoreError> {
    let normalized = raw.trim().to_uppercase().replace(' ', "_");
    match NotificationType::parse(&normalized) {
        Some(NotificationType::Offers) => Ok(NotificationType::Offers),
        _ => Err(CoreError::Validation(format!(
            "Campaign notification type must be OFFERS, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_spaces() {
        assert_eq!(
            normalize_campaign_type("offers").unwrap(),
            NotificationType::Offers
        );
        assert_eq!(
            normalize_campaign_type("  Offers ").unwrap(),
            NotificationType::Offers
        );
    }

    #[test]
    fn rejects_non_offers_categories() {
        assert!(normalize_campaign_type("ORDER_UPDATES").is_err());
        assert!(normalize_campaign_type("order updates").is_err());
        assert!(normalize_campaign_type("NEWSLETTER").is_err());
        assert!(normalize_campaign_type("").is_err());
    }

    #[test]
    fn newsletter_is_not_a_preference_category() {
        assert!(NotificationType::Offers.is_preference_category());
        assert!(NotificationType::OrderUpdates.is_preference_category());
        assert!(!NotificationType::Newsletter.is_preference_category());
    }
}
