//! Delivery channels.
//!
//! Channel values are stored as TEXT in the `notification_logs.channel`
//! column; [`Channel::as_str`] is the single source of the stored form.

use serde::{Deserialize, Serialize};

/// A delivery medium, independently toggled per preference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    /// All channels, in fan-out order.
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::Push];

    /// The TEXT value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "EMAIL",
            Channel::Sms => "SMS",
            Channel::Push => "PUSH",
        }
    }

    /// Parse the stored TEXT value.
    pub fn parse(s: &str) -> Option<Channel> {
        match s {
            "EMAIL" => Some(Channel::Email),
            "SMS" => Some(Channel::Sms),
            "PUSH" => Some(Channel::Push),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
