//! The effective-preference rule.
//!
//! A missing preference row means the user has never touched their
//! settings, which the platform treats as opted in on every channel.
//! Both the recipient resolver and the dispatch executor go through
//! [`effective_channels`] so the fallback cannot diverge between them.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Tri-channel opt-in flags, as stored on a preference or subscription row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFlags {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl ChannelFlags {
    /// All channels enabled. The fallback for an absent preference row.
    pub const ALL_ENABLED: ChannelFlags = ChannelFlags {
        email: true,
        sms: true,
        push: true,
    };

    /// Default flags for a new newsletter subscription.
    ///
    /// Deliberately asymmetric from the preference fallback: email only.
    pub const NEWSLETTER_DEFAULT: ChannelFlags = ChannelFlags {
        email: true,
        sms: false,
        push: false,
    };

    /// Whether at least one channel is enabled.
    pub fn any_enabled(&self) -> bool {
        self.email || self.sms || self.push
    }

    /// The enabled channels, in fan-out order.
    pub fn enabled_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| match c {
                Channel::Email => self.email,
                Channel::Sms => self.sms,
                Channel::Push => self.push,
            })
            .collect()
    }
}

/// Apply the default opt-in rule: an absent row is all channels enabled.
pub fn effective_channels(row: Option<ChannelFlags>) -> ChannelFlags {
    row.unwrap_or(ChannelFlags::ALL_ENABLED)
}
