//! Subscription tiers and the access policy.
//!
//! `Tier` is ordered (`Free < Pro < Enterprise`); each topic declares a
//! minimum tier and `can_access` compares against it. All defaults deny:
//! unknown tier labels parse to `Free`, unknown topics require `Pro` and have
//! no document anyway.

use crate::topic::Topic;

/// Customer subscription tier, ordered by entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Tier {
    /// No paid entitlements. The fail-closed default for anything unrecognized.
    #[default]
    Free,
    /// Paid tier; unlocks standard documentation topics.
    Pro,
    /// Top tier; additionally unlocks enterprise-only topics (self-hosting).
    Enterprise,
}

impl Tier {
    /// Parses a tier label case-insensitively. Anything unrecognized is
    /// `Free`: never an error, never fail-open.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "pro" => Self::Pro,
            "enterprise" => Self::Enterprise,
            _ => Self::Free,
        }
    }

    /// Label used in prompts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }
}

/// Decides documentation access for a tier and classified topic.
///
/// Pure and total; computed exactly once per traversal, after classification
/// and before retrieval. Self-hosting docs are Enterprise-only; every other
/// known topic needs Pro or better. `Topic::Unknown` follows the Pro baseline
/// (there is no document to retrieve for it either way).
pub fn can_access(tier: Tier, topic: Topic) -> bool {
    tier >= required_tier(topic)
}

/// Minimum tier that unlocks documentation for a topic.
pub fn required_tier(topic: Topic) -> Tier {
    match topic {
        Topic::SelfHosting => Tier::Enterprise,
        _ => Tier::Pro,
    }
}
