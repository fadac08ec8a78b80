//! Invoke config: user display name and customer tier.
//!
//! Aligns with LangGraph's `config["configurable"]`. This is the trusted,
//! server-held channel for authorization-relevant fields: the graph reads the
//! customer tier from here and never from caller-supplied conversational state.

use crate::tier::Tier;

/// Config for a single invoke, supplied by the caller alongside the input.
///
/// `customer_tier` is the authoritative source of tier; when absent the graph
/// defaults to `Tier::Free` (fail-closed, never fail-open).
///
/// **Interaction**: Passed to `CompiledStateGraph::invoke(state, config)` and
/// read by `InitNode` (tier) and `GenerateNode` (display name).
#[derive(Debug, Clone, Default)]
pub struct InvokeConfig {
    /// Display name used to address the user in the system prompt.
    pub user_name: Option<String>,
    /// Subscription tier; `None` resolves to `Tier::Free`.
    pub customer_tier: Option<Tier>,
}

impl InvokeConfig {
    /// Builds a config with a display name and tier.
    pub fn new(user_name: impl Into<String>, customer_tier: Tier) -> Self {
        Self {
            user_name: Some(user_name.into()),
            customer_tier: Some(customer_tier),
        }
    }

    /// The tier to authorize against: configured tier, or `Free` when unset.
    pub fn resolved_tier(&self) -> Tier {
        self.customer_tier.unwrap_or(Tier::Free)
    }
}
