//! Subscription model and the plan lookup table.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Sentinel for quotas without an upper bound.
pub const UNLIMITED: i64 = -1;

/// Billing currency for every plan.
pub const CURRENCY: &str = "USD";

/// Billing cycle applied when none is requested.
pub const DEFAULT_BILLING_CYCLE: &str = "monthly";

/// Fixed terms a plan grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTerms {
    /// Agent quota, [`UNLIMITED`] for no cap
    pub max_agents: i64,
    /// Monthly quest quota, [`UNLIMITED`] for no cap
    pub max_quests_per_month: i64,
    /// Marketing feature list
    pub features: &'static [&'static str],
    /// Price per billing cycle in whole currency units
    pub amount: u32,
}

impl Plan {
    /// Looks up the terms for this plan.
    ///
    /// ```rust
    /// use questforce_core::models::{Plan, UNLIMITED};
    ///
    /// assert_eq!(Plan::Starter.terms().max_agents, 3);
    /// assert_eq!(Plan::Enterprise.terms().max_agents, UNLIMITED);
    /// ```
    pub fn terms(&self) -> PlanTerms {
        match self {
            Plan::Starter => PlanTerms {
                max_agents: 3,
                max_quests_per_month: 20,
                features: &["Basic analytics", "Email support"],
                amount: 29,
            },
            Plan::Professional => PlanTerms {
                max_agents: 10,
                max_quests_per_month: 100,
                features: &[
                    "Advanced analytics",
                    "Priority support",
                    "Custom workflows",
                    "API access",
                ],
                amount: 99,
            },
            Plan::Enterprise => PlanTerms {
                max_agents: UNLIMITED,
                max_quests_per_month: UNLIMITED,
                features: &[
                    "Enterprise analytics",
                    "24/7 dedicated support",
                    "Custom integrations",
                    "SLA guarantee",
                    "On-premise deployment",
                ],
                amount: 299,
            },
        }
    }
}

/// A user's subscription to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub plan: Plan,
    /// Always "active"; there is no billing integration to change it
    pub status: String,
    pub max_agents: i64,
    pub max_quests_per_month: i64,
    pub features: Vec<String>,
    pub billing_cycle: String,
    pub amount: u32,
    pub currency: String,
    pub current_period_start: Timestamp,
    pub current_period_end: Timestamp,
    pub created_at: Timestamp,
}

impl Subscription {
    /// Builds a subscription whose quota fields are derived from `plan`.
    pub fn for_plan(
        id: String,
        user_id: String,
        plan: Plan,
        billing_cycle: String,
        period: (Timestamp, Timestamp),
        created_at: Timestamp,
    ) -> Self {
        let terms = plan.terms();
        Self {
            id,
            user_id,
            plan,
            status: "active".to_string(),
            max_agents: terms.max_agents,
            max_quests_per_month: terms.max_quests_per_month,
            features: terms.features.iter().map(ToString::to_string).collect(),
            billing_cycle,
            amount: terms.amount,
            currency: CURRENCY.to_string(),
            current_period_start: period.0,
            current_period_end: period.1,
            created_at,
        }
    }

    /// Whether the plan caps the number of agents.
    pub fn has_unlimited_agents(&self) -> bool {
        self.max_agents == UNLIMITED
    }
}
