//! Subscription handler operations for the Registry.

use jiff::SignedDuration;
use log::debug;

use super::Registry;
use crate::{
    error::{QuestforceError, Result, ResultExt},
    models::{Subscription, DEFAULT_BILLING_CYCLE},
    params::{CreateSubscription, SubscriptionQuery},
    repository::seed::SUBSCRIPTION_TEMPLATE_ID,
};

/// Length of a billing period.
pub const BILLING_PERIOD: SignedDuration = SignedDuration::from_hours(24 * 30);

impl Registry {
    /// Handle looking up a user's subscription.
    ///
    /// Every user is on the template subscription; the returned record is
    /// that template addressed to the requesting user.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::InvalidInput` when `user_id` is missing, and
    /// `QuestforceError::Internal` if the template is absent from the store.
    pub fn get_subscription(&self, params: &SubscriptionQuery) -> Result<Subscription> {
        let user_id = params.validate()?;
        let template = self
            .subscriptions
            .get(SUBSCRIPTION_TEMPLATE_ID)?
            .ok_or_else(|| QuestforceError::internal("subscription template is missing"))?;

        Ok(Subscription {
            user_id: user_id.to_string(),
            ..template
        })
    }

    /// Handle subscribing a user to a plan.
    ///
    /// Quotas, features and price come from the plan's fixed terms. The first
    /// billing period starts now and lasts thirty days.
    pub fn create_subscription(&self, params: &CreateSubscription) -> Result<Subscription> {
        let (user_id, plan) = params.validate()?;
        let now = self.clock.now();
        let period_end = now
            .checked_add(BILLING_PERIOD)
            .with_context("computing billing period end")?;

        let billing_cycle = params
            .billing_cycle
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_BILLING_CYCLE.to_string());

        let subscription = Subscription::for_plan(
            self.subscription_ids.issue(),
            user_id,
            plan,
            billing_cycle,
            (now, period_end),
            now,
        );
        debug!(
            "Subscribed {} to {:?} as {}",
            subscription.user_id, plan, subscription.id
        );
        self.subscriptions.create(subscription)
    }
}
