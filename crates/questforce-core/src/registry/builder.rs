//! Builder for creating and configuring Registry instances.

use std::sync::Arc;

use super::Registry;
use crate::{
    clock::{Clock, SystemClock},
    error::Result,
    ids::IdIssuer,
    models::{Agent, Quest, Subscription, Workflow},
    repository::{seed, AllRecords, Repository, Resource, SeedRepository},
};

/// Builder for creating and configuring Registry instances.
///
/// Every store defaults to a [`SeedRepository`] over the demo dataset and the
/// clock defaults to the system clock.
pub struct RegistryBuilder {
    clock: Arc<dyn Clock>,
    agents: Option<Box<dyn Repository<Agent>>>,
    quests: Option<Box<dyn Repository<Quest>>>,
    workflows: Option<Box<dyn Repository<Workflow>>>,
    subscriptions: Option<Box<dyn Repository<Subscription>>>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            agents: None,
            quests: None,
            workflows: None,
            subscriptions: None,
        }
    }

    /// Sets the time source used to stamp created and updated records.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the agent store.
    pub fn with_agents(mut self, repo: impl Repository<Agent> + 'static) -> Self {
        self.agents = Some(Box::new(repo));
        self
    }

    /// Replaces the quest store.
    pub fn with_quests(mut self, repo: impl Repository<Quest> + 'static) -> Self {
        self.quests = Some(Box::new(repo));
        self
    }

    /// Replaces the workflow store.
    pub fn with_workflows(mut self, repo: impl Repository<Workflow> + 'static) -> Self {
        self.workflows = Some(Box::new(repo));
        self
    }

    /// Replaces the subscription store.
    pub fn with_subscriptions(mut self, repo: impl Repository<Subscription> + 'static) -> Self {
        self.subscriptions = Some(Box::new(repo));
        self
    }

    /// Builds the configured registry.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::Internal` if a supplied store fails while its
    /// existing identifiers are read to position the id issuers.
    pub fn build(self) -> Result<Registry> {
        let agents = self
            .agents
            .unwrap_or_else(|| Box::new(SeedRepository::new(seed::agents())));
        let quests = self
            .quests
            .unwrap_or_else(|| Box::new(SeedRepository::new(seed::quests())));
        let workflows = self
            .workflows
            .unwrap_or_else(|| Box::new(SeedRepository::new(seed::workflows())));
        let subscriptions = self
            .subscriptions
            .unwrap_or_else(|| Box::new(SeedRepository::new(seed::subscriptions())));

        Ok(Registry {
            agent_ids: issuer_above("", agents.as_ref())?,
            quest_ids: issuer_above("q", quests.as_ref())?,
            workflow_ids: issuer_above("w", workflows.as_ref())?,
            subscription_ids: issuer_above("sub_", subscriptions.as_ref())?,
            agents,
            quests,
            workflows,
            subscriptions,
            clock: self.clock,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions an issuer above every identifier already in `repo`.
fn issuer_above<R: Resource>(prefix: &'static str, repo: &dyn Repository<R>) -> Result<IdIssuer> {
    let existing = repo.list(&AllRecords)?;
    Ok(IdIssuer::above(prefix, existing.iter().map(Resource::id)))
}
