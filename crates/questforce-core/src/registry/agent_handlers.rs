//! Agent handler operations for the Registry.

use log::debug;

use super::Registry;
use crate::{
    error::{QuestforceError, Result},
    models::{Agent, AgentFilter, Deleted, Page},
    params::{CreateAgent, Id, ListAgents, UpdateAgent},
    repository::Resource,
};

/// Name reported for an updated agent when the update omits one.
pub const UPDATED_AGENT_NAME: &str = "Updated Agent";

impl Registry {
    /// Handle listing agents with optional status filtering.
    ///
    /// The status filter is an exact match on the status name; a value that
    /// is not a status matches nothing rather than failing. `total` counts
    /// every match, `data` holds at most `limit` of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use questforce_core::{params::ListAgents, RegistryBuilder};
    /// let registry = RegistryBuilder::new().build()?;
    /// let page = registry.list_agents(&ListAgents {
    ///     status: Some("active".to_string()),
    ///     limit: None,
    /// })?;
    /// assert!(page.data.iter().all(|a| a.status.to_string() == "active"));
    /// # Ok::<(), questforce_core::QuestforceError>(())
    /// ```
    pub fn list_agents(&self, params: &ListAgents) -> Result<Page<Agent>> {
        let filter = AgentFilter::from(params);
        let matched = self.agents.list(&filter)?;
        debug!("Listed {} agents matching {:?}", matched.len(), filter);
        Ok(Page::limited(matched, params.effective_limit()))
    }

    /// Handle showing a single agent.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::NotFound` when no agent has the given id.
    pub fn get_agent(&self, params: &Id) -> Result<Agent> {
        self.agents
            .get(&params.id)?
            .ok_or_else(|| QuestforceError::not_found(Agent::KIND, params.id.clone()))
    }

    /// Handle recruiting a new agent.
    ///
    /// New agents start idle at level 1 with no experience or completed
    /// tasks, under a freshly issued identifier.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::InvalidInput` when the name or type is
    /// missing, or the type is not one of the known specializations.
    pub fn create_agent(&self, params: &CreateAgent) -> Result<Agent> {
        let (name, agent_type) = params.validate()?;
        let agent = Agent::recruit(self.agent_ids.issue(), name, agent_type, self.clock.now());
        debug!("Recruited agent {} ({})", agent.id, agent.name);
        self.agents.create(agent)
    }

    /// Handle updating an agent.
    ///
    /// The update is not merged with any stored agent: every field the
    /// request leaves out takes its default in the returned record.
    ///
    /// # Errors
    ///
    /// Returns `QuestforceError::InvalidInput` when the status or type is
    /// outside its domain.
    pub fn update_agent(&self, params: &UpdateAgent) -> Result<Agent> {
        let (status, agent_type) = params.validate()?;
        let now = self.clock.now();

        let name = params
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UPDATED_AGENT_NAME.to_string());

        let updated = Agent {
            status: status.unwrap_or_default(),
            xp: params.xp.unwrap_or(0),
            level: params.level.filter(|l| *l >= 1).unwrap_or(1),
            tasks_completed: params.tasks_completed.unwrap_or(0),
            updated_at: Some(now),
            ..Agent::recruit(params.id.clone(), name, agent_type.unwrap_or_default(), now)
        };
        self.agents.update(updated)
    }

    /// Handle deleting an agent.
    ///
    /// Always reports success for the given id; there is no existence check,
    /// so deleting the same id twice succeeds both times.
    pub fn delete_agent(&self, params: &Id) -> Result<Deleted> {
        self.agents.delete(&params.id)?;
        Ok(Deleted::new(Agent::KIND, params.id.clone()))
    }
}
