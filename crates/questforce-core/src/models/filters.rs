//! Filter types for querying seeded records.

use super::{Agent, Enumerated, Quest, Workflow};
use crate::repository::RecordFilter;

/// An empty query value means "no filter", as an absent one does.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

/// Filter options for querying agents.
#[derive(Debug, Clone, Default)]
pub struct AgentFilter {
    /// Exact match on the status wire name. Values outside the status set
    /// simply match nothing.
    pub status: Option<String>,
}

impl RecordFilter<Agent> for AgentFilter {
    fn matches(&self, agent: &Agent) -> bool {
        self.status
            .as_deref()
            .map_or(true, |status| agent.status.as_str() == status)
    }
}

impl From<&crate::params::ListAgents> for AgentFilter {
    fn from(params: &crate::params::ListAgents) -> Self {
        Self {
            status: non_empty(&params.status),
        }
    }
}

/// Filter options for querying quests. Both fields must match when set.
#[derive(Debug, Clone, Default)]
pub struct QuestFilter {
    pub status: Option<String>,
    pub difficulty: Option<String>,
}

impl RecordFilter<Quest> for QuestFilter {
    fn matches(&self, quest: &Quest) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |status| quest.status.as_str() == status);
        let difficulty_ok = self
            .difficulty
            .as_deref()
            .map_or(true, |difficulty| quest.difficulty.as_str() == difficulty);
        status_ok && difficulty_ok
    }
}

impl From<&crate::params::ListQuests> for QuestFilter {
    fn from(params: &crate::params::ListQuests) -> Self {
        Self {
            status: non_empty(&params.status),
            difficulty: non_empty(&params.difficulty),
        }
    }
}

/// Filter options for querying workflow templates.
#[derive(Debug, Clone, Default)]
pub struct WorkflowFilter {
    /// Exact match on the category
    pub category: Option<String>,
}

impl RecordFilter<Workflow> for WorkflowFilter {
    fn matches(&self, workflow: &Workflow) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| workflow.category == category)
    }
}

impl From<&crate::params::ListWorkflows> for WorkflowFilter {
    fn from(params: &crate::params::ListWorkflows) -> Self {
        Self {
            category: non_empty(&params.category),
        }
    }
}
