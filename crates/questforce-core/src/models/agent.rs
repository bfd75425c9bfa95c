//! Agent model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{AgentStatus, AgentType};

/// An AI agent in the task force.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Opaque identifier issued on creation
    pub id: String,

    /// Display name of the agent
    pub name: String,

    /// Current lifecycle state
    pub status: AgentStatus,

    /// Specialization of the agent
    #[serde(rename = "type")]
    pub agent_type: AgentType,

    /// Accumulated experience points
    pub xp: u64,

    /// Level reached, starting at 1
    pub level: u32,

    /// Number of tasks the agent has finished
    pub tasks_completed: u64,

    /// Skills advertised on the agent card
    #[serde(default)]
    pub skills: Vec<String>,

    /// Task the agent is currently working on, if any
    #[serde(default)]
    pub current_task: Option<String>,

    /// Timestamp when the agent was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last modification, present on update results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Agent {
    /// Builds a freshly recruited agent with zeroed counters.
    pub fn recruit(id: String, name: String, agent_type: AgentType, now: Timestamp) -> Self {
        Self {
            id,
            name,
            status: AgentStatus::Idle,
            agent_type,
            xp: 0,
            level: 1,
            tasks_completed: 0,
            skills: Vec::new(),
            current_task: None,
            created_at: now,
            updated_at: None,
        }
    }
}
