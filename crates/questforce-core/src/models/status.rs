//! Enumerated field domains for agents, quests and subscriptions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuestforceError, Result};

/// A closed set of string values accepted for a field.
pub trait Enumerated: FromStr + Sized {
    /// Wire names of every member, in display order.
    const NAMES: &'static [&'static str];

    /// Wire name of this member.
    fn as_str(&self) -> &'static str;

    /// Parse a field value, producing a validation error that lists the
    /// allowed values when it falls outside the set.
    fn parse_field(field: &str, value: &str) -> Result<Self> {
        Self::from_str(value)
            .map_err(|_| QuestforceError::invalid_input(field).one_of(Self::NAMES))
    }
}

/// Lifecycle state of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Agent is working on a task
    Active,

    /// Agent is waiting for work
    #[default]
    Idle,

    /// Agent stopped on a failure
    Error,
}

impl FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(AgentStatus::Active),
            "idle" => Ok(AgentStatus::Idle),
            "error" => Ok(AgentStatus::Error),
            _ => Err(format!("Invalid agent status: {s}")),
        }
    }
}

impl Enumerated for AgentStatus {
    const NAMES: &'static [&'static str] = &["active", "idle", "error"];

    fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Idle => "idle",
            AgentStatus::Error => "error",
        }
    }
}

impl AgentStatus {
    /// Status with a dot marker for list display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            AgentStatus::Active => "● active",
            AgentStatus::Idle => "○ idle",
            AgentStatus::Error => "⚠ error",
        }
    }
}

/// Specialization of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    #[default]
    Coding,
    Analysis,
    Deployment,
    Testing,
}

impl FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "coding" => Ok(AgentType::Coding),
            "analysis" => Ok(AgentType::Analysis),
            "deployment" => Ok(AgentType::Deployment),
            "testing" => Ok(AgentType::Testing),
            _ => Err(format!("Invalid agent type: {s}")),
        }
    }
}

impl Enumerated for AgentType {
    const NAMES: &'static [&'static str] = &["coding", "analysis", "deployment", "testing"];

    fn as_str(&self) -> &'static str {
        match self {
            AgentType::Coding => "coding",
            AgentType::Analysis => "analysis",
            AgentType::Deployment => "deployment",
            AgentType::Testing => "testing",
        }
    }
}

/// Lifecycle state of a quest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// Quest is waiting to be picked up
    #[default]
    Pending,

    /// Quest has agents working on it
    Active,

    /// Quest finished successfully
    Completed,

    /// Quest was abandoned or failed
    Failed,
}

impl FromStr for QuestStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QuestStatus::Pending),
            "active" => Ok(QuestStatus::Active),
            "completed" => Ok(QuestStatus::Completed),
            "failed" => Ok(QuestStatus::Failed),
            _ => Err(format!("Invalid quest status: {s}")),
        }
    }
}

impl Enumerated for QuestStatus {
    const NAMES: &'static [&'static str] = &["pending", "active", "completed", "failed"];

    fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Pending => "pending",
            QuestStatus::Active => "active",
            QuestStatus::Completed => "completed",
            QuestStatus::Failed => "failed",
        }
    }
}

impl QuestStatus {
    /// Status with an icon for display, mirroring the step-style markers.
    ///
    /// ```rust
    /// use questforce_core::models::QuestStatus;
    ///
    /// assert_eq!(QuestStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(QuestStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            QuestStatus::Pending => "○ Pending",
            QuestStatus::Active => "➤ Active",
            QuestStatus::Completed => "✓ Completed",
            QuestStatus::Failed => "✗ Failed",
        }
    }
}

/// Difficulty tier of a quest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Enumerated for Difficulty {
    const NAMES: &'static [&'static str] = &["easy", "medium", "hard"];

    fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Professional,
    Enterprise,
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Plan::Starter),
            "professional" => Ok(Plan::Professional),
            "enterprise" => Ok(Plan::Enterprise),
            _ => Err(format!("Invalid plan: {s}")),
        }
    }
}

impl Enumerated for Plan {
    const NAMES: &'static [&'static str] = &["starter", "professional", "enterprise"];

    fn as_str(&self) -> &'static str {
        match self {
            Plan::Starter => "starter",
            Plan::Professional => "professional",
            Plan::Enterprise => "enterprise",
        }
    }
}
