//! Quest model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize, Serializer};

use super::{Difficulty, QuestStatus};

/// Default XP reward for a quest created without one.
pub const DEFAULT_XP_REWARD: u64 = 100;

/// Default time estimate for a quest created without one.
pub const DEFAULT_ESTIMATED_TIME: &str = "1 hour";

/// Writes whole percentages as JSON integers so `65` echoes as `65`, not
/// `65.0`.
fn whole_as_integer<S: Serializer>(progress: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if progress.fract() == 0.0 && (0.0..=100.0).contains(progress) {
        serializer.serialize_u8(*progress as u8)
    } else {
        serializer.serialize_f64(*progress)
    }
}

/// A unit of work agents can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Opaque identifier issued on creation
    pub id: String,

    /// Short title of the quest
    pub title: String,

    /// What needs to be accomplished
    pub description: String,

    /// Current lifecycle state
    pub status: QuestStatus,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Experience awarded on completion
    pub xp_reward: u64,

    /// Human-readable duration estimate
    pub estimated_time: String,

    /// Agent identifiers working on the quest (free-form, not checked)
    #[serde(default)]
    pub assigned_agents: Vec<String>,

    /// Completion percentage in [0, 100]
    #[serde(serialize_with = "whole_as_integer")]
    pub progress: f64,

    /// Timestamp when the quest was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the quest was completed, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Checklist shown on the quest detail view
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<QuestTask>,
}

/// One checklist item of a quest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestTask {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl QuestTask {
    pub fn new(id: &str, name: &str, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            completed,
        }
    }
}

/// The synthesized outcome of a quest update.
///
/// Updates are not merged with any stored quest, so only the fields an
/// update can touch are reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    pub id: String,
    pub status: QuestStatus,
    #[serde(serialize_with = "whole_as_integer")]
    pub progress: f64,
    pub assigned_agents: Vec<String>,
    pub updated_at: Timestamp,
}
