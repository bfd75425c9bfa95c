//! Parameter structures for QuestForce operations
//!
//! These structures are shared by every interface (CLI, HTTP) without
//! framework-specific derives. They carry serde derives with camelCase wire
//! names so the HTTP layer can deserialize request bodies and query strings
//! straight into them, while the CLI builds them from clap arguments.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  HTTP body/     │    │  Core Params    │
//! │  (clap derives) │───▶│  query (serde)  │───▶│  + validate()   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every field a caller may omit is an `Option`, so "missing" is decided by
//! `validate()` and reported as a validation error naming the field rather
//! than as a deserialization failure. An empty string counts as missing.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{
    error::{QuestforceError, Result},
    models::{AgentStatus, AgentType, Difficulty, Enumerated, Plan, QuestStatus},
};

/// Page size used when a list request does not specify one.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Returns the value when it is present and non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Returns the value or a "`field` is required" validation error.
fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    present(value).ok_or_else(|| QuestforceError::invalid_input(field).required())
}

/// Reads an optional count that may arrive as a number or as text, treating
/// an empty string the same as an absent value.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(usize),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Number(n)) => Ok(Some(n)),
        Some(Count::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Count::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid limit: {text}"))),
    }
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for show and delete operations on every resource kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for listing agents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAgents {
    /// Only agents whose status equals this value
    pub status: Option<String>,
    /// Maximum number of agents to return, [`DEFAULT_LIST_LIMIT`] if unset
    /// or empty
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<usize>,
}

impl ListAgents {
    /// The limit to apply.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// Parameters for recruiting a new agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAgent {
    /// Display name (required)
    pub name: Option<String>,
    /// Specialization: coding, analysis, deployment or testing (required)
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
}

impl CreateAgent {
    /// Validate the request and return the name and parsed type.
    ///
    /// # Errors
    ///
    /// * `QuestforceError::InvalidInput` - When name or type is missing
    /// * `QuestforceError::InvalidInput` - When type is not a known type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use questforce_core::{models::AgentType, params::CreateAgent};
    ///
    /// let params = CreateAgent {
    ///     name: Some("Synth Coder".to_string()),
    ///     agent_type: Some("coding".to_string()),
    /// };
    /// let (name, agent_type) = params.validate()?;
    /// assert_eq!(name, "Synth Coder");
    /// assert_eq!(agent_type, AgentType::Coding);
    /// # Ok::<(), questforce_core::QuestforceError>(())
    /// ```
    pub fn validate(&self) -> Result<(String, AgentType)> {
        let name = required("name", &self.name)?;
        let agent_type = required("type", &self.agent_type)?;
        let agent_type = AgentType::parse_field("type", agent_type)?;
        Ok((name.to_string(), agent_type))
    }
}

/// Parameters for updating an agent.
///
/// Updates are not merged with a stored record: any field left unset takes
/// its default in the synthesized result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgent {
    /// Agent ID to update, taken from the path on HTTP requests
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    /// New status ('active', 'idle' or 'error')
    pub status: Option<String>,
    /// New specialization
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
    pub xp: Option<u64>,
    pub level: Option<u32>,
    pub tasks_completed: Option<u64>,
}

impl UpdateAgent {
    /// Validate the enumerated fields that were supplied.
    ///
    /// # Errors
    ///
    /// * `QuestforceError::InvalidInput` - When status or type is outside its
    ///   domain
    pub fn validate(&self) -> Result<(Option<AgentStatus>, Option<AgentType>)> {
        let status = present(&self.status)
            .map(|s| AgentStatus::parse_field("status", s))
            .transpose()?;
        let agent_type = present(&self.agent_type)
            .map(|t| AgentType::parse_field("type", t))
            .transpose()?;
        Ok((status, agent_type))
    }
}

/// Parameters for listing quests. Filters combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuests {
    pub status: Option<String>,
    pub difficulty: Option<String>,
}

/// Parameters for creating a quest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuest {
    /// Title of the quest (required)
    pub title: Option<String>,
    /// What needs to be done (required)
    pub description: Option<String>,
    /// 'easy', 'medium' or 'hard' (required)
    pub difficulty: Option<String>,
    /// Experience reward, defaults to 100
    pub xp_reward: Option<u64>,
    /// Duration estimate, defaults to "1 hour"
    pub estimated_time: Option<String>,
    /// Agent identifiers to assign
    pub assigned_agents: Option<Vec<String>>,
}

impl CreateQuest {
    /// Validate required fields in order (title, description, difficulty)
    /// and return them with the parsed difficulty.
    pub fn validate(&self) -> Result<(String, String, Difficulty)> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let difficulty = required("difficulty", &self.difficulty)?;
        let difficulty = Difficulty::parse_field("difficulty", difficulty)?;
        Ok((title.to_string(), description.to_string(), difficulty))
    }
}

/// Parameters for updating a quest's progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuest {
    /// Quest ID to update, taken from the path on HTTP requests
    #[serde(default)]
    pub id: String,
    /// New status ('pending', 'active', 'completed' or 'failed')
    pub status: Option<String>,
    /// New completion percentage, must lie in [0, 100]
    pub progress: Option<f64>,
    pub assigned_agents: Option<Vec<String>>,
}

impl UpdateQuest {
    /// Validate status and progress when supplied.
    ///
    /// # Errors
    ///
    /// * `QuestforceError::InvalidInput` - When status is outside its domain
    /// * `QuestforceError::InvalidInput` - When progress is not a finite
    ///   number between 0 and 100
    ///
    /// # Examples
    ///
    /// ```rust
    /// use questforce_core::params::UpdateQuest;
    ///
    /// let mut params = UpdateQuest::default();
    /// params.progress = Some(100.5);
    /// assert!(params.validate().is_err());
    ///
    /// params.progress = Some(42.5);
    /// let (_, progress) = params.validate()?;
    /// assert_eq!(progress, Some(42.5));
    /// # Ok::<(), questforce_core::QuestforceError>(())
    /// ```
    pub fn validate(&self) -> Result<(Option<QuestStatus>, Option<f64>)> {
        let status = present(&self.status)
            .map(|s| QuestStatus::parse_field("status", s))
            .transpose()?;

        if let Some(progress) = self.progress {
            if !progress.is_finite() || !(0.0..=100.0).contains(&progress) {
                return Err(QuestforceError::invalid_input("progress")
                    .with_reason("must be a number between 0 and 100"));
            }
        }

        Ok((status, self.progress))
    }
}

/// Parameters for listing workflow templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWorkflows {
    /// Only workflows in this category
    pub category: Option<String>,
}

/// Parameters for creating a workflow template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflow {
    /// Name of the template (required)
    pub name: Option<String>,
    /// Category of the template (required)
    pub category: Option<String>,
    /// Step definitions; only their count is kept (required, non-empty)
    pub steps: Option<Vec<serde_json::Value>>,
    pub description: Option<String>,
    pub estimated_duration: Option<String>,
}

impl CreateWorkflow {
    /// Validate required fields and return name, category and step count.
    pub fn validate(&self) -> Result<(String, String, usize)> {
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;
        let steps = match &self.steps {
            Some(steps) if !steps.is_empty() => steps.len(),
            _ => {
                return Err(QuestforceError::invalid_input("steps")
                    .with_reason("steps array is required and must not be empty"))
            }
        };
        Ok((name.to_string(), category.to_string(), steps))
    }
}

/// Parameters for looking up a user's subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuery {
    /// User the subscription belongs to (required)
    pub user_id: Option<String>,
}

impl SubscriptionQuery {
    pub fn validate(&self) -> Result<&str> {
        present(&self.user_id).ok_or_else(|| {
            QuestforceError::invalid_input("userId")
                .with_reason("userId query parameter is required")
        })
    }
}

/// Parameters for subscribing a user to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscription {
    /// Subscribing user (required)
    pub user_id: Option<String>,
    /// 'starter', 'professional' or 'enterprise' (required)
    pub plan: Option<String>,
    /// Billing cycle, defaults to "monthly"
    pub billing_cycle: Option<String>,
}

impl CreateSubscription {
    /// Validate required fields and return the user and parsed plan.
    pub fn validate(&self) -> Result<(String, Plan)> {
        let user_id = required("userId", &self.user_id)?;
        let plan = required("plan", &self.plan)?;
        let plan = Plan::parse_field("plan", plan)?;
        Ok((user_id.to_string(), plan))
    }
}
