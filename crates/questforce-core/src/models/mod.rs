//! Data models for agents, quests, workflows and subscriptions.
//!
//! These are flat, field-validated records. There is no referential
//! integrity between them: a quest's `assigned_agents` is a list of free-form
//! agent identifier strings. Display implementations live in
//! [`crate::display::models`].
//!
//! All models serialize with camelCase field names and RFC 3339 timestamps,
//! which is the shape the dashboard front end consumes.
//!
//! # Examples
//!
//! ```rust
//! use questforce_core::models::{Agent, AgentStatus, AgentType};
//! use jiff::Timestamp;
//!
//! let agent = Agent::recruit(
//!     "7".to_string(),
//!     "Synth Coder".to_string(),
//!     AgentType::Coding,
//!     Timestamp::UNIX_EPOCH,
//! );
//! assert_eq!(agent.status, AgentStatus::Idle);
//! assert_eq!(agent.level, 1);
//!
//! let json = serde_json::to_value(&agent).unwrap();
//! assert_eq!(json["type"], "coding");
//! assert_eq!(json["tasksCompleted"], 0);
//! ```

pub mod agent;
pub mod filters;
pub mod page;
pub mod quest;
pub mod status;
pub mod subscription;
pub mod workflow;


pub use agent::Agent;
pub use filters::{AgentFilter, QuestFilter, WorkflowFilter};
pub use page::{Deleted, Page};
pub use quest::{Quest, QuestProgress, QuestTask, DEFAULT_ESTIMATED_TIME, DEFAULT_XP_REWARD};
pub use status::{AgentStatus, AgentType, Difficulty, Enumerated, Plan, QuestStatus};
pub use subscription::{
    PlanTerms, Subscription, CURRENCY, DEFAULT_BILLING_CYCLE, UNLIMITED,
};
pub use workflow::{Workflow, UNKNOWN_DURATION};
