//! Resource handlers for agents, quests, workflows and subscriptions.
//!
//! [`Registry`] is the single entry point every interface calls. Each handler
//! validates its parameters, consults the repository for its resource kind,
//! and returns either the record(s) or a [`QuestforceError`](crate::QuestforceError)
//! classified as validation, not-found or internal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / HTTP     │    │    Registry     │    │  Repositories   │
//! │  (interfaces)   │───▶│ (*_handlers.rs) │───▶│ + IdIssuers     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Registry`] with injectable clock and stores
//! - [`agent_handlers`]: list, show, create, update, delete agents
//! - [`quest_handlers`]: list, show, create, update, delete quests
//! - [`workflow_handlers`]: list, show, create workflow templates
//! - [`subscription_handlers`]: look up and create subscriptions
//!
//! Handlers are synchronous. Nothing they touch blocks or awaits, so async
//! interfaces call them directly.
//!
//! # Usage
//!
//! ```rust
//! use questforce_core::{params::CreateAgent, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new().build()?;
//! let agent = registry.create_agent(&CreateAgent {
//!     name: Some("Synth Coder".to_string()),
//!     agent_type: Some("coding".to_string()),
//! })?;
//! assert_eq!(agent.level, 1);
//! # Ok::<(), questforce_core::QuestforceError>(())
//! ```

use std::sync::Arc;

use crate::{
    clock::Clock,
    ids::IdIssuer,
    models::{Agent, Quest, Subscription, Workflow},
    repository::Repository,
};

pub mod agent_handlers;
pub mod builder;
pub mod quest_handlers;
pub mod subscription_handlers;
pub mod workflow_handlers;

#[cfg(test)]
mod tests;

pub use builder::RegistryBuilder;

/// Main handler interface for all resource kinds.
pub struct Registry {
    pub(crate) agents: Box<dyn Repository<Agent>>,
    pub(crate) quests: Box<dyn Repository<Quest>>,
    pub(crate) workflows: Box<dyn Repository<Workflow>>,
    pub(crate) subscriptions: Box<dyn Repository<Subscription>>,
    pub(crate) agent_ids: IdIssuer,
    pub(crate) quest_ids: IdIssuer,
    pub(crate) workflow_ids: IdIssuer,
    pub(crate) subscription_ids: IdIssuer,
    pub(crate) clock: Arc<dyn Clock>,
}
