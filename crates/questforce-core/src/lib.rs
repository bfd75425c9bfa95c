//! Core library for the QuestForce mock resource API.
//!
//! This crate provides the resource handlers for agents, quests, workflows and
//! subscriptions, the live-metrics simulation behind the dashboard, and the
//! shared models, parameters and error type every interface builds on.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Page and operation-result formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use questforce_core::{
//!     params::{CreateQuest, ListAgents},
//!     RegistryBuilder,
//! };
//!
//! let registry = RegistryBuilder::new().build()?;
//!
//! let quest = registry.create_quest(&CreateQuest {
//!     title: Some("Deploy Microservice".to_string()),
//!     description: Some("Ship the new service".to_string()),
//!     difficulty: Some("medium".to_string()),
//!     ..Default::default()
//! })?;
//! println!("Created quest: {}", quest);
//!
//! let agents = registry.list_agents(&ListAgents::default())?;
//! for agent in &agents.data {
//!     println!("Agent: {}", agent.name);
//! }
//! # Ok::<(), questforce_core::QuestforceError>(())
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod registry;
pub mod repository;
pub mod simulation;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{
    Agents, CreateResult, DeleteResult, LocalDateTime, OperationStatus, Quests, UpdateResult,
    Workflows,
};
pub use error::{ErrorKind, QuestforceError, Result};
pub use models::{
    Agent, AgentStatus, AgentType, Deleted, Difficulty, Page, Plan, Quest, QuestProgress,
    QuestStatus, Subscription, Workflow,
};
pub use params::{
    CreateAgent, CreateQuest, CreateSubscription, CreateWorkflow, Id, ListAgents, ListQuests,
    ListWorkflows, SubscriptionQuery, UpdateAgent, UpdateQuest,
};
pub use registry::{Registry, RegistryBuilder};
pub use simulation::{Simulation, SimulationConfig, SimulationHandle, SimulationRunner, Snapshot};
