//! Display formatting for records, pages and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]). Pages of
//! records and operation outcomes go through newtype wrappers so the same
//! record can be shown in full or as a list entry.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Agent, Quest)  │───▶│ Result Types    │───▶│   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Page wrappers (Agents, Quests, Workflows)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: One-line outcome messages (OperationStatus)
//! - [`datetime`]: Local and relative time formatting
//! - [`models`]: Display implementations for domain models and dashboard snapshots
//!
//! ## Usage
//!
//! ```rust
//! use questforce_core::{display::Quests, params::ListQuests, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new().build()?;
//! let quests = Quests(registry.list_quests(&ListQuests {
//!     status: Some("pending".to_string()),
//!     difficulty: None,
//! })?);
//! assert!(quests.to_string().contains("Implement Real-time Analytics"));
//! # Ok::<(), questforce_core::QuestforceError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Agents, Quests, Workflows};
pub use datetime::{Ago, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
