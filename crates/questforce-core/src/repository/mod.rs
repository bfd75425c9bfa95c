//! Record storage behind a substitutable interface.
//!
//! The mock API has no data store: reads come from a fixed seed dataset and
//! writes are synthesized without being retained. [`Repository`] captures the
//! operations a handler needs so that a real store can later replace
//! [`SeedRepository`] without touching the handlers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Registry     │    │ dyn Repository  │    │ SeedRepository  │
//! │   (handlers)    │───▶│  get/list/...   │───▶│  (fixed seed)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

pub mod seed;

use crate::{
    error::Result,
    models::{Agent, Quest, QuestProgress, Subscription, Workflow},
};

/// A record kind that can be stored in a [`Repository`].
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human-readable kind name used in messages ("Agent", "Quest", ...)
    const KIND: &'static str;

    /// The representation an update produces for this kind.
    type Update: Clone + Send + Sync + 'static;

    fn id(&self) -> &str;
}

impl Resource for Agent {
    const KIND: &'static str = "Agent";
    type Update = Agent;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Quest {
    const KIND: &'static str = "Quest";
    type Update = QuestProgress;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Workflow {
    const KIND: &'static str = "Workflow";
    type Update = Workflow;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Subscription {
    const KIND: &'static str = "Subscription";
    type Update = Subscription;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Predicate over records of one kind.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Accepts every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRecords;

impl<R> RecordFilter<R> for AllRecords {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

/// Storage operations for one record kind.
pub trait Repository<R: Resource>: Send + Sync {
    /// Returns the record with `id`, if any.
    fn get(&self, id: &str) -> Result<Option<R>>;

    /// Returns every record accepted by `filter`, in storage order.
    fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>>;

    /// Stores a new record and returns what was stored.
    fn create(&self, record: R) -> Result<R>;

    /// Applies an update and returns the resulting representation.
    fn update(&self, change: R::Update) -> Result<R::Update>;

    /// Removes the record with `id`. Removing an unknown id is not an error.
    fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory repository over a fixed seed dataset.
///
/// Reads are served from the seed. Writes are acknowledged and echoed back
/// but never retained, so every request observes the same seed.
#[derive(Debug, Clone)]
pub struct SeedRepository<R> {
    records: Vec<R>,
}

impl<R: Resource> SeedRepository<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Identifiers of the seeded records, used to start id issuers above them.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Resource::id)
    }
}

impl<R: Resource> Repository<R> for SeedRepository<R> {
    fn get(&self, id: &str) -> Result<Option<R>> {
        Ok(self.records.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>> {
        Ok(self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    fn create(&self, record: R) -> Result<R> {
        Ok(record)
    }

    fn update(&self, change: R::Update) -> Result<R::Update> {
        Ok(change)
    }

    fn delete(&self, _id: &str) -> Result<()> {
        Ok(())
    }
}
