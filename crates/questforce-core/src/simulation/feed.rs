//! Bounded activity history.

use std::collections::VecDeque;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_FEED_CAPACITY: usize = 10;

/// Outcome shown next to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Processing,
}

impl ActivityStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "✓",
            ActivityStatus::Processing => "⟳",
        }
    }
}

/// One line of the live activity stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub agent: String,
    pub action: String,
    pub status: ActivityStatus,
    pub timestamp: Timestamp,
}

/// Most-recent-first history that evicts its oldest entry once full.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFeed {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Puts `activity` at the front, dropping the oldest entries beyond
    /// capacity.
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use questforce_core::simulation::{Activity, ActivityFeed, ActivityStatus};
    ///
    /// let mut feed = ActivityFeed::new(2);
    /// for id in 1..=3 {
    ///     feed.push(Activity {
    ///         id,
    ///         agent: "CodeAgent-Alpha".to_string(),
    ///         action: "Fixed critical bug".to_string(),
    ///         status: ActivityStatus::Success,
    ///         timestamp: Timestamp::UNIX_EPOCH,
    ///     });
    /// }
    /// let ids: Vec<u64> = feed.iter().map(|a| a.id).collect();
    /// assert_eq!(ids, vec![3, 2]);
    /// ```
    pub fn push(&mut self, activity: Activity) {
        self.entries.push_front(activity);
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&Activity> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}
