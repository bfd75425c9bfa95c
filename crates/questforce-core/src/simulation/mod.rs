//! Simulated live metrics for the dashboard.
//!
//! A [`Simulation`] owns the dashboard state: headline gauges, the user's
//! level [`Progression`], the agent network [`AgentLanes`] and the
//! [`ActivityFeed`]. Each call to [`Simulation::tick`] advances all of them
//! once. Randomness is passed in and time comes from a [`Clock`], so a seeded
//! RNG with a [`ManualClock`](crate::clock::ManualClock) replays exactly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ SimulationRunner│    │   Simulation    │    │    Snapshot     │
//! │ (tokio interval)│───▶│   tick(rng)     │───▶│ (serializable)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`config`]: [`SimulationConfig`] and its defaults
//! - [`gauges`]: headline counters and their drift
//! - [`progression`]: XP, levels and ranks
//! - [`lanes`]: per-agent progress
//! - [`feed`]: bounded activity history
//! - [`runner`]: background tick task with an abort-on-drop handle
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use questforce_core::{
//!     clock::ManualClock,
//!     simulation::{Simulation, SimulationConfig},
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut sim = Simulation::new(SimulationConfig::default(), Arc::new(ManualClock::default()));
//! let mut rng = StdRng::seed_from_u64(7);
//! sim.tick(&mut rng);
//!
//! let snapshot = sim.snapshot();
//! assert_eq!(snapshot.ticks, 1);
//! assert_eq!(snapshot.activities.len(), 5);
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

pub mod config;
pub mod feed;
pub mod gauges;
pub mod lanes;
pub mod progression;
pub mod runner;


pub use config::{SeedActivity, SimulationConfig, DEFAULT_TICK_INTERVAL};
pub use feed::{Activity, ActivityFeed, ActivityStatus, DEFAULT_FEED_CAPACITY};
pub use gauges::{DashboardGauges, GaugeBands};
pub use lanes::{AgentLanes, LaneAgent, LaneStatus};
pub use progression::{Progression, ProgressionSummary, Rank, XP_PER_LEVEL};
pub use runner::{SimulationHandle, SimulationRunner};

/// Point-in-time copy of the dashboard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub gauges: DashboardGauges,
    pub progression: ProgressionSummary,
    pub agents: Vec<LaneAgent>,
    /// Most recent first
    pub activities: Vec<Activity>,
    pub ticks: u64,
    pub taken_at: Timestamp,
}

/// The dashboard state machine.
pub struct Simulation {
    config: SimulationConfig,
    gauges: DashboardGauges,
    progression: Progression,
    lanes: AgentLanes,
    feed: ActivityFeed,
    next_activity_id: u64,
    ticks: u64,
    clock: Arc<dyn Clock>,
}

impl Simulation {
    /// Creates a simulation in its configured initial state.
    ///
    /// Seed activities are stamped relative to the clock's current time and
    /// numbered from 1 in order, newest first.
    pub fn new(mut config: SimulationConfig, clock: Arc<dyn Clock>) -> Self {
        config.activity_probability = config::clamp_probability(config.activity_probability);
        config.success_probability = config::clamp_probability(config.success_probability);

        let now = clock.now();
        let mut feed = ActivityFeed::new(config.feed_capacity);
        // Pushed oldest first so the newest ends up at the front.
        for (index, seed) in config.seed_activities.iter().enumerate().rev() {
            feed.push(Activity {
                id: index as u64 + 1,
                agent: seed.agent.clone(),
                action: seed.action.clone(),
                status: seed.status,
                timestamp: now.checked_sub(seed.age).unwrap_or(now),
            });
        }

        Self {
            gauges: config.gauges,
            progression: config.progression,
            lanes: AgentLanes::new(config.lanes.clone()),
            feed,
            next_activity_id: config.seed_activities.len() as u64 + 1,
            ticks: 0,
            clock,
            config,
        }
    }

    /// Advances the simulation by one step.
    ///
    /// Gauges drift, working lanes progress and experience is gained. Then,
    /// with the configured probability, a new activity attributed to a random
    /// roster agent is pushed to the front of the feed. No activity is
    /// produced while the roster or the phrase list is empty.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.gauges.nudge(&self.config.bands, rng);
        self.lanes.advance(rng);

        let xp = if self.config.xp_per_tick.is_empty() {
            0
        } else {
            rng.gen_range(self.config.xp_per_tick.clone())
        };
        if self.progression.gain(xp) {
            log::info!("Reached level {}", self.progression.level);
        }

        if rng.gen_bool(self.config.activity_probability) {
            if let Some(activity) = self.next_activity(rng) {
                self.feed.push(activity);
            }
        }

        self.ticks += 1;
    }

    fn next_activity<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Activity> {
        let agent = self.config.roster.choose(rng)?.clone();
        let action = self.config.phrases.choose(rng)?.clone();
        let status = if rng.gen_bool(self.config.success_probability) {
            ActivityStatus::Success
        } else {
            ActivityStatus::Processing
        };

        let id = self.next_activity_id;
        self.next_activity_id += 1;
        Some(Activity {
            id,
            agent,
            action,
            status,
            timestamp: self.clock.now(),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            gauges: self.gauges,
            progression: self.progression.summary(),
            agents: self.lanes.agents().to_vec(),
            activities: self.feed.iter().cloned().collect(),
            ticks: self.ticks,
            taken_at: self.clock.now(),
        }
    }

    pub fn gauges(&self) -> &DashboardGauges {
        &self.gauges
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
