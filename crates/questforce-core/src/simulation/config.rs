//! Simulation configuration with the live dashboard's defaults.

use std::{ops::Range, time::Duration};

use jiff::SignedDuration;

use super::{
    feed::{ActivityStatus, DEFAULT_FEED_CAPACITY},
    gauges::{DashboardGauges, GaugeBands},
    lanes::{default_lanes, LaneAgent},
    progression::Progression,
};

/// Interval between ticks when none is configured.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// An activity present in the feed before the first tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedActivity {
    pub agent: String,
    pub action: String,
    pub status: ActivityStatus,
    /// How long before start-up the activity happened
    pub age: SignedDuration,
}

impl SeedActivity {
    fn new(agent: &str, action: &str, status: ActivityStatus, age_secs: i64) -> Self {
        Self {
            agent: agent.to_string(),
            action: action.to_string(),
            status,
            age: SignedDuration::from_secs(age_secs),
        }
    }
}

/// Everything a [`Simulation`](super::Simulation) needs to start.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Agent names new activities are attributed to
    pub roster: Vec<String>,
    /// Actions new activities describe
    pub phrases: Vec<String>,
    /// Agents shown in the network lanes
    pub lanes: Vec<LaneAgent>,
    /// Most activities the feed holds
    pub feed_capacity: usize,
    pub bands: GaugeBands,
    /// Chance that a tick produces an activity
    pub activity_probability: f64,
    /// Chance that a new activity reports success rather than processing
    pub success_probability: f64,
    /// Experience gained per tick, drawn uniformly
    pub xp_per_tick: Range<u64>,
    pub tick_interval: Duration,
    pub gauges: DashboardGauges,
    pub progression: Progression,
    /// Feed contents before the first tick, most recent first
    pub seed_activities: Vec<SeedActivity>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            roster: strings(&[
                "CodeAgent-Alpha",
                "DataProcessor-Beta",
                "TestRunner-Gamma",
                "SecurityScan-Delta",
                "DocWriter-Epsilon",
                "APIMonitor-Zeta",
            ]),
            phrases: strings(&[
                "Completed code review",
                "Deployed new feature",
                "Fixed critical bug",
                "Updated documentation",
                "Optimized query performance",
                "Passed security audit",
            ]),
            lanes: default_lanes(),
            feed_capacity: DEFAULT_FEED_CAPACITY,
            bands: GaugeBands::default(),
            activity_probability: 1.0,
            success_probability: 0.9,
            xp_per_tick: 0..10,
            tick_interval: DEFAULT_TICK_INTERVAL,
            gauges: DashboardGauges::default(),
            progression: Progression::default(),
            seed_activities: vec![
                SeedActivity::new(
                    "CodeAgent-Alpha",
                    "Deployed v2.1.0 to production",
                    ActivityStatus::Success,
                    2,
                ),
                SeedActivity::new(
                    "DataProcessor-Beta",
                    "Processing 10,000 records...",
                    ActivityStatus::Processing,
                    5,
                ),
                SeedActivity::new(
                    "TestRunner-Gamma",
                    "All tests passed ✓",
                    ActivityStatus::Success,
                    12,
                ),
                SeedActivity::new(
                    "SecurityScan-Delta",
                    "Vulnerability scan complete",
                    ActivityStatus::Success,
                    18,
                ),
            ],
        }
    }
}

impl SimulationConfig {
    /// Sets the tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Sets the chance that a tick produces an activity, clamped to [0, 1].
    pub fn with_activity_probability(mut self, probability: f64) -> Self {
        self.activity_probability = clamp_probability(probability);
        self
    }
}

/// Clamps to [0, 1]; NaN becomes 0.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
