//! Headline dashboard counters and their per-tick drift.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Limits and step sizes for gauge drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBands {
    /// Inclusive bounds for `active_agents`
    pub active_agents: (u32, u32),
    /// Inclusive bounds for `success_rate`
    pub success_rate: (f64, f64),
    /// Amount `success_rate` moves up or down per tick
    pub success_rate_step: f64,
    /// Largest per-tick change of `quests_running`
    pub quests_running_swing: u64,
    /// Largest per-tick change of `api_calls_per_min`
    pub api_calls_swing: u64,
}

impl Default for GaugeBands {
    fn default() -> Self {
        Self {
            active_agents: (8, 20),
            success_rate: (90.0, 99.0),
            success_rate_step: 1.0,
            quests_running_swing: 5,
            api_calls_swing: 50,
        }
    }
}

/// The counters shown across the top of the live dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardGauges {
    pub active_agents: u32,
    pub tasks_completed: u64,
    /// Percentage, one decimal place
    pub success_rate: f64,
    pub quests_running: u64,
    pub api_calls_per_min: u64,
}

impl Default for DashboardGauges {
    fn default() -> Self {
        Self {
            active_agents: 24,
            tasks_completed: 1247,
            success_rate: 98.7,
            quests_running: 1243,
            api_calls_per_min: 15234,
        }
    }
}

impl DashboardGauges {
    /// Applies one tick of random drift.
    ///
    /// `tasks_completed` only ever grows. `active_agents` and `success_rate`
    /// are clamped into their bands, so a starting value outside a band is
    /// pulled inside on the first tick. The remaining counters never go
    /// below zero.
    pub fn nudge<R: Rng + ?Sized>(&mut self, bands: &GaugeBands, rng: &mut R) {
        let (min_agents, max_agents) = bands.active_agents;
        let agents = i64::from(self.active_agents) + rng.gen_range(-1..=1);
        self.active_agents = clamp_u32(agents, min_agents, max_agents);

        self.tasks_completed += rng.gen_range(0..=1);

        let step = if rng.gen_bool(0.5) {
            bands.success_rate_step
        } else {
            -bands.success_rate_step
        };
        let (min_rate, max_rate) = bands.success_rate;
        let rate = (self.success_rate + step).max(min_rate).min(max_rate);
        self.success_rate = (rate * 10.0).round() / 10.0;

        self.quests_running = drift(self.quests_running, bands.quests_running_swing, rng);
        self.api_calls_per_min = drift(self.api_calls_per_min, bands.api_calls_swing, rng);
    }
}

fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.max(i64::from(min)).min(i64::from(max));
    u32::try_from(clamped).unwrap_or(min)
}

/// Moves `value` by up to `swing` in either direction, flooring at zero.
fn drift<R: Rng + ?Sized>(value: u64, swing: u64, rng: &mut R) -> u64 {
    let delta = rng.gen_range(0..=swing * 2);
    (value + delta).saturating_sub(swing)
}
