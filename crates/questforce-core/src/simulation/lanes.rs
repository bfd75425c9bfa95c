//! Per-agent progress lanes of the agent network view.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a simulated agent is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneStatus {
    Active,
    Processing,
    Idle,
}

impl LaneStatus {
    /// Whether agents in this state make progress.
    pub fn is_working(&self) -> bool {
        matches!(self, LaneStatus::Active | LaneStatus::Processing)
    }

    pub fn with_icon(&self) -> &'static str {
        match self {
            LaneStatus::Active => "● active",
            LaneStatus::Processing => "⟳ processing",
            LaneStatus::Idle => "○ idle",
        }
    }
}

/// One simulated agent and its task progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneAgent {
    pub id: String,
    pub name: String,
    pub status: LaneStatus,
    pub task: String,
    /// Percent complete in [0, 100]
    pub progress: f64,
}

impl LaneAgent {
    pub fn new(id: &str, name: &str, status: LaneStatus, task: &str, progress: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            task: task.to_string(),
            progress,
        }
    }
}

/// The roster of simulated agents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentLanes {
    agents: Vec<LaneAgent>,
}

impl AgentLanes {
    pub fn new(agents: Vec<LaneAgent>) -> Self {
        Self { agents }
    }

    /// Moves every working agent forward by up to 5 points, capped at 100.
    /// Idle agents keep their progress.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for agent in self.agents.iter_mut().filter(|a| a.status.is_working()) {
            let step: f64 = rng.gen_range(0.0..5.0);
            agent.progress = (agent.progress + step).min(100.0);
        }
    }

    pub fn agents(&self) -> &[LaneAgent] {
        &self.agents
    }
}

/// The agent network roster shown on the dashboard.
pub fn default_lanes() -> Vec<LaneAgent> {
    vec![
        LaneAgent::new("1", "Data Analyzer", LaneStatus::Active, "Processing dataset", 75.0),
        LaneAgent::new("2", "Code Generator", LaneStatus::Processing, "Creating components", 45.0),
        LaneAgent::new("3", "Content Writer", LaneStatus::Idle, "Waiting for input", 0.0),
        LaneAgent::new("4", "Image Processor", LaneStatus::Active, "Optimizing images", 90.0),
    ]
}
