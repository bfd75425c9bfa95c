//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data. All
//! output is markdown for rich terminal display.

use std::fmt;

use super::datetime::{Ago, LocalDateTime};
use crate::{
    models::{
        Agent, AgentStatus, AgentType, Difficulty, Enumerated, Plan, Quest, QuestProgress,
        QuestStatus, Subscription, Workflow, UNLIMITED,
    },
    simulation::{Activity, LaneAgent, Snapshot},
};

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(AgentStatus, AgentType, QuestStatus, Difficulty, Plan);

fn quota(value: i64) -> String {
    if value == UNLIMITED {
        "unlimited".to_string()
    } else {
        value.to_string()
    }
}

impl Agent {
    /// One-section summary used in lists.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) {}",
            self.name,
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Type**: {} | **Level**: {} | **XP**: {}",
            self.agent_type, self.level, self.xp
        )?;
        if let Some(task) = &self.current_task {
            writeln!(f, "- **Working on**: {task}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Type: {}", self.agent_type)?;
        writeln!(f, "- Level: {} ({} XP)", self.level, self.xp)?;
        writeln!(f, "- Tasks completed: {}", self.tasks_completed)?;
        if let Some(task) = &self.current_task {
            writeln!(f, "- Current task: {task}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(updated) = &self.updated_at {
            writeln!(f, "- Updated: {}", LocalDateTime(updated))?;
        }

        if !self.skills.is_empty() {
            writeln!(f, "\n## Skills")?;
            writeln!(f)?;
            for skill in &self.skills {
                writeln!(f, "- {skill}")?;
            }
        }

        Ok(())
    }
}

impl Quest {
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) {:.0}%",
            self.title, self.id, self.progress
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Status**: {} | **Difficulty**: {} | **Reward**: {} XP",
            self.status.with_icon(),
            self.difficulty,
            self.xp_reward
        )?;
        writeln!(f, "- **Estimate**: {}", self.estimated_time)?;
        writeln!(f)
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        writeln!(f, "- Reward: {} XP", self.xp_reward)?;
        writeln!(f, "- Estimated time: {}", self.estimated_time)?;
        if !self.assigned_agents.is_empty() {
            writeln!(f, "- Agents: {}", self.assigned_agents.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if !self.tasks.is_empty() {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                let mark = if task.completed { "x" } else { " " };
                writeln!(f, "- [{mark}] {}", task.name)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for QuestProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Quest {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        if self.assigned_agents.is_empty() {
            writeln!(f, "- Agents: none")?;
        } else {
            writeln!(f, "- Agents: {}", self.assigned_agents.join(", "))?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl Workflow {
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Category**: {} | **Steps**: {} | **Duration**: {} | **Popularity**: {}",
            self.category, self.steps, self.estimated_duration, self.popularity
        )?;
        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Steps: {}", self.steps)?;
        writeln!(f, "- Estimated duration: {}", self.estimated_duration)?;
        writeln!(f, "- Popularity: {}", self.popularity)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Subscription {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- User: {}", self.user_id)?;
        writeln!(f, "- Plan: {} ({})", self.plan, self.status)?;
        writeln!(
            f,
            "- Price: {} {} {}",
            self.amount, self.currency, self.billing_cycle
        )?;
        writeln!(f, "- Agents: {}", quota(self.max_agents))?;
        writeln!(f, "- Quests per month: {}", quota(self.max_quests_per_month))?;
        writeln!(
            f,
            "- Period: {} to {}",
            LocalDateTime(&self.current_period_start),
            LocalDateTime(&self.current_period_end)
        )?;

        writeln!(f, "\n## Features")?;
        writeln!(f)?;
        for feature in &self.features {
            writeln!(f, "- {feature}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LaneAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} {:.0}%: {}",
            self.name,
            self.status.with_icon(),
            self.progress,
            self.task
        )
    }
}

impl Snapshot {
    fn fmt_activity(&self, activity: &Activity, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** {} ({})",
            activity.status.icon(),
            activity.agent,
            activity.action,
            Ago {
                at: &activity.timestamp,
                now: &self.taken_at
            }
        )
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gauges = &self.gauges;
        let progression = &self.progression;

        writeln!(f, "# Live Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- Active agents: {}", gauges.active_agents)?;
        writeln!(f, "- Tasks completed: {}", gauges.tasks_completed)?;
        writeln!(f, "- Success rate: {:.1}%", gauges.success_rate)?;
        writeln!(f, "- Quests running: {}", gauges.quests_running)?;
        writeln!(f, "- API calls/min: {}", gauges.api_calls_per_min)?;
        writeln!(
            f,
            "- Level {} {}: {}/{} XP ({:.0}%)",
            progression.level,
            progression.rank,
            progression.current_xp,
            progression.next_level_xp,
            progression.progress_percent
        )?;

        if !self.agents.is_empty() {
            writeln!(f, "\n## Agent Network")?;
            writeln!(f)?;
            for agent in &self.agents {
                write!(f, "{agent}")?;
            }
        }

        writeln!(f, "\n## Activity")?;
        writeln!(f)?;
        if self.activities.is_empty() {
            writeln!(f, "No activity yet.")?;
        }
        for activity in &self.activities {
            self.fmt_activity(activity, f)?;
        }

        Ok(())
    }
}
