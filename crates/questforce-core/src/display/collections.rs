//! Collection wrapper types for displaying pages of records.
//!
//! Each wrapper formats its records with the compact summary layout and ends
//! with a count line, handling empty pages gracefully.

use std::fmt;

use crate::models::{Agent, Page, Quest, Workflow};

/// Writes the "showing n of total" footer for a page.
fn fmt_footer<T>(page: &Page<T>, noun: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if page.len() < page.total {
        writeln!(f, "Showing {} of {} {noun}.", page.len(), page.total)
    } else {
        writeln!(f, "{} {noun}.", page.total)
    }
}

/// Newtype wrapper for displaying a page of agents.
///
/// # Examples
///
/// ```rust
/// use questforce_core::{display::Agents, params::ListAgents, RegistryBuilder};
///
/// let registry = RegistryBuilder::new().build()?;
/// let page = registry.list_agents(&ListAgents { status: None, limit: Some(2) })?;
/// let output = Agents(page).to_string();
/// assert!(output.contains("Synth Coder"));
/// assert!(output.ends_with("Showing 2 of 3 agents.\n"));
/// # Ok::<(), questforce_core::QuestforceError>(())
/// ```
pub struct Agents(pub Page<Agent>);

impl fmt::Display for Agents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No agents found.");
        }
        for agent in &self.0.data {
            agent.fmt_summary(f)?;
        }
        fmt_footer(&self.0, "agents", f)
    }
}

/// Newtype wrapper for displaying the quest board.
pub struct Quests(pub Page<Quest>);

impl fmt::Display for Quests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No quests found.");
        }
        for quest in &self.0.data {
            quest.fmt_summary(f)?;
        }
        fmt_footer(&self.0, "quests", f)
    }
}

/// Newtype wrapper for displaying workflow templates.
pub struct Workflows(pub Page<Workflow>);

impl fmt::Display for Workflows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workflows found.");
        }
        for workflow in &self.0.data {
            workflow.fmt_summary(f)?;
        }
        fmt_footer(&self.0, "workflows", f)
    }
}
