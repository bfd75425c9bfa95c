//! Command-line interface definitions and command handlers
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Registry
//! ```
//!
//! [`Cli`] then runs the operation and renders the markdown result.

use std::{fmt, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::info;
use questforce_core::{
    display::{Agents, CreateResult, DeleteResult, Quests, UpdateResult, Workflows},
    params::*,
    simulation::{Simulation, SimulationConfig, SimulationRunner},
    Registry, SystemClock,
};
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::RwLock;

use crate::renderer::TerminalRenderer;

/// Renders a clap value enum under its wire name.
macro_rules! wire_name {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_possible_value() {
                    Some(value) => f.write_str(value.get_name()),
                    None => Ok(()),
                }
            }
        }
    };
}

/// Agent lifecycle states accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AgentStatusArg {
    Active,
    Idle,
    Error,
}

/// Agent specializations accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AgentTypeArg {
    Coding,
    Analysis,
    Deployment,
    Testing,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum QuestStatusArg {
    Pending,
    Active,
    Completed,
    Failed,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanArg {
    Starter,
    Professional,
    Enterprise,
}

wire_name!(AgentStatusArg);
wire_name!(AgentTypeArg);
wire_name!(QuestStatusArg);
wire_name!(DifficultyArg);
wire_name!(PlanArg);

fn wire<T: fmt::Display>(value: Option<T>) -> Option<String> {
    value.map(|v| v.to_string())
}

// ============================================================================
// Agents
// ============================================================================

/// List agents
///
/// Shows at most `--limit` agents (10 by default) together with the number
/// of agents that matched.
#[derive(Args)]
pub struct ListAgentsArgs {
    #[arg(short, long, help = "Only show agents with this status")]
    pub status: Option<AgentStatusArg>,
    #[arg(short, long, help = "Maximum number of agents to show")]
    pub limit: Option<usize>,
}

impl From<ListAgentsArgs> for ListAgents {
    fn from(val: ListAgentsArgs) -> Self {
        ListAgents {
            status: wire(val.status),
            limit: val.limit,
        }
    }
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Identifier of the record to show")]
    pub id: String,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Identifier of the record to delete")]
    pub id: String,
}

impl From<DeleteArgs> for Id {
    fn from(val: DeleteArgs) -> Self {
        Id { id: val.id }
    }
}

/// Recruit a new agent
///
/// New agents start idle at level 1.
#[derive(Args)]
pub struct CreateAgentArgs {
    /// Display name of the agent
    pub name: String,
    #[arg(short = 't', long = "type", help = "Specialization of the agent")]
    pub agent_type: AgentTypeArg,
}

impl From<CreateAgentArgs> for CreateAgent {
    fn from(val: CreateAgentArgs) -> Self {
        CreateAgent {
            name: Some(val.name),
            agent_type: Some(val.agent_type.to_string()),
        }
    }
}

/// Update an agent
///
/// The result is not merged with the stored agent: fields left out take
/// their defaults.
#[derive(Args)]
pub struct UpdateAgentArgs {
    #[arg(help = "Identifier of the agent to update")]
    pub id: String,
    #[arg(short, long, help = "New display name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New status")]
    pub status: Option<AgentStatusArg>,
    #[arg(short = 't', long = "type", help = "New specialization")]
    pub agent_type: Option<AgentTypeArg>,
    #[arg(long, help = "Experience points")]
    pub xp: Option<u64>,
    #[arg(long, help = "Level, at least 1")]
    pub level: Option<u32>,
    #[arg(long, help = "Number of completed tasks")]
    pub tasks_completed: Option<u64>,
}

impl From<UpdateAgentArgs> for UpdateAgent {
    fn from(val: UpdateAgentArgs) -> Self {
        UpdateAgent {
            id: val.id,
            name: val.name,
            status: wire(val.status),
            agent_type: wire(val.agent_type),
            xp: val.xp,
            level: val.level,
            tasks_completed: val.tasks_completed,
        }
    }
}

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List agents
    #[command(alias = "ls")]
    List(ListAgentsArgs),
    /// Show details of an agent
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Recruit a new agent
    #[command(alias = "c")]
    Create(CreateAgentArgs),
    /// Update an agent
    #[command(alias = "u")]
    Update(UpdateAgentArgs),
    /// Delete an agent
    #[command(alias = "d")]
    Delete(DeleteArgs),
}

// ============================================================================
// Quests
// ============================================================================

#[derive(Args)]
pub struct ListQuestsArgs {
    #[arg(short, long, help = "Only show quests with this status")]
    pub status: Option<QuestStatusArg>,
    #[arg(short, long, help = "Only show quests of this difficulty")]
    pub difficulty: Option<DifficultyArg>,
}

impl From<ListQuestsArgs> for ListQuests {
    fn from(val: ListQuestsArgs) -> Self {
        ListQuests {
            status: wire(val.status),
            difficulty: wire(val.difficulty),
        }
    }
}

/// Create a quest
///
/// New quests are pending with no progress.
#[derive(Args)]
pub struct CreateQuestArgs {
    /// Title of the quest
    pub title: String,
    #[arg(long, help = "What the quest is about")]
    pub description: String,
    #[arg(long, help = "Difficulty tier")]
    pub difficulty: DifficultyArg,
    #[arg(long, help = "XP awarded on completion (default 100)")]
    pub xp_reward: Option<u64>,
    #[arg(long, help = "Free-form time estimate (default \"1 hour\")")]
    pub estimated_time: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Assigned agent IDs as comma-separated list"
    )]
    pub agents: Vec<String>,
}

impl From<CreateQuestArgs> for CreateQuest {
    fn from(val: CreateQuestArgs) -> Self {
        CreateQuest {
            title: Some(val.title),
            description: Some(val.description),
            difficulty: Some(val.difficulty.to_string()),
            xp_reward: val.xp_reward,
            estimated_time: val.estimated_time,
            assigned_agents: Some(val.agents),
        }
    }
}

/// Update a quest's status, progress or assignment
#[derive(Args)]
pub struct UpdateQuestArgs {
    #[arg(help = "Identifier of the quest to update")]
    pub id: String,
    #[arg(short, long, help = "New status (defaults to active)")]
    pub status: Option<QuestStatusArg>,
    #[arg(short, long, help = "Completion percentage between 0 and 100")]
    pub progress: Option<f64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Assigned agent IDs as comma-separated list"
    )]
    pub agents: Option<Vec<String>>,
}

impl From<UpdateQuestArgs> for UpdateQuest {
    fn from(val: UpdateQuestArgs) -> Self {
        UpdateQuest {
            id: val.id,
            status: wire(val.status),
            progress: val.progress,
            assigned_agents: val.agents,
        }
    }
}

#[derive(Subcommand)]
pub enum QuestCommands {
    /// List quests
    #[command(alias = "ls")]
    List(ListQuestsArgs),
    /// Show a quest with its task checklist
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Create a quest
    #[command(alias = "c")]
    Create(CreateQuestArgs),
    /// Update a quest's status, progress or assignment
    #[command(alias = "u")]
    Update(UpdateQuestArgs),
    /// Delete a quest
    #[command(alias = "d")]
    Delete(DeleteArgs),
}

// ============================================================================
// Workflows and subscriptions
// ============================================================================

#[derive(Args)]
pub struct ListWorkflowsArgs {
    #[arg(short, long, help = "Only show templates in this category")]
    pub category: Option<String>,
}

impl From<ListWorkflowsArgs> for ListWorkflows {
    fn from(val: ListWorkflowsArgs) -> Self {
        ListWorkflows {
            category: val.category,
        }
    }
}

/// Create a workflow template
#[derive(Args)]
pub struct CreateWorkflowArgs {
    /// Name of the template
    pub name: String,
    #[arg(short, long, help = "Category of the template")]
    pub category: String,
    #[arg(
        long,
        value_delimiter = ',',
        required = true,
        help = "Step names as comma-separated list"
    )]
    pub steps: Vec<String>,
    #[arg(short, long, help = "What the workflow does")]
    pub description: Option<String>,
    #[arg(long, help = "Free-form duration estimate")]
    pub estimated_duration: Option<String>,
}

impl From<CreateWorkflowArgs> for CreateWorkflow {
    fn from(val: CreateWorkflowArgs) -> Self {
        CreateWorkflow {
            name: Some(val.name),
            category: Some(val.category),
            steps: Some(val.steps.into_iter().map(serde_json::Value::String).collect()),
            description: val.description,
            estimated_duration: val.estimated_duration,
        }
    }
}

#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// List workflow templates
    #[command(alias = "ls")]
    List(ListWorkflowsArgs),
    /// Show a workflow template
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Create a workflow template
    #[command(alias = "c")]
    Create(CreateWorkflowArgs),
}

#[derive(Args)]
pub struct ShowSubscriptionArgs {
    #[arg(short, long, help = "User whose subscription to show")]
    pub user_id: String,
}

impl From<ShowSubscriptionArgs> for SubscriptionQuery {
    fn from(val: ShowSubscriptionArgs) -> Self {
        SubscriptionQuery {
            user_id: Some(val.user_id),
        }
    }
}

#[derive(Args)]
pub struct CreateSubscriptionArgs {
    #[arg(short, long, help = "Subscribing user")]
    pub user_id: String,
    #[arg(short, long, help = "Plan to subscribe to")]
    pub plan: PlanArg,
    #[arg(long, help = "Billing cycle (default monthly)")]
    pub billing_cycle: Option<String>,
}

impl From<CreateSubscriptionArgs> for CreateSubscription {
    fn from(val: CreateSubscriptionArgs) -> Self {
        CreateSubscription {
            user_id: Some(val.user_id),
            plan: Some(val.plan.to_string()),
            billing_cycle: val.billing_cycle,
        }
    }
}

#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Show a user's subscription
    #[command(alias = "s")]
    Show(ShowSubscriptionArgs),
    /// Subscribe a user to a plan
    #[command(alias = "c")]
    Create(CreateSubscriptionArgs),
}

// ============================================================================
// Server and simulation
// ============================================================================

/// Start the HTTP API server
#[derive(Args)]
pub struct ServeArgs {
    #[arg(
        long,
        env = "QF_BIND",
        default_value = "127.0.0.1:3000",
        help = "Address to listen on"
    )]
    pub bind: SocketAddr,
    #[arg(
        long,
        env = "QF_TICK_MS",
        default_value_t = 2000,
        help = "Dashboard simulation tick interval in milliseconds"
    )]
    pub tick_ms: u64,
}

/// Run the dashboard simulation
#[derive(Args)]
pub struct SimulateArgs {
    #[arg(short = 'n', long, default_value_t = 5, help = "Number of ticks to run")]
    pub ticks: u64,
    #[arg(
        long,
        env = "QF_TICK_MS",
        default_value_t = 2000,
        help = "Milliseconds between ticks, 0 to run without waiting"
    )]
    pub tick_ms: u64,
    #[arg(long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs CLI commands against a registry and renders the results.
pub struct Cli {
    registry: Registry,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(registry: Registry, renderer: TerminalRenderer) -> Self {
        Self { registry, renderer }
    }

    pub fn handle_agent_command(&self, command: AgentCommands) -> Result<()> {
        match command {
            AgentCommands::List(args) => self.list_agents(&args.into()),
            AgentCommands::Show(args) => {
                let agent = self
                    .registry
                    .get_agent(&args.into())
                    .context("Failed to show agent")?;
                self.renderer.render(&agent.to_string())
            }
            AgentCommands::Create(args) => {
                let agent = self
                    .registry
                    .create_agent(&args.into())
                    .context("Failed to create agent")?;
                self.renderer.render(&CreateResult::new(agent).to_string())
            }
            AgentCommands::Update(args) => {
                let params: UpdateAgent = args.into();
                let changes = agent_changes(&params);
                let agent = self
                    .registry
                    .update_agent(&params)
                    .context("Failed to update agent")?;
                self.renderer
                    .render(&UpdateResult::with_changes(agent, changes).to_string())
            }
            AgentCommands::Delete(args) => {
                let deleted = self
                    .registry
                    .delete_agent(&args.into())
                    .context("Failed to delete agent")?;
                self.renderer.render(&DeleteResult(deleted).to_string())
            }
        }
    }

    pub fn list_agents(&self, params: &ListAgents) -> Result<()> {
        let page = self
            .registry
            .list_agents(params)
            .context("Failed to list agents")?;
        self.renderer.render(&Agents(page).to_string())
    }

    pub fn handle_quest_command(&self, command: QuestCommands) -> Result<()> {
        match command {
            QuestCommands::List(args) => {
                let page = self
                    .registry
                    .list_quests(&args.into())
                    .context("Failed to list quests")?;
                self.renderer.render(&Quests(page).to_string())
            }
            QuestCommands::Show(args) => {
                let quest = self
                    .registry
                    .get_quest(&args.into())
                    .context("Failed to show quest")?;
                self.renderer.render(&quest.to_string())
            }
            QuestCommands::Create(args) => {
                let quest = self
                    .registry
                    .create_quest(&args.into())
                    .context("Failed to create quest")?;
                self.renderer.render(&CreateResult::new(quest).to_string())
            }
            QuestCommands::Update(args) => {
                let params: UpdateQuest = args.into();
                let changes = quest_changes(&params);
                let progress = self
                    .registry
                    .update_quest(&params)
                    .context("Failed to update quest")?;
                self.renderer
                    .render(&UpdateResult::with_changes(progress, changes).to_string())
            }
            QuestCommands::Delete(args) => {
                let deleted = self
                    .registry
                    .delete_quest(&args.into())
                    .context("Failed to delete quest")?;
                self.renderer.render(&DeleteResult(deleted).to_string())
            }
        }
    }

    pub fn handle_workflow_command(&self, command: WorkflowCommands) -> Result<()> {
        match command {
            WorkflowCommands::List(args) => {
                let page = self
                    .registry
                    .list_workflows(&args.into())
                    .context("Failed to list workflows")?;
                self.renderer.render(&Workflows(page).to_string())
            }
            WorkflowCommands::Show(args) => {
                let workflow = self
                    .registry
                    .get_workflow(&args.into())
                    .context("Failed to show workflow")?;
                self.renderer.render(&workflow.to_string())
            }
            WorkflowCommands::Create(args) => {
                let workflow = self
                    .registry
                    .create_workflow(&args.into())
                    .context("Failed to create workflow")?;
                self.renderer.render(&CreateResult::new(workflow).to_string())
            }
        }
    }

    pub fn handle_subscription_command(&self, command: SubscriptionCommands) -> Result<()> {
        match command {
            SubscriptionCommands::Show(args) => {
                let subscription = self
                    .registry
                    .get_subscription(&args.into())
                    .context("Failed to show subscription")?;
                self.renderer.render(&subscription.to_string())
            }
            SubscriptionCommands::Create(args) => {
                let subscription = self
                    .registry
                    .create_subscription(&args.into())
                    .context("Failed to create subscription")?;
                self.renderer
                    .render(&CreateResult::new(subscription).to_string())
            }
        }
    }

    /// Runs the dashboard simulation for `args.ticks` ticks and renders the
    /// final snapshot.
    pub async fn simulate(&self, args: SimulateArgs) -> Result<()> {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sim = Simulation::new(SimulationConfig::default(), Arc::new(SystemClock));

        let snapshot = if args.tick_ms == 0 {
            for _ in 0..args.ticks {
                sim.tick(&mut rng);
            }
            sim.snapshot()
        } else {
            let interval = Duration::from_millis(args.tick_ms);
            info!("Running {} ticks every {:?}", args.ticks, interval);
            let sim = Arc::new(RwLock::new(sim));
            let mut handle = SimulationRunner::spawn_with_rng(sim.clone(), interval, rng);
            if !handle.wait_for_ticks(args.ticks).await {
                anyhow::bail!("Simulation stopped before completing {} ticks", args.ticks);
            }
            handle.stop();
            let snapshot = sim.read().await.snapshot();
            snapshot
        };

        self.renderer.render(&snapshot.to_string())
    }
}

fn agent_changes(params: &UpdateAgent) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(name) = &params.name {
        changes.push(format!("name → {name}"));
    }
    if let Some(status) = &params.status {
        changes.push(format!("status → {status}"));
    }
    if let Some(agent_type) = &params.agent_type {
        changes.push(format!("type → {agent_type}"));
    }
    if let Some(xp) = params.xp {
        changes.push(format!("xp → {xp}"));
    }
    if let Some(level) = params.level {
        changes.push(format!("level → {level}"));
    }
    if let Some(tasks) = params.tasks_completed {
        changes.push(format!("tasks completed → {tasks}"));
    }
    changes
}

fn quest_changes(params: &UpdateQuest) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(status) = &params.status {
        changes.push(format!("status → {status}"));
    }
    if let Some(progress) = params.progress {
        changes.push(format!("progress → {progress}%"));
    }
    if let Some(agents) = &params.assigned_agents {
        changes.push(format!("agents → {}", agents.join(", ")));
    }
    changes
}
