use clap::{Parser, Subcommand};

use crate::cli::{
    AgentCommands, QuestCommands, ServeArgs, SimulateArgs, SubscriptionCommands, WorkflowCommands,
};

/// Command-line client for the QuestForce mock API
///
/// Manage agents, quests, workflow templates and subscriptions against the
/// seed dataset, serve the same operations over HTTP, or run the live
/// dashboard simulation in the terminal.
#[derive(Parser)]
#[command(version, about, name = "qf")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the QuestForce CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage agents
    #[command(alias = "a")]
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },
    /// Manage quests
    #[command(alias = "q")]
    Quest {
        #[command(subcommand)]
        command: QuestCommands,
    },
    /// Browse and create workflow templates
    #[command(alias = "w")]
    Workflow {
        #[command(subcommand)]
        command: WorkflowCommands,
    },
    /// Look up and create subscriptions
    #[command(alias = "sub")]
    Subscription {
        #[command(subcommand)]
        command: SubscriptionCommands,
    },
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Run the live dashboard simulation and print the final snapshot
    #[command(alias = "sim")]
    Simulate(SimulateArgs),
}
