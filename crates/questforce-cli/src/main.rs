//! QuestForce CLI Application
//!
//! Command-line client for the QuestForce mock resource API, plus the
//! `serve` command that exposes the same handlers over HTTP.

mod args;
mod cli;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use questforce_core::{display::OperationStatus, params::ListAgents, RegistryBuilder};
use renderer::TerminalRenderer;
use server::{run_server, ServerConfig};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let registry = RegistryBuilder::new()
        .build()
        .context("Failed to initialize registry")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("QuestForce started");

    match command {
        Some(Agent { command }) => Cli::new(registry, renderer).handle_agent_command(command),
        Some(Quest { command }) => Cli::new(registry, renderer).handle_quest_command(command),
        Some(Workflow { command }) => {
            Cli::new(registry, renderer).handle_workflow_command(command)
        }
        Some(Subscription { command }) => {
            Cli::new(registry, renderer).handle_subscription_command(command)
        }
        Some(Serve(args)) => {
            let config = ServerConfig::from(args);
            info!("Starting QuestForce API server on {}", config.bind);
            run_server(config, registry).await?;
            renderer.render(&OperationStatus::success("Server stopped").to_string())
        }
        Some(Simulate(args)) => Cli::new(registry, renderer).simulate(args).await,
        None => Cli::new(registry, renderer).list_agents(&ListAgents::default()),
    }
}
