//! HTTP surface over the core handlers
//!
//! Every route deserializes into a core parameter type, calls the
//! [`Registry`], and wraps the result in a `{data}` envelope. Failures leave
//! as [`ApiError`] so clients only ever see `{error}` bodies.
//!
//! ```text
//! request ─▶ ApiJson/ApiQuery ─▶ Registry ─▶ {data} | ApiError ─▶ {error}
//! ```
//!
//! The server also owns the dashboard simulation: a runner ticks it on the
//! configured interval and `/api/dashboard` serves its latest snapshot.

mod error;
mod handlers;

#[cfg(test)]
mod tests;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    http::Method,
    routing::get,
    Router,
};
use log::{error, info};
use questforce_core::{
    simulation::{Simulation, SimulationConfig, SimulationRunner},
    Registry, SystemClock,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::{Any, CorsLayer};

use crate::cli::ServeArgs;

pub use error::{create_panic_handler, ApiError, ApiJson, ApiQuery};

/// Runtime settings for `qf serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub tick_interval: Duration,
}

impl From<ServeArgs> for ServerConfig {
    fn from(val: ServeArgs) -> Self {
        ServerConfig {
            bind: val.bind,
            tick_interval: Duration::from_millis(val.tick_ms),
        }
    }
}

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub simulation: Arc<RwLock<Simulation>>,
}

impl AppState {
    pub fn new(registry: Registry, simulation: Arc<RwLock<Simulation>>) -> Self {
        Self {
            registry: Arc::new(registry),
            simulation,
        }
    }
}

/// Builds the API router with CORS and panic recovery applied.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/agents",
            get(handlers::list_agents).post(handlers::create_agent),
        )
        .route(
            "/api/agents/{id}",
            get(handlers::get_agent)
                .put(handlers::update_agent)
                .delete(handlers::delete_agent),
        )
        .route(
            "/api/quests",
            get(handlers::list_quests).post(handlers::create_quest),
        )
        .route(
            "/api/quests/{id}",
            get(handlers::get_quest)
                .put(handlers::update_quest)
                .delete(handlers::delete_quest),
        )
        .route(
            "/api/workflows",
            get(handlers::list_workflows).post(handlers::create_workflow),
        )
        .route("/api/workflows/{id}", get(handlers::get_workflow))
        .route(
            "/api/subscriptions",
            get(handlers::get_subscription).post(handlers::create_subscription),
        )
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .layer(create_panic_handler())
        .layer(cors)
        .with_state(state)
}

/// Serves the API until ctrl-c, ticking the dashboard simulation meanwhile.
pub async fn run_server(config: ServerConfig, registry: Registry) -> Result<()> {
    let simulation = Simulation::new(
        SimulationConfig::default().with_tick_interval(config.tick_interval),
        Arc::new(SystemClock),
    );
    let simulation = Arc::new(RwLock::new(simulation));
    let runner = SimulationRunner::spawn(simulation.clone(), config.tick_interval);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(
        "QuestForce API listening on {} (dashboard tick every {:?})",
        listener.local_addr().context("Failed to read local address")?,
        config.tick_interval
    );

    axum::serve(listener, router(AppState::new(registry, simulation)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    runner.stop();
    info!("Dashboard simulation stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
