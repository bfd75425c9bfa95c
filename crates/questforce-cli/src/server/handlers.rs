//! Route handlers for the resource and dashboard endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use log::info;
use questforce_core::{
    models::{Agent, Deleted, Page, Quest, QuestProgress, Subscription, Workflow},
    params::*,
    Snapshot,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiError, ApiJson, ApiQuery, AppState};

type ApiResult<T> = Result<T, ApiError>;

/// Success envelope for single records.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

fn data<T>(data: T) -> Json<Data<T>> {
    Json(Data { data })
}

// Agents

pub async fn list_agents(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListAgents>,
) -> ApiResult<Json<Page<Agent>>> {
    info!("GET /api/agents {params:?}");
    Ok(Json(state.registry.list_agents(&params)?))
}

pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Data<Agent>>> {
    info!("GET /api/agents/{id}");
    Ok(data(state.registry.get_agent(&Id::new(id))?))
}

pub async fn create_agent(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateAgent>,
) -> ApiResult<(StatusCode, Json<Data<Agent>>)> {
    info!("POST /api/agents {params:?}");
    let agent = state.registry.create_agent(&params)?;
    Ok((StatusCode::CREATED, data(agent)))
}

pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(params): ApiJson<UpdateAgent>,
) -> ApiResult<Json<Data<Agent>>> {
    info!("PUT /api/agents/{id} {params:?}");
    let params = UpdateAgent { id, ..params };
    Ok(data(state.registry.update_agent(&params)?))
}

pub async fn delete_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Deleted>> {
    info!("DELETE /api/agents/{id}");
    Ok(Json(state.registry.delete_agent(&Id::new(id))?))
}

// Quests

pub async fn list_quests(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListQuests>,
) -> ApiResult<Json<Page<Quest>>> {
    info!("GET /api/quests {params:?}");
    Ok(Json(state.registry.list_quests(&params)?))
}

pub async fn get_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Data<Quest>>> {
    info!("GET /api/quests/{id}");
    Ok(data(state.registry.get_quest(&Id::new(id))?))
}

pub async fn create_quest(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateQuest>,
) -> ApiResult<(StatusCode, Json<Data<Quest>>)> {
    info!("POST /api/quests {params:?}");
    let quest = state.registry.create_quest(&params)?;
    Ok((StatusCode::CREATED, data(quest)))
}

pub async fn update_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(params): ApiJson<UpdateQuest>,
) -> ApiResult<Json<Data<QuestProgress>>> {
    info!("PUT /api/quests/{id} {params:?}");
    let params = UpdateQuest { id, ..params };
    Ok(data(state.registry.update_quest(&params)?))
}

pub async fn delete_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Deleted>> {
    info!("DELETE /api/quests/{id}");
    Ok(Json(state.registry.delete_quest(&Id::new(id))?))
}

// Workflows

pub async fn list_workflows(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListWorkflows>,
) -> ApiResult<Json<Page<Workflow>>> {
    info!("GET /api/workflows {params:?}");
    Ok(Json(state.registry.list_workflows(&params)?))
}

pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Data<Workflow>>> {
    info!("GET /api/workflows/{id}");
    Ok(data(state.registry.get_workflow(&Id::new(id))?))
}

pub async fn create_workflow(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateWorkflow>,
) -> ApiResult<(StatusCode, Json<Data<Workflow>>)> {
    info!("POST /api/workflows {params:?}");
    let workflow = state.registry.create_workflow(&params)?;
    Ok((StatusCode::CREATED, data(workflow)))
}

// Subscriptions

pub async fn get_subscription(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SubscriptionQuery>,
) -> ApiResult<Json<Data<Subscription>>> {
    info!("GET /api/subscriptions {params:?}");
    Ok(data(state.registry.get_subscription(&params)?))
}

pub async fn create_subscription(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateSubscription>,
) -> ApiResult<(StatusCode, Json<Data<Subscription>>)> {
    info!("POST /api/subscriptions {params:?}");
    let subscription = state.registry.create_subscription(&params)?;
    Ok((StatusCode::CREATED, data(subscription)))
}

// Dashboard

pub async fn dashboard(State(state): State<AppState>) -> Json<Data<Snapshot>> {
    info!("GET /api/dashboard");
    let snapshot = state.simulation.read().await.snapshot();
    data(snapshot)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
