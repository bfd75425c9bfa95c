//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use jiff::Timestamp;
use questforce_core::{
    simulation::{Simulation, SimulationConfig},
    ManualClock, RegistryBuilder,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::{router, AppState};

/// 2026-02-01T00:00:00Z
const NOW: Timestamp = Timestamp::constant(1_769_904_000, 0);

fn create_test_router() -> Router {
    let clock = Arc::new(ManualClock::new(NOW));
    let registry = RegistryBuilder::new()
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create registry");
    let simulation = Simulation::new(SimulationConfig::default(), clock);
    router(AppState::new(registry, Arc::new(RwLock::new(simulation))))
}

async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = create_test_router()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).expect("Body was not JSON");
    (status, json)
}

async fn send_raw(method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");
    let response = create_test_router()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, serde_json::from_slice(&bytes).expect("Body was not JSON"))
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_list_agents_filters_by_status() {
    let (status, body) = send("GET", "/api/agents?status=active", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["limit"], 10);
    for agent in body["data"].as_array().expect("data is an array") {
        assert_eq!(agent["status"], "active");
    }

    let (status, body) = send("GET", "/api/agents?status=sleeping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_agents_empty_params_mean_unfiltered() {
    let (status, body) = send("GET", "/api/agents?status=&limit=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_list_agents_bad_limit_is_bad_request() {
    let (status, body) = send("GET", "/api/agents?limit=lots", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_agent() {
    let (status, body) = send("GET", "/api/agents/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Synth Coder");

    let (status, body) = send("GET", "/api/agents/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Agent not found" }));
}

#[tokio::test]
async fn test_create_agent_defaults() {
    let (status, body) = send(
        "POST",
        "/api/agents",
        Some(json!({ "name": "Scout", "type": "testing" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let agent = &body["data"];
    assert_eq!(agent["status"], "idle");
    assert_eq!(agent["xp"], 0);
    assert_eq!(agent["level"], 1);
    assert_eq!(agent["tasksCompleted"], 0);
    assert_eq!(agent["createdAt"], "2026-02-01T00:00:00Z");
    assert_ne!(agent["id"], "1");
}

#[tokio::test]
async fn test_create_agent_rejects_unknown_type() {
    let (status, body) = send(
        "POST",
        "/api/agents",
        Some(json!({ "name": "Scout", "type": "cooking" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "type must be one of: coding, analysis, deployment, testing"
    );

    let (status, body) = send("POST", "/api/agents", Some(json!({ "type": "coding" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let (status, body) = send_raw("POST", "/api/agents", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_agent_takes_path_id() {
    let (status, body) = send(
        "PUT",
        "/api/agents/2",
        Some(json!({ "status": "active", "id": "ignored" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "2");
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["updatedAt"], "2026-02-01T00:00:00Z");

    let (status, _) = send("PUT", "/api/agents/2", Some(json!({ "status": "asleep" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice_succeeds() {
    for _ in 0..2 {
        let (status, body) = send("DELETE", "/api/agents/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Agent deleted successfully", "id": "3" })
        );
    }
}

#[tokio::test]
async fn test_quest_endpoints() {
    let (status, body) = send("GET", "/api/quests?difficulty=medium", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("limit").is_none());

    let (status, body) = send("GET", "/api/quests/q1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress"], json!(65));

    let (status, body) = send("PUT", "/api/quests/q1", Some(json!({ "progress": 42.5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress"], 42.5);
    assert_eq!(body["data"]["status"], "active");

    let (status, _) = send("PUT", "/api/quests/q1", Some(json!({ "progress": 101 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        "POST",
        "/api/quests",
        Some(json!({ "title": "Ship", "description": "Ship it", "difficulty": "hard" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["xpReward"], 100);
}

#[tokio::test]
async fn test_workflow_step_count() {
    let (status, body) = send(
        "POST",
        "/api/workflows",
        Some(json!({ "name": "Nightly", "category": "data", "steps": ["a", "b", "c"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["steps"], 3);

    let (status, _) = send("GET", "/api/workflows/w404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_subscriptions() {
    let (status, body) = send("GET", "/api/subscriptions", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "userId query parameter is required");

    let (status, body) = send("GET", "/api/subscriptions?userId=u-7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["userId"], "u-7");

    let (status, body) = send(
        "POST",
        "/api/subscriptions",
        Some(json!({ "userId": "u-7", "plan": "enterprise" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["maxAgents"], -1);
    assert_eq!(body["data"]["billingCycle"], "monthly");
}

#[tokio::test]
async fn test_dashboard_snapshot() {
    let (status, body) = send("GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ticks"], 0);
    assert_eq!(body["data"]["gauges"]["activeAgents"], 24);
    assert_eq!(body["data"]["activities"].as_array().map(Vec::len), Some(4));
}
