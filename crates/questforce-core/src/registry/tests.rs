//! Tests for the registry module.

use std::{collections::HashSet, sync::Arc};

use jiff::{SignedDuration, Timestamp};

use super::*;
use crate::{
    clock::ManualClock,
    error::{ErrorKind, QuestforceError},
    models::{AgentStatus, AgentType, Difficulty, Plan, QuestStatus},
    params::{
        CreateAgent, CreateQuest, CreateSubscription, CreateWorkflow, Id, ListAgents, ListQuests,
        ListWorkflows, SubscriptionQuery, UpdateAgent, UpdateQuest,
    },
    repository::SeedRepository,
};

/// 2026-03-01T12:00:00Z
const NOW: Timestamp = Timestamp::constant(1_772_366_400, 0);

/// Helper function to create a registry over the seed data with a fixed clock
fn create_test_registry() -> (Arc<ManualClock>, Registry) {
    let clock = Arc::new(ManualClock::new(NOW));
    let registry = RegistryBuilder::new()
        .with_clock(clock.clone())
        .build()
        .expect("Failed to create registry");
    (clock, registry)
}

fn create_agent_params(name: &str, agent_type: &str) -> CreateAgent {
    CreateAgent {
        name: Some(name.to_string()),
        agent_type: Some(agent_type.to_string()),
    }
}

fn assert_invalid_field(err: QuestforceError, expected_field: &str) {
    match err {
        QuestforceError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_list_agents_by_status() {
    let (_clock, registry) = create_test_registry();

    let page = registry
        .list_agents(&ListAgents {
            status: Some("active".to_string()),
            limit: None,
        })
        .expect("Failed to list agents");

    assert_eq!(page.total, 2);
    assert_eq!(page.limit, Some(10));
    let ids: Vec<_> = page.data.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_list_agents_limit_truncates_but_counts_all() {
    let (_clock, registry) = create_test_registry();

    let page = registry
        .list_agents(&ListAgents {
            status: None,
            limit: Some(1),
        })
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.limit, Some(1));
}

#[test]
fn test_list_agents_unknown_status_matches_nothing() {
    let (_clock, registry) = create_test_registry();

    let page = registry
        .list_agents(&ListAgents {
            status: Some("sleeping".to_string()),
            limit: None,
        })
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_get_agent() {
    let (_clock, registry) = create_test_registry();

    let agent = registry.get_agent(&Id::new("3")).unwrap();
    assert_eq!(agent.name, "Shaltz Envoy");
    assert_eq!(agent.agent_type, AgentType::Deployment);

    let err = registry.get_agent(&Id::new("99")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Agent not found");
}

#[test]
fn test_create_agent_defaults() {
    let (_clock, registry) = create_test_registry();

    let agent = registry
        .create_agent(&create_agent_params("Nova", "testing"))
        .expect("Failed to create agent");

    assert_eq!(agent.name, "Nova");
    assert_eq!(agent.agent_type, AgentType::Testing);
    assert_eq!(agent.status, AgentStatus::Idle);
    assert_eq!(agent.xp, 0);
    assert_eq!(agent.level, 1);
    assert_eq!(agent.tasks_completed, 0);
    assert!(agent.skills.is_empty());
    assert_eq!(agent.current_task, None);
    assert_eq!(agent.created_at, NOW);
}

#[test]
fn test_create_agent_ids_are_unique_and_avoid_seed() {
    let (_clock, registry) = create_test_registry();

    let mut seen: HashSet<String> = ["1", "2", "3"].iter().map(ToString::to_string).collect();
    for _ in 0..50 {
        let agent = registry
            .create_agent(&create_agent_params("Clone", "coding"))
            .unwrap();
        assert!(seen.insert(agent.id.clone()), "duplicate id {}", agent.id);
    }
}

#[test]
fn test_create_agent_validation() {
    let (_clock, registry) = create_test_registry();

    let err = registry
        .create_agent(&CreateAgent {
            name: None,
            agent_type: Some("coding".to_string()),
        })
        .unwrap_err();
    assert_invalid_field(err, "name");

    let err = registry
        .create_agent(&create_agent_params("Nova", "cooking"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_invalid_field(err, "type");
}

#[test]
fn test_update_agent_does_not_merge() {
    let (clock, registry) = create_test_registry();
    clock.advance(SignedDuration::from_mins(5));

    let updated = registry
        .update_agent(&UpdateAgent {
            id: "1".to_string(),
            xp: Some(40),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(updated.id, "1");
    assert_eq!(updated.name, "Updated Agent");
    assert_eq!(updated.status, AgentStatus::Idle);
    assert_eq!(updated.agent_type, AgentType::Coding);
    assert_eq!(updated.xp, 40);
    assert_eq!(updated.level, 1);
    assert_eq!(updated.tasks_completed, 0);
    let expected = NOW.checked_add(SignedDuration::from_mins(5)).unwrap();
    assert_eq!(updated.updated_at, Some(expected));

    // The seed record is untouched.
    let stored = registry.get_agent(&Id::new("1")).unwrap();
    assert_eq!(stored.name, "Synth Coder");
    assert_eq!(stored.xp, 1250);
}

#[test]
fn test_update_agent_rejects_bad_status() {
    let (_clock, registry) = create_test_registry();

    let err = registry
        .update_agent(&UpdateAgent {
            id: "2".to_string(),
            status: Some("asleep".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_invalid_field(err, "status");
}

#[test]
fn test_delete_agent_always_succeeds() {
    let (_clock, registry) = create_test_registry();

    for id in ["2", "2", "does-not-exist"] {
        let deleted = registry.delete_agent(&Id::new(id)).unwrap();
        assert_eq!(deleted.message, "Agent deleted successfully");
        assert_eq!(deleted.id, id);
    }
    assert!(registry.get_agent(&Id::new("2")).is_ok());
}

#[test]
fn test_list_quests_filters() {
    let (_clock, registry) = create_test_registry();

    let all = registry.list_quests(&ListQuests::default()).unwrap();
    assert_eq!(all.total, 3);
    assert_eq!(all.limit, None);

    let completed = registry
        .list_quests(&ListQuests {
            status: Some("completed".to_string()),
            difficulty: None,
        })
        .unwrap();
    assert_eq!(completed.total, 1);
    assert_eq!(completed.data[0].id, "q2");

    let none = registry
        .list_quests(&ListQuests {
            status: Some("completed".to_string()),
            difficulty: Some("hard".to_string()),
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_get_quest_with_tasks() {
    let (_clock, registry) = create_test_registry();

    let quest = registry.get_quest(&Id::new("q1")).unwrap();
    assert_eq!(quest.tasks.len(), 4);

    let err = registry.get_quest(&Id::new("q42")).unwrap_err();
    assert_eq!(err.to_string(), "Quest not found");
}

#[test]
fn test_create_quest_defaults() {
    let (_clock, registry) = create_test_registry();

    let quest = registry
        .create_quest(&CreateQuest {
            title: Some("Ship it".to_string()),
            description: Some("Release the thing".to_string()),
            difficulty: Some("medium".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(quest.id, "q4");
    assert_eq!(quest.status, QuestStatus::Pending);
    assert_eq!(quest.difficulty, Difficulty::Medium);
    assert_eq!(quest.xp_reward, 100);
    assert_eq!(quest.estimated_time, "1 hour");
    assert!(quest.assigned_agents.is_empty());
    assert_eq!(quest.progress, 0.0);
    assert_eq!(quest.created_at, NOW);

    let next = registry
        .create_quest(&CreateQuest {
            title: Some("Again".to_string()),
            description: Some("More".to_string()),
            difficulty: Some("easy".to_string()),
            xp_reward: Some(250),
            estimated_time: Some("3 days".to_string()),
            assigned_agents: Some(vec!["1".to_string()]),
        })
        .unwrap();
    assert_eq!(next.id, "q5");
    assert_eq!(next.xp_reward, 250);
    assert_eq!(next.estimated_time, "3 days");
    assert_eq!(next.assigned_agents, vec!["1".to_string()]);
}

#[test]
fn test_create_quest_reports_first_missing_field() {
    let (_clock, registry) = create_test_registry();

    let err = registry
        .create_quest(&CreateQuest {
            title: Some("Ship it".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_invalid_field(err, "description");

    let err = registry
        .create_quest(&CreateQuest {
            title: Some("Ship it".to_string()),
            description: Some("Now".to_string()),
            difficulty: Some("legendary".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_invalid_field(err, "difficulty");
}

#[test]
fn test_update_quest_echoes_progress() {
    let (_clock, registry) = create_test_registry();

    let change = registry
        .update_quest(&UpdateQuest {
            id: "q3".to_string(),
            status: Some("completed".to_string()),
            progress: Some(100.0),
            assigned_agents: None,
        })
        .unwrap();
    assert_eq!(change.status, QuestStatus::Completed);
    assert_eq!(change.progress, 100.0);
    assert!(change.assigned_agents.is_empty());
    assert_eq!(change.updated_at, NOW);

    let defaults = registry
        .update_quest(&UpdateQuest {
            id: "unknown".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(defaults.status, QuestStatus::Active);
    assert_eq!(defaults.progress, 0.0);
}

#[test]
fn test_update_quest_rejects_out_of_range_progress() {
    let (_clock, registry) = create_test_registry();

    for progress in [-1.0, 100.5, f64::NAN] {
        let err = registry
            .update_quest(&UpdateQuest {
                id: "q1".to_string(),
                progress: Some(progress),
                ..Default::default()
            })
            .unwrap_err();
        assert_invalid_field(err, "progress");
    }
}

#[test]
fn test_delete_quest() {
    let (_clock, registry) = create_test_registry();

    let deleted = registry.delete_quest(&Id::new("q1")).unwrap();
    assert_eq!(deleted.message, "Quest deleted successfully");
}

#[test]
fn test_workflows() {
    let (_clock, registry) = create_test_registry();

    let deployment = registry
        .list_workflows(&ListWorkflows {
            category: Some("deployment".to_string()),
        })
        .unwrap();
    assert!(deployment.data.iter().all(|w| w.category == "deployment"));
    assert!(registry.get_workflow(&Id::new("w1")).is_ok());
    assert_eq!(
        registry.get_workflow(&Id::new("w0")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_create_workflow_counts_steps() {
    let (_clock, registry) = create_test_registry();

    let workflow = registry
        .create_workflow(&CreateWorkflow {
            name: Some("Nightly".to_string()),
            category: Some("deployment".to_string()),
            steps: Some(vec![serde_json::json!({"name": "build"}), serde_json::json!("test")]),
            description: None,
            estimated_duration: None,
        })
        .unwrap();

    assert_eq!(workflow.id, "w4");
    assert_eq!(workflow.steps, 2);
    assert_eq!(workflow.description, "");
    assert_eq!(workflow.estimated_duration, "Unknown");
    assert_eq!(workflow.popularity, 0);

    let err = registry
        .create_workflow(&CreateWorkflow {
            name: Some("Empty".to_string()),
            category: Some("deployment".to_string()),
            steps: Some(vec![]),
            description: None,
            estimated_duration: None,
        })
        .unwrap_err();
    assert_invalid_field(err, "steps");
}

#[test]
fn test_get_subscription_for_any_user() {
    let (_clock, registry) = create_test_registry();

    let sub = registry
        .get_subscription(&SubscriptionQuery {
            user_id: Some("user-42".to_string()),
        })
        .unwrap();
    assert_eq!(sub.id, "sub_123");
    assert_eq!(sub.user_id, "user-42");
    assert_eq!(sub.plan, Plan::Professional);

    let err = registry
        .get_subscription(&SubscriptionQuery { user_id: None })
        .unwrap_err();
    assert_invalid_field(err, "userId");
}

#[test]
fn test_create_subscription_period() {
    let (_clock, registry) = create_test_registry();

    let sub = registry
        .create_subscription(&CreateSubscription {
            user_id: Some("user-7".to_string()),
            plan: Some("starter".to_string()),
            billing_cycle: None,
        })
        .unwrap();

    assert_eq!(sub.id, "sub_124");
    assert_eq!(sub.status, "active");
    assert_eq!(sub.billing_cycle, "monthly");
    assert_eq!(sub.max_agents, 3);
    assert_eq!(sub.amount, 29);
    assert_eq!(sub.current_period_start, NOW);
    assert_eq!(
        sub.current_period_end.duration_since(sub.current_period_start),
        SignedDuration::from_hours(720)
    );

    let err = registry
        .create_subscription(&CreateSubscription {
            user_id: Some("user-7".to_string()),
            plan: Some("platinum".to_string()),
            billing_cycle: None,
        })
        .unwrap_err();
    assert_invalid_field(err, "plan");
}

#[test]
fn test_custom_store_positions_issuers() {
    let mut roster = crate::repository::seed::agents();
    roster[0].id = "41".to_string();
    let registry = RegistryBuilder::new()
        .with_agents(SeedRepository::new(roster))
        .build()
        .unwrap();

    let agent = registry
        .create_agent(&create_agent_params("Nova", "coding"))
        .unwrap();
    assert_eq!(agent.id, "42");
}
