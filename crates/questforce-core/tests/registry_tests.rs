mod common;

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    thread,
};

use common::{create_test_registry, NOW};
use questforce_core::{
    models::{AgentFilter, QuestProgress},
    repository::{seed, AllRecords, RecordFilter, Repository},
    AgentStatus, CreateAgent, CreateQuest, ErrorKind, Id, ListAgents, ListQuests, Quest,
    QuestStatus, RegistryBuilder, UpdateQuest,
};

#[test]
fn test_quest_lifecycle() {
    let (_clock, registry) = create_test_registry();

    let quest = registry
        .create_quest(&CreateQuest {
            title: Some("Integration Test".to_string()),
            description: Some("Testing the quest flow".to_string()),
            difficulty: Some("hard".to_string()),
            assigned_agents: Some(vec!["1".to_string(), "3".to_string()]),
            ..Default::default()
        })
        .expect("Failed to create quest");
    assert_eq!(quest.status, QuestStatus::Pending);
    assert_eq!(quest.created_at, NOW);

    let change = registry
        .update_quest(&UpdateQuest {
            id: quest.id.clone(),
            status: Some("active".to_string()),
            progress: Some(42.5),
            assigned_agents: Some(quest.assigned_agents.clone()),
        })
        .expect("Failed to update quest");
    assert_eq!(change.id, quest.id);
    assert_eq!(change.progress, 42.5);
    assert_eq!(change.assigned_agents, vec!["1", "3"]);

    let deleted = registry
        .delete_quest(&Id::new(quest.id.clone()))
        .expect("Failed to delete quest");
    assert_eq!(deleted.id, quest.id);

    // Nothing is retained, so the new quest never appears on the board.
    let board = registry.list_quests(&ListQuests::default()).unwrap();
    assert!(board.data.iter().all(|q| q.id != quest.id));
    assert_eq!(board.total, 3);
}

#[test]
fn test_concurrent_creates_issue_unique_ids() {
    let (_clock, registry) = create_test_registry();
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..25)
                    .map(|n| {
                        registry
                            .create_agent(&CreateAgent {
                                name: Some(format!("Worker {worker}-{n}")),
                                agent_type: Some("coding".to_string()),
                            })
                            .expect("Failed to create agent")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 200);
    for seeded in seed::agents() {
        assert!(!ids.contains(&seeded.id));
    }
}

#[test]
fn test_not_found_versus_validation() {
    let (_clock, registry) = create_test_registry();

    assert_eq!(
        registry.get_quest(&Id::new("nope")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        registry
            .create_agent(&CreateAgent::default())
            .unwrap_err()
            .kind(),
        ErrorKind::Validation
    );
}

/// Quest store that records every progress update it receives.
#[derive(Default)]
struct RecordingQuests {
    updates: Mutex<Vec<QuestProgress>>,
}

impl Repository<Quest> for RecordingQuests {
    fn get(&self, _id: &str) -> questforce_core::Result<Option<Quest>> {
        Ok(None)
    }

    fn list(&self, _filter: &dyn RecordFilter<Quest>) -> questforce_core::Result<Vec<Quest>> {
        Ok(vec![])
    }

    fn create(&self, record: Quest) -> questforce_core::Result<Quest> {
        Ok(record)
    }

    fn update(&self, change: QuestProgress) -> questforce_core::Result<QuestProgress> {
        self.updates
            .lock()
            .map_err(|_| questforce_core::QuestforceError::internal("poisoned"))?
            .push(change.clone());
        Ok(change)
    }

    fn delete(&self, _id: &str) -> questforce_core::Result<()> {
        Ok(())
    }
}

#[test]
fn test_substitute_repository() {
    let registry = RegistryBuilder::new()
        .with_quests(RecordingQuests::default())
        .build()
        .expect("Failed to create registry");

    // An empty store starts quest ids at q1.
    let quest = registry
        .create_quest(&CreateQuest {
            title: Some("Fresh".to_string()),
            description: Some("First quest".to_string()),
            difficulty: Some("easy".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(quest.id, "q1");

    assert!(registry.list_quests(&ListQuests::default()).unwrap().is_empty());
    assert_eq!(
        registry.get_quest(&Id::new("q1")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_seed_filters_agree_with_list() {
    let (_clock, registry) = create_test_registry();
    let page = registry
        .list_agents(&ListAgents {
            status: Some("idle".to_string()),
            limit: Some(5),
        })
        .unwrap();

    let filter = AgentFilter {
        status: Some("idle".to_string()),
    };
    let expected: Vec<_> = seed::agents()
        .into_iter()
        .filter(|a| filter.matches(a))
        .collect();
    assert_eq!(page.data, expected);
    assert!(page.data.iter().all(|a| a.status == AgentStatus::Idle));
    assert_eq!(
        seed::agents().len(),
        questforce_core::repository::SeedRepository::new(seed::agents())
            .list(&AllRecords)
            .unwrap()
            .len()
    );
}
