//! The fixed dataset every read is served from.

use jiff::Timestamp;

use crate::models::{
    Agent, AgentStatus, AgentType, Difficulty, Plan, Quest, QuestStatus, QuestTask, Subscription,
    Workflow,
};

/// Identifier of the subscription returned for any user lookup.
pub const SUBSCRIPTION_TEMPLATE_ID: &str = "sub_123";

const DAY: i64 = 86_400;

/// 2026-01-01T00:00:00Z
const JAN_1_2026: i64 = 1_767_225_600;

/// Midnight UTC on the given day of January 2026. Day 32 is February 1.
const fn jan_2026(day: i64) -> Timestamp {
    Timestamp::constant(JAN_1_2026 + (day - 1) * DAY, 0)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn agent(
    id: &str,
    name: &str,
    status: AgentStatus,
    agent_type: AgentType,
    (xp, level, tasks_completed): (u64, u32, u64),
    created_day: i64,
) -> Agent {
    Agent {
        status,
        xp,
        level,
        tasks_completed,
        ..Agent::recruit(
            id.to_string(),
            name.to_string(),
            agent_type,
            jan_2026(created_day),
        )
    }
}

/// The three agents of the demo roster.
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            skills: strings(&["React", "TypeScript", "Node.js"]),
            current_task: Some("Building authentication system".to_string()),
            ..agent(
                "1",
                "Synth Coder",
                AgentStatus::Active,
                AgentType::Coding,
                (1250, 5, 42),
                15,
            )
        },
        Agent {
            skills: strings(&["Data Analysis", "Python", "SQL"]),
            ..agent(
                "2",
                "Codex Operator",
                AgentStatus::Idle,
                AgentType::Analysis,
                (890, 4, 28),
                18,
            )
        },
        Agent {
            skills: strings(&["Kubernetes", "Terraform", "CI/CD"]),
            current_task: Some("Rolling out release 2.1".to_string()),
            ..agent(
                "3",
                "Shaltz Envoy",
                AgentStatus::Active,
                AgentType::Deployment,
                (2100, 7, 67),
                10,
            )
        },
    ]
}

/// The quest board.
pub fn quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "q1".to_string(),
            title: "Deploy Microservice".to_string(),
            description: "Deploy a new microservice to the production cluster".to_string(),
            status: QuestStatus::Active,
            difficulty: Difficulty::Medium,
            xp_reward: 500,
            estimated_time: "2 hours".to_string(),
            assigned_agents: strings(&["1"]),
            progress: 65.0,
            created_at: jan_2026(28),
            completed_at: None,
            tasks: vec![
                QuestTask::new("t1", "Setup environment", true),
                QuestTask::new("t2", "Build Docker image", true),
                QuestTask::new("t3", "Deploy to staging", false),
                QuestTask::new("t4", "Run integration tests", false),
            ],
        },
        Quest {
            id: "q2".to_string(),
            title: "Code Review Sprint".to_string(),
            description: "Review and approve 10 pull requests".to_string(),
            status: QuestStatus::Completed,
            difficulty: Difficulty::Easy,
            xp_reward: 200,
            estimated_time: "1 hour".to_string(),
            assigned_agents: strings(&["2"]),
            progress: 100.0,
            created_at: jan_2026(27),
            completed_at: Some(jan_2026(27)),
            tasks: vec![],
        },
        Quest {
            id: "q3".to_string(),
            title: "Implement Real-time Analytics".to_string(),
            description: "Build a real-time analytics dashboard with WebSocket support"
                .to_string(),
            status: QuestStatus::Pending,
            difficulty: Difficulty::Hard,
            xp_reward: 1000,
            estimated_time: "6 hours".to_string(),
            assigned_agents: vec![],
            progress: 0.0,
            created_at: jan_2026(28),
            completed_at: None,
            tasks: vec![],
        },
    ]
}

/// The workflow template library.
pub fn workflows() -> Vec<Workflow> {
    let workflow = |id: &str,
                    name: &str,
                    description: &str,
                    category: &str,
                    (steps, duration, popularity): (usize, &str, u32),
                    created_day: i64| Workflow {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        steps,
        estimated_duration: duration.to_string(),
        popularity,
        created_at: jan_2026(created_day),
    };

    vec![
        workflow(
            "w1",
            "CI/CD Pipeline",
            "Automated continuous integration and deployment workflow",
            "deployment",
            (5, "15 minutes", 95),
            20,
        ),
        workflow(
            "w2",
            "Code Review Automation",
            "Automated code review with AI suggestions",
            "development",
            (3, "5 minutes", 88),
            22,
        ),
        workflow(
            "w3",
            "Data Pipeline ETL",
            "Extract, transform, and load data workflow",
            "data",
            (7, "30 minutes", 76),
            25,
        ),
    ]
}

/// The subscription template served for user lookups.
pub fn subscriptions() -> Vec<Subscription> {
    vec![Subscription::for_plan(
        SUBSCRIPTION_TEMPLATE_ID.to_string(),
        String::new(),
        Plan::Professional,
        "monthly".to_string(),
        (jan_2026(1), jan_2026(32)),
        // 2025-12-01
        jan_2026(-30),
    )]
}
