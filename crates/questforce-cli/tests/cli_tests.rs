use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn qf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("qf").expect("Failed to find qf binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_lists_agents() {
    qf_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("## Synth Coder (ID: 1)"))
        .stdout(predicate::str::contains("3 agents."));
}

#[test]
fn test_cli_list_agents_with_status_and_limit() {
    qf_cmd()
        .args(["agent", "list", "--status", "active", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Synth Coder"))
        .stdout(predicate::str::contains("Codex Operator").not())
        .stdout(predicate::str::contains("Showing 1 of 2 agents."));
}

#[test]
fn test_cli_show_agent() {
    qf_cmd()
        .args(["agent", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 3. Shaltz Envoy"))
        .stdout(predicate::str::contains("- Type: deployment"))
        .stdout(predicate::str::contains("Kubernetes"));
}

#[test]
fn test_cli_show_unknown_agent_fails() {
    qf_cmd()
        .args(["agent", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Agent not found"));
}

#[test]
fn test_cli_create_agent() {
    qf_cmd()
        .args(["agent", "create", "Nova", "--type", "testing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recruited agent with ID: 4"))
        .stdout(predicate::str::contains("- Status: ○ idle"))
        .stdout(predicate::str::contains("- Level: 1 (0 XP)"));
}

#[test]
fn test_cli_create_agent_rejects_unknown_type() {
    qf_cmd()
        .args(["agent", "create", "Nova", "--type", "cooking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'cooking'"));
}

#[test]
fn test_cli_update_agent_lists_changes() {
    qf_cmd()
        .args(["agent", "update", "2", "--status", "active", "--xp", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status → active"))
        .stdout(predicate::str::contains("xp → 50"))
        .stdout(predicate::str::contains("- Level: 1 (50 XP)"));
}

#[test]
fn test_cli_delete_agent() {
    qf_cmd()
        .args(["agent", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Agent deleted successfully (ID: 1)"));
}

#[test]
fn test_cli_show_quest_checklist() {
    qf_cmd()
        .args(["quest", "show", "q1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# q1. Deploy Microservice"))
        .stdout(predicate::str::contains("- [x]"))
        .stdout(predicate::str::contains("- [ ]"));
}

#[test]
fn test_cli_create_quest_with_agents() {
    qf_cmd()
        .args([
            "quest",
            "create",
            "Harden API",
            "--description",
            "Add rate limits",
            "--difficulty",
            "hard",
            "--agents",
            "1,3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quest with ID: q4"))
        .stdout(predicate::str::contains("- Agents: 1, 3"))
        .stdout(predicate::str::contains("- Reward: 100 XP"));
}

#[test]
fn test_cli_update_quest_progress_out_of_range() {
    qf_cmd()
        .args(["quest", "update", "q2", "--progress", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 100"));

    qf_cmd()
        .args(["quest", "update", "q2", "--progress", "42.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 42.5%"));
}

#[test]
fn test_cli_workflows() {
    qf_cmd()
        .args(["workflow", "list", "--category", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Pipeline ETL"))
        .stdout(predicate::str::contains("CI/CD Pipeline").not());

    qf_cmd()
        .args([
            "workflow",
            "create",
            "Nightly",
            "--category",
            "deployment",
            "--steps",
            "build,test,ship",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created workflow with ID: w4"))
        .stdout(predicate::str::contains("- Steps: 3"));
}

#[test]
fn test_cli_subscriptions() {
    qf_cmd()
        .args(["subscription", "show", "--user-id", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- User: ada"))
        .stdout(predicate::str::contains("- Plan: professional"));

    qf_cmd()
        .args(["sub", "create", "--user-id", "ada", "--plan", "enterprise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribed ada to the enterprise plan"))
        .stdout(predicate::str::contains("- Agents: unlimited"));
}

#[test]
fn test_cli_simulate_without_timer() {
    qf_cmd()
        .args(["simulate", "--ticks", "8", "--tick-ms", "0", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Live Dashboard"))
        .stdout(predicate::str::contains("## Agent Network"))
        .stdout(predicate::str::contains("## Activity"));
}

#[test]
fn test_cli_simulate_is_reproducible_with_seed() {
    let run = || {
        qf_cmd()
            .args(["simulate", "-n", "5", "--tick-ms", "0", "--seed", "42"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = String::from_utf8(run()).expect("Invalid UTF-8");
    let second = String::from_utf8(run()).expect("Invalid UTF-8");

    // Activity ages depend on the wall clock, the gauges do not.
    let gauges = |out: &str| -> Vec<String> {
        out.lines()
            .take_while(|line| !line.starts_with("## "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(gauges(&first), gauges(&second));
}

#[test]
fn test_cli_simulate_on_timer() {
    qf_cmd()
        .args(["simulate", "--ticks", "2", "--tick-ms", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Live Dashboard"));
}
