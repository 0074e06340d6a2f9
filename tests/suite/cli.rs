//! End-to-end runs of the `facilitator` binary.

use std::fs;

use facilitator_types::DayPlan;
use insta::assert_snapshot;
use tempfile::TempDir;

use crate::common::{loose_step, run_cli, stdout_of, write_step};

#[test]
fn classify_prints_the_intent() {
    assert_eq!(stdout_of(&["classify", "not sure"]), "confused\n");
    assert_eq!(stdout_of(&["classify", "-s", "TASK", "done"]), "completed\n");
    assert_eq!(
        stdout_of(&["classify", "-l", "hebrew", "אפשר לדלג?"]),
        "skip\n"
    );
}

#[test]
fn classify_next_applies_the_guards() {
    assert_eq!(
        stdout_of(&["classify", "--next", "not sure"]),
        "confused CLARIFY\n"
    );
    assert_eq!(
        stdout_of(&["classify", "--next", "--clarify-count", "2", "not sure"]),
        "confused CORE_QUESTION\n"
    );
    assert_eq!(
        stdout_of(&["classify", "-s", "task", "--next", "help me"]),
        "task_help TASK_SUPPORT\n"
    );
}

#[test]
fn config_file_overrides_guard_caps() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[guards]\nmax_clarifications = 0\n").unwrap();
    let config = config.to_str().unwrap();

    assert_eq!(
        stdout_of(&["--config", config, "classify", "--next", "not sure"]),
        "confused CORE_QUESTION\n"
    );
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[classifier]\nemotional_min_chars = 0\n").unwrap();

    let output = run_cli(&["--config", config.to_str().unwrap(), "classify", "hi"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config.toml"), "{stderr}");
}

#[test]
fn unknown_state_fails() {
    let output = run_cli(&["classify", "-s", "LIMBO", "hi"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("LIMBO"));
}

#[test]
fn resolve_prints_a_complete_plan() {
    let dir = TempDir::new().unwrap();
    let step = write_step(dir.path(), &loose_step(3));

    let json = stdout_of(&["resolve", step.to_str().unwrap(), "-l", "hebrew"]);
    let plan: DayPlan = serde_json::from_str(&json).unwrap();
    assert!(plan.is_complete());
    assert_eq!(plan.day, 3);
    assert_eq!(plan.language.as_str(), "hebrew");
    assert_eq!(plan.day_goal, "Name what drains you");
}

#[test]
fn prompt_renders_both_blocks() {
    let dir = TempDir::new().unwrap();
    let step = write_step(dir.path(), &loose_step(3));

    let out = stdout_of(&[
        "prompt",
        step.to_str().unwrap(),
        "-s",
        "CLARIFY",
        "-j",
        "Calm Mind",
        "-m",
        "what?",
    ]);
    let (system, state) = out.split_once("\n---\n").unwrap();
    assert!(system.contains("\"Calm Mind\""));
    assert!(system.contains("## Never say"));
    assert!(state.starts_with("## Current step: CLARIFY"));
    assert!(state.contains("Detected intent: confused"));
}

#[test]
fn validate_sanitizes_replies() {
    assert_snapshot!(
        stdout_of(&[
            "validate",
            "-s",
            "CORE_QUESTION",
            "Great question!  What did you notice? And why?",
        ])
        .trim_end(),
        @"What did you notice? And why."
    );
    assert_eq!(
        stdout_of(&["validate", "-s", "TASK_SUPPORT", "Time? Energy?"]),
        "Time? Energy?\n"
    );
}

#[test]
fn simulate_prints_one_line_per_turn() {
    let dir = TempDir::new().unwrap();
    let step = write_step(dir.path(), &loose_step(1));
    let script = dir.path().join("script.txt");
    fs::write(&script, "hi\n\nready\nnot sure\nok\npressure from my boss\n").unwrap();

    let out = stdout_of(&[
        "simulate",
        step.to_str().unwrap(),
        script.to_str().unwrap(),
    ]);
    assert_snapshot!(out.trim_end(), @r"
    START --checkin--> ORIENTATION (clarify=0, support=0)
    ORIENTATION --checkin--> CORE_QUESTION (clarify=0, support=0)
    CORE_QUESTION --confused--> CLARIFY (clarify=1, support=0)
    CLARIFY --other--> CORE_QUESTION (clarify=1, support=0)
    CORE_QUESTION --answer_core--> INTERPRET (clarify=1, support=0)
    ");
}
