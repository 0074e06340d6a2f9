//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use facilitator_core::resolve_day_plan;
use facilitator_types::{DayPlan, Language, StepRecord};

/// A step as an author would store it: loose fields, no structured plan.
pub fn loose_step(day: u32) -> StepRecord {
    StepRecord {
        title: Some("Stress at work".to_string()),
        goal: Some("Name what drains you".to_string()),
        task: Some("List three moments that drained you today.".to_string()),
        closing_message: Some("Well done today.".to_string()),
        ..StepRecord::new(day)
    }
}

/// The resolved plan for [`loose_step`].
pub fn plan(language: &Language) -> DayPlan {
    resolve_day_plan(&loose_step(1), language)
}

/// Write `step` as JSON into `dir` and return its path.
pub fn write_step(dir: &Path, step: &StepRecord) -> PathBuf {
    let path = dir.join(format!("day{}.json", step.day_number));
    let json = serde_json::to_string_pretty(step).expect("step serializes");
    fs::write(&path, json).expect("write step file");
    path
}

/// Run the `facilitator` binary with no user config in scope.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_facilitator"))
        .args(args)
        .env("FACILITATOR_CONFIG", "/nonexistent/facilitator-test.toml")
        .env_remove("RUST_LOG")
        .output()
        .expect("run facilitator binary")
}

/// Stdout of a successful run.
pub fn stdout_of(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "facilitator {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}
