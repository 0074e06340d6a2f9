//! Facilitator CLI - offline harness over `facilitator-core`.
//!
//! Every subcommand is a thin wrapper over one core operation, so the engine
//! can be inspected on real step files without calling a model:
//!
//! ```text
//! facilitator classify -s CORE_QUESTION "not sure"      -> confused
//! facilitator resolve day3.json -l hebrew              -> DayPlan JSON
//! facilitator prompt day3.json -s CLARIFY -m "what?"   -> system + state prompt
//! facilitator validate -s TASK "Great question! ..."   -> sanitized reply
//! facilitator simulate day3.json script.txt            -> one line per turn
//! ```
//!
//! Results go to stdout; logs go to stderr (`RUST_LOG`, default `warn`).

mod commands;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use facilitator_config::{load_settings, load_settings_from};
use facilitator_core::{Facilitator, TurnInput, build_state_prompt};
use facilitator_types::{
    ConversationState, DayPlan, FacilitatorSettings, GuardCounters, Intent, Language, StepRecord,
};

use commands::{Cli, Commands};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn settings(config: Option<&Path>) -> Result<FacilitatorSettings> {
    let settings = match config {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    settings.context("loading configuration")
}

fn read_input(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn parse_state(label: &str) -> Result<ConversationState> {
    ConversationState::parse(label).with_context(|| format!("--state {label:?}"))
}

fn load_step(path: &Path) -> Result<StepRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading step file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing step file {}", path.display()))
}

/// Explicit `--language`, else the step's own tag, else English.
fn journey_language(step: &StepRecord, flag: Option<&str>) -> Language {
    flag.or(step.language.as_deref())
        .map(Language::new)
        .unwrap_or_default()
}

fn load_plan(facilitator: &Facilitator, path: &Path, language: Option<&str>) -> Result<DayPlan> {
    let step = load_step(path)?;
    let language = journey_language(&step, language);
    tracing::debug!(
        day = step.day_number,
        %language,
        stored_plan = step.day_plan.is_some(),
        "Loaded step"
    );
    Ok(facilitator.resolve_plan(&step, &language))
}

fn run(cli: Cli) -> Result<()> {
    let facilitator = Facilitator::new(&settings(cli.config.as_deref())?);

    match cli.command {
        Commands::Classify {
            state,
            language,
            next,
            clarify_count,
            support_count,
            message,
        } => {
            let message = read_input(message)?;
            let state = parse_state(&state)?;
            let intent = facilitator
                .classifier()
                .classify(&message, state, &Language::new(&language));
            if next {
                let engine = facilitator.engine();
                let next_state = engine.next_state(state, intent, clarify_count, support_count);
                println!("{intent} {next_state}");
            } else {
                println!("{intent}");
            }
        }
        Commands::Resolve { step, language } => {
            let plan = load_plan(&facilitator, &step, language.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Prompt {
            step,
            state,
            language,
            journey,
            message,
            intent,
        } => {
            let plan = load_plan(&facilitator, &step, language.as_deref())?;
            let state = parse_state(&state)?;
            let intent = match intent {
                Some(label) => {
                    Intent::parse(&label).with_context(|| format!("--intent {label:?}"))?
                }
                None => facilitator.classify(&message, state, &plan),
            };
            println!("{}", facilitator.system_prompt(&plan, &journey));
            println!("---");
            print!("{}", build_state_prompt(state, &plan, &message, intent));
        }
        Commands::Validate {
            state,
            step,
            language,
            text,
        } => {
            let state = parse_state(&state)?;
            let plan = match step {
                Some(path) => load_plan(&facilitator, &path, language.as_deref())?,
                None => DayPlan {
                    language: language.as_deref().map(Language::new).unwrap_or_default(),
                    ..DayPlan::default()
                },
            };
            let text = read_input(text)?;
            println!("{}", facilitator.finalize_reply(&plan, state, &text));
        }
        Commands::Simulate {
            step,
            script,
            language,
            prompts,
        } => {
            let plan = load_plan(&facilitator, &step, language.as_deref())?;
            let script = match script {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading script {}", path.display()))?,
                None => read_input(None)?,
            };
            simulate(&facilitator, &plan, &script, prompts);
        }
    }
    Ok(())
}

fn simulate(facilitator: &Facilitator, plan: &DayPlan, script: &str, prompts: bool) {
    let mut state = ConversationState::Start;
    let mut counters = GuardCounters::default();

    for message in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let turn = facilitator.plan_turn(&TurnInput {
            message,
            state,
            counters,
            plan,
            journey_name: "",
        });
        println!(
            "{} --{}--> {} (clarify={}, support={})",
            turn.previous_state,
            turn.intent,
            turn.next_state,
            turn.counters.clarify_count,
            turn.counters.task_support_count
        );
        if prompts {
            println!("{}", turn.state_prompt);
        }
        state = turn.next_state;
        counters = turn.counters;
    }
}

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:?}");
        process::exit(1);
    }
}
