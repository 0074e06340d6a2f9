use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the process facilitator offline, without a language model.
#[derive(Parser, Debug)]
#[command(name = "facilitator")]
#[command(version)]
#[command(about = "Offline harness for the process facilitator.", long_about = None)]
pub struct Cli {
    /// Config file (default: $FACILITATOR_CONFIG or ~/.facilitator/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a participant message and print the intent label
    Classify {
        /// Conversation state the message arrived in
        #[arg(short, long, default_value = "CORE_QUESTION")]
        state: String,

        /// Journey language (hebrew, english, or a configured bundle)
        #[arg(short, long, default_value = "english")]
        language: String,

        /// Also print the state the engine would move to
        #[arg(long)]
        next: bool,

        /// Clarifications already used today (with --next)
        #[arg(long, default_value_t = 0)]
        clarify_count: u32,

        /// Task-support detours already used today (with --next)
        #[arg(long, default_value_t = 0)]
        support_count: u32,

        /// Message text; read from stdin when omitted
        message: Option<String>,
    },

    /// Resolve a stored step (JSON) into a complete day plan
    Resolve {
        /// Step record JSON file
        step: PathBuf,

        /// Journey language; defaults to the step's own language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Render the system prompt and the instruction block for a state
    Prompt {
        /// Step record JSON file
        step: PathBuf,

        /// State the conversation is entering
        #[arg(short, long, default_value = "CORE_QUESTION")]
        state: String,

        /// Journey language; defaults to the step's own language
        #[arg(short, long)]
        language: Option<String>,

        /// Journey name shown to the model
        #[arg(short, long, default_value = "")]
        journey: String,

        /// Participant's last message
        #[arg(short, long, default_value = "")]
        message: String,

        /// Intent of the last message; classified when omitted
        #[arg(short, long)]
        intent: Option<String>,
    },

    /// Apply the reply policy to model output
    Validate {
        /// State the reply is sent in
        #[arg(short, long, default_value = "CORE_QUESTION")]
        state: String,

        /// Step record JSON file whose plan adds forbidden phrases
        #[arg(long)]
        step: Option<PathBuf>,

        /// Journey language used with --step
        #[arg(short, long)]
        language: Option<String>,

        /// Reply text; read from stdin when omitted
        text: Option<String>,
    },

    /// Walk a scripted conversation through the engine, one message per line
    Simulate {
        /// Step record JSON file
        step: PathBuf,

        /// File with one participant message per line; stdin when omitted
        script: Option<PathBuf>,

        /// Journey language; defaults to the step's own language
        #[arg(short, long)]
        language: Option<String>,

        /// Print the state prompt rendered for every turn
        #[arg(long)]
        prompts: bool,
    },
}
