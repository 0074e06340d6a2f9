//! Core domain types for the process facilitator.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod intent;
mod language;
mod lexicon;
mod plan;
mod script;
mod session;
mod settings;
mod state;
mod step;
mod text;

pub use intent::{Intent, IntentParseError};
pub use language::Language;
pub use lexicon::{LexiconSource, owned_list};
pub use plan::{
    Closure, CommonBlock, CoreQuestion, DEFAULT_TONE_FORMALITY, DEFAULT_TONE_STYLE,
    DEFAULT_TONE_VERBOSITY, DayPlan, DayTask, GuidedInterpretation, Orientation, ToneProfile,
};
pub use script::{ScriptProfile, infer_language};
pub use session::GuardCounters;
pub use settings::{
    ClassifierThresholds, DEFAULT_EMOTIONAL_MIN_CHARS, DEFAULT_MAX_CLARIFICATIONS,
    DEFAULT_MAX_TASK_SUPPORT, DEFAULT_TASK_COMPLETION_MIN_CHARS, FacilitatorSettings, GuardLimits,
    SettingsError,
};
pub use state::{ConversationState, StateParseError};
pub use step::StepRecord;
pub use text::{grapheme_len, truncate_to_fit, truncate_with_ellipsis};
