//! Core logic of the process facilitator.
//!
//! Every operation here is a pure function over explicit arguments: the
//! caller owns conversation state, guard counters, and history, and invokes
//! the language model itself. The modules line up with one participant turn:
//!
//! - [`lexicon`]: language-keyed trigger lists.
//! - [`classifier`]: free text to [`Intent`](facilitator_types::Intent).
//! - [`transition`]: state, intent, and counters to the next state.
//! - [`day_plan`]: a stored step to a complete day plan.
//! - [`prompt`]: system and per-state instructions for the model.
//! - [`validator`]: the model's raw reply to the text shown to the participant.

pub mod classifier;
pub mod day_plan;
mod facilitator;
pub mod lexicon;
pub mod prompt;
pub mod transition;
pub mod validator;

pub use classifier::{
    IntentClassifier, IntentMatcher, MatchContext, Utterance, classify, classify_in,
};
pub use day_plan::resolve_day_plan;
pub use facilitator::{Facilitator, TurnInput, TurnPlan};
pub use lexicon::{Lexicon, LexiconStore, ListKind, PhraseSet};
pub use prompt::{build_state_prompt, build_system_prompt, matching_block, render_system_prompt};
pub use transition::{TransitionEngine, next_state};
pub use validator::{MessageValidator, validate};
