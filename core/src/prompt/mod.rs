//! Prompt rendering for the external language model.
//!
//! Two pure renderers: the day-level system prompt, and a short instruction
//! block for the state the conversation just entered. Both return plain
//! markdown strings.

mod state;
mod system;

pub use state::{build_state_prompt, matching_block};
pub use system::{build_system_prompt, render_system_prompt};
