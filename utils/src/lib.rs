//! Shared text utilities for the facilitator.
//!
//! This crate provides text machinery that several facilitator crates need
//! but that doesn't belong in the domain-pure `facilitator-types` crate:
//!
//! - **`normalize`**: Whitespace collapsing and matching-oriented folding
//! - **`scrub`**: Multi-pattern, word-bounded phrase removal

pub mod normalize;
pub mod scrub;

pub use normalize::{collapse_whitespace, fold_for_matching, is_hebrew_point};
pub use scrub::{PhraseScrubber, REGEX_PREFIX};
