//! Single-pass line scanner for presentation highlighting
//!
//! This module provides the lexical half of the animation core:
//! - **logos** for the raw scan classes (words, same-line string literals,
//!   `#` comments, a fixed punctuation set)
//! - a classification pass mapping word matches against a
//!   [`LanguageProfile`](crate::profile::LanguageProfile)
//!
//! The scanner works on exactly one line at a time and retains no state
//! between calls, so the partially revealed active line can be re-tokenized
//! from scratch on every tick.
//!
//! ## Scan pipeline
//!
//! ```text
//! Line text
//!     ↓
//! Raw scan (logos) → word / string / comment / punctuation matches
//!     ↓
//! Gap coalescing   → unmatched runs become verbatim Plain tokens
//!     ↓
//! Classification   → keyword / builtin / number heuristic via profile
//! ```

mod scan;
mod token;

pub use scan::{tokenize, tokenize_plain};
pub use token::{Token, TokenKind};
