//! # codetyper-base
//!
//! Core library for incremental code reveal and lexical highlighting.
//!
//! The library renders source code as if typed live: a deterministic
//! scheduler exposes a growing prefix of the target string — one character
//! per configured interval — while a single-pass tokenizer re-classifies
//! every visible line, including the partially revealed last one, on each
//! tick for presentation styling. Neither component reads a clock; the
//! caller delivers ticks, which makes the whole pipeline deterministic
//! under synthetic time in tests.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! render    → frame assembly, themes, sinks, player composition
//!   ↓
//! reveal    → tick-driven reveal scheduler, cursor blink
//!   ↓
//! profile   → language profiles, bundled Python vocabulary
//!   ↓
//! lexer     → logos scanner, token classification
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use codetyper::{Player, ProfileRegistry, RevealTiming};
//!
//! let registry = ProfileRegistry::bundled();
//! let mut player = Player::new("def main():", "python", RevealTiming::default(), &registry);
//!
//! // The caller owns the clock; drive the animation with elapsed time.
//! let (_outcome, frame) = player.tick(Duration::from_millis(500));
//! assert_eq!(frame.lines.len(), 1);
//! assert!(frame.lines[0].cursor);
//! ```

// ============================================================================
// MODULES (dependency order: lexer → profile → reveal → render)
// ============================================================================

/// Lexer: logos scanner, token classification
pub mod lexer;

/// Language profiles: keyword/builtin vocabularies, registry
pub mod profile;

/// Reveal: tick-driven scheduler, cursor blink
pub mod reveal;

/// Render: frame assembly, themes, sinks, player composition
pub mod render;

/// Profile interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use lexer::{Token, TokenKind, tokenize, tokenize_plain};
pub use profile::{LanguageProfile, ProfileRegistry};
pub use render::{
    Frame, FrameLine, FrameSink, Player, Rgb, SinkError, Style, TextSink, Theme, render_frame,
    styled_spans,
};
pub use reveal::{CursorBlink, RevealScheduler, RevealState, RevealTiming, Tick};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
