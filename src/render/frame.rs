//! Per-tick frame assembly.

use crate::lexer::{Token, tokenize, tokenize_plain};
use crate::profile::LanguageProfile;
use crate::reveal::RevealState;

/// One rendered line of the current frame.
#[derive(Debug, Clone)]
pub struct FrameLine<'a> {
    pub text: &'a str,
    /// Ordered, lossless token partition of `text`.
    pub tokens: Vec<Token<'a>>,
    /// Whether this line should show the trailing cursor. True only on the
    /// last visible line while the reveal is incomplete.
    pub cursor: bool,
}

/// Snapshot of the animation handed to the presentation sink each tick.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub lines: Vec<FrameLine<'a>>,
    /// Whether the whole target text is visible.
    pub complete: bool,
    /// Line count of the full target text, for gutter sizing.
    pub total_lines: usize,
    /// 1-based line of the reveal position.
    pub line: usize,
    /// 1-based column of the reveal position.
    pub column: usize,
}

impl Frame<'_> {
    /// Index of the cursor-eligible line, if any.
    pub fn cursor_line(&self) -> Option<usize> {
        self.lines.iter().position(|line| line.cursor)
    }
}

/// Assemble the frame for the current reveal state.
///
/// The visible prefix is split on `'\n'` and every line — including the
/// partially revealed last one — is tokenized independently. Without a
/// profile each line degrades to a single Plain token (no highlighting).
pub fn render_frame<'a>(state: &'a RevealState, profile: Option<&LanguageProfile>) -> Frame<'a> {
    let visible = state.visible_text();
    let complete = state.is_complete();

    // split("\n") never yields an empty iterator: "" is a single empty line.
    let line_texts: Vec<&str> = visible.split('\n').collect();
    let last = line_texts.len() - 1;
    let column = line_texts[last].chars().count() + 1;

    let lines = line_texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| FrameLine {
            text,
            tokens: match profile {
                Some(profile) => tokenize(text, profile),
                None => tokenize_plain(text),
            },
            cursor: !complete && index == last,
        })
        .collect();

    Frame {
        lines,
        complete,
        total_lines: state.full_text().split('\n').count(),
        line: last + 1,
        column,
    }
}
