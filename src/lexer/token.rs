use text_size::TextRange;

/// Classification assigned to one span of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Builtin,
    Comment,
    String,
    Number,
    Plain,
}

/// A classified span of a single line.
///
/// Tokens borrow from the input line and carry their position within it.
/// Concatenating `text` over a tokenize result reproduces the line exactly;
/// ranges are contiguous and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, range: TextRange) -> Self {
        Self { kind, text, range }
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
