//! Logos-based scanner for single lines of source text.
//!
//! Fast tokenization using the logos crate, one line at a time.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::token::{Token, TokenKind};
use crate::profile::LanguageProfile;

/// Raw scan classes, matched by maximal munch at each position.
///
/// The classes have disjoint start sets, so the word / string / comment /
/// punctuation priority falls out of the automaton directly. Anything the
/// automaton rejects is collected into verbatim Plain gap tokens by
/// [`tokenize`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// Maximal run of word characters (letters, digits, underscore).
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    /// Double- or single-quoted literal closing on the same line. An
    /// unterminated open quote consumes the remainder of the line, which
    /// keeps the classification stable while the active line grows.
    #[regex(r#""[^"\n]*"?"#)]
    #[regex(r"'[^'\n]*'?")]
    Str,

    /// `#` up to end of line.
    #[regex(r"#[^\n]*")]
    Comment,

    // Two-character operators, then the single-character set. Characters
    // outside this set (`=`, `;`, `<` alone, ...) are gap text.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("<<")]
    #[token(">>")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("{")]
    #[token("}")]
    #[token(":")]
    #[token(",")]
    #[token(".")]
    Punct,
}

/// Classify one line of text into a lossless, ordered sequence of spans.
///
/// Pure function of `(line, profile)`: no scanner state survives the call,
/// and re-tokenizing the same growing line on every tick is the expected
/// usage pattern. Runs in a single left-to-right pass.
pub fn tokenize<'a>(line: &'a str, profile: &LanguageProfile) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(line);
    let mut gap_start: Option<usize> = None;

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            // Unmatched input: open (or extend) the current gap.
            Err(()) => {
                gap_start.get_or_insert(span.start);
            }
            Ok(raw) => {
                if let Some(start) = gap_start.take() {
                    tokens.push(plain_span(line, start, span.start));
                }
                tokens.push(Token::new(
                    classify(raw, lexer.slice(), profile),
                    lexer.slice(),
                    text_range(span.start, span.end),
                ));
            }
        }
    }

    if let Some(start) = gap_start.take() {
        tokens.push(plain_span(line, start, line.len()));
    }

    tokens
}

/// Emit the whole line as a single Plain token.
///
/// Fallback used when no language profile is available: the output stays a
/// lossless partition, just without highlighting.
pub fn tokenize_plain(line: &str) -> Vec<Token<'_>> {
    if line.is_empty() {
        return Vec::new();
    }
    vec![plain_span(line, 0, line.len())]
}

fn classify(raw: RawToken, text: &str, profile: &LanguageProfile) -> TokenKind {
    match raw {
        RawToken::Word => {
            if profile.is_keyword(text) {
                TokenKind::Keyword
            } else if profile.is_builtin(text) {
                TokenKind::Builtin
            } else if text.bytes().any(|b| b.is_ascii_digit()) {
                // Coarse by intent: any leftover word containing a digit
                // counts as a number, including identifiers like `n2`.
                TokenKind::Number
            } else {
                TokenKind::Plain
            }
        }
        RawToken::Str => TokenKind::String,
        RawToken::Comment => TokenKind::Comment,
        RawToken::Punct => TokenKind::Plain,
    }
}

fn plain_span(line: &str, start: usize, end: usize) -> Token<'_> {
    Token::new(TokenKind::Plain, &line[start..end], text_range(start, end))
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python() -> LanguageProfile {
        LanguageProfile::python()
    }

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_scan_def_line() {
        let tokens = tokenize("def fibonacci(n):", &python());
        assert_eq!(
            texts(&tokens),
            vec!["def", " ", "fibonacci", "(", "n", ")", ":"]
        );
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Plain);
        assert_eq!(tokens[2].kind, TokenKind::Plain);
        assert_eq!(tokens[3].kind, TokenKind::Plain);
    }

    #[test]
    fn test_scan_comment_to_end_of_line() {
        let tokens = tokenize("x = 1  # note", &python());
        let last = tokens.last().unwrap();
        assert_eq!(last.text, "# note");
        assert_eq!(last.kind, TokenKind::Comment);
    }

    #[test]
    fn test_scan_gap_runs_merge() {
        // `=` is not in the punctuation set, so ` = ` is one gap token.
        let tokens = tokenize("x = 1", &python());
        assert_eq!(texts(&tokens), vec!["x", " = ", "1"]);
        assert_eq!(tokens[1].kind, TokenKind::Plain);
        assert_eq!(tokens[2].kind, TokenKind::Number);
    }

    #[test]
    fn test_scan_unterminated_string() {
        let tokens = tokenize(r#"print("hel"#, &python());
        assert_eq!(texts(&tokens), vec!["print", "(", "\"hel"]);
        assert_eq!(tokens[0].kind, TokenKind::Builtin);
        assert_eq!(tokens[2].kind, TokenKind::String);
    }

    #[test]
    fn test_scan_empty_line() {
        assert!(tokenize("", &python()).is_empty());
    }

    #[test]
    fn test_scan_plain_fallback() {
        let tokens = tokenize_plain("def f():");
        assert_eq!(texts(&tokens), vec!["def f():"]);
        assert_eq!(tokens[0].kind, TokenKind::Plain);
        assert!(tokenize_plain("").is_empty());
    }
}
