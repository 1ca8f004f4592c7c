use codetyper::{LanguageProfile, TextSize, TokenKind, tokenize, tokenize_plain};
use once_cell::sync::Lazy;
use rstest::rstest;

static PYTHON: Lazy<LanguageProfile> = Lazy::new(LanguageProfile::python);

#[test]
fn test_classification_example() {
    let tokens = tokenize("def fibonacci(n):", &PYTHON);
    let expected = [
        ("def", TokenKind::Keyword),
        (" ", TokenKind::Plain),
        ("fibonacci", TokenKind::Plain),
        ("(", TokenKind::Plain),
        ("n", TokenKind::Plain),
        (")", TokenKind::Plain),
        (":", TokenKind::Plain),
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, (text, kind)) in tokens.iter().zip(expected) {
        assert_eq!(token.text, text);
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn test_comment_swallows_rest_of_line() {
    let tokens = tokenize("x = 1  # note", &PYTHON);
    let last = tokens.last().unwrap();
    assert_eq!(last.text, "# note");
    assert_eq!(last.kind, TokenKind::Comment);
    // Nothing after the comment marker is classified separately.
    assert!(tokens.iter().filter(|t| t.kind == TokenKind::Comment).count() == 1);
}

#[test]
fn test_number_heuristic_on_identifier() {
    // `n2` is neither keyword nor builtin but contains a digit: Number.
    // The digit check runs last, after the vocabulary lookups.
    let tokens = tokenize("n2 = 5", &PYTHON);
    assert_eq!(tokens[0].text, "n2");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[2].text, "5");
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_keyword_lookup_precedes_digit_check() {
    let profile = LanguageProfile::new("test", ["k1"], ["b2"]);
    let tokens = tokenize("k1 b2 c3", &profile);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[2].kind, TokenKind::Builtin);
    assert_eq!(tokens[4].kind, TokenKind::Number);
}

#[test]
fn test_builtin_classification() {
    let tokens = tokenize("print(len(values))", &PYTHON);
    assert_eq!(tokens[0].text, "print");
    assert_eq!(tokens[0].kind, TokenKind::Builtin);
    assert_eq!(tokens[2].text, "len");
    assert_eq!(tokens[2].kind, TokenKind::Builtin);
    assert_eq!(tokens[4].text, "values");
    assert_eq!(tokens[4].kind, TokenKind::Plain);
}

#[test]
fn test_string_literals_same_line() {
    let tokens = tokenize(r#"a = "it's fine" + 'ok'"#, &PYTHON);
    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.text)
        .collect();
    assert_eq!(strings, vec![r#""it's fine""#, "'ok'"]);
}

#[test]
fn test_unterminated_string_runs_to_end_of_line() {
    // Mid-reveal a string literal has no closing quote yet; it still
    // classifies as one String token so the line never flickers.
    let tokens = tokenize(r#"print(f"Fib = {res"#, &PYTHON);
    let last = tokens.last().unwrap();
    assert_eq!(last.text, r#""Fib = {res"#);
    assert_eq!(last.kind, TokenKind::String);
}

#[test]
fn test_two_char_operators_match_before_gap() {
    let tokens = tokenize("a == b != c <= d >= e << f >> g", &PYTHON);
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    for op in ["==", "!=", "<=", ">=", "<<", ">>"] {
        assert!(texts.contains(&op), "missing operator token {op}");
    }
}

#[test]
fn test_unmatched_run_is_single_plain_token() {
    // `=` and `;` are outside the punctuation set: they merge with the
    // surrounding spaces into one verbatim gap token each.
    let tokens = tokenize("x = y;", &PYTHON);
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["x", " = ", "y", ";"]);
    assert_eq!(tokens[1].kind, TokenKind::Plain);
    assert_eq!(tokens[3].kind, TokenKind::Plain);
}

#[rstest]
#[case("def fibonacci(n):")]
#[case("    \"\"\"Calculate Fibonacci number at position n\"\"\"")]
#[case("    previous, current = 0, 1")]
#[case("    for _ in range(2, n + 1):")]
#[case("result = fibonacci(10)")]
#[case("print(f\"Fibonacci(10) = {result}\")")]
#[case("# just a comment")]
#[case("café = 'déjà vu'")]
#[case("		mixed	tabs and spaces  ")]
#[case("")]
fn test_lossless_partition(#[case] line: &str) {
    let tokens = tokenize(line, &PYTHON);

    // Concatenated token texts reproduce the line exactly.
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, line);

    // Ranges are contiguous and cover the line with no overlap.
    let mut offset = TextSize::new(0);
    for token in &tokens {
        assert_eq!(token.range.start(), offset);
        assert_eq!(token.range.len(), TextSize::new(token.text.len() as u32));
        offset = token.range.end();
    }
    assert_eq!(offset, TextSize::new(line.len() as u32));
}

#[rstest]
#[case("x = 1")]
#[case("def f():")]
#[case("")]
fn test_repeated_calls_are_pure(#[case] line: &str) {
    assert_eq!(tokenize(line, &PYTHON), tokenize(line, &PYTHON));
}

#[test]
fn test_plain_fallback_is_whole_line() {
    let tokens = tokenize_plain("def fibonacci(n):");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "def fibonacci(n):");
    assert_eq!(tokens[0].kind, TokenKind::Plain);
}
