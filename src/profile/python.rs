//! Bundled Python vocabulary.

use super::LanguageProfile;

/// Python keywords recognized by the bundled profile.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while", "return", "import", "from", "as", "try",
    "except", "finally", "with", "lambda", "yield", "break", "continue", "pass", "raise", "assert",
    "and", "or", "not", "in", "is", "True", "False", "None",
];

/// Python builtin functions recognized by the bundled profile.
pub const PYTHON_BUILTINS: &[&str] = &[
    "print", "len", "range", "str", "int", "float", "list", "dict", "set", "tuple", "open",
    "input", "type", "sum", "min", "max", "sorted", "enumerate", "zip", "map", "filter",
];

pub(super) fn python() -> LanguageProfile {
    LanguageProfile::new(
        "python",
        PYTHON_KEYWORDS.iter().copied(),
        PYTHON_BUILTINS.iter().copied(),
    )
}
