//! Fixed grammar tables for the glint language
//!
//! Process-wide immutable sets of keywords, operators, punctuators, and
//! type-position names, consulted by the lexer's maximal-munch scan and by
//! the parser's type-position checks. The tables are never mutated after
//! initialization.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "let", "var", "const", "function", "return", "true", "false", "if", "else", "for",
        "while", "break", "continue",
    ]
    .into_iter()
    .collect()
});

static OPERATORS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "=", "!", "+", "-", "*", "/", "%", "+=", "-=", "*=", "/=", "%=", "==", "!=", "<", "<=",
        ">", ">=",
    ]
    .into_iter()
    .collect()
});

// All single-character today, but the lexer's matching rule is generic over
// the table, so multi-character punctuators would work unchanged.
static PUNCTUATORS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| [";", ".", ",", "(", ")", "{", "}", "[", "]"].into_iter().collect());

/// Names accepted wherever a declared type is expected, in addition to
/// plain identifiers.
static TYPE_NAMES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "uint8", "uint16", "uint32", "uint64", "int8", "int16", "int32", "int64", "float8",
        "float16", "float32", "float64", "bool", "string", "vector", "ptr", "ref",
    ]
    .into_iter()
    .collect()
});

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

pub fn is_operator(text: &str) -> bool {
    OPERATORS.contains(text)
}

pub fn is_punctuator(text: &str) -> bool {
    PUNCTUATORS.contains(text)
}

pub fn is_type_name(text: &str) -> bool {
    TYPE_NAMES.contains(text)
}
