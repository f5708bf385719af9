//! Symbol conventions for context-free grammars.
//!
//! Unlike the teacher crate (where a `Symbol` was a single `char`), grammar
//! symbols here are plain strings: classification is contextual (a string is a
//! non-terminal iff it is some rule's LHS), not encoded in the symbol itself.
//! This module only holds the few conventions that *are* universal: the two
//! reserved sentinels and how a quoted literal is recognized and unquoted.

/// Sentinel appended to every token stream and never a real grammar symbol.
pub const END_MARKER: &str = "$";

/// Sentinel kept inside FIRST sets to denote nullability. Never a grammar
/// symbol and never allowed to leak into the ACTION table.
pub const EPSILON_MARKER: &str = "''";

/// Returns true if `alt` (an already-trimmed alternative) denotes epsilon.
pub fn is_epsilon_alternative(alt: &str) -> bool {
    alt == "''" || alt == "ε"
}

/// If `token` is a quoted literal like `'+'`, returns the content between the
/// quotes (`+`). Otherwise returns `token` unchanged.
///
/// A quoted literal must have at least the two quote characters and a
/// non-empty body; `''` is the epsilon marker, not a quoted empty literal.
pub fn unquote(token: &str) -> &str {
    if token.len() >= 3 && token.starts_with('\'') && token.ends_with('\'') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Splits a RHS string on `|` into trimmed, non-empty alternatives.
pub fn split_alternatives(rhs: &str) -> Vec<&str> {
    rhs.split('|').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Splits a single alternative into symbols, unquoting literals as it goes.
/// An alternative that is itself epsilon yields an empty vector.
pub fn split_symbols(alt: &str) -> Vec<String> {
    if is_epsilon_alternative(alt) {
        return Vec::new();
    }
    alt.split_whitespace().map(unquote).map(str::to_string).collect()
}
