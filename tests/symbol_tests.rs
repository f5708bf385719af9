use lr1_parser::symbol::{is_epsilon_alternative, split_alternatives, split_symbols, unquote, END_MARKER, EPSILON_MARKER};

#[test]
fn end_and_epsilon_markers_are_distinct_reserved_tokens() {
    assert_ne!(END_MARKER, EPSILON_MARKER);
    assert_eq!(END_MARKER, "$");
}

#[test]
fn epsilon_alternative_recognizes_both_spellings() {
    assert!(is_epsilon_alternative("''"));
    assert!(is_epsilon_alternative("ε"));
    assert!(!is_epsilon_alternative("'a'"));
}

#[test]
fn unquote_only_strips_well_formed_quoted_literals() {
    assert_eq!(unquote("'+'"), "+");
    assert_eq!(unquote("'=='"), "==");
    assert_eq!(unquote("plain"), "plain");
    assert_eq!(unquote("'"), "'");
    assert_eq!(unquote(""), "");
}

#[test]
fn split_alternatives_handles_ragged_whitespace() {
    let alts = split_alternatives("  'a' B   |'b'|  C D  ");
    assert_eq!(alts, vec!["'a' B", "'b'", "C D"]);
}

#[test]
fn split_symbols_produces_unquoted_token_list() {
    assert_eq!(split_symbols("'(' E ')'"), vec!["(", "E", ")"]);
    assert!(split_symbols("''").is_empty());
}
