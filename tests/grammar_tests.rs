use lr1_parser::error::GrammarError;
use lr1_parser::grammar::Grammar;

#[test]
fn initial_symbol_is_the_first_declared_rule() {
    let g = Grammar::load("E -> T\nT -> id\n").unwrap();
    assert_eq!(g.initial(), "E");
}

#[test]
fn non_terminals_and_terminals_are_disjoint() {
    let g = Grammar::load("S -> C C\nC -> c C\nC -> d\n").unwrap();
    for nt in g.non_terminals() {
        assert!(!g.terminals().contains(nt));
    }
}

#[test]
fn end_marker_is_always_a_terminal() {
    let g = Grammar::load("S -> 'a'\n").unwrap();
    assert!(g.terminals().contains("$"));
}

#[test]
fn malformed_lines_are_diagnostics_not_failures() {
    let g = Grammar::load("S -> 'a'\ngarbage\nT -> 'b'\n").unwrap();
    assert_eq!(g.rules().len(), 2);
    assert!(g.diagnostics().iter().any(|d| d.contains("garbage")));
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(Grammar::load(""), Err(GrammarError::EmptyInput)));
}

#[test]
fn comment_only_text_yields_no_rules_error() {
    assert!(matches!(Grammar::load("# nothing here\n"), Err(GrammarError::NoRules)));
}

#[test]
fn repeated_rules_for_the_same_non_terminal_all_contribute_alternatives() {
    let g = Grammar::load("S -> 'a'\nS -> 'b'\n").unwrap();
    assert_eq!(g.rules().len(), 2);
    assert!(g.terminals().contains("a"));
    assert!(g.terminals().contains("b"));
}
