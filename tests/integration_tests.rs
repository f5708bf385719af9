use lr1_parser::driver::StepKind;
use lr1_parser::LrAutomaton;

fn tokens(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

const TEXTBOOK_GRAMMAR: &str = "S -> C C\nC -> c C\nC -> d\n";

#[test]
fn textbook_grammar_builds_ten_canonical_states() {
    let automaton = LrAutomaton::build(TEXTBOOK_GRAMMAR).unwrap();
    assert_eq!(automaton.state_count(), 10);
    assert!(!automaton.has_conflicts());
}

#[test]
fn textbook_grammar_accepts_well_formed_sentence() {
    let automaton = LrAutomaton::build(TEXTBOOK_GRAMMAR).unwrap();
    let outcome = automaton.parse(&tokens(&["c", "c", "d", "d"])).unwrap();
    assert!(outcome.accepted);

    let tree = outcome.tree.unwrap();
    assert_eq!(tree.symbol(), "S");
}

#[test]
fn textbook_grammar_rejects_short_sentence() {
    let automaton = LrAutomaton::build(TEXTBOOK_GRAMMAR).unwrap();
    let outcome = automaton.parse(&tokens(&["c", "c"])).unwrap();
    assert!(!outcome.accepted);
    // the trace still records the error step for diagnosability.
    assert_eq!(outcome.trace.last().unwrap().kind, StepKind::Error);
}

#[test]
fn arithmetic_grammar_respects_precedence_without_conflicts() {
    let grammar = "\
E -> E '+' T | T
T -> T '*' F | F
F -> '(' E ')' | id
";
    let automaton = LrAutomaton::build(grammar).unwrap();
    assert!(!automaton.has_conflicts());

    let outcome = automaton.parse(&tokens(&["id", "+", "id", "*", "id"])).unwrap();
    assert!(outcome.accepted);

    let outcome = automaton.parse(&tokens(&["(", "id", "+", "id", ")", "*", "id"])).unwrap();
    assert!(outcome.accepted);
}

#[test]
fn nullable_start_symbol_accepts_empty_and_repeated_input() {
    let automaton = LrAutomaton::build("S -> 'a' S | ''\n").unwrap();
    assert!(automaton.parse(&tokens(&[])).unwrap().accepted);
    assert!(automaton.parse(&tokens(&["a"])).unwrap().accepted);
    assert!(automaton.parse(&tokens(&["a", "a", "a"])).unwrap().accepted);
}

#[test]
fn reduce_reduce_conflict_is_recorded_but_build_still_succeeds() {
    let automaton = LrAutomaton::build("S -> A 'x'\nS -> B 'x'\nA -> ''\nB -> ''\n").unwrap();
    assert!(automaton.has_conflicts());
    assert!(automaton.conflicts().iter().any(|c| c.symbol == "x"));
}

#[test]
fn unreachable_non_terminal_does_not_affect_reachable_language() {
    // `Dead` is declared but never referenced from `S`; it should not show up
    // anywhere in the canonical collection's productive states, and parsing
    // sentences of the reachable language must still work.
    let grammar = "S -> 'a'\nDead -> 'z'\n";
    let automaton = LrAutomaton::build(grammar).unwrap();
    assert!(automaton.parse(&tokens(&["a"])).unwrap().accepted);
    assert!(!automaton.parse(&tokens(&["z"])).unwrap().accepted);
}

#[test]
fn trace_pairs_every_reduce_with_an_immediately_following_goto() {
    let automaton = LrAutomaton::build(TEXTBOOK_GRAMMAR).unwrap();
    let outcome = automaton.parse(&tokens(&["c", "d", "d"])).unwrap();
    assert!(outcome.accepted);

    let reduce_positions: Vec<usize> = outcome
        .trace
        .iter()
        .enumerate()
        .filter(|(_, r)| r.kind == StepKind::Reduce)
        .map(|(i, _)| i)
        .collect();
    assert!(!reduce_positions.is_empty());
    for i in reduce_positions {
        assert_eq!(outcome.trace[i + 1].kind, StepKind::Goto);
    }
}

#[test]
fn build_and_parse_reports_serialize_through_json() {
    let automaton = LrAutomaton::build(TEXTBOOK_GRAMMAR).unwrap();
    let build_report = automaton.build_report();
    let build_json = serde_json::to_string(&build_report).unwrap();
    assert!(build_json.contains("\"states\""));

    let parse_report = automaton.parse_report(&tokens(&["c", "c", "d", "d"])).unwrap();
    let parse_json = serde_json::to_string(&parse_report).unwrap();
    assert!(parse_json.contains("\"accepted\":true"));
}
