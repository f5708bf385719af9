//! Table-driven shift-reduce parsing.
//!
//! Grounded on `original_source/…/lr_parser.py`'s `LRParser.parse`: parallel
//! state/symbol stacks, one trace record per shift, and — the detail that
//! distilled spec.md calls out explicitly — two trace records per reduction,
//! a `Reduce` record immediately followed by the `Goto` record it triggers,
//! in that order.

use crate::error::{GrammarError, Result};
use crate::production::{Production, ProductionSummary};
use crate::symbol::END_MARKER;
use crate::table::{Action, Tables};
use serde::Serialize;

/// A node in the parse tree: a leaf is a shifted terminal, an internal node
/// is a reduced non-terminal with its children in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ParseNode {
    Leaf { symbol: String },
    Internal { symbol: String, children: Vec<ParseNode> },
}

impl ParseNode {
    pub fn symbol(&self) -> &str {
        match self {
            ParseNode::Leaf { symbol } => symbol,
            ParseNode::Internal { symbol, .. } => symbol,
        }
    }

    fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Leaf { .. } => &[],
            ParseNode::Internal { children, .. } => children,
        }
    }
}

/// Renders a parse tree the way `original_source/…/lr_parser.py`'s
/// `_render_ascii` does: a box-drawing tree with `└── `/`├── ` connectors.
pub fn render_ascii(root: &ParseNode) -> String {
    render_lines(root, "", true).join("\n")
}

fn render_lines(node: &ParseNode, prefix: &str, is_last: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if prefix.is_empty() {
        lines.push(node.symbol().to_string());
    } else {
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{}", node.symbol()));
    }

    let new_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        lines.extend(render_lines(child, &new_prefix, i + 1 == children.len()));
    }
    lines
}

/// The kind of driver step a `TraceRecord` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Shift,
    Reduce,
    Goto,
    Accept,
    Error,
}

/// The tagged action payload carried by a `TraceRecord`, mirroring
/// `original_source/…/lr_parser.py`'s `json_trace` entries' `action` dict:
/// `{"type": "shift", "to", "symbol"}`, `{"type": "reduce", "production"}`,
/// `{"type": "goto", "to", "on"}`, `{"type": "accept"}`, or
/// `{"type": "error", "state", "lookahead"}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceAction {
    Shift { to: usize, symbol: String },
    Reduce { production: ProductionSummary },
    Goto { to: usize, on: String },
    Accept,
    Error { state: usize, lookahead: String },
}

/// One structured step of the parse, independent of any pretty-printer.
///
/// `stack_display` renders the interleaved state/symbol stacks as
/// `(s0) X (s1) Y (s2) …`, and `remaining_input` is the space-joined tokens
/// from the current position onward (lookahead included) — both per
/// `original_source/…/lr_parser.py`'s `pila_str`/`entrada_rest`.
#[derive(Debug, Clone, Serialize)]
pub struct TraceRecord {
    pub step: usize,
    pub kind: StepKind,
    pub state_stack: Vec<usize>,
    pub symbol_stack: Vec<String>,
    pub stack_display: String,
    pub remaining_input: String,
    pub lookahead: String,
    pub action: TraceAction,
}

/// The full result of driving the tables over a token stream.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub accepted: bool,
    pub trace: Vec<TraceRecord>,
    pub tree: Option<ParseNode>,
}

/// Renders the interleaved state/symbol stacks as `(s0) X (s1) Y (s2) …`,
/// per `original_source/…/lr_parser.py`'s `pila_str`.
fn stack_display(state_stack: &[usize], symbol_stack: &[String]) -> String {
    let mut parts: Vec<String> = vec![format!("({})", state_stack[0])];
    for (i, symbol) in symbol_stack.iter().enumerate() {
        parts.push(symbol.clone());
        parts.push(format!("({})", state_stack[i + 1]));
    }
    parts.join(" ")
}

/// Drives `tables` over `tokens` (an already-lexed terminal stream; the end
/// marker is appended automatically and must not be supplied by the caller).
/// Never errors on rejection — a missing ACTION entry yields
/// `accepted: false` with the trace captured up to that point. Only a
/// construction inconsistency (a reduce whose GOTO entry is missing) is
/// reported as an `Err`.
pub fn parse(productions: &[Production], tables: &Tables, tokens: &[String]) -> Result<ParseOutcome> {
    let mut input: Vec<String> = tokens.to_vec();
    input.push(END_MARKER.to_string());

    let mut state_stack: Vec<usize> = vec![0];
    let mut symbol_stack: Vec<String> = Vec::new();
    let mut node_stack: Vec<ParseNode> = Vec::new();
    let mut trace: Vec<TraceRecord> = Vec::new();
    let mut pos = 0usize;
    let mut step = 0usize;

    loop {
        let state = *state_stack.last().expect("state stack is never empty");
        let lookahead = input.get(pos).cloned().unwrap_or_else(|| END_MARKER.to_string());
        let remaining_input = input[pos..].join(" ");

        match tables.action.get(&(state, lookahead.clone())) {
            Some(Action::Shift(target)) => {
                state_stack.push(*target);
                symbol_stack.push(lookahead.clone());
                node_stack.push(ParseNode::Leaf { symbol: lookahead.clone() });
                trace.push(TraceRecord {
                    step,
                    kind: StepKind::Shift,
                    stack_display: stack_display(&state_stack, &symbol_stack),
                    state_stack: state_stack.clone(),
                    symbol_stack: symbol_stack.clone(),
                    remaining_input,
                    lookahead: lookahead.clone(),
                    action: TraceAction::Shift { to: *target, symbol: lookahead.clone() },
                });
                step += 1;
                pos += 1;
            }
            Some(Action::Reduce(production_index)) => {
                let production = &productions[*production_index];
                let rhs_len = production.rhs.len();
                let mut children: Vec<ParseNode> = Vec::with_capacity(rhs_len);
                for _ in 0..rhs_len {
                    state_stack.pop();
                    symbol_stack.pop();
                    children.push(node_stack.pop().expect("node stack matches symbol stack"));
                }
                children.reverse();

                symbol_stack.push(production.lhs.clone());
                node_stack.push(ParseNode::Internal { symbol: production.lhs.clone(), children });
                trace.push(TraceRecord {
                    step,
                    kind: StepKind::Reduce,
                    stack_display: stack_display(&state_stack, &symbol_stack),
                    state_stack: state_stack.clone(),
                    symbol_stack: symbol_stack.clone(),
                    remaining_input: remaining_input.clone(),
                    lookahead: lookahead.clone(),
                    action: TraceAction::Reduce { production: production.summary() },
                });
                step += 1;

                let top_state = *state_stack.last().expect("state stack is never empty");
                let Some(&goto_state) = tables.goto.get(&(top_state, production.lhs.clone())) else {
                    return Err(GrammarError::ParseError(format!(
                        "no GOTO entry for state {top_state} on {}",
                        production.lhs
                    )));
                };
                state_stack.push(goto_state);
                trace.push(TraceRecord {
                    step,
                    kind: StepKind::Goto,
                    stack_display: stack_display(&state_stack, &symbol_stack),
                    state_stack: state_stack.clone(),
                    symbol_stack: symbol_stack.clone(),
                    remaining_input,
                    lookahead: lookahead.clone(),
                    action: TraceAction::Goto { to: goto_state, on: production.lhs.clone() },
                });
                step += 1;
            }
            Some(Action::Accept) => {
                trace.push(TraceRecord {
                    step,
                    kind: StepKind::Accept,
                    stack_display: stack_display(&state_stack, &symbol_stack),
                    state_stack: state_stack.clone(),
                    symbol_stack: symbol_stack.clone(),
                    remaining_input,
                    lookahead: lookahead.clone(),
                    action: TraceAction::Accept,
                });
                return Ok(ParseOutcome { accepted: true, trace, tree: node_stack.pop() });
            }
            None => {
                trace.push(TraceRecord {
                    step,
                    kind: StepKind::Error,
                    stack_display: stack_display(&state_stack, &symbol_stack),
                    state_stack: state_stack.clone(),
                    symbol_stack: symbol_stack.clone(),
                    remaining_input,
                    lookahead: lookahead.clone(),
                    action: TraceAction::Error { state, lookahead: lookahead.clone() },
                });
                return Ok(ParseOutcome { accepted: false, trace, tree: None });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::build_canonical_collection;
    use crate::first::compute_first_sets;
    use crate::grammar::Grammar;
    use crate::production::normalize;
    use crate::table::build_tables;

    fn drive(grammar_text: &str, tokens: &[&str]) -> ParseOutcome {
        let g = Grammar::load(grammar_text).unwrap();
        let (aug, prods) = normalize(&g);
        let first_sets = compute_first_sets(&g, &prods);
        let collection = build_canonical_collection(&g, &prods, &first_sets);
        let tables = build_tables(&g, &prods, &aug, &collection);
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        parse(&prods, &tables, &tokens).unwrap()
    }

    #[test]
    fn accepts_valid_sentence_and_builds_tree() {
        let outcome = drive("S -> C C\nC -> c C\nC -> d\n", &["c", "c", "d", "d"]);
        assert!(outcome.accepted);
        let tree = outcome.tree.unwrap();
        assert_eq!(tree.symbol(), "S");
    }

    #[test]
    fn ascii_rendering_places_root_unprefixed_and_children_connected() {
        let outcome = drive("S -> C C\nC -> c C\nC -> d\n", &["c", "d", "d"]);
        let tree = outcome.tree.unwrap();
        let rendered = render_ascii(&tree);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "S");
        assert!(lines[1].starts_with("├── ") || lines[1].starts_with("└── "));
    }

    #[test]
    fn rejects_invalid_sentence_without_erroring() {
        let outcome = drive("S -> C C\nC -> c C\nC -> d\n", &["c", "c"]);
        assert!(!outcome.accepted);
        assert!(outcome.tree.is_none());
    }

    #[test]
    fn trace_follows_reduce_immediately_with_goto() {
        let outcome = drive("S -> C C\nC -> c C\nC -> d\n", &["d", "d"]);
        let mut found_pair = false;
        for window in outcome.trace.windows(2) {
            if window[0].kind == StepKind::Reduce && window[1].kind == StepKind::Goto {
                found_pair = true;
                break;
            }
        }
        assert!(found_pair);
    }

    #[test]
    fn accepts_empty_input_for_nullable_start() {
        let outcome = drive("S -> ''\n", &[]);
        assert!(outcome.accepted);
    }
}
