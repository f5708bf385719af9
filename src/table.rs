//! ACTION/GOTO table construction from a canonical LR(1) collection.
//!
//! Conflicts (shift/reduce or reduce/reduce) are never fatal: the first
//! action assigned to a `(state, symbol)` cell wins and every later
//! contender is recorded in `conflicts` instead of overwriting it. Iteration
//! order within a state follows the item set's own `BTreeSet` ordering, so
//! which action "wins" is deterministic and reproducible across runs.

use crate::collection::CanonicalCollection;
use crate::grammar::Grammar;
use crate::production::Production;
use std::collections::HashMap;
use std::fmt;

/// A single ACTION table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(s) => write!(f, "shift {s}"),
            Action::Reduce(p) => write!(f, "reduce {p}"),
            Action::Accept => write!(f, "accept"),
        }
    }
}

/// A recorded, non-fatal ACTION table conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub state: usize,
    pub symbol: String,
    pub kept: Action,
    pub discarded: Action,
}

/// The ACTION and GOTO tables, plus any conflicts encountered while building
/// them.
#[derive(Debug, Clone)]
pub struct Tables {
    pub action: HashMap<(usize, String), Action>,
    pub goto: HashMap<(usize, String), usize>,
    pub conflicts: Vec<Conflict>,
}

/// Builds the ACTION/GOTO tables from `collection`.
pub fn build_tables(
    grammar: &Grammar,
    productions: &[Production],
    augmented_start: &str,
    collection: &CanonicalCollection,
) -> Tables {
    let mut action: HashMap<(usize, String), Action> = HashMap::new();
    let mut goto: HashMap<(usize, String), usize> = HashMap::new();
    let mut conflicts: Vec<Conflict> = Vec::new();

    for (state_id, items) in collection.states.iter().enumerate() {
        for item in items {
            match item.symbol_after_dot(productions) {
                Some(symbol) if grammar.is_terminal(symbol) => {
                    if let Some(&target) = collection.transitions.get(&(state_id, symbol.to_string())) {
                        set_action(
                            &mut action,
                            &mut conflicts,
                            state_id,
                            symbol.to_string(),
                            Action::Shift(target),
                        );
                    }
                }
                Some(_) => {
                    // Dot before a non-terminal: no ACTION entry, only GOTO
                    // (handled uniformly below from `collection.transitions`).
                }
                None => {
                    let production = &productions[item.production];
                    let attempted = if production.lhs == augmented_start {
                        Action::Accept
                    } else {
                        Action::Reduce(item.production)
                    };
                    set_action(&mut action, &mut conflicts, state_id, item.lookahead.clone(), attempted);
                }
            }
        }
    }

    for (&(state_id, ref symbol), &target) in &collection.transitions {
        if grammar.is_non_terminal(symbol) {
            goto.insert((state_id, symbol.clone()), target);
        }
    }

    Tables { action, goto, conflicts }
}

fn set_action(
    action: &mut HashMap<(usize, String), Action>,
    conflicts: &mut Vec<Conflict>,
    state: usize,
    symbol: String,
    attempted: Action,
) {
    match action.get(&(state, symbol.clone())) {
        None => {
            action.insert((state, symbol), attempted);
        }
        Some(existing) if *existing == attempted => {}
        Some(existing) => {
            conflicts.push(Conflict {
                state,
                symbol,
                kept: existing.clone(),
                discarded: attempted,
            });
        }
    }
}
