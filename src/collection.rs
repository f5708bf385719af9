//! Canonical collection of LR(1) item sets.
//!
//! Builds the automaton states via a worklist fixed-point, the same shape as
//! `original_source/…/lr1.py`'s `build_automaton`, but replacing that script's
//! `jid >= len(states) - 1` "was this just created?" check (flagged as an
//! edge case in the distilled spec) with the simpler invariant: a state is
//! pushed onto the worklist exactly once, at the moment it is first created.
//! Revisiting an existing state only ever records a transition, never a
//! re-enqueue.

use crate::closure::{closure, goto_kernel};
use crate::first::FirstSets;
use crate::grammar::Grammar;
use crate::item::{Item, ItemSet};
use crate::production::Production;
use crate::symbol::END_MARKER;
use std::collections::{BTreeSet, HashMap};

/// The canonical collection: every distinct item-set state plus the GOTO
/// transition function between them, keyed by `(state, symbol)`.
#[derive(Debug, Clone)]
pub struct CanonicalCollection {
    pub states: Vec<ItemSet>,
    pub transitions: HashMap<(usize, String), usize>,
}

/// Builds the canonical collection of LR(1) item sets for `productions`,
/// starting from the closure of `[S' -> · S, $]`.
pub fn build_canonical_collection(
    grammar: &Grammar,
    productions: &[Production],
    first_sets: &FirstSets,
) -> CanonicalCollection {
    let mut states: Vec<ItemSet> = Vec::new();
    let mut index_of: HashMap<ItemSet, usize> = HashMap::new();
    let mut transitions: HashMap<(usize, String), usize> = HashMap::new();
    let mut worklist: Vec<usize> = Vec::new();

    let initial_kernel: ItemSet = [Item::new(0, 0, END_MARKER)].into_iter().collect();
    let initial_closure = closure(&initial_kernel, grammar, productions, first_sets);
    states.push(initial_closure.clone());
    index_of.insert(initial_closure, 0);
    worklist.push(0);

    // Sorted, deterministic symbol enumeration: every non-terminal and every
    // terminal (which already includes `$`). The augmented start never
    // legitimately appears after a dot, so it is excluded.
    let alphabet: BTreeSet<String> = grammar
        .non_terminals()
        .iter()
        .cloned()
        .chain(grammar.terminals().iter().cloned())
        .collect();

    while let Some(state_id) = worklist.pop() {
        let items = states[state_id].clone();
        for symbol in &alphabet {
            let kernel = goto_kernel(&items, symbol, productions);
            if kernel.is_empty() {
                continue;
            }
            let target_closure = closure(&kernel, grammar, productions, first_sets);

            let target_id = if let Some(&existing) = index_of.get(&target_closure) {
                existing
            } else {
                let new_id = states.len();
                states.push(target_closure.clone());
                index_of.insert(target_closure, new_id);
                worklist.push(new_id);
                new_id
            };

            transitions.insert((state_id, symbol.clone()), target_id);
        }
    }

    CanonicalCollection { states, transitions }
}
