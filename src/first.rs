//! FIRST-set computation.
//!
//! Only FIRST is needed for canonical LR(1) construction (FOLLOW-driven SLR(1)
//! and LL(1) table construction are explicit Non-goals and live, if anywhere,
//! in code this crate no longer carries).

use crate::grammar::Grammar;
use crate::production::Production;
use crate::symbol::EPSILON_MARKER;
use std::collections::{BTreeSet, HashMap};

/// `FIRST(A)` for every non-terminal `A`, including the epsilon marker when
/// `A` is nullable.
pub type FirstSets = HashMap<String, BTreeSet<String>>;

/// Computes FIRST sets for every non-terminal in `grammar` by fixed-point
/// iteration over the normalized `productions` (production 0, the augmented
/// start, is harmless to include — it only ever adds `FIRST(initial)` to
/// `FIRST(S')`, which nothing downstream consults).
pub fn compute_first_sets(grammar: &Grammar, productions: &[Production]) -> FirstSets {
    let mut first_sets: FirstSets = FirstSets::new();
    for nt in grammar.non_terminals() {
        first_sets.insert(nt.clone(), BTreeSet::new());
    }

    let mut changed = true;
    while changed {
        changed = false;
        for production in productions {
            if !first_sets.contains_key(&production.lhs) {
                // The augmented start's own FIRST set is tracked too, lazily.
                first_sets.entry(production.lhs.clone()).or_default();
            }

            let mut all_empty = true;
            let mut additions: Vec<String> = Vec::new();
            for symbol in &production.rhs {
                if grammar.is_non_terminal(symbol) {
                    let sym_first = first_sets.entry(symbol.clone()).or_default().clone();
                    additions.extend(sym_first.iter().filter(|s| *s != EPSILON_MARKER).cloned());
                    if !sym_first.contains(EPSILON_MARKER) {
                        all_empty = false;
                        break;
                    }
                } else {
                    additions.push(symbol.clone());
                    all_empty = false;
                    break;
                }
            }
            if all_empty {
                additions.push(EPSILON_MARKER.to_string());
            }

            let entry = first_sets.entry(production.lhs.clone()).or_default();
            for addition in additions {
                if entry.insert(addition) {
                    changed = true;
                }
            }
        }
    }

    first_sets
}

/// `FIRST(β · a)`: the lookahead set closure needs when expanding an item
/// `[A -> α · B β, a]` into `B`'s productions.
///
/// Treats any symbol absent from both `grammar.terminals()` and
/// `grammar.non_terminals()` as a self-first terminal, matching the loader's
/// own terminal-inference rule (this only matters for the augmented start
/// symbol itself, which never legitimately appears inside a `β`).
pub fn first_of_sequence(
    grammar: &Grammar,
    first_sets: &FirstSets,
    beta: &[String],
    lookahead: &str,
) -> BTreeSet<String> {
    let mut result = BTreeSet::new();
    let mut all_empty = true;

    for symbol in beta {
        if grammar.is_non_terminal(symbol) {
            let empty_set = BTreeSet::new();
            let sym_first = first_sets.get(symbol).unwrap_or(&empty_set);
            result.extend(sym_first.iter().filter(|s| *s != EPSILON_MARKER).cloned());
            if !sym_first.contains(EPSILON_MARKER) {
                all_empty = false;
                break;
            }
        } else {
            result.insert(symbol.clone());
            all_empty = false;
            break;
        }
    }

    if all_empty {
        result.insert(lookahead.to_string());
    }
    result
}
