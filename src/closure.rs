//! Closure and goto operations over LR(1) item sets.
//!
//! Grounded on `other_examples/70f81b5e_azazo1-auto_canonical_lr1__src-item.rs`'s
//! saturation-loop `closure()`, adapted from that file's bump-allocated
//! `Item`/`Family` model to this crate's `BTreeSet<Item>` representation and
//! the production-index addressing used throughout this crate.

use crate::first::{first_of_sequence, FirstSets};
use crate::grammar::Grammar;
use crate::item::{Item, ItemSet};
use crate::production::Production;

/// Computes the closure of `items`: repeatedly, for every item
/// `[A -> α · B β, a]` with `B` a non-terminal, adds `[B -> · γ, b]` for every
/// production `B -> γ` and every `b` in `FIRST(β a)`, until nothing new is
/// added.
pub fn closure(
    items: &ItemSet,
    grammar: &Grammar,
    productions: &[Production],
    first_sets: &FirstSets,
) -> ItemSet {
    let mut result = items.clone();
    let mut changed = true;

    while changed {
        changed = false;
        let snapshot: Vec<Item> = result.iter().cloned().collect();

        for item in &snapshot {
            let Some(after_dot) = item.symbol_after_dot(productions) else {
                continue;
            };
            if !grammar.is_non_terminal(after_dot) {
                continue;
            }

            let beta = &productions[item.production].rhs[item.dot + 1..];
            let lookaheads = first_of_sequence(grammar, first_sets, beta, &item.lookahead);

            for production in productions {
                if production.lhs != after_dot {
                    continue;
                }
                for lookahead in &lookaheads {
                    let new_item = Item::new(production.index, 0, lookahead.clone());
                    if result.insert(new_item) {
                        changed = true;
                    }
                }
            }
        }
    }

    result
}

/// Computes `GOTO(items, symbol)`: every item in `items` with `symbol`
/// immediately after the dot, with the dot advanced past it. The caller is
/// expected to take the closure of the result.
pub fn goto_kernel(items: &ItemSet, symbol: &str, productions: &[Production]) -> ItemSet {
    items
        .iter()
        .filter(|item| item.symbol_after_dot(productions) == Some(symbol))
        .map(Item::advanced)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first::compute_first_sets;
    use crate::production::normalize;
    use crate::symbol::END_MARKER;

    fn setup(text: &str) -> (Grammar, String, Vec<Production>, FirstSets) {
        let g = Grammar::load(text).unwrap();
        let (aug, prods) = normalize(&g);
        let first_sets = compute_first_sets(&g, &prods);
        (g, aug, prods, first_sets)
    }

    #[test]
    fn closure_expands_initial_item_into_all_alternatives() {
        let (g, _aug, prods, first_sets) = setup("S -> C C\nC -> c C\nC -> d\n");
        let mut initial: ItemSet = ItemSet::new();
        initial.insert(Item::new(0, 0, END_MARKER));

        let closed = closure(&initial, &g, &prods, &first_sets);
        // S' -> .S,$  S -> .C C,$  C -> .cC,c/d  C -> .d,c/d
        assert!(closed.contains(&Item::new(0, 0, END_MARKER)));
        assert!(closed.contains(&Item::new(1, 0, END_MARKER)));
        assert!(closed.iter().any(|i| i.production == 2 && i.lookahead == "c"));
        assert!(closed.iter().any(|i| i.production == 2 && i.lookahead == "d"));
        assert!(closed.iter().any(|i| i.production == 3 && i.lookahead == "c"));
        assert!(closed.iter().any(|i| i.production == 3 && i.lookahead == "d"));
    }

    #[test]
    fn goto_kernel_advances_matching_items_only() {
        let (g, _aug, prods, first_sets) = setup("S -> C C\nC -> c C\nC -> d\n");
        let mut initial: ItemSet = ItemSet::new();
        initial.insert(Item::new(0, 0, END_MARKER));
        let closed = closure(&initial, &g, &prods, &first_sets);

        let on_c = goto_kernel(&closed, "c", &prods);
        assert!(!on_c.is_empty());
        assert!(on_c.iter().all(|i| i.dot == 1 && i.production == 2));

        let on_s = goto_kernel(&closed, "S", &prods);
        assert_eq!(on_s.len(), 1);
        assert_eq!(on_s.iter().next().unwrap().dot, 1);
    }
}
