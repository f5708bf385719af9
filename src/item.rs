//! LR(1) items and item sets.
//!
//! An item `[A -> α · β, a]` pairs a production with a dot position and a
//! single lookahead terminal. Structural `Ord`/`Hash` (deriving straight from
//! the fields) lets item sets live in `BTreeSet`s, which is what gives the
//! canonical collection its deterministic state numbering.

use crate::production::Production;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A single LR(1) item: a production index, a dot position into its RHS, and
/// one lookahead terminal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub production: usize,
    pub dot: usize,
    pub lookahead: String,
}

impl Item {
    pub fn new(production: usize, dot: usize, lookahead: impl Into<String>) -> Self {
        Self { production, dot, lookahead: lookahead.into() }
    }

    /// The symbol immediately after the dot, or `None` if the dot is at the
    /// end of the production (the item is a reduce item).
    pub fn symbol_after_dot<'p>(&self, productions: &'p [Production]) -> Option<&'p str> {
        productions[self.production].rhs.get(self.dot).map(String::as_str)
    }

    /// True if the dot has reached the end of the production's RHS.
    pub fn is_complete(&self, productions: &[Production]) -> bool {
        self.dot >= productions[self.production].rhs.len()
    }

    /// The item with the dot advanced by one position.
    pub fn advanced(&self) -> Self {
        Self { production: self.production, dot: self.dot + 1, lookahead: self.lookahead.clone() }
    }

    /// Renders the item as `A -> α · β, a` for traces and diagnostics.
    pub fn display(&self, productions: &[Production]) -> String {
        let production = &productions[self.production];
        let mut rhs_with_dot: Vec<String> = Vec::with_capacity(production.rhs.len() + 1);
        for (i, sym) in production.rhs.iter().enumerate() {
            if i == self.dot {
                rhs_with_dot.push("·".to_string());
            }
            rhs_with_dot.push(sym.clone());
        }
        if self.dot >= production.rhs.len() {
            rhs_with_dot.push("·".to_string());
        }
        format!("[{} -> {}, {}]", production.lhs, rhs_with_dot.join(" "), self.lookahead)
    }

    /// A serializable `{lhs, rhs, dot, lookahead, text}` projection, the
    /// shape `original_source/…/api.py`'s `serialize_states`/
    /// `serialize_closure_table` give each item.
    pub fn to_entry(&self, productions: &[Production]) -> ItemEntry {
        let production = &productions[self.production];
        ItemEntry {
            lhs: production.lhs.clone(),
            rhs: production.rhs.clone(),
            dot: self.dot,
            lookahead: self.lookahead.clone(),
            text: self.display(productions),
        }
    }
}

/// A serializable projection of an [`Item`], independent of the production
/// list it was built against.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEntry {
    pub lhs: String,
    pub rhs: Vec<String>,
    pub dot: usize,
    pub lookahead: String,
    pub text: String,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(production {}, dot {}, lookahead {})", self.production, self.dot, self.lookahead)
    }
}

/// A set of LR(1) items; `BTreeSet` ordering gives item sets a canonical
/// iteration order, which in turn makes two item sets comparable by value
/// (needed to recognize "this goto target already exists as state N").
pub type ItemSet = BTreeSet<Item>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::production::normalize;

    #[test]
    fn symbol_after_dot_and_completion() {
        let g = Grammar::load("S -> C C\nC -> c C\nC -> d\n").unwrap();
        let (_, prods) = normalize(&g);
        let item = Item::new(1, 0, "$");
        assert_eq!(item.symbol_after_dot(&prods), Some("c"));
        assert!(!item.is_complete(&prods));

        let advanced = item.advanced().advanced();
        assert_eq!(advanced.symbol_after_dot(&prods), None);
        assert!(advanced.is_complete(&prods));
    }

    #[test]
    fn to_entry_carries_lhs_rhs_and_text() {
        let g = Grammar::load("S -> C C\nC -> c C\nC -> d\n").unwrap();
        let (_, prods) = normalize(&g);
        let item = Item::new(1, 1, "$");
        let entry = item.to_entry(&prods);
        assert_eq!(entry.lhs, "C");
        assert_eq!(entry.rhs, vec!["c".to_string(), "C".to_string()]);
        assert_eq!(entry.dot, 1);
        assert_eq!(entry.lookahead, "$");
        assert_eq!(entry.text, "[C -> c · C, $]");
    }

    #[test]
    fn display_places_dot_correctly() {
        let g = Grammar::load("S -> C C\nC -> c C\nC -> d\n").unwrap();
        let (_, prods) = normalize(&g);
        let item = Item::new(1, 1, "$");
        assert_eq!(item.display(&prods), "[C -> c · C, $]");
    }

    #[test]
    fn items_are_ordered_for_deterministic_sets() {
        let a = Item::new(0, 0, "$");
        let b = Item::new(0, 1, "$");
        let mut set: ItemSet = ItemSet::new();
        set.insert(b.clone());
        set.insert(a.clone());
        let ordered: Vec<&Item> = set.iter().collect();
        assert_eq!(ordered, vec![&a, &b]);
    }
}
