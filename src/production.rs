//! Production normalizer: turns raw rule strings into structured productions.

use crate::grammar::Grammar;
use crate::symbol::{split_alternatives, split_symbols};
use serde::Serialize;
use std::fmt;

/// An immutable grammar production, `lhs -> rhs`, with its position in the
/// normalized production list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub lhs: String,
    pub rhs: Vec<String>,
    pub index: usize,
}

impl Production {
    fn new(lhs: String, rhs: Vec<String>, index: usize) -> Self {
        Self { lhs, rhs, index }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rhs.is_empty() {
            write!(f, "{} -> ''", self.lhs)
        } else {
            write!(f, "{} -> {}", self.lhs, self.rhs.join(" "))
        }
    }
}

/// A serializable `{lhs, rhs, text}` projection of a production, used
/// wherever a report needs to name a production without exposing its index.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionSummary {
    pub lhs: String,
    pub rhs: Vec<String>,
    pub text: String,
}

impl Production {
    pub fn summary(&self) -> ProductionSummary {
        ProductionSummary { lhs: self.lhs.clone(), rhs: self.rhs.clone(), text: self.to_string() }
    }
}

/// Builds the augmented start symbol (the grammar's `initial` with as many
/// trailing `'` as needed to be distinct from every existing non-terminal),
/// and the normalized production list with the augmented start production
/// (`S' -> S`) always at index 0.
pub fn normalize(grammar: &Grammar) -> (String, Vec<Production>) {
    let mut augmented_start = format!("{}'", grammar.initial());
    while grammar.non_terminals().contains(&augmented_start) {
        augmented_start.push('\'');
    }

    let mut productions = Vec::new();
    productions.push(Production::new(
        augmented_start.clone(),
        vec![grammar.initial().to_string()],
        0,
    ));

    for rule in grammar.rules() {
        let arrow = rule.find("->").expect("Grammar only stores well-formed rules");
        let lhs = rule[..arrow].trim().to_string();
        let rhs = rule[arrow + 2..].trim();
        for alt in split_alternatives(rhs) {
            let symbols = split_symbols(alt);
            let index = productions.len();
            productions.push(Production::new(lhs.clone(), symbols, index));
        }
    }

    (augmented_start, productions)
}
