//! Grammar model and loader for context-free grammars.
//!
//! Combines the "collaborator" line-reading contract with the `Grammar` model
//! itself, the way the teacher crate's `Grammar::parse` does — there is no
//! separate file-I/O stage here, only a text blob already in memory.

use crate::error::{GrammarError, Result};
use crate::symbol::{split_alternatives, split_symbols, END_MARKER};
use std::collections::BTreeSet;

/// A context-free grammar: the rule list plus the derived terminal and
/// non-terminal sets.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// The non-terminal of the first declared rule.
    initial: String,
    /// Deterministic (sorted) set of non-terminal symbols.
    non_terminals: BTreeSet<String>,
    /// Deterministic (sorted) set of terminal symbols; always contains `$`.
    terminals: BTreeSet<String>,
    /// Raw rule strings, in declaration order, exactly as supplied.
    rules: Vec<String>,
    /// Non-fatal diagnostics collected while skipping malformed lines.
    diagnostics: Vec<String>,
}

impl Grammar {
    /// Loads a grammar from a text blob: blank lines and `#` comments are
    /// ignored, each remaining line must be `LHS -> RHS`. Malformed lines are
    /// recorded in `diagnostics` and skipped; the load only fails if no rule
    /// at all could be parsed (so no `initial` symbol exists).
    pub fn load(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(GrammarError::EmptyInput);
        }

        let mut initial: Option<String> = None;
        let mut rules: Vec<String> = Vec::new();
        let mut diagnostics: Vec<String> = Vec::new();
        let mut rhs_symbols: Vec<String> = Vec::new();
        let mut non_terminals: BTreeSet<String> = BTreeSet::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(arrow) = line.find("->") else {
                diagnostics.push(format!("invalid rule (no '->'): {line}"));
                continue;
            };
            let lhs = line[..arrow].trim();
            if lhs.is_empty() {
                diagnostics.push(format!("invalid rule (empty left-hand side): {line}"));
                continue;
            }

            rules.push(line.to_string());
            if initial.is_none() {
                initial = Some(lhs.to_string());
            }
            non_terminals.insert(lhs.to_string());

            let rhs = line[arrow + 2..].trim();
            for alt in split_alternatives(rhs) {
                rhs_symbols.extend(split_symbols(alt));
            }
        }

        let Some(initial) = initial else {
            return Err(GrammarError::NoRules);
        };

        let mut terminals: BTreeSet<String> = rhs_symbols
            .into_iter()
            .filter(|s| !non_terminals.contains(s))
            .collect();
        terminals.insert(END_MARKER.to_string());

        Ok(Self {
            initial,
            non_terminals,
            terminals,
            rules,
            diagnostics,
        })
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn non_terminals(&self) -> &BTreeSet<String> {
        &self.non_terminals
    }

    pub fn terminals(&self) -> &BTreeSet<String> {
        &self.terminals
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn is_non_terminal(&self, symbol: &str) -> bool {
        self.non_terminals.contains(symbol)
    }

    pub fn is_terminal(&self, symbol: &str) -> bool {
        !self.is_non_terminal(symbol)
    }
}
