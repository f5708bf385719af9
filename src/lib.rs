//! A canonical LR(1) parser generator and table-driven shift-reduce driver.
//!
//! Feed a grammar description to [`LrAutomaton::build`] to compute FIRST
//! sets, the canonical collection of LR(1) item sets, and the ACTION/GOTO
//! tables (with any conflicts recorded rather than treated as fatal); then
//! call [`LrAutomaton::parse`] to drive a token stream through the tables and
//! get back an acceptance verdict, a structured trace, and a parse tree.

pub mod cli;
pub mod closure;
pub mod collection;
pub mod driver;
pub mod error;
pub mod first;
pub mod grammar;
pub mod item;
pub mod production;
pub mod report;
pub mod symbol;
pub mod table;

pub use driver::{ParseNode, ParseOutcome, StepKind, TraceAction, TraceRecord};
pub use error::{GrammarError, Result};
pub use grammar::Grammar;
pub use report::{BuildReport, ParseReport};
pub use table::{Action, Conflict, Tables};

use collection::{build_canonical_collection, CanonicalCollection};
use first::{compute_first_sets, FirstSets};
use production::{normalize, Production};
use table::build_tables;

/// A built LR(1) automaton: a grammar together with everything derived from
/// it (augmented start symbol, normalized productions, FIRST sets, canonical
/// collection, and ACTION/GOTO tables).
#[derive(Debug, Clone)]
pub struct LrAutomaton {
    grammar: Grammar,
    augmented_start: String,
    productions: Vec<Production>,
    first_sets: FirstSets,
    collection: CanonicalCollection,
    tables: Tables,
}

impl LrAutomaton {
    /// Loads `text` as a grammar and builds its canonical LR(1) automaton.
    pub fn build(text: &str) -> Result<Self> {
        let grammar = Grammar::load(text)?;
        let (augmented_start, productions) = normalize(&grammar);
        let first_sets = compute_first_sets(&grammar, &productions);
        let collection = build_canonical_collection(&grammar, &productions, &first_sets);
        let tables = build_tables(&grammar, &productions, &augmented_start, &collection);

        Ok(Self { grammar, augmented_start, productions, first_sets, collection, tables })
    }

    /// Drives `tokens` through the ACTION/GOTO tables. The end marker is
    /// appended internally; callers supply only the grammar's own terminals.
    pub fn parse(&self, tokens: &[String]) -> Result<ParseOutcome> {
        driver::parse(&self.productions, &self.tables, tokens)
    }

    /// A transport-agnostic snapshot of the build: states, tables, and
    /// conflicts, ready to serialize.
    pub fn build_report(&self) -> BuildReport {
        BuildReport::build(&self.grammar, &self.productions, &self.augmented_start, &self.collection, &self.tables)
    }

    /// Parses `tokens` and wraps the outcome in a transport-agnostic report.
    pub fn parse_report(&self, tokens: &[String]) -> Result<ParseReport> {
        let outcome = self.parse(tokens)?;
        Ok(ParseReport::new(tokens.to_vec(), outcome.accepted, outcome.trace, outcome.tree))
    }

    /// True if any ACTION table cell had more than one contending action.
    pub fn has_conflicts(&self) -> bool {
        !self.tables.conflicts.is_empty()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.tables.conflicts
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn augmented_start(&self) -> &str {
        &self.augmented_start
    }

    pub fn state_count(&self) -> usize {
        self.collection.states.len()
    }

    pub fn first_sets(&self) -> &FirstSets {
        &self.first_sets
    }
}
