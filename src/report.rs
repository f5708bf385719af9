//! Serializable build/parse reports.
//!
//! The distilled spec pins the *contract* of these shapes (any transport —
//! HTTP, a CLI, a test harness — must be able to serialize the build and
//! parse results), grounded directly on `original_source/…/api.py`'s
//! `/build` handler and its `serialize_states`/`serialize_closure_table`/
//! `serialize_tables` helpers. `HashMap` keys in this crate's internal tables
//! are tuples, which `serde_json` cannot emit as object keys directly, so
//! every table is flattened into a sorted `Vec` of entry structs before
//! serialization, the same role those helper functions play in the original.

use crate::collection::CanonicalCollection;
use crate::driver::{render_ascii, ParseNode, TraceRecord};
use crate::grammar::Grammar;
use crate::item::ItemEntry;
use crate::production::Production;
use crate::table::{Action, Tables};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TransitionEntry {
    pub symbol: String,
    pub to: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateReport {
    pub id: usize,
    pub items: Vec<ItemEntry>,
    pub transitions: Vec<TransitionEntry>,
}

/// A kernel/closure split for one canonical state, matching
/// `serialize_closure_table`'s per-state entry: the kernel is every item
/// with `dot > 0`, plus the augmented start's own item (the one exception
/// that is a kernel item despite `dot == 0`).
#[derive(Debug, Clone, Serialize)]
pub struct ClosureEntry {
    pub id: usize,
    pub kernel: Vec<ItemEntry>,
    pub closure: Vec<ItemEntry>,
    pub transitions: Vec<TransitionEntry>,
}

/// The tagged shape of a single ACTION table cell: `{"type": "shift", ...}`,
/// `{"type": "reduce", ...}`, or `{"type": "accept"}`, mirroring
/// `serialize_tables`'s `action` values exactly (flattened, not nested under
/// a `production` key — that nesting is only used by the parse trace).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionPayload {
    Shift { to: usize },
    Reduce { lhs: String, rhs: Vec<String>, text: String },
    Accept,
}

fn action_payload(action: &Action, productions: &[Production]) -> ActionPayload {
    match action {
        Action::Shift(to) => ActionPayload::Shift { to: *to },
        Action::Reduce(production_index) => {
            let summary = productions[*production_index].summary();
            ActionPayload::Reduce { lhs: summary.lhs, rhs: summary.rhs, text: summary.text }
        }
        Action::Accept => ActionPayload::Accept,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionEntry {
    pub state: usize,
    pub symbol: String,
    pub action: ActionPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct GotoEntry {
    pub state: usize,
    pub symbol: String,
    pub target: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictEntry {
    pub state: usize,
    pub symbol: String,
    pub kept: ActionPayload,
    pub discarded: ActionPayload,
}

/// A complete, transport-agnostic snapshot of a built automaton.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub initial: String,
    pub terminals: Vec<String>,
    pub non_terminals: Vec<String>,
    pub rules: Vec<String>,
    pub augmented_start: String,
    pub state_count: usize,
    pub states: Vec<StateReport>,
    pub closure_table: Vec<ClosureEntry>,
    pub actions: Vec<ActionEntry>,
    pub gotos: Vec<GotoEntry>,
    pub conflicts: Vec<ConflictEntry>,
    pub diagnostics: Vec<String>,
}

impl BuildReport {
    pub fn build(
        grammar: &Grammar,
        productions: &[Production],
        augmented_start: &str,
        collection: &CanonicalCollection,
        tables: &Tables,
    ) -> Self {
        let outgoing = |state_id: usize| -> Vec<TransitionEntry> {
            let mut entries: Vec<TransitionEntry> = collection
                .transitions
                .iter()
                .filter(|((from, _), _)| *from == state_id)
                .map(|((_, symbol), to)| TransitionEntry { symbol: symbol.clone(), to: *to })
                .collect();
            entries.sort_by(|a, b| a.symbol.cmp(&b.symbol));
            entries
        };

        let states: Vec<StateReport> = collection
            .states
            .iter()
            .enumerate()
            .map(|(id, items)| StateReport {
                id,
                items: items.iter().map(|item| item.to_entry(productions)).collect(),
                transitions: outgoing(id),
            })
            .collect();

        let closure_table: Vec<ClosureEntry> = collection
            .states
            .iter()
            .enumerate()
            .map(|(id, items)| {
                let closure: Vec<ItemEntry> = items.iter().map(|item| item.to_entry(productions)).collect();
                let kernel: Vec<ItemEntry> = items
                    .iter()
                    .filter(|item| item.dot > 0 || productions[item.production].lhs == augmented_start)
                    .map(|item| item.to_entry(productions))
                    .collect();
                ClosureEntry { id, kernel, closure, transitions: outgoing(id) }
            })
            .collect();

        let mut actions: Vec<ActionEntry> = tables
            .action
            .iter()
            .map(|((state, symbol), action)| ActionEntry {
                state: *state,
                symbol: symbol.clone(),
                action: action_payload(action, productions),
            })
            .collect();
        actions.sort_by(|a, b| (a.state, &a.symbol).cmp(&(b.state, &b.symbol)));

        let mut gotos: Vec<GotoEntry> = tables
            .goto
            .iter()
            .map(|((state, symbol), target)| GotoEntry {
                state: *state,
                symbol: symbol.clone(),
                target: *target,
            })
            .collect();
        gotos.sort_by(|a, b| (a.state, &a.symbol).cmp(&(b.state, &b.symbol)));

        let mut conflicts: Vec<ConflictEntry> = tables
            .conflicts
            .iter()
            .map(|conflict| ConflictEntry {
                state: conflict.state,
                symbol: conflict.symbol.clone(),
                kept: action_payload(&conflict.kept, productions),
                discarded: action_payload(&conflict.discarded, productions),
            })
            .collect();
        conflicts.sort_by(|a, b| (a.state, &a.symbol).cmp(&(b.state, &b.symbol)));

        Self {
            initial: grammar.initial().to_string(),
            terminals: grammar.terminals().iter().cloned().collect(),
            non_terminals: grammar.non_terminals().iter().cloned().collect(),
            rules: grammar.rules().to_vec(),
            augmented_start: augmented_start.to_string(),
            state_count: collection.states.len(),
            states,
            closure_table,
            actions,
            gotos,
            conflicts,
            diagnostics: grammar.diagnostics().to_vec(),
        }
    }
}

/// A complete, transport-agnostic snapshot of a single parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub tokens: Vec<String>,
    pub accepted: bool,
    pub trace: Vec<TraceRecord>,
    pub tree: Option<ParseNode>,
    pub tree_ascii: Option<String>,
}

impl ParseReport {
    pub fn new(tokens: Vec<String>, accepted: bool, trace: Vec<TraceRecord>, tree: Option<ParseNode>) -> Self {
        let tree_ascii = tree.as_ref().map(render_ascii);
        Self { tokens, accepted, trace, tree, tree_ascii }
    }
}
