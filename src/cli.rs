//! Command-line front-end: reads a grammar file, builds its LR(1) automaton,
//! and optionally drives a token stream through it.
//!
//! Deliberately free of an argument-parsing crate, matching the teacher
//! crate's own `cli.rs` — this front-end is a thin shell around
//! [`crate::LrAutomaton`], not a product of its own.

use crate::LrAutomaton;
use std::fmt;
use std::fs;

/// Parsed command-line arguments.
pub struct Cli {
    pub grammar_path: String,
    pub tokens: Option<Vec<String>>,
    pub json: bool,
}

#[derive(Debug)]
pub enum CliError {
    MissingGrammarPath,
    UnknownFlag(String),
    MissingValue(String),
    Io(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingGrammarPath => write!(f, "usage: lr1_parser <grammar-file> [--tokens a,b,c] [--json]"),
            CliError::UnknownFlag(flag) => write!(f, "unknown flag: {flag}"),
            CliError::MissingValue(flag) => write!(f, "missing value for {flag}"),
            CliError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl Cli {
    /// Parses `args` (excluding the binary name).
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut grammar_path: Option<String> = None;
        let mut tokens: Option<Vec<String>> = None;
        let mut json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--tokens" => {
                    let value = iter.next().ok_or_else(|| CliError::MissingValue("--tokens".to_string()))?;
                    tokens = Some(value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect());
                }
                "--json" => json = true,
                other if other.starts_with("--") => return Err(CliError::UnknownFlag(other.to_string())),
                other => grammar_path = Some(other.to_string()),
            }
        }

        Ok(Self {
            grammar_path: grammar_path.ok_or(CliError::MissingGrammarPath)?,
            tokens,
            json,
        })
    }
}

/// Runs the CLI: loads the grammar, builds the automaton, and prints either
/// a build report or a parse report depending on `cli.tokens`.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let text = fs::read_to_string(&cli.grammar_path)
        .map_err(|e| CliError::Io(format!("failed to read {}: {e}", cli.grammar_path)))?;

    let automaton = LrAutomaton::build(&text).map_err(|e| CliError::Io(e.to_string()))?;

    if !automaton.grammar().diagnostics().is_empty() {
        for diagnostic in automaton.grammar().diagnostics() {
            eprintln!("warning: {diagnostic}");
        }
    }
    if automaton.has_conflicts() {
        for conflict in automaton.conflicts() {
            eprintln!(
                "warning: conflict in state {} on {}: kept {}, discarded {}",
                conflict.state, conflict.symbol, conflict.kept, conflict.discarded
            );
        }
    }

    match cli.tokens {
        Some(tokens) => {
            let report = automaton.parse_report(&tokens).map_err(|e| CliError::Io(e.to_string()))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).expect("report always serializes"));
            } else {
                println!("accepted: {}", report.accepted);
                for record in &report.trace {
                    println!("  {:?} [{}] remaining: {}", record.kind, record.stack_display, record.remaining_input);
                }
                if let Some(tree_ascii) = &report.tree_ascii {
                    println!("{tree_ascii}");
                }
            }
        }
        None => {
            let report = automaton.build_report();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).expect("report always serializes"));
            } else {
                println!("states: {}", report.state_count);
                println!("conflicts: {}", report.conflicts.len());
            }
        }
    }

    Ok(())
}
