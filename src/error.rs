//! Error types for the LR(1) parser generator.

use thiserror::Error;

/// Errors that can occur while loading a grammar or building its automaton.
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("grammar load failed: empty input")]
    EmptyInput,

    #[error("grammar load failed: no usable rules found")]
    NoRules,

    #[error("parse error: {0}")]
    ParseError(String),
}

/// Type alias for `Result`s in this crate.
pub type Result<T> = std::result::Result<T, GrammarError>;
