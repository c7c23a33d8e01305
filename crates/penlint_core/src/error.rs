//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the engine's public API.
///
/// None of these are ever coerced into empty or default values: an invalid
/// span or out-of-range suggestion index indicates a bug in a rule or in the
/// caller, and masking it would hide the bug.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Text could not be turned into a document (e.g. invalid UTF-8 at an
    /// ingestion boundary). Fatal to that construction call only.
    #[error("parse error: {0}")]
    Parse(String),

    /// Offsets inconsistent with the referenced text.
    #[error("invalid span {start}..{end} for text of {len} chars")]
    InvalidSpan {
        /// Requested start char offset.
        start: usize,
        /// Requested end char offset.
        end: usize,
        /// Char length of the text the span was resolved against.
        len: usize,
    },

    /// Suggestion index out of bounds.
    #[error("suggestion index {index} out of range for {len} suggestions")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of suggestions on the lint.
        len: usize,
    },

    /// Configuration error (unknown rule id, malformed config file).
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// An internal fault raised by a single rule during a group run.
///
/// Contained by [`crate::LintGroup`]: the faulting rule contributes no lints
/// and the fault is reported alongside the partial results, never aborting
/// the run.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RuleError(String);

impl RuleError {
    /// Creates a new rule fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
