//! Lint: a single reported issue.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Span};

/// Severity level for lints.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A single finding: a span into the owning document's text, a message, and
/// zero or more suggested replacements for that span.
///
/// A lint holds no reference into the document's storage; the offending
/// fragment is re-derived via [`crate::Document::fragment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Lint {
    /// Id of the rule that produced this lint.
    pub rule_id: String,
    /// Human-readable description. Never empty.
    pub message: String,
    /// Char range in the owning document's text.
    pub span: Span,
    /// Candidate replacement texts for the span, in preference order.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Lint {
    /// Creates a new lint with no suggestions.
    ///
    /// `message` must be non-empty; this is an invariant of the data model,
    /// not a recoverable condition.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "lint message must be non-empty");
        Self {
            rule_id: rule_id.into(),
            message,
            span,
            suggestions: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Appends a suggested replacement.
    pub fn with_suggestion(mut self, text: impl Into<String>) -> Self {
        self.suggestions.push(text.into());
        self
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Number of suggested replacements.
    #[inline]
    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// The suggestion at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] when `index` is not in
    /// `[0, suggestion_count())`. Never coerced to an empty string.
    pub fn suggestion_at(&self, index: usize) -> Result<&str, EngineError> {
        self.suggestions
            .get(index)
            .map(String::as_str)
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.suggestions.len(),
            })
    }
}
