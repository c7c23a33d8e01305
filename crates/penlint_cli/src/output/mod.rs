//! Output formatters.

pub mod json;
pub mod text;

use std::path::PathBuf;

use penlint_core::{Document, EngineError, Lint, RuleFailure, RunOutcome};
use serde::Serialize;

/// Lint results for one file, with fragments resolved while the document is
/// still at hand.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the linted file ("-" for stdin).
    pub path: PathBuf,
    /// All lints, in group output order.
    pub lints: Vec<ReportedLint>,
    /// Rules that faulted during the run.
    pub faults: Vec<ReportedFault>,
    /// True when a deadline cut the run short.
    pub cancelled: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportedLint {
    #[serde(flatten)]
    pub lint: Lint,
    /// The offending fragment of the document's text.
    pub fragment: String,
}

#[derive(Debug, Serialize)]
pub struct ReportedFault {
    pub rule_id: String,
    pub message: String,
}

impl FileReport {
    /// Builds the report, resolving every lint's fragment against the
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSpan`] when a lint's span does not
    /// resolve. A bad span means an offset bug somewhere upstream; it is
    /// surfaced, never rendered as an empty fragment.
    pub fn new(path: PathBuf, doc: &Document, outcome: RunOutcome) -> Result<Self, EngineError> {
        let mut lints = Vec::with_capacity(outcome.lints.len());
        for lint in outcome.lints {
            let fragment = doc.fragment(lint.span)?.to_string();
            lints.push(ReportedLint { lint, fragment });
        }
        let faults = outcome
            .faults
            .into_iter()
            .map(|RuleFailure { rule_id, message }| ReportedFault { rule_id, message })
            .collect();
        Ok(Self {
            path,
            lints,
            faults,
            cancelled: outcome.cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use penlint_core::Span;

    use super::*;

    fn outcome_with(lint: Lint) -> RunOutcome {
        RunOutcome {
            lints: vec![lint],
            ..RunOutcome::default()
        }
    }

    #[test]
    fn test_report_resolves_fragments() {
        let doc = Document::new("hello,World ! ");
        let outcome = outcome_with(Lint::new("space-after-comma", "m", Span::new(5, 11)));
        let report = FileReport::new(PathBuf::from("-"), &doc, outcome).unwrap();
        assert_eq!(report.lints[0].fragment, ",World");
    }

    #[test]
    fn test_out_of_range_span_is_an_error_not_an_empty_fragment() {
        let doc = Document::new("abc");
        let outcome = outcome_with(Lint::new("broken-rule", "m", Span::new(0, 99)));
        let err = FileReport::new(PathBuf::from("-"), &doc, outcome).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSpan { .. }));
    }
}
