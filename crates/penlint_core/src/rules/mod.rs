//! Lint rules.
//!
//! A rule is a pure analysis unit: given a document, it produces lints. It
//! must not hold mutable state; the same rule instance may be run against
//! many documents, concurrently.

mod multiple_spaces;
mod repeated_word;
mod sentence_start_capital;
mod space_after_comma;
mod space_before_punctuation;

pub use multiple_spaces::MultipleSpaces;
pub use repeated_word::RepeatedWord;
pub use sentence_start_capital::SentenceStartCapital;
pub use space_after_comma::SpaceAfterComma;
pub use space_before_punctuation::SpaceBeforePunctuation;

use crate::{Document, Lint, RuleError};

/// The capability every rule implements.
pub trait LintRule: Send + Sync {
    /// Stable identifier, used for selection, deduplication, and reporting.
    fn id(&self) -> &'static str;

    /// One-line description for `rules` listings.
    fn description(&self) -> &'static str;

    /// Analyzes the document and produces lints in text order.
    ///
    /// # Errors
    ///
    /// An `Err` is an internal fault of this rule. The group contains it:
    /// the rule contributes no lints for this run and the fault is reported
    /// to the caller as a non-fatal diagnostic.
    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError>;
}

/// The curated default rule set, in the order the rules run.
pub fn curated_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(SpaceAfterComma),
        Box::new(RepeatedWord),
        Box::new(SpaceBeforePunctuation),
        Box::new(MultipleSpaces),
        Box::new(SentenceStartCapital),
    ]
}

/// Looks up a curated rule by id.
pub fn rule_by_id(id: &str) -> Option<Box<dyn LintRule>> {
    curated_rules().into_iter().find(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_ids_are_unique() {
        let rules = curated_rules();
        let mut ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn test_rule_by_id() {
        assert!(rule_by_id("repeated-word").is_some());
        assert!(rule_by_id("no-such-rule").is_none());
    }

    #[test]
    fn test_descriptions_non_empty() {
        for rule in curated_rules() {
            assert!(!rule.description().is_empty(), "{}", rule.id());
        }
    }
}
