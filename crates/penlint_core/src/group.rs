//! Lint group: an ordered, deduplicated collection of rules.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::rules::{curated_rules, rule_by_id, LintRule};
use crate::{Document, EngineError, Lint, LintConfig, Severity};

/// A fault raised by a single rule during a run, reported alongside the
/// partial results instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    /// Id of the faulting rule.
    pub rule_id: String,
    /// The fault's message.
    pub message: String,
}

/// Result of running a group against a document.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// All lints, concatenated rule by rule in construction order.
    pub lints: Vec<Lint>,
    /// Faults from rules that failed internally. Their contribution is
    /// empty, never silently dropped from this report.
    pub faults: Vec<RuleFailure>,
    /// True if a deadline expired before every rule ran; `lints` then holds
    /// whatever was collected up to that point.
    pub cancelled: bool,
}

/// An ordered set of rules, unique by id, run together as one pass.
///
/// Construction order is run order and therefore output order; this is a
/// contract, not an implementation detail, since callers present numbered
/// suggestion lists. A group is stateless with respect to any document and
/// may be shared across threads and reused across documents.
pub struct LintGroup {
    rules: Vec<Box<dyn LintRule>>,
    severity_overrides: Vec<(String, Severity)>,
}

impl Default for LintGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl LintGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            severity_overrides: Vec::new(),
        }
    }

    /// Creates a group with the curated default rule set.
    pub fn curated() -> Self {
        let mut group = Self::new();
        for rule in curated_rules() {
            group.push(rule);
        }
        group
    }

    /// Builds a group from a configuration: the selection list (curated set
    /// when empty), minus disabled rules, with severity overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for an unknown rule id or an
    /// unrecognized option value.
    pub fn from_config(config: &LintConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut group = Self::new();

        if config.rules.is_empty() {
            for rule in curated_rules() {
                if config.is_rule_enabled(rule.id()) {
                    group.push(rule);
                }
            }
        } else {
            for id in &config.rules {
                let rule = rule_by_id(id)
                    .ok_or_else(|| EngineError::config(format!("unknown rule \"{id}\"")))?;
                if config.is_rule_enabled(id) {
                    group.push(rule);
                }
            }
        }

        for rule in &group.rules {
            if let Some(severity) = config.severity_override(rule.id()) {
                group
                    .severity_overrides
                    .push((rule.id().to_string(), severity));
            }
        }

        Ok(group)
    }

    /// Adds a rule. A rule with an already-present id is ignored, keeping
    /// the first occurrence's position.
    pub fn push(&mut self, rule: Box<dyn LintRule>) {
        if self.rules.iter().any(|r| r.id() == rule.id()) {
            debug!(rule = rule.id(), "duplicate rule ignored");
            return;
        }
        self.rules.push(rule);
    }

    /// Number of rules in the group.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the group has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Ids of the rules, in run order.
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Runs every rule against the document, sequentially.
    pub fn run(&self, doc: &Document) -> RunOutcome {
        self.run_inner(doc, None)
    }

    /// Runs with a cooperative deadline, checked between rule invocations
    /// (not mid-rule). On expiry the outcome carries the lints collected so
    /// far and `cancelled = true`.
    pub fn run_with_deadline(&self, doc: &Document, deadline: Instant) -> RunOutcome {
        self.run_inner(doc, Some(deadline))
    }

    fn run_inner(&self, doc: &Document, deadline: Option<Instant>) -> RunOutcome {
        let mut outcome = RunOutcome::default();

        for rule in &self.rules {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    outcome.cancelled = true;
                    break;
                }
            }
            self.collect(doc, rule.as_ref(), &mut outcome);
        }

        outcome
    }

    /// Runs the rules across the rayon thread pool. The merge happens in
    /// construction order, never completion order, so the outcome is
    /// identical to [`run`](Self::run).
    pub fn run_parallel(&self, doc: &Document) -> RunOutcome {
        let results: Vec<Result<Vec<Lint>, crate::RuleError>> = self
            .rules
            .par_iter()
            .map(|rule| rule.analyze(doc))
            .collect();

        let mut outcome = RunOutcome::default();
        for (rule, result) in self.rules.iter().zip(results) {
            self.merge(rule.as_ref(), result, &mut outcome);
        }
        outcome
    }

    fn collect(&self, doc: &Document, rule: &dyn LintRule, outcome: &mut RunOutcome) {
        let result = rule.analyze(doc);
        self.merge(rule, result, outcome);
    }

    fn merge(
        &self,
        rule: &dyn LintRule,
        result: Result<Vec<Lint>, crate::RuleError>,
        outcome: &mut RunOutcome,
    ) {
        match result {
            Ok(mut lints) => {
                if let Some((_, severity)) = self
                    .severity_overrides
                    .iter()
                    .find(|(id, _)| id == rule.id())
                {
                    for lint in &mut lints {
                        lint.severity = *severity;
                    }
                }
                outcome.lints.extend(lints);
            }
            Err(e) => {
                warn!(rule = rule.id(), "rule failed: {e}");
                outcome.faults.push(RuleFailure {
                    rule_id: rule.id().to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

impl std::fmt::Debug for LintGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintGroup")
            .field("rules", &self.rule_ids())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{RuleError, Span};

    struct FixedLint;

    impl LintRule for FixedLint {
        fn id(&self) -> &'static str {
            "fixed-lint"
        }
        fn description(&self) -> &'static str {
            "Always produces one lint"
        }
        fn analyze(&self, _doc: &Document) -> Result<Vec<Lint>, RuleError> {
            Ok(vec![Lint::new(self.id(), "fixed finding", Span::new(0, 0))])
        }
    }

    struct AlwaysFaults;

    impl LintRule for AlwaysFaults {
        fn id(&self) -> &'static str {
            "always-faults"
        }
        fn description(&self) -> &'static str {
            "Always fails internally"
        }
        fn analyze(&self, _doc: &Document) -> Result<Vec<Lint>, RuleError> {
            Err(RuleError::new("synthetic failure"))
        }
    }

    #[test]
    fn test_empty_group_yields_no_lints() {
        let group = LintGroup::new();
        let outcome = group.run(&Document::new("anything at all"));
        assert!(outcome.lints.is_empty());
        assert!(outcome.faults.is_empty());
        assert!(!outcome.cancelled);
    }

    #[test]
    fn test_empty_document_yields_no_lints() {
        let outcome = LintGroup::curated().run(&Document::new(""));
        assert!(outcome.lints.is_empty());
        assert!(outcome.faults.is_empty());
    }

    #[test]
    fn test_duplicate_rules_ignored() {
        let mut group = LintGroup::new();
        group.push(Box::new(FixedLint));
        group.push(Box::new(FixedLint));
        assert_eq!(group.len(), 1);

        let outcome = group.run(&Document::new("x"));
        assert_eq!(outcome.lints.len(), 1);
    }

    #[test]
    fn test_output_is_ordered_by_rule() {
        // Several rules fire on this input. Lints must come out grouped in
        // construction order, not sorted by span.
        let doc = Document::new("a,b c !");
        let group = LintGroup::curated();
        let outcome = group.run(&doc);

        let ids = group.rule_ids();
        let positions: Vec<usize> = outcome
            .lints
            .iter()
            .map(|l| ids.iter().position(|r| *r == l.rule_id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");
        assert!(positions.len() >= 2);
    }

    #[test]
    fn test_fault_is_contained_and_reported() {
        let mut group = LintGroup::new();
        group.push(Box::new(AlwaysFaults));
        group.push(Box::new(FixedLint));

        let outcome = group.run(&Document::new("text"));
        assert_eq!(outcome.lints.len(), 1);
        assert_eq!(outcome.lints[0].rule_id, "fixed-lint");
        assert_eq!(outcome.faults.len(), 1);
        assert_eq!(outcome.faults[0].rule_id, "always-faults");
        assert_eq!(outcome.faults[0].message, "synthetic failure");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let doc = Document::new("hello,World !  the the\n\nnext one  here.");
        let group = LintGroup::curated();

        let sequential = group.run(&doc);
        let parallel = group.run_parallel(&doc);
        assert_eq!(sequential.lints, parallel.lints);
        assert_eq!(sequential.faults.len(), parallel.faults.len());
    }

    #[test]
    fn test_idempotent_runs() {
        let doc = Document::new("hello,World ! ");
        let group = LintGroup::curated();
        assert_eq!(group.run(&doc).lints, group.run(&doc).lints);
    }

    #[test]
    fn test_expired_deadline_cancels() {
        let mut group = LintGroup::new();
        group.push(Box::new(FixedLint));

        let doc = Document::new("x");
        let outcome = group.run_with_deadline(&doc, Instant::now() - std::time::Duration::from_secs(1));
        assert!(outcome.cancelled);
        assert!(outcome.lints.is_empty());
    }

    #[test]
    fn test_future_deadline_completes() {
        let group = LintGroup::curated();
        let doc = Document::new("hello,World ! ");
        let outcome =
            group.run_with_deadline(&doc, Instant::now() + std::time::Duration::from_secs(60));
        assert!(!outcome.cancelled);
        assert!(!outcome.lints.is_empty());
    }

    #[test]
    fn test_overlapping_lints_from_different_rules_are_kept() {
        // " !" draws both space-before-punctuation and, with two spaces,
        // multiple-spaces on overlapping spans; the group must keep both.
        let doc = Document::new("end  !");
        let outcome = LintGroup::curated().run(&doc);
        let rules: Vec<&str> = outcome.lints.iter().map(|l| l.rule_id.as_str()).collect();
        assert!(rules.contains(&"space-before-punctuation"));
        assert!(rules.contains(&"multiple-spaces"));
    }

    #[test]
    fn test_from_config_unknown_rule() {
        let config = LintConfig::from_json(r#"{"rules": ["no-such"]}"#).unwrap();
        assert!(LintGroup::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_unknown_severity_string() {
        let config = LintConfig::from_json(r#"{"options": {"repeated-word": "warn"}}"#).unwrap();
        let err = LintGroup::from_config(&config).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_from_config_selection_and_override() {
        let config = LintConfig::from_json(
            r#"{
                "rules": ["repeated-word"],
                "options": {"repeated-word": "info"}
            }"#,
        )
        .unwrap();
        let group = LintGroup::from_config(&config).unwrap();
        assert_eq!(group.rule_ids(), vec!["repeated-word"]);

        let outcome = group.run(&Document::new("the the"));
        assert_eq!(outcome.lints.len(), 1);
        assert_eq!(outcome.lints[0].severity, Severity::Info);
    }

    #[test]
    fn test_from_config_disabled_rule_skipped() {
        let config =
            LintConfig::from_json(r#"{"options": {"sentence-start-capital": false}}"#).unwrap();
        let group = LintGroup::from_config(&config).unwrap();
        assert!(!group.rule_ids().contains(&"sentence-start-capital"));
        assert_eq!(group.len(), 4);
    }
}
