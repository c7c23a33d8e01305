//! Lint configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Severity};

/// Configuration for building a lint group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LintConfig {
    /// Rule ids to run, in order. Empty means the curated default set.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Per-rule overrides keyed by rule id.
    #[serde(default)]
    pub options: HashMap<String, RuleOption>,
}

/// Per-rule configuration value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Severity string ("error", "warning", "info", "off").
    Severity(String),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
        }
    }

    /// The severity override, if this option carries one.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            RuleOption::Enabled(_) => None,
            RuleOption::Severity(s) => match s.as_str() {
                "error" => Some(Severity::Error),
                "warning" => Some(Severity::Warning),
                "info" => Some(Severity::Info),
                _ => None,
            },
        }
    }
}

impl LintConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::config(format!("invalid config: {e}")))
    }

    /// Checks every option value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for a severity string other than
    /// "error", "warning", "info" or "off". An unrecognized value is a
    /// mistake to report, not an override to drop.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (id, option) in &self.options {
            if let RuleOption::Severity(s) = option {
                if !matches!(s.as_str(), "error" | "warning" | "info" | "off") {
                    return Err(EngineError::config(format!(
                        "unknown severity \"{s}\" for rule \"{id}\""
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns whether the given rule is enabled under this configuration.
    pub fn is_rule_enabled(&self, id: &str) -> bool {
        self.options.get(id).map_or(true, RuleOption::is_enabled)
    }

    /// The severity override for the given rule, if any.
    pub fn severity_override(&self, id: &str) -> Option<Severity> {
        self.options.get(id).and_then(RuleOption::severity)
    }
}
