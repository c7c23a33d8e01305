//! # penlint_core
//!
//! Core grammar/style linting engine for Penlint.
//!
//! This crate provides:
//! - A pure, linear-pass tokenizer with char-offset spans
//! - The [`Document`] unit of analysis (text + tokens, immutable)
//! - The [`Lint`] data model (span, message, suggested replacements)
//! - The [`LintRule`] capability and a curated rule set
//! - The [`LintGroup`] orchestrator (sequential, parallel, and
//!   deadline-bounded runs)
//!
//! All spans engine-wide are half-open char-offset ranges; embedding layers
//! that need another unit convert at their own boundary.
//!
//! ## Example
//!
//! ```rust
//! use penlint_core::{Document, LintGroup};
//!
//! let doc = Document::new("hello,World ! ");
//! let group = LintGroup::curated();
//!
//! let outcome = group.run(&doc);
//! for lint in &outcome.lints {
//!     let fragment = doc.fragment(lint.span).unwrap();
//!     println!("{}: {} ({:?})", lint.rule_id, lint.message, fragment);
//! }
//! ```

mod config;
mod document;
mod error;
mod group;
mod lint;
pub mod rules;
mod span;
pub mod splitter;
mod token;
mod tokenizer;

pub use config::{LintConfig, RuleOption};
pub use document::Document;
pub use error::{EngineError, RuleError};
pub use group::{LintGroup, RuleFailure, RunOutcome};
pub use lint::{Lint, Severity};
pub use rules::LintRule;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

/// Version of the engine, as reported across the foreign boundary.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
