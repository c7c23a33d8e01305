//! Whitespace before closing punctuation.

use crate::{Document, Lint, LintRule, RuleError, Severity, TokenKind};

const PUNCTUATION: &[&str] = &[".", ",", "!", "?", ";", ":"];

/// Flags a space before `. , ! ? ; :`, suggesting the punctuation alone.
pub struct SpaceBeforePunctuation;

impl LintRule for SpaceBeforePunctuation {
    fn id(&self) -> &'static str {
        "space-before-punctuation"
    }

    fn description(&self) -> &'static str {
        "Punctuation should not be preceded by a space"
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError> {
        let mut lints = Vec::new();

        for (i, pair) in doc.tokens().windows(2).enumerate() {
            let (space, punct) = (&pair[0], &pair[1]);
            if space.kind != TokenKind::Space || punct.kind != TokenKind::Punctuation {
                continue;
            }
            if !PUNCTUATION.contains(&doc.token_text(punct)) {
                continue;
            }
            // Leading whitespace is indentation, not a spacing mistake.
            if i == 0 {
                continue;
            }
            lints.push(
                Lint::new(
                    self.id(),
                    format!("Unexpected space before \"{}\"", doc.token_text(punct)),
                    space.span.merge(&punct.span),
                )
                .with_suggestion(doc.token_text(punct))
                .with_severity(Severity::Warning),
            );
        }

        Ok(lints)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Span;

    fn run(text: &str) -> Vec<Lint> {
        SpaceBeforePunctuation.analyze(&Document::new(text)).unwrap()
    }

    #[test]
    fn test_space_before_bang() {
        let lints = run("hello,World ! ");
        assert_eq!(lints.len(), 1);
        assert_eq!(lints[0].span, Span::new(11, 13));
        assert_eq!(lints[0].suggestions, vec!["!".to_string()]);
        assert_eq!(lints[0].severity, Severity::Warning);
    }

    #[test]
    fn test_space_before_comma() {
        let lints = run("wait , here");
        assert_eq!(lints.len(), 1);
        assert_eq!(lints[0].suggestions, vec![",".to_string()]);
    }

    #[test]
    fn test_tight_punctuation_is_clean() {
        assert!(run("hello, world!").is_empty());
    }

    #[test]
    fn test_leading_space_is_ignored() {
        assert!(run(" . ").is_empty());
    }

    #[test]
    fn test_non_target_punctuation_is_ignored() {
        assert!(run("a ( b )").is_empty());
    }
}
