//! Missing space after a comma.

use crate::{Document, Lint, LintRule, RuleError, TokenKind};

/// Flags a comma directly followed by a word, suggesting `", word"`.
pub struct SpaceAfterComma;

impl LintRule for SpaceAfterComma {
    fn id(&self) -> &'static str {
        "space-after-comma"
    }

    fn description(&self) -> &'static str {
        "A comma should be followed by a space"
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError> {
        let mut lints = Vec::new();

        for pair in doc.tokens().windows(2) {
            let (comma, next) = (&pair[0], &pair[1]);
            if comma.kind != TokenKind::Punctuation || doc.token_text(comma) != "," {
                continue;
            }
            if !matches!(next.kind, TokenKind::Word | TokenKind::Number) {
                continue;
            }
            lints.push(
                Lint::new(
                    self.id(),
                    "Missing space after comma",
                    comma.span.merge(&next.span),
                )
                .with_suggestion(format!(", {}", doc.token_text(next))),
            );
        }

        Ok(lints)
    }
}
