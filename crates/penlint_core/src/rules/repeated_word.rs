//! Repeated consecutive words.

use crate::{Document, Lint, LintRule, RuleError, Token, TokenKind};

/// Flags the same word written twice in a row ("the the"), suggesting a
/// single occurrence. Comparison is case-insensitive so "The the" is caught.
pub struct RepeatedWord;

impl LintRule for RepeatedWord {
    fn id(&self) -> &'static str {
        "repeated-word"
    }

    fn description(&self) -> &'static str {
        "The same word should not appear twice in a row"
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError> {
        let mut lints = Vec::new();
        let mut prev_word: Option<&Token> = None;

        for token in doc.tokens() {
            match token.kind {
                TokenKind::Word => {
                    if let Some(prev) = prev_word {
                        let a = doc.token_text(prev);
                        let b = doc.token_text(token);
                        if a.to_lowercase() == b.to_lowercase() {
                            lints.push(
                                Lint::new(
                                    self.id(),
                                    format!("Repeated word: \"{b}\""),
                                    prev.span.merge(&token.span),
                                )
                                .with_suggestion(a),
                            );
                        }
                    }
                    prev_word = Some(token);
                }
                // Only plain whitespace may separate a repeated pair.
                TokenKind::Space | TokenKind::Newline => {}
                _ => prev_word = None,
            }
        }

        Ok(lints)
    }
}
