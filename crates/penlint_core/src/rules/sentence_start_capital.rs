//! Sentence capitalization.

use crate::splitter::split_sentences;
use crate::{Document, Lint, LintRule, RuleError, TokenKind};

/// Flags a sentence whose first word starts with a lowercase letter,
/// suggesting the capitalized form.
pub struct SentenceStartCapital;

impl LintRule for SentenceStartCapital {
    fn id(&self) -> &'static str {
        "sentence-start-capital"
    }

    fn description(&self) -> &'static str {
        "Sentences should start with a capital letter"
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError> {
        let mut lints = Vec::new();
        let tokens = doc.tokens();
        let mut next_token = 0;

        for sentence in split_sentences(doc.text()) {
            // First word token inside the sentence. Tokens and sentences are
            // both in offset order, so the cursor never moves backwards.
            while next_token < tokens.len() && tokens[next_token].span.end <= sentence.span.start {
                next_token += 1;
            }
            let first_word = tokens[next_token..]
                .iter()
                .take_while(|t| t.span.start < sentence.span.end)
                .find(|t| t.kind == TokenKind::Word);

            let Some(word) = first_word else { continue };
            let text = doc.token_text(word);
            let Some(first) = text.chars().next() else {
                continue;
            };
            if !first.is_lowercase() {
                continue;
            }

            let capitalized: String = first
                .to_uppercase()
                .chain(text.chars().skip(1))
                .collect();
            lints.push(
                Lint::new(
                    self.id(),
                    format!("Sentence should start with a capital letter: \"{text}\""),
                    word.span,
                )
                .with_suggestion(capitalized),
            );
        }

        Ok(lints)
    }
}
