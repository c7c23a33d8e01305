//! Runs of more than one space.

use crate::{Document, Lint, LintRule, RuleError, Severity, TokenKind};

/// Flags a horizontal whitespace run wider than one char, suggesting a
/// single space. Runs at the start of the text or right after a line break
/// are indentation and are left alone.
pub struct MultipleSpaces;

impl LintRule for MultipleSpaces {
    fn id(&self) -> &'static str {
        "multiple-spaces"
    }

    fn description(&self) -> &'static str {
        "Words should be separated by a single space"
    }

    fn analyze(&self, doc: &Document) -> Result<Vec<Lint>, RuleError> {
        let mut lints = Vec::new();
        let tokens = doc.tokens();

        for (i, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Space || token.span.len() <= 1 {
                continue;
            }
            if i == 0 || tokens[i - 1].kind == TokenKind::Newline {
                continue;
            }
            lints.push(
                Lint::new(self.id(), "Multiple consecutive spaces", token.span)
                    .with_suggestion(" ")
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
        MultipleSpaces.analyze(&Document::new(text)).unwrap()
    }

    #[test]
    fn test_double_space() {
        let lints = run("one  two");
        assert_eq!(lints.len(), 1);
        assert_eq!(lints[0].span, Span::new(3, 5));
        assert_eq!(lints[0].suggestions, vec![" ".to_string()]);
    }

    #[test]
    fn test_single_spaces_are_clean() {
        assert!(run("one two three").is_empty());
    }

    #[test]
    fn test_indentation_is_ignored() {
        assert!(run("  indented").is_empty());
        assert!(run("line\n    next").is_empty());
    }

    #[test]
    fn test_tab_counts_as_one_space_char() {
        // A lone tab is a one-char run; only wider runs are flagged.
        assert!(run("a\tb").is_empty());
        assert_eq!(run("a \tb").len(), 1);
    }
}
