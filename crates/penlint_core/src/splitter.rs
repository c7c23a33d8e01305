//! Sentence splitting over char offsets.

use crate::Span;

/// A sentence unit: a char range of the original text, including trailing
/// punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Char range of the sentence in the original text.
    pub span: Span,
}

/// Splits text into sentences.
///
/// Splitting logic:
/// - `.`, `!`, `?` end a sentence only when followed by whitespace or EOF,
///   so decimal numbers and mid-token dots do not split.
/// - A blank line is a paragraph break and ends the sentence; `\r\n` counts
///   as one line break, so `\n\n` and `\r\n\r\n` behave the same.
/// - A single line break is not a boundary.
///
/// Whitespace-only stretches between boundaries are not reported.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    let mut non_blank_seen = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        pos += 1;
        if !c.is_whitespace() {
            non_blank_seen = true;
        }

        let is_sentence_end = match c {
            '.' | '!' | '?' => chars.peek().map_or(true, |next| next.is_whitespace()),
            '\n' | '\r' => {
                // Fold a \r\n pair into one line break; a second break right
                // after makes a blank line.
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                    pos += 1;
                }
                match chars.peek() {
                    Some('\n') => {
                        chars.next();
                        pos += 1;
                        true
                    }
                    Some('\r') => {
                        chars.next();
                        pos += 1;
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                            pos += 1;
                        }
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        };

        if is_sentence_end {
            if non_blank_seen {
                sentences.push(Sentence {
                    span: Span::new(start, pos),
                });
            }
            start = pos;
            non_blank_seen = false;
        }
    }

    if non_blank_seen {
        sentences.push(Sentence {
            span: Span::new(start, pos),
        });
    }

    sentences
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Document;

    fn texts(input: &str) -> Vec<String> {
        let doc = Document::new(input);
        split_sentences(input)
            .iter()
            .map(|s| doc.fragment(s.span).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(texts("One. Two."), vec!["One.", " Two."]);
    }

    #[test]
    fn test_no_split_on_decimal() {
        assert_eq!(texts("pi is 3.14 roughly."), vec!["pi is 3.14 roughly."]);
    }

    #[test]
    fn test_split_on_bang_and_question() {
        assert_eq!(texts("Stop! Why? Go."), vec!["Stop!", " Why?", " Go."]);
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(texts("one\n\ntwo"), vec!["one\n\n", "two"]);
    }

    #[test]
    fn test_paragraph_break_crlf() {
        assert_eq!(texts("one\r\n\r\ntwo"), vec!["one\r\n\r\n", "two"]);
    }

    #[test]
    fn test_single_newline_is_not_a_boundary() {
        assert_eq!(texts("one\ntwo."), vec!["one\ntwo."]);
        assert_eq!(texts("one\r\ntwo."), vec!["one\r\ntwo."]);
    }

    #[test]
    fn test_trailing_whitespace_not_a_sentence() {
        assert_eq!(texts("Done.   "), vec!["Done."]);
    }

    #[test]
    fn test_unterminated_tail_is_a_sentence() {
        assert_eq!(texts("Done. and more"), vec!["Done.", " and more"]);
    }

    #[test]
    fn test_spans_are_char_offsets() {
        let sentences = split_sentences("Héllo. Wörld.");
        assert_eq!(sentences[0].span, Span::new(0, 6));
        assert_eq!(sentences[1].span, Span::new(6, 13));
    }
}
