//! Text tokenization.
//!
//! Tokenization is a pure function of the input text: a single linear pass
//! over UAX-29 word boundaries, classifying each segment. Spans are char
//! offsets and form a sorted, non-overlapping, gap-free cover of the text.
//!
//! Whitespace policy (fixed, relied on by every rule's span arithmetic):
//! each maximal run of horizontal whitespace is one `Space` token and each
//! maximal run of line breaks is one `Newline` token, never per-character.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Span, Token, TokenKind};

/// Tokenizes `text` into an ordered sequence of tokens.
///
/// Empty text yields an empty sequence. Offsets never split a scalar value
/// because they count scalar values.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut char_pos = 0;

    for (_, segment) in text.split_word_bound_indices() {
        let seg_chars = segment.chars().count();
        let kind = classify(segment);
        let span = Span::new(char_pos, char_pos + seg_chars);
        char_pos += seg_chars;

        // UAX-29 keeps horizontal whitespace runs together but emits each
        // line break separately; fold adjacent same-kind whitespace segments
        // into one token to honor the run policy.
        if kind.is_whitespace() {
            if let Some(last) = tokens.last_mut() {
                if last.kind == kind && last.span.end == span.start {
                    last.span.end = span.end;
                    continue;
                }
            }
        }

        tokens.push(Token::new(kind, span));
    }

    tokens
}

fn classify(segment: &str) -> TokenKind {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return TokenKind::Other;
    };

    if segment.chars().all(|c| c == '\n' || c == '\r') {
        TokenKind::Newline
    } else if segment.chars().all(char::is_whitespace) {
        TokenKind::Space
    } else if first.is_numeric() {
        TokenKind::Number
    } else if first.is_alphabetic() {
        TokenKind::Word
    } else if chars.next().is_none() && !first.is_alphanumeric() {
        TokenKind::Punctuation
    } else {
        TokenKind::Other
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_simple_sentence() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::new(TokenKind::Word, Span::new(0, 5)));
        assert_eq!(tokens[1], Token::new(TokenKind::Space, Span::new(5, 6)));
        assert_eq!(tokens[2], Token::new(TokenKind::Word, Span::new(6, 11)));
    }

    #[test]
    fn test_tokenize_scenario_input() {
        let tokens = tokenize("hello,World ! ");
        let expected = vec![
            Token::new(TokenKind::Word, Span::new(0, 5)),
            Token::new(TokenKind::Punctuation, Span::new(5, 6)),
            Token::new(TokenKind::Word, Span::new(6, 11)),
            Token::new(TokenKind::Space, Span::new(11, 12)),
            Token::new(TokenKind::Punctuation, Span::new(12, 13)),
            Token::new(TokenKind::Space, Span::new(13, 14)),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_tokenize_multibyte_offsets_are_chars() {
        let tokens = tokenize("héllo wörld");
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(5, 6));
        assert_eq!(tokens[2].span, Span::new(6, 11));
    }

    #[test]
    fn test_tokenize_cjk() {
        let tokens = tokenize("日本語");
        assert!(!tokens.is_empty());
        assert_eq!(tokens.first().unwrap().span.start, 0);
        assert_eq!(tokens.last().unwrap().span.end, 3);
    }

    #[test]
    fn test_whitespace_run_is_single_token() {
        let tokens = tokenize("a   b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::Space, Span::new(1, 4)));
    }

    #[test]
    fn test_newline_run_is_single_token() {
        let tokens = tokenize("a\n\nb");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::new(TokenKind::Newline, Span::new(1, 3)));
    }

    #[test]
    fn test_crlf_is_newline() {
        let tokens = tokenize("a\r\nb");
        assert_eq!(kinds("a\r\nb"), vec![TokenKind::Word, TokenKind::Newline, TokenKind::Word]);
        assert_eq!(tokens[1].span, Span::new(1, 3));
    }

    #[test]
    fn test_space_and_newline_stay_separate() {
        // A space between newlines is its own token; only same-kind runs fold.
        assert_eq!(
            kinds("a\n \nb"),
            vec![
                TokenKind::Word,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Newline,
                TokenKind::Word,
            ]
        );
    }

    #[test]
    fn test_contraction_is_one_word() {
        let tokens = tokenize("don't stop");
        assert_eq!(tokens[0], Token::new(TokenKind::Word, Span::new(0, 5)));
    }

    #[test]
    fn test_decimal_number() {
        let tokens = tokenize("pi is 3.14");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Number);
        assert_eq!(tokens.last().unwrap().span, Span::new(6, 10));
    }

    #[test]
    fn test_tokens_cover_text() {
        for text in [
            "",
            "hello,World ! ",
            "héllo, wörld… 日本語 42",
            "a\r\n\r\nb  c\td",
            "…—«quoted»",
        ] {
            let tokens = tokenize(text);
            let len = text.chars().count();
            let mut pos = 0;
            for token in &tokens {
                assert_eq!(token.span.start, pos, "gap or overlap in {text:?}");
                assert!(token.span.start <= token.span.end);
                pos = token.span.end;
            }
            assert_eq!(pos, len, "tokens do not cover {text:?}");
        }
    }
}
