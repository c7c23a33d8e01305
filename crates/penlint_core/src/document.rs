//! Document: the unit of analysis.

use crate::{tokenize, EngineError, Span, Token};

/// An immutable document: the original text plus its tokenization.
///
/// Tokenization happens once at construction and is a pure function of the
/// text. Lints derived from a document carry only offsets, so they remain
/// valid for as long as the exact same document is used to resolve them.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    /// Byte offset of each char boundary, with one trailing entry for
    /// `text.len()`. Lets `fragment` slice in O(1) without re-scanning.
    char_to_byte: Vec<usize>,
}

impl Document {
    /// Creates a document from text. Never fails: plain tokenization has no
    /// failure mode, including for empty text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            text,
            tokens,
            char_to_byte,
        }
    }

    /// Creates a document from raw bytes, as received at an ingestion
    /// boundary (FFI, file reading).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Parse`] if the bytes are not valid UTF-8; no
    /// partially built document is produced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| EngineError::parse(format!("text is not valid UTF-8: {e}")))?;
        Ok(Self::new(text))
    }

    /// The original text, unchanged.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token sequence, in offset order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Length of the text in chars (the engine's offset unit).
    #[inline]
    pub fn len(&self) -> usize {
        self.char_to_byte.len() - 1
    }

    /// Returns true if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolves a span to the text fragment it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSpan`] when the offsets fall outside
    /// `0..=len()` or are reversed. Out-of-range spans are never clamped:
    /// clamping would hide an offset bug in a rule or tokenizer.
    pub fn fragment(&self, span: Span) -> Result<&str, EngineError> {
        if span.start > span.end || span.end > self.len() {
            return Err(EngineError::InvalidSpan {
                start: span.start,
                end: span.end,
                len: self.len(),
            });
        }
        Ok(&self.text[self.char_to_byte[span.start]..self.char_to_byte[span.end]])
    }

    /// Text of a token produced from this document. Infallible because the
    /// tokenizer only emits in-bounds spans.
    #[inline]
    pub(crate) fn token_text(&self, token: &Token) -> &str {
        &self.text[self.char_to_byte[token.span.start]..self.char_to_byte[token.span.end]]
    }
}
