//! Token types produced by the tokenizer.

use serde::{Deserialize, Serialize};

use crate::Span;

/// Category of a token.
///
/// The set is open: rule sets targeting richer grammars may need categories
/// this engine does not emit today, so the enum is non-exhaustive and
/// consumers must carry a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TokenKind {
    /// An alphabetic word, including word-internal apostrophes ("don't").
    Word,
    /// A numeric segment, including decimal points ("3.14").
    Number,
    /// A single punctuation character.
    Punctuation,
    /// A maximal run of horizontal whitespace.
    Space,
    /// A maximal run of line breaks (`\n`, `\r`, `\r\n`).
    Newline,
    /// Anything the classifier does not recognize (symbols, emoji, ...).
    Other,
}

impl TokenKind {
    /// Returns true for whitespace kinds (`Space` and `Newline`).
    #[inline]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Newline)
    }
}

/// A minimal lexical unit: a category and a char-offset span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Category of this token.
    pub kind: TokenKind,
    /// Char range in the document's text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
