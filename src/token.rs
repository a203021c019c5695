//! Tokens produced by the [`Tokenizer`](crate::Tokenizer).

use crate::ConfigValue;

/// The literal carried by the end-of-input token.
pub const END_MARKER: &str = "<EOF>";

/// The literal carried by the assignment token.
pub const EQUALS_LITERAL: &str = "=";

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of line, or the start of a `#` comment.
    EndOfInput,
    /// The `=` assignment operator.
    Equals,
    /// A name or free-form string literal.
    Name,
    /// An integer or float literal.
    Number,
    /// One of `on/yes/true/off/no/false`, case-insensitive.
    Boolean,
}

impl TokenKind {
    /// Returns `true` for kinds that may stand on either side of `=`.
    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Number | TokenKind::Boolean)
    }
}

/// Byte range of a token inside its source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Extract the source text for this span.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A classified unit of input text. Tokens are never mutated once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    literal: ConfigValue,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: ConfigValue, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    /// The end-of-input token, positioned at byte offset `pos`.
    pub fn end_of_input(pos: usize) -> Self {
        Self::new(
            TokenKind::EndOfInput,
            ConfigValue::String(END_MARKER.to_string()),
            Span::new(pos, pos),
        )
    }

    /// The `=` token covering `span`.
    pub fn equals(span: Span) -> Self {
        Self::new(
            TokenKind::Equals,
            ConfigValue::String(EQUALS_LITERAL.to_string()),
            span,
        )
    }

    /// The token type.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The typed value; `=` and end-of-input carry their marker strings.
    #[inline]
    pub fn literal(&self) -> &ConfigValue {
        &self.literal
    }

    /// Byte range of the token within its line.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Extract the source text for this token from the line it was read from.
    #[inline]
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        self.span.text(line)
    }

    /// Returns `true` for the end-of-input marker.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
