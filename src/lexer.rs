//! Line tokenizer.
//!
//! A [`Tokenizer`] is built from a single line of text and hands out typed
//! [`Token`]s one at a time through [`Tokenizer::next_token`]. End of line and
//! the start of a `#` comment both produce the end-of-input token, and once
//! that token has been produced every further call produces it again.
//!
//! ## Literal classification
//!
//! A maximal run of alphanumeric characters and `. _ / @ :` is classified in
//! this order:
//!
//! 1. every character an ASCII digit: integer
//! 2. a finite decimal float, `_` allowed between digits: float
//! 3. `on/yes/true` or `off/no/false` in any case: boolean
//! 4. anything else: a name, kept verbatim
//!
//! ```rust
//! use kvconf::{tokenize, ConfigValue, TokenKind};
//!
//! let tokens = tokenize("path = /var/log/app.log # where logs go").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].kind(), TokenKind::Equals);
//! assert_eq!(tokens[2].literal(), &ConfigValue::from("/var/log/app.log"));
//! ```

use crate::token::{Span, Token, TokenKind};
use crate::{ConfigValue, Error, Number, Result};
use std::borrow::Cow;
use std::iter::FusedIterator;

const POSITIVE_BOOLEANS: [&str; 3] = ["on", "yes", "true"];
const NEGATIVE_BOOLEANS: [&str; 3] = ["off", "no", "false"];

/// Punctuation allowed inside literals besides alphanumerics.
const LITERAL_PUNCTUATION: [char; 5] = ['.', '_', '/', '@', ':'];

/// Returns `true` if `ch` may appear inside a name, number or boolean literal.
#[inline]
pub fn is_literal_char(ch: char) -> bool {
    ch.is_alphanumeric() || LITERAL_PUNCTUATION.contains(&ch)
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Classifies a literal run into its token kind and typed value.
///
/// # Examples
///
/// ```rust
/// use kvconf::{classify, ConfigValue, TokenKind};
///
/// assert_eq!(classify("10"), (TokenKind::Number, ConfigValue::from(10)));
/// assert_eq!(classify("10.5"), (TokenKind::Number, ConfigValue::from(10.5)));
/// assert_eq!(classify("Yes"), (TokenKind::Boolean, ConfigValue::Bool(true)));
/// assert_eq!(classify("user@host"), (TokenKind::Name, ConfigValue::from("user@host")));
/// ```
pub fn classify(buffer: &str) -> (TokenKind, ConfigValue) {
    if is_integer(buffer) {
        // An all-digit run too large for i64 is still a valid float.
        if let Ok(i) = buffer.parse::<i64>() {
            return (TokenKind::Number, ConfigValue::Number(Number::Integer(i)));
        }
    }
    if let Some(f) = parse_float(buffer) {
        return (TokenKind::Number, ConfigValue::Number(Number::Float(f)));
    }
    if let Some(b) = parse_boolean(buffer) {
        return (TokenKind::Boolean, ConfigValue::Bool(b));
    }
    (TokenKind::Name, ConfigValue::String(buffer.to_string()))
}

fn is_integer(buffer: &str) -> bool {
    !buffer.is_empty() && buffer.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal literals only: `inf`, `nan` and friends stay names.
fn parse_float(buffer: &str) -> Option<f64> {
    let first = buffer.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }
    strip_digit_separators(buffer)?
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}

/// Removes `_` separators, each of which must sit between two digits.
fn strip_digit_separators(buffer: &str) -> Option<Cow<'_, str>> {
    if !buffer.contains('_') {
        return Some(Cow::Borrowed(buffer));
    }
    let bytes = buffer.as_bytes();
    let is_digit_at = |i: usize| bytes.get(i).map_or(false, u8::is_ascii_digit);
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' && (i == 0 || !is_digit_at(i - 1) || !is_digit_at(i + 1)) {
            return None;
        }
    }
    Some(Cow::Owned(buffer.replace('_', "")))
}

fn parse_boolean(buffer: &str) -> Option<bool> {
    if POSITIVE_BOOLEANS
        .iter()
        .any(|word| buffer.eq_ignore_ascii_case(word))
    {
        Some(true)
    } else if NEGATIVE_BOOLEANS
        .iter()
        .any(|word| buffer.eq_ignore_ascii_case(word))
    {
        Some(false)
    } else {
        None
    }
}

/// Breaks one line of text into tokens.
///
/// `\n` and `\r` are treated as whitespace, so feeding a multi-line string
/// simply yields the tokens of all its lines in sequence.
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    exhausted: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_line(input, 1)
    }

    /// Creates a tokenizer whose error positions report `line` as the line number.
    pub fn with_line(input: &'a str, line: usize) -> Self {
        log::debug!("tokenizing line {}: {:?}", line, input);
        Tokenizer {
            input,
            position: 0,
            line,
            column: 1,
            exhausted: false,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Returns the next token on the line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] when the cursor sits on a character
    /// that cannot start a token. The cursor does not move past it, so the
    /// same error is returned on every later call.
    pub fn next_token(&mut self) -> Result<Token> {
        while let Some(ch) = self.peek_char() {
            match ch {
                '#' => return Ok(Token::end_of_input(self.position)),
                ch if is_whitespace(ch) => {
                    self.next_char();
                }
                '=' => {
                    let start = self.position;
                    self.next_char();
                    let token = Token::equals(Span::new(start, self.position));
                    log::trace!("token {:?}", token);
                    return Ok(token);
                }
                ch if is_literal_char(ch) => {
                    let token = self.literal();
                    log::trace!("token {:?}", token);
                    return Ok(token);
                }
                ch => {
                    log::debug!(
                        "unexpected character {:?} at line {}, column {}",
                        ch,
                        self.line,
                        self.column
                    );
                    return Err(Error::invalid_token(self.line, self.column, ch));
                }
            }
        }
        Ok(Token::end_of_input(self.position))
    }

    fn literal(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if !is_literal_char(ch) {
                break;
            }
            self.next_char();
        }
        let span = Span::new(start, self.position);
        let (kind, literal) = classify(span.text(self.input));
        Token::new(kind, literal, span)
    }
}

/// Yields every token before end-of-input, then stops. Stops after the first error.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end_of_input() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes a line, returning every token before end-of-input.
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] on the first character that cannot start a token.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    Tokenizer::new(line).collect()
}
