//! # kvconf
//!
//! A minimal, line-oriented configuration language: one `key = value`
//! declaration per line, typed literals, `#` comments.
//!
//! ```text
//! # service settings
//! host     = api.example.com
//! port     = 8080
//! ratio    = 0.75
//! debug    = off          # on/yes/true and off/no/false, any case
//! log_file = /var/log/app.log
//! ```
//!
//! ## Key Features
//!
//! - **Typed literals**: integers, floats, booleans and free-form names
//! - **All-or-nothing parsing**: the first malformed line aborts the document
//! - **JSON export**: compact or indented, via [`Document::to_text`]
//! - **Serde integration**: deserialize a document straight into your own types
//!
//! ## Grammar
//!
//! Each non-blank, non-comment line must be `NAME '=' VALUE`. A literal is a
//! maximal run of alphanumerics and `. _ / @ :`, which allows values such as
//! `/var/log/app.log`, `api.example.com` or `user@host`. Any other character
//! (quotes, `$`, `-`, `,` ...) is an [`Error::InvalidToken`]. There are no
//! nested structures, multi-line values, escapes or arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use kvconf::{parse, ConfigValue};
//!
//! let doc = parse("api_key = FDA23E8B9C987D\nemail = a@b.com\nretries = 3").unwrap();
//!
//! assert_eq!(doc.get("retries").unwrap(), &ConfigValue::from(3));
//! assert_eq!(
//!     doc.to_text(None).unwrap(),
//!     r#"{"api_key":"FDA23E8B9C987D","email":"a@b.com","retries":3}"#
//! );
//! ```
//!
//! ### Typed Configuration
//!
//! ```rust
//! use kvconf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     host: String,
//!     port: u16,
//!     debug: bool,
//! }
//!
//! let settings: Settings = from_str("host = localhost\nport = 8080\ndebug = yes").unwrap();
//! assert_eq!(settings.port, 8080);
//! assert!(settings.debug);
//! ```
//!
//! ## Logging
//!
//! The tokenizer and parser emit `debug`/`trace` records through the [`log`]
//! facade. Nothing is printed unless the application installs a logger.

pub mod de;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use error::{Error, Result};
pub use lexer::{classify, is_literal_char, tokenize, Tokenizer};
pub use map::ConfigMap;
pub use options::TextOptions;
pub use parser::{Declaration, Document};
pub use token::{Span, Token, TokenKind, END_MARKER};
pub use value::{ConfigValue, Number};

use serde::de::DeserializeOwned;
use std::io;

/// Parses configuration text into a [`Document`].
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] or [`Error::Parsing`] for the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Document> {
    Document::parse(s)
}

/// Parses configuration bytes into a [`Document`].
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    Document::parse(s)
}

/// Reads the whole stream and parses it into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use kvconf::parse_reader;
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"name = demo\n")).unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    Document::parse(&string)
}

/// Parses configuration text and deserializes it into `T`.
///
/// # Errors
///
/// Returns any parse error, or [`Error::Custom`] if the declarations do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    parse(s)?.deserialize()
}

/// Parses configuration bytes and deserializes them into `T`.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not a valid document,
/// or do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    parse_slice(v)?.deserialize()
}

/// Reads a configuration stream and deserializes it into `T`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    parse_reader(reader)?.deserialize()
}
