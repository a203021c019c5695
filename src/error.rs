//! Error types for tokenizing, parsing and querying configuration documents.
//!
//! Every failure is fatal to the operation in progress: there are no retries
//! and no partial results. A [`Document`](crate::Document) is either fully
//! built or the caller gets an [`Error`].
//!
//! ## Error Categories
//!
//! - **Invalid tokens**: a character outside the literal alphabet was found on a line
//! - **Parsing errors**: a line did not reduce to `NAME = VALUE`
//! - **Invalid keys**: a lookup found no declaration for the requested key
//! - **I/O and serde errors**: reading input or converting values failed
//!
//! ## Examples
//!
//! ```rust
//! use kvconf::{parse, Error};
//!
//! let err = parse("bad config file").unwrap_err();
//! assert!(matches!(err, Error::Parsing { line: 1, .. }));
//! assert!(err.to_string().contains("assignment operator"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An unrecognized character was encountered while tokenizing a line.
    #[error("Unexpected character {ch} at line {line}, column {col}")]
    InvalidToken { line: usize, col: usize, ch: char },

    /// A line did not reduce to exactly a `NAME = VALUE` triple.
    #[error("Parsing error at line {line}: {msg}")]
    Parsing { line: usize, msg: String },

    /// A lookup found no declaration for the requested key.
    #[error("There is no key/value pair for specified key {0}")]
    InvalidKey(String),

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid token error for the character at `line`/`col`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::Error;
    ///
    /// let err = Error::invalid_token(3, 10, '$');
    /// assert_eq!(err.to_string(), "Unexpected character $ at line 3, column 10");
    /// ```
    pub fn invalid_token(line: usize, col: usize, ch: char) -> Self {
        Error::InvalidToken { line, col, ch }
    }

    /// Creates a parsing error for the given line.
    pub fn parsing(line: usize, msg: &str) -> Self {
        Error::Parsing {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid key error carrying the requested key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::Error;
    ///
    /// let err = Error::invalid_key("missing");
    /// assert!(err.to_string().contains("missing"));
    /// ```
    pub fn invalid_key(key: &str) -> Self {
        Error::InvalidKey(key.to_string())
    }

    /// Creates an I/O error for input reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message() {
        let err = Error::invalid_key("i_dont_exist");
        assert_eq!(
            err.to_string(),
            "There is no key/value pair for specified key i_dont_exist"
        );
    }

    #[test]
    fn test_parsing_message_includes_line() {
        let err = Error::parsing(7, "Not a valid key value declaration line");
        assert_eq!(
            err.to_string(),
            "Parsing error at line 7: Not a valid key value declaration line"
        );
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
