//! Document parsing.
//!
//! [`Document::parse`] splits its input into lines, runs a fresh
//! [`Tokenizer`] over each non-empty line, and keeps every line that reduces
//! to `NAME = VALUE` as a [`Declaration`]. Parsing is all-or-nothing: the
//! first malformed line aborts the whole document.
//!
//! Lookups and exports disagree on duplicate keys, on purpose:
//! [`Document::get`] returns the *first* declaration of a key, while
//! [`Document::to_map`] (and everything built on it) keeps the *last*.
//!
//! ```rust
//! use kvconf::{parse, ConfigValue};
//!
//! let doc = parse("mode = fast\nmode = safe").unwrap();
//! assert_eq!(doc.get("mode").unwrap(), &ConfigValue::from("fast"));
//! assert_eq!(doc.to_map().get("mode"), Some(&ConfigValue::from("safe")));
//! ```

use crate::token::{Token, TokenKind};
use crate::{ConfigMap, ConfigValue, Error, Result, TextOptions, Tokenizer};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::str::FromStr;

const NOT_A_DECLARATION: &str = "Not a valid key value declaration line";
const MISSING_ASSIGNMENT: &str =
    "Not a valid key value declaration line. Missing assignment operator";

/// One validated `key = value` line.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    key: String,
    tokens: [Token; 3],
    line: usize,
}

impl Declaration {
    /// The key token's literal in display form, e.g. `true` for the line `ON = 1`.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &ConfigValue {
        self.tokens[2].literal()
    }

    /// The key, `=` and value tokens, in source order.
    #[inline]
    pub fn tokens(&self) -> &[Token; 3] {
        &self.tokens
    }

    /// 1-based line number of the declaration in the parsed text.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }
}

/// An immutable, ordered collection of declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    declarations: Vec<Declaration>,
}

impl Document {
    /// Parses a whole configuration text.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidToken`] if a line contains a character that cannot start a token
    /// - [`Error::Parsing`] if a line is not exactly `NAME = VALUE`
    pub fn parse(text: &str) -> Result<Self> {
        let mut declarations = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;
            let tokens = Tokenizer::with_line(line, line_number).collect::<Result<Vec<_>>>()?;
            if tokens.is_empty() {
                // blank or comment-only
                continue;
            }
            declarations.push(declaration(line_number, tokens)?);
        }

        log::debug!("parsed {} declarations", declarations.len());
        Ok(Document { declarations })
    }

    /// Returns the value of the first declaration of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if no declaration has this key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::{parse, Error};
    ///
    /// let doc = parse("just_chilling=1").unwrap();
    /// assert_eq!(doc.get("just_chilling").unwrap().as_i64(), Some(1));
    /// assert!(matches!(doc.get("missing"), Err(Error::InvalidKey(_))));
    /// ```
    pub fn get(&self, key: &str) -> Result<&ConfigValue> {
        self.declarations
            .iter()
            .find(|declaration| declaration.key() == key)
            .map(Declaration::value)
            .ok_or_else(|| Error::invalid_key(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.declarations.iter().any(|d| d.key() == key)
    }

    /// Builds the key/value map. When a key is declared twice the later value wins.
    #[must_use]
    pub fn to_map(&self) -> ConfigMap {
        let mut map = ConfigMap::with_capacity(self.declarations.len());
        for declaration in &self.declarations {
            map.insert(declaration.key().to_string(), declaration.value().clone());
        }
        map
    }

    /// Serializes the map view to JSON.
    ///
    /// `None` produces compact output; `Some(n)` pretty-prints with `n` spaces per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::parse;
    ///
    /// let doc = parse("port = 8080\ndebug = off").unwrap();
    /// assert_eq!(doc.to_text(None).unwrap(), r#"{"port":8080,"debug":false}"#);
    /// assert_eq!(
    ///     doc.to_text(Some(2)).unwrap(),
    ///     "{\n  \"port\": 8080,\n  \"debug\": false\n}"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Custom`] if the JSON writer fails.
    pub fn to_text(&self, indent: Option<usize>) -> Result<String> {
        self.to_text_with_options(&TextOptions { indent })
    }

    /// Serializes the map view to JSON with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Custom`] if the JSON writer fails.
    pub fn to_text_with_options(&self, options: &TextOptions) -> Result<String> {
        crate::ser::to_text(&self.to_map(), options)
    }

    /// Deserializes the map view into any `T: DeserializeOwned`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Custom`] if a field is missing or has the wrong type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        crate::de::from_map(self.to_map())
    }

    #[inline]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

fn declaration(line_number: usize, tokens: Vec<Token>) -> Result<Declaration> {
    let tokens: [Token; 3] = tokens
        .try_into()
        .map_err(|_| Error::parsing(line_number, NOT_A_DECLARATION))?;

    if tokens[1].kind() != TokenKind::Equals {
        return Err(Error::parsing(line_number, MISSING_ASSIGNMENT));
    }
    if !tokens[0].kind().is_literal() || !tokens[2].kind().is_literal() {
        return Err(Error::parsing(line_number, NOT_A_DECLARATION));
    }

    Ok(Declaration {
        key: tokens[0].literal().to_string(),
        tokens,
        line: line_number,
    })
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
