//! Configuration options for text export.
//!
//! ## Examples
//!
//! ```rust
//! use kvconf::{parse, TextOptions};
//!
//! let doc = parse("name = demo").unwrap();
//!
//! let compact = doc.to_text_with_options(&TextOptions::new()).unwrap();
//! assert_eq!(compact, r#"{"name":"demo"}"#);
//!
//! let pretty = doc.to_text_with_options(&TextOptions::new().with_indent(4)).unwrap();
//! assert_eq!(pretty, "{\n    \"name\": \"demo\"\n}");
//! ```

/// Formatting options for [`Document::to_text_with_options`](crate::Document::to_text_with_options).
///
/// `indent: None` produces the most compact output. `Some(n)` puts every entry
/// on its own line, indented by `n` spaces per nesting level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextOptions {
    pub indent: Option<usize>,
}

impl TextOptions {
    /// Creates compact options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::TextOptions;
    ///
    /// assert_eq!(TextOptions::new().indent, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with 2-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        TextOptions { indent: Some(2) }
    }

    /// Sets the indentation width (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}
