//! JSON text export.
//!
//! Most users should call [`Document::to_text`](crate::Document::to_text);
//! [`to_text`] accepts any `Serialize` value, which is handy for a
//! [`ConfigMap`](crate::ConfigMap) that was built or edited by hand.
//!
//! ```rust
//! use kvconf::{config, ser, TextOptions};
//!
//! let map = config!({ "retries": 3, "verbose": true });
//! let json = ser::to_text(&map, &TextOptions::new()).unwrap();
//! assert_eq!(json, r#"{"retries":3,"verbose":true}"#);
//! ```

use crate::{Error, Result, TextOptions};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes `value` to JSON text according to `options`.
///
/// # Errors
///
/// Returns [`Error::Custom`] if serialization fails.
pub fn to_text<T>(value: &T, options: &TextOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let Some(width) = options.indent else {
        return serde_json::to_string(value).map_err(Error::custom);
    };

    let indent = vec![b' '; width];
    // 128 bytes covers a typical small config without reallocating
    let mut output = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer).map_err(Error::custom)?;
    String::from_utf8(output).map_err(Error::custom)
}
