//! Typed extraction.
//!
//! [`ConfigValue`] implements [`serde::Deserializer`], and a whole
//! [`ConfigMap`] can be fed to any `#[derive(Deserialize)]` struct through
//! [`from_map`]. Integers widen into any integer or float field that can hold
//! them, names fill `String` fields and unit-variant enums, and absent keys
//! become `None` for `Option` fields.
//!
//! ```rust
//! use kvconf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! #[serde(rename_all = "lowercase")]
//! enum Level { Debug, Info }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16, tls: bool, level: Level, motd: Option<String> }
//!
//! let server: Server = from_str("host = example.com\nport = 8443\ntls = on\nlevel = info").unwrap();
//! assert_eq!(server.port, 8443);
//! assert_eq!(server.level, Level::Info);
//! assert_eq!(server.motd, None);
//! ```

use crate::{ConfigMap, ConfigValue, Error, Number, Result};
use serde::de::value::{MapDeserializer, StringDeserializer};
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializes a `T` from the entries of `map`.
///
/// # Errors
///
/// Returns [`Error::Custom`] when a required key is missing or a value has
/// the wrong type for its field.
pub fn from_map<T>(map: ConfigMap) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(MapDeserializer::<_, Error>::new(map.into_iter()))
}

impl<'de> IntoDeserializer<'de, Error> for ConfigValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> de::Deserializer<'de> for ConfigValue {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            ConfigValue::String(s) => visitor.visit_string(s),
            ConfigValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            ConfigValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            ConfigValue::Bool(b) => visitor.visit_bool(b),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            ConfigValue::String(s) => {
                let variant: StringDeserializer<Error> = s.into_deserializer();
                visitor.visit_enum(variant)
            }
            other => Err(Error::custom(format!(
                "expected enum variant name, found {} {}",
                other.type_name(),
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
