//! Typed literal values.
//!
//! This module provides the [`ConfigValue`] enum: the typed value carried by a
//! `Name`, `Number` or `Boolean` token, and the value half of every
//! declaration in a [`Document`](crate::Document).
//!
//! ## Core Types
//!
//! - [`ConfigValue`]: string, number or boolean
//! - [`Number`]: a 64-bit signed integer or a double-precision float
//!
//! ## Usage Patterns
//!
//! ### Type Checking
//!
//! ```rust
//! use kvconf::parse;
//!
//! let doc = parse("port = 8080\nhost = api.example.com").unwrap();
//! assert!(doc.get("port").unwrap().is_integer());
//! assert!(doc.get("host").unwrap().is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use kvconf::ConfigValue;
//! use std::convert::TryFrom;
//!
//! let value = ConfigValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A typed configuration literal.
///
/// # Examples
///
/// ```rust
/// use kvconf::{ConfigValue, Number};
///
/// let num = ConfigValue::Number(Number::Integer(42));
/// let text = ConfigValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert_eq!(num.type_name(), "integer");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    String(String),
    Number(Number),
    Bool(bool),
}

/// A numeric literal: every-digit runs are integers, other decimal literals are floats.
///
/// # Examples
///
/// ```rust
/// use kvconf::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Floats convert only when they have no fractional part and fit in `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl ConfigValue {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ConfigValue::String(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ConfigValue::Number(_))
    }

    /// Returns `true` if the value is an integer number.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, ConfigValue::Number(Number::Integer(_)))
    }

    /// Returns `true` if the value is a floating-point number.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, ConfigValue::Number(Number::Float(_)))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ConfigValue::Bool(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kvconf::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::Bool(true).as_bool(), Some(true));
    /// assert_eq!(ConfigValue::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// A short, lowercase name of the literal type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Number(Number::Integer(_)) => "integer",
            ConfigValue::Number(Number::Float(_)) => "float",
            ConfigValue::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            ConfigValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ConfigValueVisitor;

        impl<'de> Visitor<'de> for ConfigValueVisitor {
            type Value = ConfigValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number or boolean")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ConfigValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ConfigValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(ConfigValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(ConfigValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ConfigValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ConfigValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ConfigValue::String(value))
            }
        }

        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

impl TryFrom<ConfigValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: ConfigValue) -> crate::Result<Self> {
        match value {
            ConfigValue::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert float {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<ConfigValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: ConfigValue) -> crate::Result<Self> {
        match value {
            ConfigValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<ConfigValue> for bool {
    type Error = crate::Error;

    fn try_from(value: ConfigValue) -> crate::Result<Self> {
        match value {
            ConfigValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected boolean, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<ConfigValue> for String {
    type Error = crate::Error;

    fn try_from(value: ConfigValue) -> crate::Result<Self> {
        match value {
            ConfigValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.type_name()
            ))),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(Number::Integer(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Number(Number::Float(value))
    }
}

impl From<Number> for ConfigValue {
    fn from(value: Number) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}
