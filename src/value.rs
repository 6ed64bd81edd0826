//! Dynamic value representation for TOON table cells.
//!
//! This module provides the [`Value`] enum which represents any scalar a data
//! row can carry, plus the coercion logic that turns raw cell tokens into
//! typed values.
//!
//! ## Core Types
//!
//! - [`Value`]: a cell value (null, bool, number, string, or array)
//! - [`Number`]: a numeric value (i64 integer, f64 float, or big integer)
//!
//! Parsing never produces [`Value::Array`]; it exists for the serialization
//! direction, where an array cell is emitted as one quoted, comma-joined
//! field.
//!
//! ## Coercion
//!
//! [`Value::from_token`] applies the cell coercion rules in priority order
//! (first match wins): empty token, explicitly quoted string, `null`,
//! booleans, integer literal, decimal literal, and finally a plain string.
//!
//! ```rust
//! use toon_tables::{Number, Value};
//!
//! assert_eq!(Value::from_token(""), Value::Null);
//! assert_eq!(Value::from_token("null"), Value::Null);
//! assert_eq!(Value::from_token("true"), Value::Bool(true));
//! assert_eq!(Value::from_token("-42"), Value::Number(Number::Integer(-42)));
//! assert_eq!(Value::from_token("3.14"), Value::Number(Number::Float(3.14)));
//! assert_eq!(Value::from_token("\"42\""), Value::String("42".to_string()));
//! assert_eq!(Value::from_token("hello"), Value::String("hello".to_string()));
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use toon_tables::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(i64::try_from(value).unwrap(), 42);
//! ```

use num_bigint::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed cell value.
///
/// The parser produces only the scalar variants (`Null`, `Bool`, `Number`,
/// `String`); `Array` is accepted on the serialization side, where it encodes
/// as a single quoted, comma-joined field.
///
/// # Examples
///
/// ```rust
/// use toon_tables::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
}

/// A numeric cell value.
///
/// Integer literals that match the integer production but overflow `i64`
/// coerce to `Big` instead of silently losing precision.
///
/// # Examples
///
/// ```rust
/// use toon_tables::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), Some(3.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Big(BigInt),
}

impl Number {
    /// Returns `true` if this is an `i64` integer value.
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

    /// Returns `true` if this is a big integer (an integer literal that did
    /// not fit in `i64`).
    #[inline]
    #[must_use]
    pub const fn is_big(&self) -> bool {
        matches!(self, Number::Big(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// inside `i64` range. Big integers return `None` (they exist precisely
    /// because they overflowed `i64`).
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::Big(_) => None,
        }
    }

    /// Converts this number to an `f64` if it can be represented exactly
    /// enough to be useful; big integers return `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(i) => Some(*i as f64),
            Number::Float(f) => Some(*f),
            Number::Big(_) => None,
        }
    }
}

impl fmt::Display for Number {
    /// Formats the number as its canonical TOON cell text.
    ///
    /// Floats always keep a decimal point so they re-parse as floats.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => {
                let text = fl.to_string();
                if fl.is_finite() && !text.contains('.') && !text.contains('e') {
                    write!(f, "{}.0", text)
                } else {
                    write!(f, "{}", text)
                }
            }
            Number::Big(b) => write!(f, "{}", b),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Number::Integer(value as i64)
        } else {
            Number::Big(BigInt::from(value))
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Big(value)
    }
}

impl Value {
    /// Coerces one raw cell token into a typed value.
    ///
    /// Rules are applied in priority order, first match wins:
    ///
    /// 1. empty token → null
    /// 2. token bounded by `"` on both ends → string, with `\"` unescaped
    ///    (a defensive second pass: the tokenizer already strips most
    ///    quoting, but an already-quoted literal can survive it)
    /// 3. literal `null` → null
    /// 4. literal `true` / `false` → bool
    /// 5. `-?\d+` → integer (overflowing `i64` falls back to a big integer)
    /// 6. `-?\d+\.\d+` → float
    /// 7. anything else → string
    #[must_use]
    pub fn from_token(token: &str) -> Value {
        if token.is_empty() {
            return Value::Null;
        }

        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            let inner = &token[1..token.len() - 1];
            return Value::String(inner.replace("\\\"", "\""));
        }

        if token == "null" {
            return Value::Null;
        }
        if token == "true" {
            return Value::Bool(true);
        }
        if token == "false" {
            return Value::Bool(false);
        }

        if is_integer_literal(token) {
            return match token.parse::<i64>() {
                Ok(i) => Value::Number(Number::Integer(i)),
                // Matched the integer production but overflowed i64.
                Err(_) => match token.parse::<BigInt>() {
                    Ok(b) => Value::Number(Number::Big(b)),
                    Err(_) => Value::String(token.to_string()),
                },
            };
        }

        if is_decimal_literal(token) {
            if let Ok(f) = token.parse::<f64>() {
                return Value::Number(Number::Float(f));
            }
        }

        Value::String(token.to_string())
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer (or whole-number float), returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number representable as `f64`, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

impl fmt::Display for Value {
    /// Formats the value as plain (unquoted, unescaped) cell text.
    ///
    /// Arrays join their elements with commas; the serializer wraps the
    /// joined form in quotes when emitting an array cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(arr) => {
                let joined = arr
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}", joined)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::Big(b)) => serializer.serialize_str(&b.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar cell value or an array of scalars")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(ref n) => n.as_i64().ok_or_else(|| {
                crate::Error::message(format!("cannot convert {:?} to i64", value))
            }),
            _ => Err(crate::Error::message(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(ref n) => n.as_f64().ok_or_else(|| {
                crate::Error::message(format!("cannot convert {:?} to f64", value))
            }),
            _ => Err(crate::Error::message(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::message(format!("expected bool, found {:?}", value))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::message(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::Big(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_empty_token_to_null() {
        assert_eq!(Value::from_token(""), Value::Null);
    }

    #[test]
    fn coerce_quoted_string_strips_quotes_and_unescapes() {
        assert_eq!(
            Value::from_token("\"Laptop 15\\\"\""),
            Value::String("Laptop 15\"".to_string())
        );
        // Quoting shields tokens that would otherwise coerce.
        assert_eq!(Value::from_token("\"true\""), Value::String("true".to_string()));
        assert_eq!(Value::from_token("\"42\""), Value::String("42".to_string()));
        assert_eq!(Value::from_token("\"null\""), Value::String("null".to_string()));
    }

    #[test]
    fn coerce_literals() {
        assert_eq!(Value::from_token("null"), Value::Null);
        assert_eq!(Value::from_token("true"), Value::Bool(true));
        assert_eq!(Value::from_token("false"), Value::Bool(false));
    }

    #[test]
    fn coerce_integers() {
        assert_eq!(Value::from_token("0"), Value::Number(Number::Integer(0)));
        assert_eq!(Value::from_token("-7"), Value::Number(Number::Integer(-7)));
        assert_eq!(
            Value::from_token("9223372036854775807"),
            Value::Number(Number::Integer(i64::MAX))
        );
    }

    #[test]
    fn coerce_integer_overflow_to_big() {
        let token = "123456789012345678901234567890";
        match Value::from_token(token) {
            Value::Number(Number::Big(b)) => assert_eq!(b.to_string(), token),
            other => panic!("expected big integer, got {:?}", other),
        }
    }

    #[test]
    fn coerce_floats() {
        assert_eq!(
            Value::from_token("3.14"),
            Value::Number(Number::Float(3.14))
        );
        assert_eq!(
            Value::from_token("-0.5"),
            Value::Number(Number::Float(-0.5))
        );
    }

    #[test]
    fn coerce_non_literals_stay_strings() {
        // Not `-?\d+` or `-?\d+\.\d+`: these stay strings.
        for token in [".5", "5.", "1.2.3", "1e5", "08a", "-", "yes"] {
            assert!(
                Value::from_token(token).is_string(),
                "{token} should stay a string"
            );
        }
    }

    #[test]
    fn float_display_keeps_decimal_point() {
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(999.5).to_string(), "999.5");
        assert_eq!(Number::Integer(1).to_string(), "1");
    }

    #[test]
    fn array_display_joins_elements() {
        let arr = Value::Array(vec![Value::from("a"), Value::from(2), Value::from("c")]);
        assert_eq!(arr.to_string(), "a,2,c");
    }

    #[test]
    fn tryfrom_conversions() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(f64::try_from(Value::from(3.5)).unwrap(), 3.5);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert_eq!(
            String::try_from(Value::from("hi")).unwrap(),
            "hi".to_string()
        );
        assert!(i64::try_from(Value::from("hi")).is_err());
        assert!(bool::try_from(Value::from(1)).is_err());
    }

    #[test]
    fn from_u64_overflow_goes_big() {
        let v = Value::from(u64::MAX);
        match v {
            Value::Number(Number::Big(b)) => assert_eq!(b.to_string(), u64::MAX.to_string()),
            other => panic!("expected big integer, got {:?}", other),
        }
    }
}
