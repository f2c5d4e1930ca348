//! The bundled document tree.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::code_unit::CodeUnit;

/// Decoded string payload: code units of the input's width, escapes
/// resolved.
pub type Text<U> = Vec<U>;

/// Ordered sequence of values.
pub type Array<U = u8> = Vec<Value<U>>;

/// Ordered object member list. Duplicate names are retained in document
/// order.
pub type Object<U = u8> = Vec<(Text<U>, Value<U>)>;

/// A parsed JSON document node.
///
/// The width parameter matches the input buffer: `Value<u8>` for narrow
/// documents (the default), `Value<u16>` for wide ones.
///
/// # Examples
///
/// ```
/// use strictjson::{parse, Value};
///
/// let doc = parse(br#"{"on": true}"#).unwrap();
/// assert_eq!(doc, Value::Object(vec![(b"on".to_vec(), Value::Boolean(true))]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value<U = u8> {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number, decoded as base-10 floating point.
    Number(f64),
    /// A string with escapes resolved. Narrow strings are byte strings:
    /// raw non-UTF-8 input passes through verbatim.
    String(Text<U>),
    /// An ordered sequence of values.
    Array(Array<U>),
    /// An ordered sequence of `(name, value)` members.
    Object(Object<U>),
}

impl<U> Default for Value<U> {
    fn default() -> Self {
        Self::Null
    }
}

impl<U> From<bool> for Value<U> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl<U> From<f64> for Value<U> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value<u8> {
    fn from(v: &str) -> Self {
        Self::String(v.as_bytes().to_vec())
    }
}

impl<U> From<Vec<Value<U>>> for Value<U> {
    fn from(v: Vec<Value<U>>) -> Self {
        Self::Array(v)
    }
}

impl<U: CodeUnit> Value<U> {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use strictjson::Value;
    ///
    /// assert!(Value::<u8>::Null.is_null());
    /// assert!(!Value::<u8>::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Looks up an object member by name. Duplicate names resolve to the
    /// last occurrence; non-objects return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictjson::{parse, Value};
    ///
    /// let doc = parse(br#"{"a": 1, "a": 2}"#).unwrap();
    /// assert_eq!(doc.get(b"a"), Some(&Value::Number(2.0)));
    /// ```
    #[must_use]
    pub fn get(&self, name: &[U]) -> Option<&Value<U>> {
        match self {
            Value::Object(members) => members
                .iter()
                .rev()
                .find(|(key, _)| key.as_slice() == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl Value<u8> {
    /// Byte-string view of a narrow string value.
    #[must_use]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Value::String(text) => Some(BStr::new(text)),
            _ => None,
        }
    }
}

/// Writes `src` with JSON string escaping: quotes, backslashes, and control
/// characters below U+0020.
fn write_escaped_text<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_ascii_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl<U: CodeUnit> fmt::Display for Value<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(text) => {
                f.write_str("\"")?;
                write_escaped_text(&U::lossy_text(text), f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                let mut first = true;
                for (name, value) in members {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_text(&U::lossy_text(name), f)?;
                    write!(f, "\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<U: CodeUnit> serde::Serialize for Value<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(text) => serializer.serialize_str(&U::lossy_text(text)),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (name, value) in members {
                    map.serialize_entry(&U::lossy_text(name), value)?;
                }
                map.end()
            }
        }
    }
}
