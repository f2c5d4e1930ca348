//! A strict, in-place JSON parser with exact offset diagnostics.
//!
//! The parser makes a single pass over a buffer of fixed-width code units
//! (8-bit or 16-bit) and either hands every parsed value to a
//! [`DocumentFactory`] or stops at the first grammar violation with a fixed
//! diagnostic message and the exact code-unit offset where the violation was
//! detected. There is no recovery, no backtracking, and no second report.
//!
//! The grammar is deliberately unforgiving: no leading zeros, no bare `.5`,
//! case-sensitive literals, mandatory digits after `.` and `e`, and full
//! `\uXXXX` surrogate-pair validation. Strings without escapes are returned
//! as borrowed spans of the input; escape decoding is the only point where
//! the parser materializes new data.
//!
//! # Examples
//!
//! ```rust
//! use strictjson::{parse, Value};
//!
//! let doc = parse(br#"{"tags": ["a", "b"], "count": 2}"#).unwrap();
//! assert_eq!(doc.get(b"count"), Some(&Value::Number(2.0)));
//! ```
//!
//! Failures carry the offset of the offending code unit:
//!
//! ```rust
//! let err = strictjson::parse(b" [ 0, ] ").unwrap_err();
//! assert_eq!(err.message(), "Expected value");
//! assert_eq!(err.offset(), 6);
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_unit;
mod error;
mod factory;
mod literal;
mod number;
mod options;
mod parser;
mod scanner;
mod string;
mod value;

#[cfg(test)]
mod tests;

pub use code_unit::CodeUnit;
pub use error::{ErrorKind, ParseError};
pub use factory::{DocumentFactory, TreeFactory};
pub use options::ParseOptions;
pub use value::{Array, Object, Text, Value};

use parser::Parser;

/// Parses a narrow (8-bit) JSON document in strict mode.
///
/// The root must be an array or an object; trailing non-whitespace content
/// is rejected.
///
/// # Errors
///
/// Returns the first grammar violation, with the offset of the code unit
/// that caused it (the buffer length for end-of-input errors).
///
/// # Examples
///
/// ```rust
/// use strictjson::{parse, Value};
///
/// assert_eq!(parse(b" [\n] ").unwrap(), Value::Array(vec![]));
/// ```
pub fn parse(input: &[u8]) -> Result<Value<u8>, ParseError> {
    parse_with(input, TreeFactory, ParseOptions::default())
}

/// Parses a wide (16-bit) JSON document in strict mode.
///
/// Identical grammar and diagnostics to [`parse`]; offsets count 16-bit
/// units.
///
/// # Errors
///
/// Returns the first grammar violation, as for [`parse`].
pub fn parse_wide(input: &[u16]) -> Result<Value<u16>, ParseError> {
    parse_with(input, TreeFactory, ParseOptions::default())
}

/// Parses a document of either code-unit width through a caller-supplied
/// [`DocumentFactory`].
///
/// This is the generic entry point behind [`parse`] and [`parse_wide`]; use
/// it to build directly into a foreign document representation or to relax
/// strictness via [`ParseOptions`].
///
/// # Errors
///
/// Returns the first grammar violation, with its exact offset.
pub fn parse_with<U, F>(input: &[U], factory: F, options: ParseOptions) -> Result<F::Value, ParseError>
where
    U: CodeUnit,
    F: DocumentFactory<U>,
{
    Parser::new(input, factory, options).parse_document()
}
