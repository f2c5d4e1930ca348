//! The construction seam between the grammar core and the document tree.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::code_unit::CodeUnit;
use crate::value::{Array, Object, Value};

/// Abstraction over document construction.
///
/// The parser owns the grammar; the factory owns the tree. Every parsed
/// value flows through exactly one factory call, containers are built
/// incrementally with `push_element`/`push_member`, and policy questions
/// the grammar does not answer (duplicate member names above all) belong
/// entirely to the factory.
pub trait DocumentFactory<U: CodeUnit> {
    /// A finished value (and the type of the whole document).
    type Value;
    /// An array under construction.
    type Array;
    /// An object under construction.
    type Object;

    /// Builds the `null` value.
    fn new_null(&mut self) -> Self::Value;

    /// Builds a boolean value.
    fn new_bool(&mut self, value: bool) -> Self::Value;

    /// Builds a number from its decoded magnitude.
    fn new_number(&mut self, value: f64) -> Self::Value;

    /// Builds a string from decoded text. Borrowed text is a span of the
    /// input buffer, meaning the string contained no escapes.
    fn new_string(&mut self, text: Cow<'_, [U]>) -> Self::Value;

    /// Opens an array.
    fn new_array(&mut self) -> Self::Array;

    /// Appends the next element to an array under construction.
    fn push_element(&mut self, array: &mut Self::Array, value: Self::Value);

    /// Closes an array into a value.
    fn finish_array(&mut self, array: Self::Array) -> Self::Value;

    /// Opens an object.
    fn new_object(&mut self) -> Self::Object;

    /// Appends the next member to an object under construction. Called once
    /// per member in document order, duplicated names included; retention
    /// policy is the factory's.
    fn push_member(&mut self, object: &mut Self::Object, name: Cow<'_, [U]>, value: Self::Value);

    /// Closes an object into a value.
    fn finish_object(&mut self, object: Self::Object) -> Self::Value;
}

/// Factory producing the bundled [`Value`] tree.
///
/// Objects keep every member in document order, duplicate names included;
/// [`Value::get`] resolves duplicates to the last occurrence.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeFactory;

impl<U: CodeUnit> DocumentFactory<U> for TreeFactory {
    type Value = Value<U>;
    type Array = Array<U>;
    type Object = Object<U>;

    #[inline]
    fn new_null(&mut self) -> Self::Value {
        Value::Null
    }

    #[inline]
    fn new_bool(&mut self, value: bool) -> Self::Value {
        Value::Boolean(value)
    }

    #[inline]
    fn new_number(&mut self, value: f64) -> Self::Value {
        Value::Number(value)
    }

    #[inline]
    fn new_string(&mut self, text: Cow<'_, [U]>) -> Self::Value {
        Value::String(text.into_owned())
    }

    #[inline]
    fn new_array(&mut self) -> Self::Array {
        Vec::new()
    }

    #[inline]
    fn push_element(&mut self, array: &mut Self::Array, value: Self::Value) {
        array.push(value);
    }

    #[inline]
    fn finish_array(&mut self, array: Self::Array) -> Self::Value {
        Value::Array(array)
    }

    #[inline]
    fn new_object(&mut self) -> Self::Object {
        Vec::new()
    }

    #[inline]
    fn push_member(&mut self, object: &mut Self::Object, name: Cow<'_, [U]>, value: Self::Value) {
        object.push((name.into_owned(), value));
    }

    #[inline]
    fn finish_object(&mut self, object: Self::Object) -> Self::Value {
        Value::Object(object)
    }
}
