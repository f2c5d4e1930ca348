//! Building a foreign document representation through the factory seam.

use std::borrow::Cow;

use serde_json::json;
use strictjson::{DocumentFactory, ParseOptions, parse_with};

/// Builds `serde_json` documents straight out of the grammar core, with a
/// keep-last duplicate-name policy.
struct JsonValueFactory;

impl DocumentFactory<u8> for JsonValueFactory {
    type Value = serde_json::Value;
    type Array = Vec<serde_json::Value>;
    type Object = serde_json::Map<String, serde_json::Value>;

    fn new_null(&mut self) -> Self::Value {
        serde_json::Value::Null
    }

    fn new_bool(&mut self, value: bool) -> Self::Value {
        serde_json::Value::Bool(value)
    }

    fn new_number(&mut self, value: f64) -> Self::Value {
        serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }

    fn new_string(&mut self, text: Cow<'_, [u8]>) -> Self::Value {
        serde_json::Value::String(String::from_utf8_lossy(&text).into_owned())
    }

    fn new_array(&mut self) -> Self::Array {
        Vec::new()
    }

    fn push_element(&mut self, array: &mut Self::Array, value: Self::Value) {
        array.push(value);
    }

    fn finish_array(&mut self, array: Self::Array) -> Self::Value {
        serde_json::Value::Array(array)
    }

    fn new_object(&mut self) -> Self::Object {
        serde_json::Map::new()
    }

    fn push_member(&mut self, object: &mut Self::Object, name: Cow<'_, [u8]>, value: Self::Value) {
        object.insert(String::from_utf8_lossy(&name).into_owned(), value);
    }

    fn finish_object(&mut self, object: Self::Object) -> Self::Value {
        serde_json::Value::Object(object)
    }
}

#[test]
fn custom_factories_own_the_tree_representation() {
    let text = br#"{"a": [1.5, true, null], "b": "x", "a": 2.5}"#;
    let doc = parse_with(text.as_slice(), JsonValueFactory, ParseOptions::default()).unwrap();
    assert_eq!(doc, json!({"a": 2.5, "b": "x"}));
}

#[test]
fn factories_see_errors_too() {
    let err = parse_with(b" [ 1.5, ] ".as_slice(), JsonValueFactory, ParseOptions::default())
        .unwrap_err();
    assert_eq!(err.message(), "Expected value");
    assert_eq!(err.offset(), 8);
}
