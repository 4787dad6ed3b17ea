//! Document value model for the doc-update engine.
//!
//! A [`Value`] is a tagged tree of documents, arrays and BSON-style scalars.
//! Documents keep insertion order, equality is type-strict, and values render
//! the way MongoDB prints them in error messages.
//!
//! # Example
//!
//! ```
//! use doc_update_value::Value;
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"v": {"foo": 42}}));
//! assert_eq!(doc.get("v").and_then(|v| v.get("foo")), Some(&Value::Int32(42)));
//! assert_eq!(doc.to_string(), "{v: {foo: 42}}");
//! ```

pub mod convert;
pub mod display;
pub mod value;

pub use value::{remove_field, set_element, set_field, Map, Value, ValueType};
