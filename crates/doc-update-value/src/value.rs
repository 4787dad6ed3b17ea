//! The document value model.

use indexmap::IndexMap;
use std::fmt;

/// An ordered document: field names map to values in insertion order.
pub type Map = IndexMap<String, Value>;

/// A document value.
///
/// Mirrors the subset of BSON types the update engine understands. Documents
/// keep their fields in insertion order and arrays are always dense.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Document(Map),
    Array(Vec<Value>),
}

/// Runtime type of a [`Value`], named the way MongoDB names them in error
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Long,
    Double,
    String,
    Object,
    Array,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Long => "long",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Object => "object",
            ValueType::Array => "array",
        }
    }

    /// Returns true for the three numeric types.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Long | ValueType::Double)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// An empty document.
    pub fn document() -> Self {
        Value::Document(Map::new())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int32(_) => ValueType::Int,
            Value::Int64(_) => ValueType::Long,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::Document(_) => ValueType::Object,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Shorthand for `self.value_type().as_str()`.
    pub fn type_name(&self) -> &'static str {
        self.value_type().as_str()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Value::Document(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_number(&self) -> bool {
        self.value_type().is_numeric()
    }

    pub fn as_document(&self) -> Option<&Map> {
        match self {
            Value::Document(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_document_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Document(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value widened to `f64`; `None` for non-numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int32(n) => Some(f64::from(*n)),
            Value::Int64(n) => Some(*n as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Field lookup on a document. Always `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_document().and_then(|map| map.get(key))
    }
}

/// Inserts or replaces `key` in `map`.
///
/// A replaced field keeps its position; a new field is appended. Returns the
/// previous value, if any.
pub fn set_field(map: &mut Map, key: &str, value: Value) -> Option<Value> {
    match map.get_mut(key) {
        Some(slot) => Some(std::mem::replace(slot, value)),
        None => {
            map.insert(key.to_string(), value);
            None
        }
    }
}

/// Removes `key` from `map`, keeping the order of the remaining fields.
pub fn remove_field(map: &mut Map, key: &str) -> Option<Value> {
    map.shift_remove(key)
}

/// Writes `value` at `index`, padding the array with nulls when the index is
/// past the end. Returns the previous element, if any.
pub fn set_element(items: &mut Vec<Value>, index: usize, value: Value) -> Option<Value> {
    if index < items.len() {
        return Some(std::mem::replace(&mut items[index], value));
    }
    items.resize(index, Value::Null);
    items.push(value);
    None
}

// Equality is binary: numeric types never compare across variants, doubles
// compare by bit pattern and document field order is significant.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Document(a), Value::Document(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            _ => false,
        }
    }
}

impl Eq for Value {}
