//! Resolution of dotted paths against a document.
//!
//! A segment's meaning depends on the node it meets: under a document it is
//! always a literal key (even `"0"`), under an array it must be a canonical
//! non-negative integer, and under a scalar it cannot be followed at all.

use doc_update_value::{remove_field, set_element, set_field, Map, Value};
use tracing::trace;

use crate::error::PathError;
use crate::parse_index;
use crate::types::Path;
use crate::validate::validate_backfill;

/// Whether resolution may create missing structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Missing document fields become empty documents; array indices past
    /// the end are padded with nulls.
    Create,
    /// Missing fields end resolution without error.
    Lookup,
}

/// The parent container of a path's final segment, plus that segment.
#[derive(Debug)]
pub enum Slot<'a> {
    Field { map: &'a mut Map, key: &'a str },
    Element { items: &'a mut Vec<Value>, index: usize },
}

/// A resolved path: the slot its last segment addresses.
///
/// The slot may be empty (missing field, index past the end); operators
/// decide what to create there.
#[derive(Debug)]
pub struct Location<'a> {
    pub slot: Slot<'a>,
    pub path: &'a Path,
}

impl<'a> Location<'a> {
    /// The final raw segment.
    pub fn field(&self) -> &str {
        self.path.last()
    }

    pub fn get(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Field { map, key } => map.get(*key),
            Slot::Element { items, index } => items.get(*index),
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut Value> {
        match &mut self.slot {
            Slot::Field { map, key } => map.get_mut(*key),
            Slot::Element { items, index } => items.get_mut(*index),
        }
    }

    /// Writes `value` into the slot and returns the previous value.
    ///
    /// Existing document fields keep their position. Writing past the end of
    /// an array pads it with nulls.
    pub fn set(&mut self, value: Value) -> Result<Option<Value>, PathError> {
        match &mut self.slot {
            Slot::Field { map, key } => Ok(set_field(map, key, value)),
            Slot::Element { items, index } => {
                validate_backfill(items.len(), *index)?;
                Ok(set_element(items, *index, value))
            }
        }
    }

    /// Clears the slot. Document fields are removed; array elements are
    /// replaced with null so the array stays dense.
    pub fn unset(&mut self) -> Option<Value> {
        match &mut self.slot {
            Slot::Field { map, key } => remove_field(map, key),
            Slot::Element { items, index } => items
                .get_mut(*index)
                .map(|item| std::mem::replace(item, Value::Null)),
        }
    }
}

enum Step {
    Key,
    Index(usize),
}

/// Resolves every segment of `path` but the last, returning the slot the last
/// segment addresses.
///
/// Returns `Ok(None)` in [`Mode::Lookup`] when an intermediate segment is
/// missing.
///
/// # Errors
///
/// [`PathError::CannotCreate`] / [`PathError::CannotTraverse`] when a
/// segment meets a scalar, or a non-numeric segment meets an array.
///
/// # Example
///
/// ```
/// use doc_update_path::{locate, Mode, Path};
/// use doc_update_value::Value;
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({}));
/// let path = Path::parse("v.0.foo").unwrap();
/// let mut loc = locate(&mut doc, &path, Mode::Create).unwrap().unwrap();
/// loc.set(Value::Int32(1)).unwrap();
/// assert_eq!(doc, Value::from(json!({"v": {"0": {"foo": 1}}})));
/// ```
pub fn locate<'a>(
    root: &'a mut Value,
    path: &'a Path,
    mode: Mode,
) -> Result<Option<Location<'a>>, PathError> {
    let depth = path.len().checked_sub(1).ok_or(PathError::EmptyPath)?;
    let mut current = root;
    for i in 0..depth {
        current = match descend(current, path, i, mode)? {
            Some(next) => next,
            None => return Ok(None),
        };
    }

    let step = classify(current, path, depth, mode)?;
    let key = path.last();
    let slot = match (step, current) {
        (Step::Key, Value::Document(map)) => Slot::Field { map, key },
        (Step::Index(index), Value::Array(items)) => Slot::Element { items, index },
        (_, other) => return Err(not_viable(other, path, depth, mode)),
    };
    Ok(Some(Location { slot, path }))
}

/// Resolves the whole of `path` to the node it addresses.
///
/// In [`Mode::Create`] every missing segment, the last one included, is
/// materialised as an empty document. Operators that need to choose what the
/// final node is should use [`locate`] instead.
pub fn resolve<'a>(
    root: &'a mut Value,
    path: &Path,
    mode: Mode,
) -> Result<Option<&'a mut Value>, PathError> {
    let mut current = root;
    for i in 0..path.len() {
        current = match descend(current, path, i, mode)? {
            Some(next) => next,
            None => return Ok(None),
        };
    }
    Ok(Some(current))
}

/// Read-only lookup. Never fails: anything that does not resolve is `None`.
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        current = match current {
            Value::Document(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn descend<'a>(
    node: &'a mut Value,
    path: &Path,
    depth: usize,
    mode: Mode,
) -> Result<Option<&'a mut Value>, PathError> {
    let step = classify(node, path, depth, mode)?;
    let segment = path.segments()[depth].as_str();
    match (step, node) {
        (Step::Key, Value::Document(map)) => {
            if !map.contains_key(segment) {
                if mode == Mode::Lookup {
                    return Ok(None);
                }
                trace!(%path, segment, "creating intermediate document");
                map.insert(segment.to_string(), Value::document());
            }
            Ok(map.get_mut(segment))
        }
        (Step::Index(index), Value::Array(items)) => {
            if index >= items.len() {
                if mode == Mode::Lookup {
                    return Ok(None);
                }
                validate_backfill(items.len(), index)?;
                trace!(%path, index, len = items.len(), "padding array for intermediate document");
                set_element(items, index, Value::document());
            }
            Ok(items.get_mut(index))
        }
        (_, other) => Err(not_viable(other, path, depth, mode)),
    }
}

fn classify(node: &Value, path: &Path, depth: usize, mode: Mode) -> Result<Step, PathError> {
    match node {
        Value::Document(_) => Ok(Step::Key),
        Value::Array(_) => parse_index(&path.segments()[depth])
            .map(Step::Index)
            .ok_or_else(|| not_viable(node, path, depth, mode)),
        _ => Err(not_viable(node, path, depth, mode)),
    }
}

/// Builds the error for segment `depth` of `path` meeting `node`.
fn not_viable(node: &Value, path: &Path, depth: usize, mode: Mode) -> PathError {
    let segments = path.segments();
    let element = match depth.checked_sub(1) {
        Some(parent) => format!("{{{}: {}}}", segments[parent], node),
        None => node.to_string(),
    };
    match mode {
        Mode::Create => PathError::CannotCreate {
            field: segments[depth].clone(),
            element,
        },
        Mode::Lookup => PathError::CannotTraverse {
            part: segments[depth].clone(),
            path: path.to_string(),
            element,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn path(s: &str) -> Path {
        Path::parse(s).unwrap()
    }

    #[test]
    fn locate_existing_field() {
        let mut value = doc(json!({"v": {"foo": 42}}));
        let p = path("v.foo");
        let loc = locate(&mut value, &p, Mode::Lookup).unwrap().unwrap();
        assert_eq!(loc.get(), Some(&Value::Int32(42)));
        assert_eq!(loc.field(), "foo");
    }

    #[test]
    fn locate_missing_parent_in_lookup_mode() {
        let mut value = doc(json!({"v": {}}));
        let p = path("v.missing.foo");
        assert!(locate(&mut value, &p, Mode::Lookup).unwrap().is_none());
        assert_eq!(value, doc(json!({"v": {}})));
    }

    #[test]
    fn numeral_is_a_key_under_documents() {
        let mut value = doc(json!({"v": {"0": "zero"}}));
        let p = path("v.0");
        let loc = locate(&mut value, &p, Mode::Lookup).unwrap().unwrap();
        assert!(matches!(loc.slot, Slot::Field { key: "0", .. }));
        assert_eq!(loc.get(), Some(&Value::from("zero")));
    }

    #[test]
    fn numeral_is_an_index_under_arrays() {
        let mut value = doc(json!({"a": [10, 20]}));
        let p = path("a.1");
        let loc = locate(&mut value, &p, Mode::Lookup).unwrap().unwrap();
        assert!(matches!(loc.slot, Slot::Element { index: 1, .. }));
        assert_eq!(loc.get(), Some(&Value::Int32(20)));
    }

    #[test]
    fn leading_zero_is_not_an_index() {
        let mut value = doc(json!({"a": [10, 20]}));
        let p = path("a.01");
        let err = locate(&mut value, &p, Mode::Lookup).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot use the part (01) of (a.01) to traverse the element ({a: [10, 20]})"
        );
    }

    #[test]
    fn create_through_scalar_fails() {
        let mut value = doc(json!({"v": 42}));
        let p = path("v.foo");
        let err = locate(&mut value, &p, Mode::Create).unwrap_err();
        assert_eq!(err.to_string(), "Cannot create field 'foo' in element {v: 42}");
    }

    #[test]
    fn create_with_field_name_in_array_fails() {
        let mut value = doc(json!({"v": {"array": [42, "foo", null]}}));
        let p = path("v.array.foo");
        let err = locate(&mut value, &p, Mode::Create).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot create field 'foo' in element {array: [42, \"foo\", null]}"
        );
    }

    #[test]
    fn create_pads_intermediate_array() {
        let mut value = doc(json!({"a": [1]}));
        let p = path("a.3.b");
        let mut loc = locate(&mut value, &p, Mode::Create).unwrap().unwrap();
        loc.set(Value::Int32(1)).unwrap();
        assert_eq!(value, doc(json!({"a": [1, null, null, {"b": 1}]})));
    }

    #[test]
    fn resolve_whole_path() {
        let mut value = doc(json!({"v": {"array": [42, "foo", null]}}));
        let p = path("v.array.1");
        let node = resolve(&mut value, &p, Mode::Lookup).unwrap().unwrap();
        *node = Value::from("bar");
        assert_eq!(value, doc(json!({"v": {"array": [42, "bar", null]}})));
    }

    #[test]
    fn resolve_creates_documents() {
        let mut value = doc(json!({}));
        let p = path("a.b");
        assert!(resolve(&mut value, &p, Mode::Create).unwrap().is_some());
        assert_eq!(value, doc(json!({"a": {"b": {}}})));
    }

    #[test]
    fn unset_element_keeps_array_dense() {
        let mut value = doc(json!({"a": [1, 2, 3]}));
        let p = path("a.1");
        let mut loc = locate(&mut value, &p, Mode::Lookup).unwrap().unwrap();
        assert_eq!(loc.unset(), Some(Value::Int32(2)));
        assert_eq!(value, doc(json!({"a": [1, null, 3]})));
    }

    #[test]
    fn get_is_total() {
        let value = doc(json!({"a": [{"b": 1}], "s": "x"}));
        assert_eq!(get(&value, &path("a.0.b")), Some(&Value::Int32(1)));
        assert_eq!(get(&value, &path("a.x")), None);
        assert_eq!(get(&value, &path("s.len")), None);
    }
}
