//! Dotted update paths.
//!
//! This crate parses MongoDB-style dotted paths (`v.array.0`) and resolves
//! them against [`doc_update_value::Value`] documents, creating intermediate
//! structure when asked to.
//!
//! # Example
//!
//! ```
//! use doc_update_path::{get, parse_path, Path};
//! use doc_update_value::Value;
//! use serde_json::json;
//!
//! assert_eq!(parse_path("v.array.0").unwrap(), vec!["v", "array", "0"]);
//! assert!(parse_path("v..foo").is_err());
//!
//! let doc = Value::from(json!({"v": {"array": [42, "foo", null]}}));
//! let path = Path::parse("v.array.1").unwrap();
//! assert_eq!(get(&doc, &path), Some(&Value::from("foo")));
//! ```

pub mod error;
pub mod resolve;
pub mod types;
pub mod validate;

pub use error::{ErrorCode, PathError};
pub use resolve::{get, locate, resolve, Location, Mode, Slot};
pub use types::Path;
pub use validate::{validate_backfill, validate_path, DEFAULT_MAX_PATH_DEPTH, MAX_BACKFILL};

/// Parse a dotted path into its raw segments.
///
/// # Errors
///
/// - [`PathError::EmptyPath`] for `""`
/// - [`PathError::EmptyField`] for a leading, trailing or doubled dot
///
/// # Example
///
/// ```
/// use doc_update_path::parse_path;
///
/// assert_eq!(parse_path("foo").unwrap(), vec!["foo"]);
/// assert_eq!(parse_path("foo.0.bar").unwrap(), vec!["foo", "0", "bar"]);
/// assert!(parse_path(".foo").is_err());
/// assert!(parse_path("foo.").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Vec<String>, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err(PathError::EmptyField {
            path: path.to_string(),
        });
    }
    Ok(segments)
}

/// Join segments back into a dotted path.
///
/// # Example
///
/// ```
/// use doc_update_path::format_path;
///
/// assert_eq!(format_path(&["foo".to_string(), "0".to_string()]), "foo.0");
/// assert_eq!(format_path(&[]), "");
/// ```
pub fn format_path(segments: &[String]) -> String {
    segments.join(".")
}

/// Check if a string is a canonical non-negative integer array index.
///
/// # Example
///
/// ```
/// use doc_update_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("abc"));
/// assert!(!is_valid_index("01"));
/// ```
pub fn is_valid_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    // Leading zero only allowed for "0" itself
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as an array index; `None` if it is not a canonical
/// integer or does not fit in `usize`.
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Check if `prefix` equals `path` or addresses one of its ancestors.
///
/// # Example
///
/// ```
/// use doc_update_path::is_prefix;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_prefix(&parent, &child));
/// assert!(is_prefix(&parent, &parent));
/// assert!(!is_prefix(&child, &parent));
/// ```
pub fn is_prefix(prefix: &[String], path: &[String]) -> bool {
    prefix.len() <= path.len() && prefix.iter().zip(path).all(|(a, b)| a == b)
}

/// Get the parent segments of a path; `None` for a single-segment path.
pub fn parent(segments: &[String]) -> Option<&[String]> {
    match segments.len() {
        0 | 1 => None,
        n => Some(&segments[..n - 1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("v").unwrap(), vec!["v"]);
        assert_eq!(parse_path("v.foo").unwrap(), vec!["v", "foo"]);
        assert_eq!(parse_path("v.42.array").unwrap(), vec!["v", "42", "array"]);
    }

    #[test]
    fn test_parse_path_errors() {
        assert_eq!(parse_path(""), Err(PathError::EmptyPath));
        for bad in [".", ".v", "v.", "v..foo"] {
            let err = parse_path(bad).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("The update path '{bad}' contains an empty field name, which is not allowed.")
            );
            assert_eq!(err.code(), ErrorCode::EmptyFieldName);
        }
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("10"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("00"));
        assert!(!is_valid_index("+1"));
    }

    #[test]
    fn test_parse_index_overflow() {
        assert_eq!(parse_index("7"), Some(7));
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn test_parent() {
        let path = parse_path("a.b.c").unwrap();
        assert_eq!(parent(&path), Some(&path[..2]));
        assert_eq!(parent(&path[..1]), None);
    }

    #[test]
    fn test_roundtrip() {
        for raw in ["v", "v.foo", "v.array.0", "a.b.c.d"] {
            assert_eq!(format_path(&parse_path(raw).unwrap()), raw);
        }
    }
}
