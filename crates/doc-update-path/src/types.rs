//! Type definitions for dotted paths.

use crate::error::PathError;
use std::fmt;
use std::str::FromStr;

/// A parsed, non-empty dotted path such as `v.array.0`.
///
/// Segments are kept as raw strings: whether `0` is an array index or a
/// document key is only decided when the path meets an actual document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parses a dotted path. See [`crate::parse_path`].
    pub fn parse(path: &str) -> Result<Self, PathError> {
        crate::parse_path(path).map(|segments| Path { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment.
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Returns true if `self` equals `other` or addresses one of its ancestors.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        crate::is_prefix(&self.segments, &other.segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format_path(&self.segments))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}
