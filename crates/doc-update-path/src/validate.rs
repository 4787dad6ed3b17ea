//! Validation of parsed paths against configured limits.

use crate::error::PathError;
use crate::types::Path;

/// Default maximum number of segments in an update path.
pub const DEFAULT_MAX_PATH_DEPTH: usize = 100;

/// Largest array an update may grow by padding with nulls.
pub const MAX_BACKFILL: usize = 1_500_000;

/// Validate a path against a maximum depth.
///
/// # Errors
///
/// Returns [`PathError::TooDeep`] if the path has more than `max_depth`
/// segments.
///
/// # Example
///
/// ```
/// use doc_update_path::{validate_path, Path};
///
/// let path = Path::parse("a.b.c").unwrap();
/// validate_path(&path, 3).unwrap();
/// validate_path(&path, 2).unwrap_err();
/// ```
pub fn validate_path(path: &Path, max_depth: usize) -> Result<(), PathError> {
    if path.len() > max_depth {
        return Err(PathError::TooDeep {
            path: path.to_string(),
            max: max_depth,
        });
    }
    Ok(())
}

/// Checks that writing at `index` would not grow an array past
/// [`MAX_BACKFILL`] elements.
pub fn validate_backfill(len: usize, index: usize) -> Result<(), PathError> {
    if index >= len && index >= MAX_BACKFILL {
        return Err(PathError::BackfillTooLarge { max: MAX_BACKFILL });
    }
    Ok(())
}
