//! MongoDB-compatible update operators for in-memory documents.
//!
//! An update such as `{"$set": {"v.foo": 1}, "$pop": {"v.array": -1}}` is
//! split into an [`UpdateSpec`], checked as a whole, then applied in order by
//! an [`UpdateApplier`]. Paths are dotted: under a document a segment names a
//! field, under an array it must be a decimal index.
//!
//! Supported operators: `$set`, `$unset`, `$inc`, `$push`, `$pop`.
//!
//! # Example
//!
//! ```
//! use doc_update::{UpdateApplier, UpdateOptions, UpdateSpec, Value};
//! use serde_json::json;
//!
//! let mut doc = Value::from(json!({"_id": "document", "v": {"foo": 42}}));
//! let spec = UpdateSpec::from_document(&Value::from(json!({
//!     "$set": {"v.bar": [1, 2]},
//!     "$inc": {"v.foo": 1},
//! })))
//! .unwrap();
//!
//! let applier = UpdateApplier::new(UpdateOptions::default());
//! let report = applier.apply(&mut doc, &spec).unwrap();
//! assert!(report.is_modified());
//! assert_eq!(
//!     doc,
//!     Value::from(json!({"_id": "document", "v": {"foo": 43, "bar": [1, 2]}}))
//! );
//!
//! // Re-applying a `$set` of the current value modifies nothing.
//! let spec = UpdateSpec::new().op("$set", "v.foo", 43).unwrap();
//! assert_eq!(applier.apply(&mut doc, &spec).unwrap().modified_count, 0);
//! ```

pub mod apply;
pub mod error;
pub mod operators;
pub mod types;

pub use apply::{apply_update, UpdateApplier};
pub use doc_update_path::{ErrorCode, Path, PathError};
pub use doc_update_value::{Map, Value, ValueType};
pub use error::UpdateError;
pub use operators::{operators_map, OperatorDefinition, OperatorMap};
pub use types::{OpApplication, Outcome, UpdateOptions, UpdateReport, UpdateSpec};
