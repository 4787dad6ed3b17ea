//! Core types: update specifications, outcomes, reports and options.

use doc_update_path::{Path, DEFAULT_MAX_PATH_DEPTH};
use doc_update_value::Value;
use serde::Deserialize;

use crate::error::UpdateError;

/// One operator applied at one path.
#[derive(Debug, Clone, PartialEq)]
pub struct OpApplication {
    /// Operator name including the `$`, e.g. `"$set"`.
    pub operator: String,
    pub path: Path,
    pub operand: Value,
}

/// An ordered list of operator applications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSpec {
    pub ops: Vec<OpApplication>,
}

impl UpdateSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an application, parsing `path`.
    pub fn op(
        mut self,
        operator: &str,
        path: &str,
        operand: impl Into<Value>,
    ) -> Result<Self, UpdateError> {
        self.ops.push(OpApplication {
            operator: operator.to_string(),
            path: Path::parse(path)?,
            operand: operand.into(),
        });
        Ok(self)
    }

    /// Splits an update document such as `{"$set": {"v.foo": 1}}` into
    /// applications, in document order.
    ///
    /// Operator names are not checked here; the applier rejects unknown ones
    /// before mutating anything.
    ///
    /// # Errors
    ///
    /// - `FailedToParse` if `update` or an operator's argument is not a document
    /// - path syntax errors
    pub fn from_document(update: &Value) -> Result<Self, UpdateError> {
        let operators = update.as_document().ok_or_else(|| {
            UpdateError::FailedToParse(format!(
                "Update document must be an object, found {}",
                update.type_name()
            ))
        })?;

        let mut ops = Vec::new();
        for (operator, fields) in operators {
            let fields = fields.as_document().ok_or_else(|| {
                UpdateError::FailedToParse(format!(
                    "Modifiers operate on fields but we found type {} instead. \
                     For example: {{$mod: {{<field>: ...}}}} not {{{operator}: {fields}}}",
                    fields.type_name()
                ))
            })?;
            for (path, operand) in fields {
                ops.push(OpApplication {
                    operator: operator.clone(),
                    path: Path::parse(path)?,
                    operand: operand.clone(),
                });
            }
        }
        Ok(UpdateSpec { ops })
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Result of applying one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
}

impl Outcome {
    pub fn changed() -> Self {
        Outcome { changed: true }
    }

    pub fn unchanged() -> Self {
        Outcome { changed: false }
    }
}

/// Result of a whole update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    /// Always true once the engine runs: the caller found the document.
    pub matched: bool,
    /// 1 if any application changed the document, otherwise 0.
    pub modified_count: u64,
}

impl UpdateReport {
    pub fn is_modified(&self) -> bool {
        self.modified_count > 0
    }
}

/// Options for [`crate::UpdateApplier`].
///
/// Deserializable so a host can carry them in its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateOptions {
    /// If true, mutate the caller's document directly; an error can then
    /// leave it partially updated.
    /// If false, work on a copy and write it back only on success.
    pub in_place: bool,
    /// Maximum number of segments in an update path.
    pub max_path_depth: usize,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            in_place: false,
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
        }
    }
}

impl UpdateOptions {
    pub fn with_in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }

    pub fn with_max_path_depth(mut self, max_path_depth: usize) -> Self {
        self.max_path_depth = max_path_depth;
        self
    }
}
