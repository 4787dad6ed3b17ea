//! `$pop`: remove the first (`-1`) or last (`1`) element of an array.

use doc_update_path::Mode;
use doc_update_value::Value;
use std::sync::Arc;

use super::{OperatorDefinition, Target};
use crate::error::UpdateError;
use crate::types::{OpApplication, Outcome};

fn pop_validate(op: &OpApplication) -> Result<(), UpdateError> {
    match op.operand.as_f64() {
        None => Err(UpdateError::FailedToParse(format!(
            "Expected a number in: {}: {}",
            op.path, op.operand
        ))),
        Some(n) if n == 1.0 || n == -1.0 => Ok(()),
        Some(_) => Err(UpdateError::FailedToParse(format!(
            "$pop expects 1 or -1, found: {}",
            op.operand
        ))),
    }
}

fn pop_apply(target: Target<'_>, operand: &Value) -> Result<Outcome, UpdateError> {
    let Some(mut location) = target.location else {
        return Ok(Outcome::unchanged());
    };
    let path = location.path;
    let first = operand.as_f64().is_some_and(|n| n < 0.0);
    match location.get_mut() {
        None => Ok(Outcome::unchanged()),
        Some(Value::Array(items)) => {
            if items.is_empty() {
                return Ok(Outcome::unchanged());
            }
            if first {
                items.remove(0);
            } else {
                items.pop();
            }
            Ok(Outcome::changed())
        }
        Some(other) => Err(UpdateError::NonArray {
            path: path.to_string(),
            type_name: other.type_name(),
        }),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "$pop",
        mode: Mode::Lookup,
        validate_fn: pop_validate,
        apply_fn: pop_apply,
    })]
}
