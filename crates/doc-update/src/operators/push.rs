//! `$push`: append a value to an array, creating the array when missing.

use doc_update_path::Mode;
use doc_update_value::Value;
use std::sync::Arc;

use super::{any_operand, OperatorDefinition, Target};
use crate::error::UpdateError;
use crate::types::Outcome;

fn push_apply(target: Target<'_>, operand: &Value) -> Result<Outcome, UpdateError> {
    let Some(mut location) = target.location else {
        return Ok(Outcome::unchanged());
    };
    let path = location.path;
    match location.get_mut() {
        None => {
            location.set(Value::Array(vec![operand.clone()]))?;
        }
        Some(Value::Array(items)) => items.push(operand.clone()),
        Some(other) => {
            return Err(UpdateError::BadValue(format!(
                "The field '{}' must be an array but is of type {} in document {}",
                path.last(),
                other.type_name(),
                target.doc_id
            )));
        }
    }
    Ok(Outcome::changed())
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "$push",
        mode: Mode::Create,
        validate_fn: any_operand,
        apply_fn: push_apply,
    })]
}
