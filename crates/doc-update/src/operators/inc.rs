//! `$inc`: add a number to a numeric field, creating it when missing.

use doc_update_path::Mode;
use doc_update_value::Value;
use std::sync::Arc;

use super::{OperatorDefinition, Target};
use crate::error::UpdateError;
use crate::types::{OpApplication, Outcome};

fn inc_validate(op: &OpApplication) -> Result<(), UpdateError> {
    if op.operand.is_number() {
        return Ok(());
    }
    Err(UpdateError::FailedToParse(format!(
        "Cannot increment with non-numeric argument: {{{}: {}}}",
        op.path, op.operand
    )))
}

fn inc_apply(target: Target<'_>, operand: &Value) -> Result<Outcome, UpdateError> {
    let Some(mut location) = target.location else {
        return Ok(Outcome::unchanged());
    };
    let path = location.path;
    let field = path.last();
    let sum = match location.get() {
        None => operand.clone(),
        Some(current) if !current.is_number() => {
            return Err(UpdateError::TypeMismatch(format!(
                "Cannot apply $inc to a value of non-numeric type. \
                 {} has the field '{field}' of non-numeric type {}",
                target.doc_id,
                current.type_name()
            )));
        }
        Some(current) => {
            let sum = add(current, operand, target.doc_id)?;
            if &sum == current {
                return Ok(Outcome::unchanged());
            }
            sum
        }
    };
    location.set(sum)?;
    Ok(Outcome::changed())
}

/// Numeric addition with BSON promotion: int overflows into long, anything
/// involving a double is a double. Long overflow is an error.
fn add(current: &Value, operand: &Value, doc_id: &str) -> Result<Value, UpdateError> {
    let sum = match (current, operand) {
        (Value::Int32(a), Value::Int32(b)) => Some(
            a.checked_add(*b)
                .map(Value::Int32)
                .unwrap_or_else(|| Value::Int64(i64::from(*a) + i64::from(*b))),
        ),
        (Value::Int32(_) | Value::Int64(_), Value::Int32(_) | Value::Int64(_)) => {
            as_i64(current)
                .zip(as_i64(operand))
                .and_then(|(a, b)| a.checked_add(b))
                .map(Value::Int64)
        }
        _ => current
            .as_f64()
            .zip(operand.as_f64())
            .map(|(a, b)| Value::Double(a + b)),
    };
    sum.ok_or_else(|| {
        UpdateError::BadValue(format!(
            "Failed to apply $inc operations to current value ({}) for document {doc_id}",
            describe(current)
        ))
    })
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Int32(n) => Some(i64::from(*n)),
        Value::Int64(n) => Some(*n),
        _ => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Int32(n) => format!("(NumberInt){n}"),
        Value::Int64(n) => format!("(NumberLong){n}"),
        other => format!("({}){other}", other.type_name()),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "$inc",
        mode: Mode::Create,
        validate_fn: inc_validate,
        apply_fn: inc_apply,
    })]
}
