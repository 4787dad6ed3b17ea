//! `$unset`: remove a field. Array elements are nulled instead of removed.

use doc_update_path::{Mode, Slot};
use doc_update_value::Value;
use std::sync::Arc;

use super::{any_operand, OperatorDefinition, Target};
use crate::error::UpdateError;
use crate::types::Outcome;

fn unset_apply(target: Target<'_>, _operand: &Value) -> Result<Outcome, UpdateError> {
    let Some(mut location) = target.location else {
        return Ok(Outcome::unchanged());
    };
    let element = matches!(location.slot, Slot::Element { .. });
    let changed = match location.unset() {
        None => false,
        Some(Value::Null) if element => false,
        Some(_) => true,
    };
    Ok(Outcome { changed })
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "$unset",
        mode: Mode::Lookup,
        validate_fn: any_operand,
        apply_fn: unset_apply,
    })]
}
