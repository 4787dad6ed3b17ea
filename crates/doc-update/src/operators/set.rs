//! `$set`: write a value, creating missing documents along the path.

use doc_update_path::Mode;
use doc_update_value::Value;
use std::sync::Arc;

use super::{any_operand, OperatorDefinition, Target};
use crate::error::UpdateError;
use crate::types::Outcome;

fn set_apply(target: Target<'_>, operand: &Value) -> Result<Outcome, UpdateError> {
    let Some(mut location) = target.location else {
        return Ok(Outcome::unchanged());
    };
    // Equal values are left alone so the update reports no modification.
    if location.get() == Some(operand) {
        return Ok(Outcome::unchanged());
    }
    location.set(operand.clone())?;
    Ok(Outcome::changed())
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "$set",
        mode: Mode::Create,
        validate_fn: any_operand,
        apply_fn: set_apply,
    })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_update_path::{locate, Path};
    use serde_json::json;

    fn run(doc: &mut Value, path: &str, operand: Value) -> Result<Outcome, UpdateError> {
        let path = Path::parse(path).unwrap();
        let location = locate(doc, &path, Mode::Create)?;
        set_apply(
            Target {
                location,
                doc_id: "{}",
            },
            &operand,
        )
    }

    #[test]
    fn creates_missing_field() {
        let mut doc = Value::from(json!({"a": 1}));
        assert!(run(&mut doc, "b", Value::Int32(2)).unwrap().changed);
        assert_eq!(doc, Value::from(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn same_value_is_unchanged() {
        let mut doc = Value::from(json!({"v": 42}));
        assert!(!run(&mut doc, "v", Value::Int32(42)).unwrap().changed);
    }

    #[test]
    fn different_numeric_type_is_a_change() {
        let mut doc = Value::from(json!({"v": 42}));
        assert!(run(&mut doc, "v", Value::Int64(42)).unwrap().changed);
        assert_eq!(doc.get("v"), Some(&Value::Int64(42)));
    }

    #[test]
    fn pads_arrays_past_the_end() {
        let mut doc = Value::from(json!({"a": [1, 2]}));
        assert!(run(&mut doc, "a.5", Value::from("x")).unwrap().changed);
        assert_eq!(doc, Value::from(json!({"a": [1, 2, null, null, null, "x"]})));
    }
}
