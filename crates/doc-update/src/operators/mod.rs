//! Update operator definitions and the name → definition registry.

pub mod inc;
pub mod pop;
pub mod push;
pub mod set;
pub mod unset;

use doc_update_path::{Location, Mode};
use doc_update_value::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::UpdateError;
use crate::types::{OpApplication, Outcome};

/// What an operator receives: the resolved location of its path and the
/// rendered `{_id: ...}` of the document, for error messages.
pub struct Target<'a> {
    /// `None` when the operator resolves in [`Mode::Lookup`] and the path
    /// does not exist.
    pub location: Option<Location<'a>>,
    pub doc_id: &'a str,
}

/// Checks an application's operand before any mutation happens.
pub type ValidateFn = fn(&OpApplication) -> Result<(), UpdateError>;

/// Applies an operator at its target.
pub type ApplyFn = for<'a> fn(Target<'a>, &Value) -> Result<Outcome, UpdateError>;

pub struct OperatorDefinition {
    pub name: &'static str,
    /// How the path is resolved before `apply_fn` runs.
    pub mode: Mode,
    pub validate_fn: ValidateFn,
    pub apply_fn: ApplyFn,
}

/// Map of operator name -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Validator for operators that accept any operand.
pub fn any_operand(_op: &OpApplication) -> Result<(), UpdateError> {
    Ok(())
}

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    operators
        .into_iter()
        .map(|op| (op.name.to_string(), op))
        .collect()
}

/// All built-in operators.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(set::operators());
    ops.extend(unset::operators());
    ops.extend(inc::operators());
    ops.extend(pop::operators());
    ops.extend(push::operators());
    ops
}

/// Build the operator map from all built-in operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
