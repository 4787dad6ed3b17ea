//! Update application: validation pass, ordered application, reporting.

use doc_update_path::{locate, validate_path};
use doc_update_value::Value;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::UpdateError;
use crate::operators::{operators_map, OperatorDefinition, OperatorMap, Target};
use crate::types::{UpdateOptions, UpdateReport, UpdateSpec};

/// Applies update specifications to documents.
///
/// Holds the operator registry and options; it keeps no per-document state,
/// so one applier can serve any number of calls.
#[derive(Clone)]
pub struct UpdateApplier {
    operators: Arc<OperatorMap>,
    options: UpdateOptions,
}

impl Default for UpdateApplier {
    fn default() -> Self {
        Self::new(UpdateOptions::default())
    }
}

impl UpdateApplier {
    /// An applier with all built-in operators.
    pub fn new(options: UpdateOptions) -> Self {
        Self {
            operators: Arc::new(operators_map()),
            options,
        }
    }

    /// Replaces the operator registry.
    pub fn with_operators(mut self, operators: Arc<OperatorMap>) -> Self {
        self.operators = operators;
        self
    }

    pub fn options(&self) -> &UpdateOptions {
        &self.options
    }

    /// Applies `spec` to `doc`.
    ///
    /// Every application is validated before anything is mutated. Unless
    /// [`UpdateOptions::in_place`] is set, `doc` is only written when the
    /// whole update succeeds.
    pub fn apply(&self, doc: &mut Value, spec: &UpdateSpec) -> Result<UpdateReport, UpdateError> {
        debug!(ops = spec.len(), in_place = self.options.in_place, "applying update");
        let result = self.validate(doc, spec).and_then(|plan| {
            if self.options.in_place {
                return run(doc, spec, &plan);
            }
            let mut working = doc.clone();
            let report = run(&mut working, spec, &plan)?;
            if report.is_modified() {
                *doc = working;
            }
            Ok(report)
        });
        match &result {
            Ok(report) => debug!(modified = report.modified_count, "update applied"),
            Err(err) => debug!(code = err.code().as_i32(), %err, "update failed"),
        }
        result
    }

    /// Resolves every operator and checks operands, path depths and
    /// path conflicts.
    fn validate(
        &self,
        doc: &Value,
        spec: &UpdateSpec,
    ) -> Result<Vec<Arc<OperatorDefinition>>, UpdateError> {
        if !doc.is_document() {
            return Err(UpdateError::BadValue(format!(
                "Update target must be a document, found {}",
                doc.type_name()
            )));
        }

        let mut plan = Vec::with_capacity(spec.len());
        for op in &spec.ops {
            let def = self
                .operators
                .get(&op.operator)
                .ok_or_else(|| UpdateError::UnknownOperator(op.operator.clone()))?;
            plan.push(Arc::clone(def));
        }

        for (i, (op, def)) in spec.ops.iter().zip(&plan).enumerate() {
            validate_path(&op.path, self.options.max_path_depth)?;
            (def.validate_fn)(op)?;
            for earlier in &spec.ops[..i] {
                let conflict = if earlier.path.is_prefix_of(&op.path) {
                    &earlier.path
                } else if op.path.is_prefix_of(&earlier.path) {
                    &op.path
                } else {
                    continue;
                };
                return Err(UpdateError::Conflict {
                    path: op.path.to_string(),
                    conflict: conflict.to_string(),
                });
            }
        }
        Ok(plan)
    }
}

fn run(
    doc: &mut Value,
    spec: &UpdateSpec,
    plan: &[Arc<OperatorDefinition>],
) -> Result<UpdateReport, UpdateError> {
    let id_before = doc.get("_id").cloned();
    let doc_id = match &id_before {
        Some(id) => format!("{{_id: {id}}}"),
        None => "{}".to_string(),
    };

    let mut modified = false;
    for (op, def) in spec.ops.iter().zip(plan) {
        let location = locate(doc, &op.path, def.mode)?;
        let outcome = (def.apply_fn)(
            Target {
                location,
                doc_id: &doc_id,
            },
            &op.operand,
        )?;
        trace!(operator = def.name, path = %op.path, changed = outcome.changed, "applied operator");
        modified |= outcome.changed;
    }

    if let Some(id) = id_before {
        if doc.get("_id") != Some(&id) {
            return Err(UpdateError::ImmutableField);
        }
    }

    Ok(UpdateReport {
        matched: true,
        modified_count: u64::from(modified),
    })
}

/// Applies `spec` with the default applier.
///
/// # Example
///
/// ```
/// use doc_update::{apply_update, UpdateSpec};
/// use doc_update_value::Value;
/// use serde_json::json;
///
/// let mut doc = Value::from(json!({"_id": 1, "v": {"array": [42, "foo", null]}}));
/// let spec = UpdateSpec::from_document(&Value::from(json!({"$pop": {"v.array": 1}}))).unwrap();
/// let report = apply_update(&mut doc, &spec).unwrap();
/// assert_eq!(report.modified_count, 1);
/// assert_eq!(doc, Value::from(json!({"_id": 1, "v": {"array": [42, "foo"]}})));
/// ```
pub fn apply_update(doc: &mut Value, spec: &UpdateSpec) -> Result<UpdateReport, UpdateError> {
    UpdateApplier::default().apply(doc, spec)
}
