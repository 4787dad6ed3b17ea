use doc_update::{apply_update, Map, UpdateSpec, Value};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::Int32),
        any::<i64>().prop_map(Value::Int64),
        any::<f64>().prop_map(Value::Double),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|fields| Value::Document(fields.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_key(), arb_value()), 0..6)
        .prop_map(|fields| Value::Document(fields.into_iter().collect::<Map>()))
}

/// Dotted paths of every leaf; empty containers count as leaves.
fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<(String, Value)>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };
    match value {
        Value::Document(map) if !map.is_empty() => {
            for (key, child) in map {
                leaf_paths(child, &join(key), out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                leaf_paths(child, &join(&index.to_string()), out);
            }
        }
        _ if !prefix.is_empty() => out.push((prefix.to_string(), value.clone())),
        _ => {}
    }
}

proptest! {
    #[test]
    fn setting_current_values_is_a_noop(doc in arb_document()) {
        let mut leaves = Vec::new();
        leaf_paths(&doc, "", &mut leaves);

        let mut spec = UpdateSpec::new();
        for (path, value) in leaves {
            spec = spec.op("$set", &path, value).unwrap();
        }

        let mut updated = doc.clone();
        let report = apply_update(&mut updated, &spec).unwrap();
        prop_assert!(report.matched);
        prop_assert_eq!(report.modified_count, 0);
        prop_assert_eq!(updated, doc);
    }

    #[test]
    fn set_twice_modifies_once(doc in arb_document(), key in arb_key(), value in arb_value()) {
        let spec = UpdateSpec::new().op("$set", &format!("new.{key}"), value).unwrap();
        let mut updated = doc.clone();
        let first = apply_update(&mut updated, &spec);
        // `new` may already hold a scalar, which cannot be traversed.
        prop_assume!(first.is_ok());

        let once = updated.clone();
        let second = apply_update(&mut updated, &spec).unwrap();
        prop_assert_eq!(second.modified_count, 0);
        prop_assert_eq!(updated, once);
    }

    #[test]
    fn removing_missing_fields_is_a_noop(doc in arb_document()) {
        let spec = UpdateSpec::new()
            .op("$unset", "absent", "")
            .and_then(|s| s.op("$pop", "missing.deeper", 1))
            .unwrap();
        let mut updated = doc.clone();
        let report = apply_update(&mut updated, &spec).unwrap();
        prop_assert_eq!(report.modified_count, 0);
        prop_assert_eq!(updated, doc);
    }
}
