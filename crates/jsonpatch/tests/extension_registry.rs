use std::thread;

use jsonpatch::{Extension, Operation, Patch, PatchError, Result, OP_REMOVE};
use serde_json::{json, Value};

/// `inc`: adds `value` to the number at `path`.
struct Inc;

impl Extension for Inc {
    fn op(&self) -> &str {
        "inc"
    }

    fn check(&self, _patch: &Patch, op: &Operation) -> Result<()> {
        match op.require_value()? {
            Value::Number(_) => Ok(()),
            _ => Err(PatchError::Extension("inc needs a numeric value".to_string())),
        }
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let delta = op.require_value()?.as_f64().unwrap_or_default();
        let target = patch.visit_path(doc, &op.pointer().segments())?;
        let current = target
            .node
            .as_f64()
            .ok_or_else(|| PatchError::Extension(format!("{} is not a number", op.pointer())))?;
        target.set(json!(current + delta));
        Ok(())
    }

    fn describe(&self, _patch: &Patch, op: &Operation) -> Option<String> {
        Some(format!("increment {}", op.pointer()))
    }
}

/// Refuses every removal.
struct Frozen;

impl Extension for Frozen {
    fn op(&self) -> &str {
        OP_REMOVE
    }

    fn check(&self, _patch: &Patch, _op: &Operation) -> Result<()> {
        Ok(())
    }

    fn apply(&self, _patch: &Patch, _doc: &mut Value, _op: &Operation) -> Result<()> {
        Err(PatchError::Stop)
    }
}

#[test]
fn custom_operation_runs_with_builtins() {
    let patch = Patch::new().with_extension(Inc);
    assert!(patch.registry().contains("inc"));
    let mut doc = json!({"n": 1, "list": []});
    let ops = vec![
        Operation::new("inc", "/n").with_value(json!(2.5)),
        Operation::add("/list/-", json!("x")),
    ];
    patch.apply_in_place(&mut doc, &ops).unwrap();
    assert_eq!(doc, json!({"n": 3.5, "list": ["x"]}));
}

#[test]
fn custom_operation_is_unknown_to_a_plain_patch() {
    let mut doc = json!({"n": 1});
    let ops = vec![Operation::new("inc", "/n").with_value(json!(1))];
    let err = Patch::new().apply_in_place(&mut doc, &ops).unwrap_err();
    assert_eq!(err.to_string(), "unknown operation: inc");
}

#[test]
fn custom_check_runs_before_any_apply() {
    let patch = Patch::new().with_extension(Inc);
    let mut doc = json!({"n": 1});
    let ops = vec![
        Operation::add("/m", json!(0)),
        Operation::new("inc", "/n").with_value(json!("one")),
    ];
    let err = patch.apply_in_place(&mut doc, &ops).unwrap_err();
    assert!(matches!(err, PatchError::Extension(_)));
    assert_eq!(doc, json!({"n": 1}));
}

#[test]
fn custom_description_appears_in_errors() {
    let patch = Patch::new().with_extension(Inc);
    let mut doc = json!({"s": "text"});
    let ops = vec![Operation::new("inc", "/s").with_value(json!(1))];
    let err = patch.apply_in_place(&mut doc, &ops).unwrap_err();
    assert_eq!(
        err.to_string(),
        "operation failed: increment /s ext=inc, err=/s is not a number"
    );
}

#[test]
fn custom_not_found_is_skipped_when_lenient() {
    let patch = Patch::new().with_extension(Inc).strict_path_exists(false);
    let mut doc = json!({"n": 1});
    let ops = vec![
        Operation::new("inc", "/missing").with_value(json!(1)),
        Operation::new("inc", "/n").with_value(json!(1)),
    ];
    patch.apply_in_place(&mut doc, &ops).unwrap();
    assert_eq!(doc, json!({"n": 2.0}));
}

#[test]
fn builtin_can_be_overridden() {
    let patch = Patch::new().with_extension(Frozen);
    assert_eq!(patch.registry().names().len(), 6);
    let mut doc = json!({"a": 1});
    let err = patch
        .apply_in_place(&mut doc, &[Operation::remove("/a")])
        .unwrap_err();
    assert!(err.is_stop());
    assert_eq!(err.to_string(), "operation stopped: remove /a ext=remove, err=stop");
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn one_patch_serves_many_threads() {
    let patch = Patch::new().with_extension(Inc);
    let results: Vec<Value> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let patch = &patch;
                s.spawn(move || {
                    let mut doc = json!({"n": i});
                    let ops = vec![Operation::new("inc", "/n").with_value(json!(10))];
                    patch.apply_in_place(&mut doc, &ops).map(|()| doc)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    for (i, doc) in results.iter().enumerate() {
        assert_eq!(doc["n"].as_f64(), Some(i as f64 + 10.0));
    }
}
