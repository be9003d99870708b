use jsonpatch_util::deep_equal;
use serde_json::Value;

use crate::error::{PatchError, Result};
use crate::extension::Extension;
use crate::operation::{Operation, OP_TEST};
use crate::patch::Patch;

/// `test`: halts the patch with [`PatchError::Stop`] unless the value at
/// `path` equals `value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestExtension;

impl Extension for TestExtension {
    fn op(&self) -> &str {
        OP_TEST
    }

    fn check(&self, _patch: &Patch, op: &Operation) -> Result<()> {
        op.require_value().map(|_| ())
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let expected = op.require_value()?;
        let path = op.pointer();
        let actual = match patch.visit_path(doc, &path.segments()) {
            Ok(located) => located.node,
            Err(err) if patch.is_strict() => return Err(err.at(&path)),
            Err(_) => return Err(PatchError::Stop),
        };
        if deep_equal(actual, expected) {
            Ok(())
        } else {
            Err(PatchError::Stop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matching_value_passes() {
        let mut doc = json!({"baz": "qux", "foo": ["a", 2, "c"]});
        let patch = Patch::new();
        for (path, value) in [("/baz", json!("qux")), ("/foo/1", json!(2.0)), ("", doc.clone())] {
            TestExtension
                .apply(&patch, &mut doc, &Operation::test(path, value))
                .unwrap();
        }
    }

    #[test]
    fn mismatch_stops() {
        let mut doc = json!({"baz": "qux"});
        let err = TestExtension
            .apply(&Patch::new(), &mut doc, &Operation::test("/baz", json!("bar")))
            .unwrap_err();
        assert!(err.is_stop());
    }

    #[test]
    fn missing_path() {
        let mut doc = json!({});
        let op = Operation::test("/a", json!(1));
        assert!(TestExtension
            .apply(&Patch::new(), &mut doc, &op)
            .unwrap_err()
            .is_not_found());
        assert!(TestExtension
            .apply(&Patch::new().strict_path_exists(false), &mut doc, &op)
            .unwrap_err()
            .is_stop());
    }
}
