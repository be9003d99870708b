use serde_json::Value;

use crate::error::Result;
use crate::extension::Extension;
use crate::operation::{Operation, OP_COPY};
use crate::patch::Patch;

/// `copy`: adds a deep copy of the value at `from` at `path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyExtension;

impl Extension for CopyExtension {
    fn op(&self) -> &str {
        OP_COPY
    }

    fn check(&self, _patch: &Patch, op: &Operation) -> Result<()> {
        op.require_from().map(|_| ())
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let from = op.require_from()?;
        let path = op.pointer();
        let parent_segments = path.parent_segments();

        patch
            .visit_path(doc, &parent_segments)
            .map_err(|err| err.at(&path))?;
        let value = {
            let source = patch
                .visit_path(doc, &from.segments())
                .map_err(|err| err.at(&from))?;
            jsonpatch_util::clone(source.node)
        };
        let parent = patch
            .visit_path(doc, &parent_segments)
            .map_err(|err| err.at(&path))?;
        patch.add_value(parent.node, &path.last_segment(), value)
    }

    fn describe(&self, _patch: &Patch, op: &Operation) -> Option<String> {
        Some(format!(
            "copy {} from {}",
            op.pointer(),
            op.from.as_deref().unwrap_or_default()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copies_without_aliasing() {
        let patch = Patch::new();
        let mut doc = json!({"a": {"b": [1, {"c": 2}]}});
        CopyExtension
            .apply(&patch, &mut doc, &Operation::copy_from("/a", "/z"))
            .unwrap();
        doc["z"]["b"][1]["c"] = json!(99);
        assert_eq!(doc["a"], json!({"b": [1, {"c": 2}]}));
        assert_eq!(doc["z"], json!({"b": [1, {"c": 99}]}));
    }

    #[test]
    fn copies_into_array() {
        let mut doc = json!({"a": [1, 2]});
        CopyExtension
            .apply(&Patch::new(), &mut doc, &Operation::copy_from("/a/1", "/a/0"))
            .unwrap();
        assert_eq!(doc, json!({"a": [2, 1, 2]}));
    }

    #[test]
    fn missing_source_or_target() {
        let patch = Patch::new();
        let mut doc = json!({"a": 1});
        let err = CopyExtension
            .apply(&patch, &mut doc, &Operation::copy_from("/x", "/b"))
            .unwrap_err();
        assert_eq!(err.to_string(), "path member not exists: /x");
        let err = CopyExtension
            .apply(&patch, &mut doc, &Operation::copy_from("/a", "/q/r"))
            .unwrap_err();
        assert_eq!(err.to_string(), "path member not exists: /q/r");
    }

    #[test]
    fn description() {
        let op = Operation::copy_from("/a", "/b");
        assert_eq!(
            CopyExtension.describe(&Patch::new(), &op).as_deref(),
            Some("copy /b from /a")
        );
    }
}
