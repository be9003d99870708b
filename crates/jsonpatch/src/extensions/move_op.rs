use jsonpatch_json_pointer::JsonPointer;
use serde_json::Value;

use crate::error::{PatchError, Result};
use crate::extension::Extension;
use crate::operation::{Operation, OP_MOVE};
use crate::patch::Patch;

/// `move`: takes the value at `from` out and adds it at `path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveExtension;

/// True when `path` lies strictly below `from`.
fn is_proper_child(from: &JsonPointer, path: &JsonPointer) -> bool {
    let from = from.segments();
    let path = path.segments();
    path.len() > from.len() && path.starts_with(&from)
}

impl Extension for MoveExtension {
    fn op(&self) -> &str {
        OP_MOVE
    }

    fn check(&self, _patch: &Patch, op: &Operation) -> Result<()> {
        let from = op.require_from()?;
        let path = op.pointer();
        if is_proper_child(&from, &path) {
            return Err(PatchError::Extension(format!(
                "cannot move {from} into its own child {path}"
            )));
        }
        Ok(())
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let from = op.require_from()?;
        let path = op.pointer();
        let from_key = from.last_segment();

        let from_parent = patch
            .visit_path(doc, &from.parent_segments())
            .map_err(|err| err.at(&from))?;
        if let Err(err) = patch
            .visit_part(&mut *from_parent.node, &from_key)
            .map(|_| ())
        {
            if patch.is_strict() {
                return Err(err.at(&from));
            }
            return Ok(());
        }

        if path.same_parent_as(&from) {
            return patch
                .move_value(from_parent.node, &from_key, &path.last_segment())
                .map_err(|err| err.at(&from));
        }

        let Some(value) = patch
            .remove_value(from_parent.node, &from_key)
            .map_err(|err| err.at(&from))?
        else {
            return Ok(());
        };
        let parent = patch
            .visit_path(doc, &path.parent_segments())
            .map_err(|err| err.at(&path))?;
        patch.add_value(parent.node, &path.last_segment(), value)
    }

    fn describe(&self, _patch: &Patch, op: &Operation) -> Option<String> {
        Some(format!(
            "move {} to {}",
            op.from.as_deref().unwrap_or_default(),
            op.pointer()
        ))
    }
}
