use serde_json::Value;

use crate::error::Result;
use crate::extension::Extension;
use crate::operation::{Operation, OP_REMOVE};
use crate::patch::Patch;

/// `remove`: deletes an object member or array element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveExtension;

impl Extension for RemoveExtension {
    fn op(&self) -> &str {
        OP_REMOVE
    }

    fn check(&self, _patch: &Patch, _op: &Operation) -> Result<()> {
        Ok(())
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let path = op.pointer();
        let parent = patch
            .visit_path(doc, &path.parent_segments())
            .map_err(|err| err.at(&path))?;
        patch
            .remove_value(parent.node, &path.last_segment())
            .map_err(|err| err.at(&path))?;
        Ok(())
    }
}
