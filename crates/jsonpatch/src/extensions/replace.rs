use serde_json::Value;

use crate::error::Result;
use crate::extension::Extension;
use crate::operation::{Operation, OP_REPLACE};
use crate::patch::Patch;

/// `replace`: overwrites an existing value, or the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceExtension;

impl Extension for ReplaceExtension {
    fn op(&self) -> &str {
        OP_REPLACE
    }

    fn check(&self, _patch: &Patch, op: &Operation) -> Result<()> {
        op.require_value().map(|_| ())
    }

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()> {
        let value = op.require_value()?.clone();
        let path = op.pointer();
        if path.is_whole_document() {
            *doc = value;
            return Ok(());
        }
        let parent = patch
            .visit_path(doc, &path.parent_segments())
            .map_err(|err| err.at(&path))?;
        patch
            .replace_value(parent.node, &path.last_segment(), value)
            .map_err(|err| err.at(&path))
    }
}
