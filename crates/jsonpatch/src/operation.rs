//! The wire-level operation record (RFC 6902).

use jsonpatch_json_pointer::JsonPointer;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PatchError, Result};

pub const OP_ADD: &str = "add";
pub const OP_REMOVE: &str = "remove";
pub const OP_REPLACE: &str = "replace";
pub const OP_MOVE: &str = "move";
pub const OP_COPY: &str = "copy";
pub const OP_TEST: &str = "test";

/// A single patch operation.
///
/// Every member is optional on the wire so that a missing `op` or `path` is
/// reported by [`crate::Patch::check`] instead of failing to decode. An
/// explicit `"value": null` decodes to `Some(Value::Null)`; an absent `value`
/// decodes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Operation {
    pub fn new(op: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op: Some(op.into()),
            path: Some(path.into()),
            value: None,
            from: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::new(OP_ADD, path).with_value(value)
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(OP_REMOVE, path)
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::new(OP_REPLACE, path).with_value(value)
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(OP_MOVE, path).with_from(from)
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(OP_COPY, path).with_from(from)
    }

    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Self::new(OP_TEST, path).with_value(value)
    }

    /// The operation name, or an empty string when absent.
    pub fn name(&self) -> &str {
        self.op.as_deref().unwrap_or_default()
    }

    /// The target pointer. An absent path reads as the whole document;
    /// [`Operation::check_members`] rejects that case before any apply.
    pub fn pointer(&self) -> JsonPointer {
        JsonPointer::new(self.path.as_deref().unwrap_or_default())
    }

    pub fn from_pointer(&self) -> Option<JsonPointer> {
        self.from.as_deref().map(JsonPointer::new)
    }

    /// The `value` member, or [`PatchError::MissingField`].
    pub fn require_value(&self) -> Result<&Value> {
        self.value.as_ref().ok_or_else(|| self.missing("value"))
    }

    /// The `from` member as a pointer, or [`PatchError::MissingField`].
    pub fn require_from(&self) -> Result<JsonPointer> {
        self.from_pointer().ok_or_else(|| self.missing("from"))
    }

    /// Checks the members every operation needs, independent of its name:
    /// `op` and `path` are present, `path` and `from` are valid pointers.
    pub fn check_members(&self) -> Result<()> {
        if self.op.is_none() {
            return Err(self.missing("op"));
        }
        if self.path.is_none() {
            return Err(self.missing("path"));
        }
        self.pointer().check()?;
        if let Some(from) = self.from_pointer() {
            from.check()?;
        }
        Ok(())
    }

    fn missing(&self, field: &'static str) -> PatchError {
        PatchError::MissingField {
            op: self.op.clone().unwrap_or_else(|| "unnamed".to_string()),
            field,
        }
    }
}
