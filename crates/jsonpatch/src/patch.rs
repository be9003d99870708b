//! Patch configuration and the check-then-apply loop.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::codec;
use crate::error::{PatchError, Result};
use crate::extension::{Extension, Registry};
use crate::navigate::kind_name;
use crate::operation::Operation;

/// Options for [`Patch`].
///
/// Deserializable with defaults for every field, so a partial config table
/// is enough:
///
/// ```
/// let opts: jsonpatch::PatchOptions =
///     serde_json::from_str(r#"{"strict_path_exists": false}"#).unwrap();
/// assert!(!opts.strict_path_exists);
/// assert!(!opts.support_negative_array_index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchOptions {
    /// Operations addressing a missing path fail instead of being skipped.
    pub strict_path_exists: bool,
    /// Array index tokens may be negative, counted from the end.
    pub support_negative_array_index: bool,
    /// Line prefix for [`Patch::apply`] output.
    pub json_prefix: String,
    /// Indent unit for [`Patch::apply`] output. Compact when both prefix and
    /// indent are empty.
    pub json_indent: String,
    /// Write `<`, `>` and `&` as unicode escapes in [`Patch::apply`] output.
    pub json_escape_html: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            strict_path_exists: true,
            support_negative_array_index: false,
            json_prefix: String::new(),
            json_indent: String::new(),
            json_escape_html: false,
        }
    }
}

/// A configured JSON Patch engine.
///
/// With default options it follows RFC 6902 exactly. A `Patch` is built once
/// and then only read, so it can be shared between threads applying patches
/// to different documents.
#[derive(Debug, Clone)]
pub struct Patch {
    options: PatchOptions,
    registry: Registry,
}

impl Default for Patch {
    fn default() -> Self {
        Self::new()
    }
}

impl Patch {
    pub fn new() -> Self {
        Self::with_options(PatchOptions::default())
    }

    pub fn with_options(options: PatchOptions) -> Self {
        Self {
            options,
            registry: Registry::standard(),
        }
    }

    pub fn strict_path_exists(mut self, on: bool) -> Self {
        self.options.strict_path_exists = on;
        self
    }

    pub fn support_negative_array_index(mut self, on: bool) -> Self {
        self.options.support_negative_array_index = on;
        self
    }

    pub fn json_indent(mut self, prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        self.options.json_prefix = prefix.into();
        self.options.json_indent = indent.into();
        self
    }

    pub fn json_escape_html(mut self, on: bool) -> Self {
        self.options.json_escape_html = on;
        self
    }

    /// Adds an operation handler, replacing any handler with the same name.
    pub fn with_extension(mut self, ext: impl Extension + 'static) -> Self {
        self.registry.register(Arc::new(ext));
        self
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict_path_exists
    }

    /// Resolves an array index token with the configured grammar.
    pub fn parse_array_index(&self, size: usize, token: &str) -> Result<usize> {
        crate::index::parse_array_index(size, token, self.options.support_negative_array_index)
    }

    /// Validates every operation without touching any document.
    pub fn check(&self, ops: &[Operation]) -> Result<()> {
        for op in ops {
            op.check_members()?;
            let ext = self
                .registry
                .get(op.name())
                .ok_or_else(|| PatchError::UnknownOperation(op.name().to_string()))?;
            ext.check(self, op)?;
        }
        Ok(())
    }

    /// Decodes `doc`, applies `ops` and encodes the result with the
    /// configured output formatting.
    pub fn apply(&self, doc: &[u8], ops: &[Operation]) -> Result<Vec<u8>> {
        let mut value: Value = serde_json::from_slice(doc)?;
        self.apply_value(&mut value, ops)?;
        codec::encode(&value, &self.options)
    }

    /// Applies `ops` to `doc` in place. The root must be an object or an
    /// array.
    pub fn apply_in_place(&self, doc: &mut Value, ops: &[Operation]) -> Result<()> {
        match doc {
            Value::Object(_) | Value::Array(_) => self.apply_value(doc, ops),
            other => Err(PatchError::TypeMismatch {
                action: "apply",
                kind: kind_name(other),
            }),
        }
    }

    fn apply_value(&self, doc: &mut Value, ops: &[Operation]) -> Result<()> {
        self.check(ops)?;
        for op in ops {
            let ext = self
                .registry
                .get(op.name())
                .ok_or_else(|| PatchError::UnknownOperation(op.name().to_string()))?;
            trace!(op = op.name(), path = %op.pointer(), "applying operation");
            let Err(err) = ext.apply(self, doc, op) else {
                continue;
            };
            if !self.options.strict_path_exists && err.is_not_found() {
                debug!(op = op.name(), path = %op.pointer(), error = %err, "skipping operation on missing path");
                continue;
            }
            let description = ext
                .describe(self, op)
                .unwrap_or_else(|| format!("{} {}", op.name(), op.pointer()));
            let source = Box::new(err);
            if source.is_stop() {
                debug!(%description, "patch stopped");
                return Err(PatchError::OperationStopped {
                    description,
                    op: op.name().to_string(),
                    source,
                });
            }
            return Err(PatchError::OperationFailed {
                description,
                op: op.name().to_string(),
                source,
            });
        }
        Ok(())
    }
}

/// Applies `ops` to `doc` with default options.
pub fn apply_patch(doc: &mut Value, ops: &[Operation]) -> Result<()> {
    Patch::new().apply_in_place(doc, ops)
}
