//! Pluggable operation handlers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::extensions::{
    AddExtension, CopyExtension, MoveExtension, RemoveExtension, ReplaceExtension, TestExtension,
};
use crate::operation::Operation;
use crate::patch::Patch;

/// A handler for one operation name.
///
/// [`Extension::check`] runs for every operation of a list before any of
/// them is applied; it must only look at the operation itself.
/// [`Extension::apply`] edits the document. Returning
/// [`crate::PatchError::PathNotFound`] lets a lenient [`Patch`] skip the
/// operation; returning [`crate::PatchError::Stop`] halts the patch without
/// reporting it as broken.
pub trait Extension: Send + Sync {
    /// The operation name, e.g. `"add"`.
    fn op(&self) -> &str;

    fn check(&self, patch: &Patch, op: &Operation) -> Result<()>;

    fn apply(&self, patch: &Patch, doc: &mut Value, op: &Operation) -> Result<()>;

    /// Human-readable description used in error messages.
    fn describe(&self, _patch: &Patch, _op: &Operation) -> Option<String> {
        None
    }
}

/// Maps operation names to handlers.
#[derive(Clone, Default)]
pub struct Registry {
    extensions: HashMap<String, Arc<dyn Extension>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six RFC 6902 operations.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AddExtension));
        registry.register(Arc::new(RemoveExtension));
        registry.register(Arc::new(ReplaceExtension));
        registry.register(Arc::new(MoveExtension));
        registry.register(Arc::new(CopyExtension));
        registry.register(Arc::new(TestExtension));
        registry
    }

    /// Registers `ext` under its name, returning the handler it replaced.
    pub fn register(&mut self, ext: Arc<dyn Extension>) -> Option<Arc<dyn Extension>> {
        self.extensions.insert(ext.op().to_string(), ext)
    }

    pub fn get(&self, op: &str) -> Option<&Arc<dyn Extension>> {
        self.extensions.get(op)
    }

    pub fn contains(&self, op: &str) -> bool {
        self.extensions.contains_key(op)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("ops", &self.names())
            .finish()
    }
}
