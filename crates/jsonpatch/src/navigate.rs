//! Walking a path of segments through a document.
//!
//! A walk yields the visited node together with the [`Slot`] it occupies in
//! its parent. The mutable borrow in [`Located`] is the capability to
//! overwrite exactly that slot.

use std::mem;

use jsonpatch_json_pointer::format_json_pointer;
use serde_json::Value;

use crate::error::{PatchError, Result};
use crate::patch::Patch;

/// Where a visited node lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// The document root itself.
    Root,
    /// A member of an object.
    Key(String),
    /// An element of an array.
    Index(usize),
}

/// A visited node and its slot.
#[derive(Debug)]
pub struct Located<'a> {
    pub node: &'a mut Value,
    pub slot: Slot,
}

impl Located<'_> {
    /// Overwrites the slot, returning the previous value.
    pub fn set(self, value: Value) -> Value {
        mem::replace(self.node, value)
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Patch {
    /// Descends from `root` through every segment.
    ///
    /// An empty segment list visits the root itself.
    pub fn visit_path<'a>(&self, root: &'a mut Value, segments: &[String]) -> Result<Located<'a>> {
        let mut located = Located {
            node: root,
            slot: Slot::Root,
        };
        for (depth, segment) in segments.iter().enumerate() {
            let Located { node, .. } = located;
            located = self.visit_part(node, segment).map_err(|err| match err {
                PatchError::PathNotFound(_) => {
                    PatchError::PathNotFound(format_json_pointer(&segments[..=depth]))
                }
                other => other,
            })?;
        }
        Ok(located)
    }

    /// Descends one level.
    ///
    /// Fails with [`PatchError::PathNotFound`] for a missing key, an empty
    /// array or the append slot of an array, and with
    /// [`PatchError::TypeMismatch`] when `node` is a scalar.
    pub fn visit_part<'a>(&self, node: &'a mut Value, segment: &str) -> Result<Located<'a>> {
        match node {
            Value::Object(map) => match map.get_mut(segment) {
                Some(child) => Ok(Located {
                    node: child,
                    slot: Slot::Key(segment.to_string()),
                }),
                None => Err(PatchError::PathNotFound(segment.to_string())),
            },
            Value::Array(arr) => {
                if arr.is_empty() {
                    return Err(PatchError::PathNotFound(segment.to_string()));
                }
                let index = self.parse_array_index(arr.len(), segment)?;
                match arr.get_mut(index) {
                    Some(child) => Ok(Located {
                        node: child,
                        slot: Slot::Index(index),
                    }),
                    None => Err(PatchError::PathNotFound(segment.to_string())),
                }
            }
            other => Err(PatchError::TypeMismatch {
                action: "visit",
                kind: kind_name(other),
            }),
        }
    }
}
