//! The [`JsonPointer`] type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{validate_json_pointer, ValidationError};
use crate::{format_json_pointer, is_path_equal, parse_json_pointer};

/// A JSON Pointer, kept in its original escaped form.
///
/// Segment queries are pure functions of the stored string and never fail.
/// A malformed pointer is only rejected by [`JsonPointer::check`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPointer {
    origin: String,
}

impl JsonPointer {
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            origin: pointer.into(),
        }
    }

    /// Build a pointer from unescaped segments.
    pub fn from_segments(segments: &[String]) -> Self {
        Self::new(format_json_pointer(segments))
    }

    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Fails unless the pointer is empty or starts with `/`.
    pub fn check(&self) -> Result<(), ValidationError> {
        validate_json_pointer(&self.origin)
    }

    /// True iff the pointer addresses the whole document (`""`).
    pub fn is_whole_document(&self) -> bool {
        self.origin.is_empty()
    }

    /// Unescaped reference tokens.
    pub fn segments(&self) -> Vec<String> {
        parse_json_pointer(&self.origin)
    }

    /// All segments but the last one; empty for zero or one segments.
    pub fn parent_segments(&self) -> Vec<String> {
        let mut segments = self.segments();
        segments.pop();
        segments
    }

    /// The final segment, or an empty string for the whole document.
    pub fn last_segment(&self) -> String {
        self.segments().pop().unwrap_or_default()
    }

    /// True when both pointers share the same parent segments.
    pub fn same_parent_as(&self, other: &JsonPointer) -> bool {
        is_path_equal(&self.parent_segments(), &other.parent_segments())
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}

impl From<&str> for JsonPointer {
    fn from(pointer: &str) -> Self {
        Self::new(pointer)
    }
}

impl From<String> for JsonPointer {
    fn from(pointer: String) -> Self {
        Self::new(pointer)
    }
}
