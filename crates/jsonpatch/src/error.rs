//! Error type for patch checking and application.

use jsonpatch_json_pointer::{JsonPointer, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error(transparent)]
    MalformedPointer(#[from] ValidationError),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("missing required member {field:?} in {op} operation")]
    MissingField { op: String, field: &'static str },
    #[error("bad array index: {0}")]
    BadIndexSyntax(String),
    #[error("array index out of range: size={size}, {index}")]
    IndexOutOfRange { size: usize, index: String },
    #[error("bad type for {action}: {kind}")]
    TypeMismatch {
        action: &'static str,
        kind: &'static str,
    },
    #[error("path member not exists: {0}")]
    PathNotFound(String),
    /// Intentional early termination, e.g. a failed `test`.
    #[error("stop")]
    Stop,
    #[error("{0}")]
    Extension(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("operation failed: {description} ext={op}, err={source}")]
    OperationFailed {
        description: String,
        op: String,
        source: Box<PatchError>,
    },
    #[error("operation stopped: {description} ext={op}, err={source}")]
    OperationStopped {
        description: String,
        op: String,
        source: Box<PatchError>,
    },
}

/// Classification of a [`PatchError`], looking through operation wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedPointer,
    UnknownOperation,
    MissingField,
    BadIndexSyntax,
    IndexOutOfRange,
    TypeMismatch,
    PathNotFound,
    Stop,
    Extension,
    Json,
}

impl PatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatchError::MalformedPointer(_) => ErrorKind::MalformedPointer,
            PatchError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            PatchError::MissingField { .. } => ErrorKind::MissingField,
            PatchError::BadIndexSyntax(_) => ErrorKind::BadIndexSyntax,
            PatchError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            PatchError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            PatchError::PathNotFound(_) => ErrorKind::PathNotFound,
            PatchError::Stop => ErrorKind::Stop,
            PatchError::Extension(_) => ErrorKind::Extension,
            PatchError::Json(_) => ErrorKind::Json,
            PatchError::OperationFailed { source, .. }
            | PatchError::OperationStopped { source, .. } => source.kind(),
        }
    }

    /// True when the addressed location does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::PathNotFound
    }

    /// True when the patch was halted on purpose rather than being broken.
    pub fn is_stop(&self) -> bool {
        self.kind() == ErrorKind::Stop
    }

    /// Replaces the location carried by a [`PatchError::PathNotFound`].
    pub(crate) fn at(self, pointer: &JsonPointer) -> Self {
        match self {
            PatchError::PathNotFound(_) => PatchError::PathNotFound(pointer.to_string()),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
