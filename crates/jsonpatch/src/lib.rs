//! jsonpatch: JSON Patch (RFC 6902) over JSON Pointer (RFC 6901).
//!
//! A [`Patch`] checks a whole operation list before touching the document,
//! then applies the operations in order. On top of the RFC it can skip
//! operations that address missing paths, accept negative array indices
//! counted from the end, and format its byte output with a prefix, an indent
//! and HTML escaping. Operation names map to [`Extension`] handlers in a
//! [`Registry`], so the six standard operations can be overridden and new
//! ones added.
//!
//! # Example
//!
//! ```
//! use jsonpatch::{decode_operations, Patch};
//!
//! let ops = decode_operations(br#"[
//!     {"op": "add", "path": "/a/-", "value": 3},
//!     {"op": "test", "path": "/a/0", "value": 1}
//! ]"#).unwrap();
//! let out = Patch::new().apply(br#"{"a":[1,2]}"#, &ops).unwrap();
//! assert_eq!(out, b"{\"a\":[1,2,3]}\n");
//! ```

pub mod codec;
pub mod error;
pub mod extension;
pub mod extensions;
pub mod index;
pub mod navigate;
pub mod operation;
pub mod patch;

mod mutate;

pub use codec::{decode_operations, encode};
pub use error::{ErrorKind, PatchError, Result};
pub use extension::{Extension, Registry};
pub use jsonpatch_json_pointer::JsonPointer;
pub use navigate::{Located, Slot};
pub use operation::{Operation, OP_ADD, OP_COPY, OP_MOVE, OP_REMOVE, OP_REPLACE, OP_TEST};
pub use patch::{apply_patch, Patch, PatchOptions};
