//! jsonpatch-util - Value helpers shared by the patch engine.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::clone;
pub use json_equal::deep_equal;
