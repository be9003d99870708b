//! Edits on a single container: the object/array semantics behind the
//! builtin operations.

use serde_json::Value;

use crate::error::{PatchError, Result};
use crate::navigate::kind_name;
use crate::patch::Patch;

impl Patch {
    /// A no-op in lenient mode, [`PatchError::PathNotFound`] in strict mode.
    fn skip_missing(&self, key: &str) -> Result<()> {
        if self.is_strict() {
            return Err(PatchError::PathNotFound(key.to_string()));
        }
        Ok(())
    }

    /// Inserts `value` under `key`.
    ///
    /// Objects insert or overwrite. Arrays insert at the index, shifting
    /// later elements right; the append slot appends.
    pub fn add_value(&self, container: &mut Value, key: &str, value: Value) -> Result<()> {
        match container {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            Value::Array(arr) => {
                let index = self.parse_array_index(arr.len(), key)?;
                arr.insert(index, value);
                Ok(())
            }
            other => Err(PatchError::TypeMismatch {
                action: "add",
                kind: kind_name(other),
            }),
        }
    }

    /// Overwrites the existing value under `key`.
    ///
    /// A missing object key is inserted in lenient mode. The array append
    /// slot holds nothing to replace, so it is skipped in lenient mode.
    pub fn replace_value(&self, container: &mut Value, key: &str, value: Value) -> Result<()> {
        match container {
            Value::Object(map) => {
                if self.is_strict() && !map.contains_key(key) {
                    return Err(PatchError::PathNotFound(key.to_string()));
                }
                map.insert(key.to_string(), value);
                Ok(())
            }
            Value::Array(arr) => {
                let index = self.parse_array_index(arr.len(), key)?;
                match arr.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => self.skip_missing(key),
                }
            }
            other => Err(PatchError::TypeMismatch {
                action: "replace",
                kind: kind_name(other),
            }),
        }
    }

    /// Removes the value under `key`, returning it.
    ///
    /// Returns `Ok(None)` when lenient mode skipped a missing key, an
    /// unparsable index or the append slot.
    pub fn remove_value(&self, container: &mut Value, key: &str) -> Result<Option<Value>> {
        match container {
            Value::Object(map) => match map.shift_remove(key) {
                Some(removed) => Ok(Some(removed)),
                None => self.skip_missing(key).map(|()| None),
            },
            Value::Array(arr) => match self.parse_array_index(arr.len(), key) {
                Ok(index) if index < arr.len() => Ok(Some(arr.remove(index))),
                _ => self.skip_missing(key).map(|()| None),
            },
            other => Err(PatchError::TypeMismatch {
                action: "remove",
                kind: kind_name(other),
            }),
        }
    }

    /// Moves a value between two keys of the same container.
    ///
    /// Array indices are both resolved against the length before the
    /// element is taken out.
    pub fn move_value(&self, container: &mut Value, from: &str, to: &str) -> Result<()> {
        match container {
            Value::Object(map) => {
                if !map.contains_key(from) {
                    return self.skip_missing(from);
                }
                if from == to {
                    return Ok(());
                }
                if let Some(moved) = map.shift_remove(from) {
                    map.insert(to.to_string(), moved);
                }
                Ok(())
            }
            Value::Array(arr) => {
                let len = arr.len();
                let (fi, ti) = match (
                    self.parse_array_index(len, from),
                    self.parse_array_index(len, to),
                ) {
                    (Ok(fi), Ok(ti)) if fi < len => (fi, ti),
                    (Ok(_), Ok(_)) => return self.skip_missing(from),
                    (Err(_), _) => return self.skip_missing(from),
                    (_, Err(_)) => return self.skip_missing(to),
                };
                if fi == ti {
                    return Ok(());
                }
                let moved = arr.remove(fi);
                let ti = ti.min(arr.len());
                arr.insert(ti, moved);
                Ok(())
            }
            other => Err(PatchError::TypeMismatch {
                action: "move",
                kind: kind_name(other),
            }),
        }
    }
}
