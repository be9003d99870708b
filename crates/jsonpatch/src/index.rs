//! Array index grammar shared by the navigator and the mutators.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PatchError, Result};

fn index_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("index pattern compiles"))
}

fn signed_index_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").expect("index pattern compiles"))
}

/// Resolve an array index token against an array of length `size`.
///
/// `-` is the append position. With `allow_negative`, `-n` counts from the
/// end. The result is in `0..=size`; `size` itself is the append slot, and
/// whether that slot is usable is up to the caller.
pub fn parse_array_index(size: usize, token: &str, allow_negative: bool) -> Result<usize> {
    if token == "-" {
        return Ok(size);
    }
    let grammar = if allow_negative {
        signed_index_regex()
    } else {
        index_regex()
    };
    if !grammar.is_match(token) {
        return Err(PatchError::BadIndexSyntax(token.to_string()));
    }
    let out_of_range = || PatchError::IndexOutOfRange {
        size,
        index: token.to_string(),
    };
    let parsed: i64 = token.parse().map_err(|_| out_of_range())?;
    let resolved = if parsed < 0 {
        i64::try_from(size).map_err(|_| out_of_range())? + parsed
    } else {
        parsed
    };
    match usize::try_from(resolved) {
        Ok(index) if index <= size => Ok(index),
        _ => Err(out_of_range()),
    }
}
