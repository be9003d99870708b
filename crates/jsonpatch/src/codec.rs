//! Bytes in, bytes out.
//!
//! Documents and operation lists are decoded with `serde_json`. Output goes
//! through [`PatchFormatter`], which adds a line prefix and optional HTML
//! escaping on top of the usual compact or indented layouts. Every encoded
//! document ends with a newline.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::error::Result;
use crate::operation::Operation;
use crate::patch::PatchOptions;

// ── Decode ─────────────────────────────────────────────────────────────────

/// Decodes a JSON array of operations.
pub fn decode_operations(bytes: &[u8]) -> Result<Vec<Operation>> {
    Ok(serde_json::from_slice(bytes)?)
}

// ── Encode ─────────────────────────────────────────────────────────────────

/// Encodes `value` using the output options in `options`.
pub fn encode(value: &Value, options: &PatchOptions) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    let formatter = PatchFormatter::new(options);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    out.push(b'\n');
    Ok(out)
}

/// A `serde_json` formatter with a configurable line prefix and indent.
///
/// With an empty prefix and indent the output is compact. Otherwise every
/// element of a non-empty array or object starts on a new line made of the
/// prefix followed by one indent per nesting level, and object members are
/// written as `"key": value`.
#[derive(Debug, Clone)]
pub struct PatchFormatter<'a> {
    prefix: &'a [u8],
    indent: &'a [u8],
    escape_html: bool,
    depth: usize,
    has_value: bool,
}

impl<'a> PatchFormatter<'a> {
    pub fn new(options: &'a PatchOptions) -> Self {
        Self {
            prefix: options.json_prefix.as_bytes(),
            indent: options.json_indent.as_bytes(),
            escape_html: options.json_escape_html,
            depth: 0,
            has_value: false,
        }
    }

    fn is_pretty(&self) -> bool {
        !self.prefix.is_empty() || !self.indent.is_empty()
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"\n")?;
        writer.write_all(self.prefix)?;
        for _ in 0..self.depth {
            writer.write_all(self.indent)?;
        }
        Ok(())
    }

    fn open<W: ?Sized + io::Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(bracket)
    }

    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
        self.depth -= 1;
        if self.has_value && self.is_pretty() {
            self.newline(writer)?;
        }
        writer.write_all(bracket)
    }

    fn element<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        if self.is_pretty() {
            self.newline(writer)?;
        }
        Ok(())
    }
}

impl Formatter for PatchFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.element(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.element(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.is_pretty() {
            writer.write_all(b": ")
        } else {
            writer.write_all(b":")
        }
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.escape_html {
            return writer.write_all(fragment.as_bytes());
        }
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            let escaped: &[u8] = match b {
                b'<' => b"\\u003c",
                b'>' => b"\\u003e",
                b'&' => b"\\u0026",
                _ => continue,
            };
            writer.write_all(&bytes[start..i])?;
            writer.write_all(escaped)?;
            start = i + 1;
        }
        writer.write_all(&bytes[start..])
    }
}
