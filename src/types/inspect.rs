//! One-line node descriptions.
//!
//! [`TransformNode::inspect`] describes a single node and its own parameters.
//! Children are never expanded; each one shows up as `...`. The description
//! is written into a caller-owned buffer with measure-or-truncate semantics:
//! the returned length is what the full text needs, whether or not it fit.

use std::fmt::{self, Write};

use super::TransformNode;

/// Placeholder written for every child.
pub const CHILD_PLACEHOLDER: &str = "...";

/// Result of [`TransformNode::inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection<'a> {
    /// The bytes that fit, always valid UTF-8.
    pub text: &'a str,
    /// Length in bytes of the untruncated description.
    pub required: usize,
}

impl Inspection<'_> {
    /// True when the buffer was too small for the full description.
    pub fn is_truncated(&self) -> bool {
        self.required > self.text.len()
    }
}

/// A `fmt::Write` sink over a fixed byte slice.
///
/// Stops copying at the first piece that doesn't fit, but keeps counting.
/// Cuts only on char boundaries.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    required: usize,
    full: bool,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            written: 0,
            required: 0,
            full: false,
        }
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.full {
            return Ok(());
        }

        let room = self.buf.len() - self.written;
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf[self.written..self.written + end].copy_from_slice(&s.as_bytes()[..end]);
        self.written += end;
        if end < s.len() {
            self.full = true;
        }
        Ok(())
    }
}

impl TransformNode {
    /// Describe this node into `buf`, truncating if it doesn't fit.
    ///
    /// Unlike C's `snprintf` no terminator is reserved, so a buffer of
    /// exactly `required` bytes holds the whole description.
    pub fn inspect<'b>(&self, buf: &'b mut [u8]) -> Inspection<'b> {
        let mut writer = BoundedWriter::new(buf);
        // BoundedWriter never reports an error
        let _ = self.write_description(&mut writer);
        let BoundedWriter {
            buf,
            written,
            required,
            ..
        } = writer;
        let buf: &'b [u8] = buf;
        let text = std::str::from_utf8(&buf[..written]).unwrap_or("");
        Inspection { text, required }
    }

    /// Describe this node as an owned string.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = self.write_description(&mut out);
        out
    }

    fn write_description(&self, w: &mut impl Write) -> fmt::Result {
        let name = self.kind().name();
        match self {
            TransformNode::Constant(c) => {
                write!(w, "{}(r={:.6}, g={:.6}, b={:.6})", name, c.r, c.g, c.b)
            }
            TransformNode::Sin { phase, freq, .. } => write!(
                w,
                "{}(phase={:.6}, freq={:.6}, {})",
                name, phase, freq, CHILD_PLACEHOLDER
            ),
            TransformNode::Level { threshold, .. } => {
                write!(w, "{}({}, threshold={:.6})", name, CHILD_PLACEHOLDER, threshold)
            }
            _ => {
                let children = vec![CHILD_PLACEHOLDER; self.arity()];
                write!(w, "{}({})", name, children.join(", "))
            }
        }
    }
}
