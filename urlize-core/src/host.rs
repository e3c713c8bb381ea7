//! Byte-string contract for C-style hosts.
//!
//! Database extensions and interpreter modules hand over a NUL-terminated
//! buffer and expect a NUL-terminated one back, or an out-of-memory signal
//! they can translate into their own error convention.

use std::ffi::CStr;

use crate::error::SlugError;
use crate::slug::{push_slug, reserve};

/// Slugify `input` into a buffer that ends with a single `0` byte.
///
/// Capacity is reserved once as `input.len() + 1` and never exceeded.
/// An absent input yields just the terminator. Interior NUL bytes in
/// `input` are punctuation like any other, so the result has no interior NUL.
pub fn slugify_nul_terminated(input: Option<&[u8]>) -> Result<Vec<u8>, SlugError> {
    let input = input.unwrap_or_default();
    let mut buf = reserve(input.len().saturating_add(1))?;
    push_slug(input, &mut buf);
    buf.push(0);
    Ok(buf)
}

/// Slugify a C string, reading up to its terminator.
pub fn slugify_c_str(input: Option<&CStr>) -> Result<Vec<u8>, SlugError> {
    slugify_nul_terminated(input.map(CStr::to_bytes))
}
