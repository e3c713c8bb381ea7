use std::collections::TryReserveError;

use log::{trace, warn};

use super::Slug;
use crate::error::SlugError;

const HYPHEN: u8 = b'-';
const APOSTROPHE: u8 = b'\'';

/// Convert raw bytes to a URL-safe slug (lowercase ASCII, hyphens only).
///
/// `None` stands for the host's absent value (SQL `NULL`, Python `None`) and
/// yields an empty slug. Apostrophes are dropped before classification, so
/// `O'Brien` becomes `obrien` rather than `o-brien`. Every other byte outside
/// `[0-9A-Za-z]`, including each byte of a multi-byte UTF-8 sequence, turns
/// into a hyphen.
///
/// The output buffer is reserved once, with exactly `input.len()` bytes.
pub fn slugify_bytes(input: Option<&[u8]>) -> Result<Vec<u8>, SlugError> {
    let Some(input) = input else {
        return Ok(Vec::new());
    };
    let mut slug = reserve(input.len())?;
    push_slug(input, &mut slug);
    Ok(slug)
}

/// Like [`slugify_bytes`], but returns the typed [`Slug`].
pub fn slugify_raw(input: Option<&[u8]>) -> Result<Slug, SlugError> {
    let Some(input) = input else {
        return Ok(Slug::default());
    };
    let mut slug = String::new();
    slug.try_reserve_exact(input.len())
        .map_err(|source| reservation_failed(input.len(), source))?;
    push_slug(input, &mut slug);
    Ok(Slug::from_slugified(slug))
}

/// Convert text to a slug. `None` maps to the empty slug.
pub fn slugify(input: Option<&str>) -> Result<Slug, SlugError> {
    slugify_raw(input.map(str::as_bytes))
}

/// Shorthand for [`slugify`] with a present input.
pub fn slugify_str(input: &str) -> Result<Slug, SlugError> {
    slugify(Some(input))
}

/// Reserve an empty buffer with room for exactly `requested` bytes.
pub(crate) fn reserve(requested: usize) -> Result<Vec<u8>, SlugError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(requested)
        .map_err(|source| reservation_failed(requested, source))?;
    Ok(buf)
}

fn reservation_failed(requested: usize, source: TryReserveError) -> SlugError {
    warn!("slug buffer reservation of {requested} bytes failed: {source}");
    SlugError::AllocationFailure { requested, source }
}

/// Growable buffer the slug is written into, one ASCII byte at a time.
pub(crate) trait SlugOutput {
    fn len(&self) -> usize;
    fn push_ascii(&mut self, byte: u8);
    fn ends_with_hyphen(&self) -> bool;
    fn pop_ascii(&mut self);
}

impl SlugOutput for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_ascii(&mut self, byte: u8) {
        self.push(byte);
    }

    fn ends_with_hyphen(&self) -> bool {
        self.last() == Some(&HYPHEN)
    }

    fn pop_ascii(&mut self) {
        self.pop();
    }
}

impl SlugOutput for String {
    fn len(&self) -> usize {
        String::len(self)
    }

    fn push_ascii(&mut self, byte: u8) {
        self.push(char::from(byte));
    }

    fn ends_with_hyphen(&self) -> bool {
        self.ends_with(char::from(HYPHEN))
    }

    fn pop_ascii(&mut self) {
        self.pop();
    }
}

/// Append the slug of `input` to `out`.
///
/// Writes at most `input.len()` bytes, so a buffer reserved from the input
/// length never reallocates.
pub(crate) fn push_slug(input: &[u8], out: &mut impl SlugOutput) {
    let start = out.len();
    let mut prev_hyphen = false;

    for &byte in input {
        if byte == APOSTROPHE {
            continue;
        }
        if byte.is_ascii_alphanumeric() {
            out.push_ascii(byte.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            // Leading hyphens are never written.
            if out.len() > start {
                out.push_ascii(HYPHEN);
            }
            prev_hyphen = true;
        }
    }

    // Runs are already collapsed, so at most one trailing hyphen remains.
    if out.len() > start && out.ends_with_hyphen() {
        out.pop_ascii();
    }

    trace!("slugified {} bytes into {}", input.len(), out.len() - start);
}
