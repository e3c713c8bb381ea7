//! Line-oriented slugification of a stream, one slug per input line.

use anyhow::{Context, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use urlize_core::{slugify_raw, Slug};

/// Settings for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions<'a> {
    /// A line equal to this marker is an absent value.
    pub null_marker: &'a str,
    pub json: bool,
}

/// Counts reported after a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines: usize,
    pub nulls: usize,
    /// Present lines whose slug came out empty.
    pub empty: usize,
}

/// One JSON output record.
#[derive(Debug, Serialize)]
pub struct SlugRecord<'a> {
    pub input: Option<Cow<'a, str>>,
    pub slug: &'a Slug,
}

impl<'a> SlugRecord<'a> {
    pub fn new(input: Option<&'a [u8]>, slug: &'a Slug) -> Self {
        Self {
            input: input.map(String::from_utf8_lossy),
            slug,
        }
    }
}

/// Write a slug either bare or as a JSON record, followed by a newline.
pub fn write_slug<W: Write>(
    writer: &mut W,
    input: Option<&[u8]>,
    slug: &Slug,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *writer, &SlugRecord::new(input, slug))?;
    } else {
        writer.write_all(slug.as_bytes())?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Slugify every line of `reader` into `writer`.
///
/// Lines may hold arbitrary bytes; the trailing `\n` (and a preceding `\r`)
/// is not part of the input.
pub fn run_batch<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    opts: &BatchOptions<'_>,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .context("failed to read input")?;
        if n == 0 {
            break;
        }
        summary.lines += 1;

        let text = strip_line_ending(&line);
        let input = if text == opts.null_marker.as_bytes() {
            summary.nulls += 1;
            None
        } else {
            Some(text)
        };

        let slug = slugify_raw(input).with_context(|| format!("line {}", summary.lines))?;
        if input.is_some() && slug.is_empty() {
            summary.empty += 1;
        }
        write_slug(&mut writer, input, &slug, opts.json)?;
    }

    writer.flush()?;
    Ok(summary)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
