//! Segment tokenisation.
//!
//! Splits raw message text into segment lines. Carriage return is the HL7 segment
//! terminator, but `\n` and `\r\n` are accepted too; all three are treated alike. Blank lines
//! are skipped and line order is preserved.

use crate::{Hl7Error, Hl7Result};

/// The segment terminator used when rendering messages.
pub const SEGMENT_TERMINATOR: char = '\r';

const TAG_LEN: usize = 3;

/// One non-empty segment line tagged with its segment ID.
///
/// The tag is the first three characters of the line, taken as-is. Lines shorter than three
/// characters carry the whole line as their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    pub tag: &'a str,
    pub line: &'a str,
}

/// Split raw text into tagged segment lines.
///
/// Tags are not checked here: anything that is not a modelled segment is kept verbatim
/// further down.
///
/// # Errors
///
/// Returns [`Hl7Error::EmptyMessage`] if no non-blank line remains.
pub fn tokenize(raw: &str) -> Hl7Result<Vec<RawSegment<'_>>> {
    let segments: Vec<_> = raw
        .split(|c: char| c == '\r' || c == '\n')
        .filter(|line| !line.trim().is_empty())
        .map(tag_line)
        .collect();

    if segments.is_empty() {
        return Err(Hl7Error::EmptyMessage);
    }
    Ok(segments)
}

fn tag_line(line: &str) -> RawSegment<'_> {
    let tag_end = line
        .char_indices()
        .nth(TAG_LEN)
        .map_or(line.len(), |(idx, _)| idx);
    RawSegment {
        tag: &line[..tag_end],
        line,
    }
}
