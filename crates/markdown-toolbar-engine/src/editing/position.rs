//! Buffer position model.
//!
//! All offsets handed across the public API are *character* offsets (Unicode
//! scalar values), the unit a textarea reports for `selectionStart` on the
//! text this editor deals with. Rust strings are indexed by byte, so every
//! slice goes through [`byte_offset`] first.

use std::ops::Range;

use crate::editing::EditError;

/// 1-based line and 0-based column of a character offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// Character span of a single line, `end` excluding the terminating newline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    pub start: usize,
    pub end: usize,
}

impl LineBounds {
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a character offset into a byte offset.
///
/// `char_offset == char_len(text)` maps to `text.len()`; anything beyond that
/// returns `None`.
pub fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    if char_offset == 0 {
        return Some(0);
    }
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

/// Slice `text` by a character range, clamping both ends to the text length
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = byte_offset(text, range.start).unwrap_or(text.len());
    let end = byte_offset(text, range.end).unwrap_or(text.len()).max(start);
    &text[start..end]
}

/// Reject selections that are reversed or run past the end of the buffer
pub fn validate_selection(buffer: &str, selection: &Range<usize>) -> Result<(), EditError> {
    validate_selection_len(char_len(buffer), selection)
}

/// [`validate_selection`] against a buffer of `len` characters
pub fn validate_selection_len(len: usize, selection: &Range<usize>) -> Result<(), EditError> {
    if selection.start > selection.end || selection.end > len {
        return Err(EditError::InvalidSelection {
            selection: selection.clone(),
            len,
        });
    }
    Ok(())
}

/// Line and column of `offset`, clamped to the end of the buffer
pub fn line_column_at(buffer: &str, offset: usize) -> LineColumn {
    let mut line = 1;
    let mut line_start = 0;

    for (i, ch) in buffer.chars().take(offset).enumerate() {
        if ch == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let offset = offset.min(char_len(buffer));
    LineColumn {
        line,
        column: offset - line_start,
    }
}

/// Iterate over every line of `buffer` with its character bounds.
///
/// A buffer ending in `\n` yields a trailing empty line, and an empty buffer
/// yields exactly one empty line, so every offset in `0..=len` belongs to
/// exactly one line.
pub fn lines_with_bounds(buffer: &str) -> impl Iterator<Item = (LineBounds, &str)> {
    let mut start = 0;
    buffer.split('\n').map(move |line| {
        let len = char_len(line);
        let bounds = LineBounds {
            start,
            end: start + len,
        };
        start += len + 1;
        (bounds, line)
    })
}

/// Find the line whose span contains `offset`.
///
/// Returns `None` when no line matches, which only happens for offsets past
/// the end of the buffer.
pub fn line_bounds_containing(buffer: &str, offset: usize) -> Option<LineBounds> {
    lines_with_bounds(buffer)
        .map(|(bounds, _)| bounds)
        .find(|bounds| bounds.contains(offset))
}
