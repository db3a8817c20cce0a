//! Toolbar command engine.
//!
//! A pure function of `(buffer, selection, command)`. Every command compiles
//! to a single [`Splice`] over the original buffer plus a cursor offset; the
//! engine holds no state between calls.

use std::ops::Range;

use crate::editing::markers::{
    ListKind, starts_with_heading_marker, starts_with_list_marker, starts_with_quote_marker,
    starts_with_task_marker,
};
use crate::editing::placeholders::{IMAGE_URL, LINK_URL, Locale, Placeholders};
use crate::editing::position::{
    byte_offset, char_len, line_bounds_containing, slice_chars, validate_selection,
};
use crate::editing::{Command, EditError};

/// Replace `range` (character offsets into the old buffer) with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Splice {
    /// Apply to `buffer`, yielding `before + replacement + after`
    pub fn apply_to(&self, buffer: &str) -> String {
        let start = byte_offset(buffer, self.range.start).unwrap_or(buffer.len());
        let end = byte_offset(buffer, self.range.end)
            .unwrap_or(buffer.len())
            .max(start);

        let mut out = String::with_capacity(buffer.len() + self.replacement.len());
        out.push_str(&buffer[..start]);
        out.push_str(&self.replacement);
        out.push_str(&buffer[end..]);
        out
    }

    /// Character range the replacement occupies in the new buffer
    pub fn inserted_range(&self) -> Range<usize> {
        self.range.start..self.range.start + char_len(&self.replacement)
    }
}

/// Outcome of one command: the whole new buffer and where the caret goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub buffer: String,
    pub cursor: usize,
    pub splice: Splice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Language tag written after the opening code fence
    pub code_language: String,
    pub locale: Locale,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            code_language: "javascript".to_string(),
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandEngine {
    options: EngineOptions,
    placeholders: Placeholders,
}

/// Line-prefix commands share one per-line transformation loop
#[derive(Debug, Clone, Copy)]
enum LinePrefix {
    Bullet,
    Ordered,
    Task,
    Quote,
}

impl CommandEngine {
    pub fn new(options: EngineOptions) -> Self {
        let placeholders = Placeholders::for_locale(options.locale);
        Self {
            options,
            placeholders,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compute the buffer and cursor produced by `command` over `selection`.
    ///
    /// Fails only on precondition violations: a selection outside the buffer
    /// or a heading level outside 1-6.
    pub fn apply(
        &self,
        buffer: &str,
        selection: Range<usize>,
        command: &Command,
    ) -> Result<CommandResult, EditError> {
        validate_selection(buffer, &selection)?;
        let selected = slice_chars(buffer, selection.clone());
        let p = &self.placeholders;

        let (splice, cursor) = match command {
            Command::Heading(level) => heading(buffer, &selection, *level)?,
            Command::Bold => wrap(&selection, selected, "**", p.bold),
            Command::Italic => wrap(&selection, selected, "*", p.italic),
            Command::Strikethrough => wrap(&selection, selected, "~~", p.strikethrough),
            Command::UnorderedList => prefix_lines(&selection, selected, LinePrefix::Bullet, p),
            Command::OrderedList => prefix_lines(&selection, selected, LinePrefix::Ordered, p),
            Command::TaskList => prefix_lines(&selection, selected, LinePrefix::Task, p),
            Command::Blockquote => prefix_lines(&selection, selected, LinePrefix::Quote, p),
            Command::InlineCode if selected.contains('\n') => self.code_block(&selection, selected),
            Command::InlineCode => wrap(&selection, selected, "`", p.code),
            Command::CodeBlock => self.code_block(&selection, selected),
            Command::HorizontalRule => horizontal_rule(buffer, &selection, selected),
            Command::Link => link(&selection, selected, "[", p.link_text, LINK_URL),
            Command::Image => link(&selection, selected, "![", p.image_alt, IMAGE_URL),
            Command::Table => template(&selection, selected, p.table),
            Command::Flowchart => template(&selection, selected, p.flowchart),
            Command::SequenceDiagram => template(&selection, selected, p.sequence),
        };

        log::debug!(
            "{command} over {:?} replaced {:?} with {} chars",
            selection,
            splice.range,
            char_len(&splice.replacement)
        );

        Ok(CommandResult {
            buffer: splice.apply_to(buffer),
            cursor,
            splice,
        })
    }

    fn code_block(&self, selection: &Range<usize>, selected: &str) -> (Splice, usize) {
        let open = format!("```{}\n", self.options.code_language);
        let body = if selected.is_empty() {
            self.placeholders.code
        } else {
            selected
        };
        let close = if body.ends_with('\n') { "```" } else { "\n```" };

        let cursor = selection.start + char_len(&open);
        (
            Splice {
                range: selection.clone(),
                replacement: format!("{open}{body}{close}"),
            },
            cursor,
        )
    }
}

/// Set or retoggle the heading level of the line holding the selection start
fn heading(
    buffer: &str,
    selection: &Range<usize>,
    level: u8,
) -> Result<(Splice, usize), EditError> {
    if !(1..=6).contains(&level) {
        return Err(EditError::InvalidHeadingLevel(level.into()));
    }
    let prefix = format!("{} ", "#".repeat(level.into()));
    let prefix_len = char_len(&prefix);

    let Some(line) = line_bounds_containing(buffer, selection.start) else {
        // No containing line: insert at the caret instead of rewriting a line
        let at = selection.start;
        return Ok((
            Splice {
                range: at..at,
                replacement: prefix,
            },
            at + prefix_len,
        ));
    };

    let text = slice_chars(buffer, line.start..line.end);
    let existing = starts_with_heading_marker(text).map_or(0, |marker| marker.len);
    let range = line.start..line.start + existing;

    // The caret stays at the selection start, clamped when a level reduction shortens the buffer
    let new_len = char_len(buffer) - existing + prefix_len;
    let cursor = selection.start.min(new_len);

    Ok((
        Splice {
            range,
            replacement: prefix,
        },
        cursor,
    ))
}

fn wrap(
    selection: &Range<usize>,
    selected: &str,
    marker: &str,
    placeholder: &str,
) -> (Splice, usize) {
    if selected.is_empty() {
        let cursor = selection.start + char_len(marker);
        return (
            Splice {
                range: selection.clone(),
                replacement: format!("{marker}{placeholder}{marker}"),
            },
            cursor,
        );
    }

    let replacement = format!("{marker}{selected}{marker}");
    let cursor = selection.start + char_len(&replacement);
    (
        Splice {
            range: selection.clone(),
            replacement,
        },
        cursor,
    )
}

fn prefix_lines(
    selection: &Range<usize>,
    selected: &str,
    kind: LinePrefix,
    placeholders: &Placeholders,
) -> (Splice, usize) {
    if selected.is_empty() {
        let (marker, placeholder) = match kind {
            LinePrefix::Bullet => ("- ", placeholders.list_item),
            LinePrefix::Ordered => ("1. ", placeholders.list_item),
            LinePrefix::Task => ("- [ ] ", placeholders.task_item),
            LinePrefix::Quote => ("> ", placeholders.quote),
        };
        return (
            Splice {
                range: selection.clone(),
                replacement: format!("{marker}{placeholder}"),
            },
            selection.start + char_len(marker),
        );
    }

    let mut index = 0;
    let lines: Vec<String> = selected
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                return line.to_string();
            }
            index += 1;
            prefix_line(line, kind, index)
        })
        .collect();

    (
        Splice {
            range: selection.clone(),
            replacement: lines.join("\n"),
        },
        selection.start,
    )
}

/// Add the marker for `kind` to one non-blank line, or leave it if already marked
fn prefix_line(line: &str, kind: LinePrefix, index: usize) -> String {
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    let (indent, rest) = line.split_at(indent_len);

    // Byte length of an existing list marker (indent included)
    let list = starts_with_list_marker(line).map(|marker| {
        let end = byte_offset(line, marker.len).unwrap_or(line.len());
        (marker.kind, end)
    });

    match kind {
        LinePrefix::Bullet => match list {
            Some((ListKind::Bullet(_), _)) => line.to_string(),
            Some((ListKind::Ordered(_), end)) => format!("{indent}- {}", &line[end..]),
            None => format!("{indent}- {rest}"),
        },
        LinePrefix::Ordered => match list {
            Some((ListKind::Ordered(_), _)) => line.to_string(),
            Some((ListKind::Bullet(_), end)) => format!("{indent}{index}. {}", &line[end..]),
            None => format!("{indent}{index}. {rest}"),
        },
        LinePrefix::Task => {
            if starts_with_task_marker(line).is_some() {
                return line.to_string();
            }
            match list {
                Some((ListKind::Bullet(_), end)) => {
                    format!("{}[ ] {}", &line[..end], &line[end..])
                }
                Some((ListKind::Ordered(_), end)) => format!("{indent}- [ ] {}", &line[end..]),
                None => format!("{indent}- [ ] {rest}"),
            }
        }
        LinePrefix::Quote => {
            if starts_with_quote_marker(line).is_some() {
                line.to_string()
            } else {
                format!("{indent}> {rest}")
            }
        }
    }
}

/// Insert a thematic break before the selection, keeping the selection after it
fn horizontal_rule(buffer: &str, selection: &Range<usize>, selected: &str) -> (Splice, usize) {
    let before = slice_chars(buffer, 0..selection.start);

    // `---` directly under a paragraph line would turn it into a setext heading
    let lead = if before.is_empty() || before.ends_with("\n\n") {
        ""
    } else if before.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    let marker = format!("{lead}---\n");
    let cursor = selection.start + char_len(&marker);

    (
        Splice {
            range: selection.clone(),
            replacement: format!("{marker}{selected}"),
        },
        cursor,
    )
}

/// Links and images: the caret lands on the part the user most likely types next
fn link(
    selection: &Range<usize>,
    selected: &str,
    open: &str,
    placeholder: &str,
    url: &str,
) -> (Splice, usize) {
    if selected.is_empty() {
        return (
            Splice {
                range: selection.clone(),
                replacement: format!("{open}{placeholder}]({url})"),
            },
            selection.start + char_len(open),
        );
    }

    let cursor = selection.start + char_len(open) + char_len(selected) + "](".len();
    (
        Splice {
            range: selection.clone(),
            replacement: format!("{open}{selected}]({url})"),
        },
        cursor,
    )
}

/// Fixed block template; selected text is kept verbatim after it
fn template(selection: &Range<usize>, selected: &str, template: &str) -> (Splice, usize) {
    (
        Splice {
            range: selection.clone(),
            replacement: format!("{template}{selected}"),
        },
        selection.start + char_len(template),
    )
}
