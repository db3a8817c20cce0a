use std::ops::Range;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::engine::{CommandEngine, Splice};
use crate::editing::position::{LineColumn, byte_offset, char_len, validate_selection_len};
use crate::editing::{Command, EditError, Patch};
use crate::io::{FileBridge, FileError, KeyValueStore, MARKDOWN_MIME, StorageKey};
use crate::render::{RenderError, Renderer};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    File(#[from] FileError),
}

/// Source of wall-clock time for modification and save stamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// What an export handed to the file bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub saved_at: DateTime<Utc>,
}

/// The single owner of the document being edited.
///
/// Every mutation runs the same sequence: compute the splice, apply it to the
/// rope, move the caret, bump the version and modification stamp, then notify
/// the persistence and rendering collaborators. Notifications only ever see
/// a fully applied edit.
pub struct DocumentSession {
    /// Whole document; the only copy of the text
    buffer: Rope,
    /// Character offsets into `buffer`
    selection: Range<usize>,
    version: u64,
    last_modified: Option<DateTime<Utc>>,
    /// Set by [`DocumentSession::export`] only
    last_saved: Option<DateTime<Utc>>,
    preview: String,
    engine: CommandEngine,
    renderer: Box<dyn Renderer>,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl DocumentSession {
    /// Create an empty session
    pub fn new(
        engine: CommandEngine,
        renderer: impl Renderer + 'static,
        store: impl KeyValueStore + 'static,
    ) -> Self {
        Self {
            buffer: Rope::from(""),
            selection: 0..0,
            version: 0,
            last_modified: None,
            last_saved: None,
            preview: String::new(),
            engine,
            renderer: Box::new(renderer),
            store: Box::new(store),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Load the last persisted document and render it.
    ///
    /// The caret goes to the end of the restored text. Nothing is written
    /// back to the store.
    pub fn restore(&mut self) -> Result<(), SessionError> {
        if let Some(content) = self.store.get(StorageKey::Content) {
            let len = char_len(&content);
            self.buffer = Rope::from(content);
            self.selection = len..len;
        }

        self.last_saved = self
            .store
            .get(StorageKey::LastSaved)
            .and_then(|stamp| DateTime::parse_from_rfc3339(stamp.trim()).ok())
            .map(|stamp| stamp.with_timezone(&Utc));

        self.preview = self.renderer.render(&self.text())?;
        Ok(())
    }

    /// Apply a toolbar command around the current selection
    pub fn apply_command(&mut self, command: &Command) -> Result<Patch, SessionError> {
        let text = self.text();
        let result = self.engine.apply(&text, self.selection.clone(), command)?;

        let patch = self.commit(&text, &result.splice, result.cursor);
        self.notify()?;
        Ok(patch)
    }

    /// Parse a toolbar tag and optional value, then apply it
    pub fn apply_tag(&mut self, tag: &str, value: Option<&str>) -> Result<Patch, SessionError> {
        let command = Command::parse(tag, value)?;
        self.apply_command(&command)
    }

    /// Replace the selection with `text` (typing, paste); the caret ends up after it
    pub fn insert_text(&mut self, text: &str) -> Result<Patch, SessionError> {
        let old = self.text();
        let splice = Splice {
            range: self.selection.clone(),
            replacement: text.to_string(),
        };
        let cursor = splice.inserted_range().end;

        let patch = self.commit(&old, &splice, cursor);
        self.notify()?;
        Ok(patch)
    }

    /// Replace the whole buffer, keeping the selection clamped to the new text
    pub fn replace_all(&mut self, text: &str) -> Result<Patch, SessionError> {
        let len = char_len(text);
        let selection = self.selection.start.min(len)..self.selection.end.min(len);
        self.replace_all_with_selection(text, selection)
    }

    /// Start a fresh, empty document
    pub fn new_document(&mut self) -> Result<Patch, SessionError> {
        self.replace_all_with_selection("", 0..0)
    }

    /// Empty the document; returns `false` without touching anything if it is already blank
    pub fn clear(&mut self) -> Result<bool, SessionError> {
        if self.is_blank() {
            return Ok(false);
        }
        self.new_document()?;
        Ok(true)
    }

    /// Open a file through the bridge; on failure the buffer is left as it was
    pub fn import(
        &mut self,
        files: &dyn FileBridge,
        path: &Path,
    ) -> Result<Patch, SessionError> {
        let content = files.read_text(path)?;
        log::info!("Imported {} ({} bytes)", path.display(), content.len());
        self.replace_all_with_selection(&content, 0..0)
    }

    /// Hand the document to the file bridge as `markdown-YYYY-MM-DD.md`
    pub fn export(&mut self, files: &mut dyn FileBridge) -> Result<ExportedFile, SessionError> {
        let saved_at = self.clock.now();
        let filename = format!("markdown-{}.md", saved_at.format("%Y-%m-%d"));

        files.trigger_download(&filename, &self.text(), MARKDOWN_MIME)?;

        self.last_saved = Some(saved_at);
        if let Err(e) = self
            .store
            .set(StorageKey::LastSaved, &saved_at.to_rfc3339())
        {
            log::warn!("Failed to persist last-saved time: {e}");
        }
        log::info!("Exported document as {filename}");

        Ok(ExportedFile { filename, saved_at })
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn set_selection(&mut self, selection: Range<usize>) -> Result<(), EditError> {
        validate_selection_len(self.chars().count(), &selection)?;
        self.selection = selection;
        Ok(())
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Line and column of the selection start
    pub fn cursor_position(&self) -> LineColumn {
        let mut position = LineColumn { line: 1, column: 0 };
        for ch in self.chars().take(self.selection.start) {
            if ch == '\n' {
                position.line += 1;
                position.column = 0;
            } else {
                position.column += 1;
            }
        }
        position
    }

    /// Characters in the document, ignoring surrounding whitespace
    pub fn character_count(&self) -> usize {
        let mut first = None;
        let mut last_end = 0;
        for (i, ch) in self.chars().enumerate() {
            if !ch.is_whitespace() {
                first.get_or_insert(i);
                last_end = i + 1;
            }
        }
        first.map_or(0, |first| last_end - first)
    }

    pub fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    /// Characters of the rope, read chunk by chunk without copying the document
    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer
            .iter_chunks(0..self.buffer.len())
            .flat_map(str::chars)
    }

    /// HTML from the most recent successful render
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn engine(&self) -> &CommandEngine {
        &self.engine
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn replace_all_with_selection(
        &mut self,
        text: &str,
        selection: Range<usize>,
    ) -> Result<Patch, SessionError> {
        let old = self.text();
        let splice = Splice {
            range: 0..char_len(&old),
            replacement: text.to_string(),
        };

        let mut patch = self.commit(&old, &splice, selection.start);
        self.selection = selection.clone();
        patch.new_selection = selection;
        self.notify()?;
        Ok(patch)
    }

    /// Apply a splice to the rope and advance the session metadata
    fn commit(&mut self, old: &str, splice: &Splice, cursor: usize) -> Patch {
        let start = byte_offset(old, splice.range.start).unwrap_or(old.len());
        let end = byte_offset(old, splice.range.end)
            .unwrap_or(old.len())
            .max(start);

        let mut builder = Builder::new(self.buffer.len());
        if splice.replacement.is_empty() {
            builder.delete(start..end);
        } else {
            builder.replace(start..end, Rope::from(splice.replacement.as_str()));
        }
        let delta = builder.build();
        self.buffer = delta.apply(&self.buffer);

        self.selection = cursor..cursor;
        self.version += 1;
        self.touch();

        Patch {
            changed: splice.inserted_range(),
            new_selection: self.selection.clone(),
            version: self.version,
        }
    }

    /// Advance the modification stamp; it never goes backwards
    fn touch(&mut self) {
        let now = self.clock.now();
        self.last_modified = Some(match self.last_modified {
            Some(previous) if now <= previous => previous + Duration::milliseconds(1),
            _ => now,
        });
    }

    /// Persist then re-render the committed buffer.
    ///
    /// Persistence failures are logged and swallowed; a render failure is
    /// returned to the caller, with the edit already in place and the previous
    /// preview kept.
    fn notify(&mut self) -> Result<(), SessionError> {
        let text = self.text();
        if let Err(e) = self.store.set(StorageKey::Content, &text) {
            log::warn!("Failed to persist document: {e}");
        }
        self.preview = self.renderer.render(&text)?;
        Ok(())
    }
}
