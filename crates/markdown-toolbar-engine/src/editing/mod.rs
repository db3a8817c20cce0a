/*!
 * # Editing Core
 *
 * Toolbar commands over a plain markdown buffer.
 *
 * ## Architecture Overview
 *
 * ### 1. Pure Command Engine
 * - [`CommandEngine::apply`] takes the buffer, a selection and a [`Command`]
 * - It returns the new buffer, the new caret and the [`Splice`] that produced it
 * - No I/O and no shared state, so every policy is testable in isolation
 *
 * ### 2. Single Source of Truth: xi-rope Buffer
 * - [`DocumentSession`] owns the only copy of the document in an `xi_rope::Rope`
 * - Splices are applied as a `Delta`, never by regenerating markdown
 *
 * ### 3. Character Offsets
 * - Selections and carets count Unicode scalar values, not bytes
 * - Conversion to byte offsets happens at the rope boundary only
 *
 * ## Module Structure
 *
 * - **`commands`**: the closed set of toolbar commands and tag parsing
 * - **`engine`**: per-command splice policies
 * - **`markers`**: recognising existing heading, list, task and quote prefixes
 * - **`placeholders`**: localized default text and templates
 * - **`position`**: character offsets, lines and selection validation
 * - **`session`**: the document session and its collaborators
 * - **`patch`**: edit result metadata
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markdown_toolbar_engine::editing::*;
 * use markdown_toolbar_engine::io::MemoryStore;
 * use markdown_toolbar_engine::render::MarkdownRenderer;
 *
 * let mut session = DocumentSession::new(
 *     CommandEngine::default(),
 *     MarkdownRenderer::default(),
 *     MemoryStore::new(),
 * );
 *
 * session.insert_text("hello").unwrap();
 * session.set_selection(0..5).unwrap();
 * session.apply_command(&Command::Bold).unwrap();
 *
 * assert_eq!(session.text(), "**hello**");
 * assert_eq!(session.preview(), "<p><strong>hello</strong></p>\n");
 * ```
 */

pub mod commands;
pub mod engine;
pub mod error;
pub mod markers;
pub mod patch;
pub mod placeholders;
pub mod position;
pub mod session;

pub use commands::Command;
pub use engine::{CommandEngine, CommandResult, EngineOptions, Splice};
pub use error::EditError;
pub use patch::Patch;
pub use placeholders::{Locale, Placeholders};
pub use position::LineColumn;
pub use session::{Clock, DocumentSession, ExportedFile, SessionError, SystemClock};
