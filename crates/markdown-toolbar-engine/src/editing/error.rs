use std::ops::Range;

/// Precondition violations raised by the command engine and the document session.
///
/// These are programming errors on the caller's side (a stale selection, a
/// toolbar button wired to a tag that does not exist). The buffer is never
/// touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Selection {selection:?} is outside a buffer of {len} characters")]
    InvalidSelection { selection: Range<usize>, len: usize },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Heading command requires a level")]
    MissingHeadingLevel,
    #[error("Heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(u32),
    #[error("Invalid parameter {value:?} for command {tag}")]
    InvalidParameter { tag: String, value: String },
    #[error("Command {0} does not take a parameter")]
    UnexpectedParameter(String),
}
