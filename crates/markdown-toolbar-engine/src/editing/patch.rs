/// Result of applying an edit to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Character range of the inserted text in the new buffer
    pub changed: std::ops::Range<usize>,
    pub new_selection: std::ops::Range<usize>,
    pub version: u64,
}
