//! Line-prefix predicates for block markers.
//!
//! Each predicate returns a structured match (prefix length in characters,
//! captured level or index) so the retoggle logic in the engine never has to
//! re-scan the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::editing::position::char_len;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)[ \t]").expect("heading pattern is valid"));
static LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(?:([-*+])|(\d{1,9})\.)[ \t]").expect("list pattern is valid")
});
static TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*[-*+][ \t]\[([ xX])\][ \t]").expect("task pattern is valid")
});
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*>").expect("quote pattern is valid"));

/// A `#` run followed by one space or tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMarker {
    /// Number of `#` characters
    pub level: usize,
    /// Length of the whole prefix in characters, whitespace included
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet(char),
    Ordered(u32),
}

/// A list item marker, optionally indented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub indent: usize,
    pub kind: ListKind,
    /// Indent + marker + following whitespace, in characters
    pub len: usize,
}

/// A GFM task item marker such as `- [ ] ` or `* [x] `
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMarker {
    pub checked: bool,
    pub len: usize,
}

pub fn starts_with_heading_marker(line: &str) -> Option<HeadingMarker> {
    let caps = HEADING.captures(line)?;
    Some(HeadingMarker {
        level: caps[1].len(),
        len: char_len(&caps[0]),
    })
}

pub fn starts_with_list_marker(line: &str) -> Option<ListMarker> {
    let caps = LIST.captures(line)?;
    let kind = if let Some(bullet) = caps.get(2) {
        ListKind::Bullet(bullet.as_str().chars().next()?)
    } else {
        // At most nine digits, always fits
        ListKind::Ordered(caps.get(3)?.as_str().parse().ok()?)
    };

    Some(ListMarker {
        indent: char_len(&caps[1]),
        kind,
        len: char_len(&caps[0]),
    })
}

pub fn starts_with_task_marker(line: &str) -> Option<TaskMarker> {
    let caps = TASK.captures(line)?;
    Some(TaskMarker {
        checked: &caps[1] != " ",
        len: char_len(&caps[0]),
    })
}

/// Length of a leading `>` (with its indentation) if the line is quoted
pub fn starts_with_quote_marker(line: &str) -> Option<usize> {
    QUOTE.find(line).map(|m| char_len(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(HeadingMarker { level: 1, len: 2 }))]
    #[case("### Title", Some(HeadingMarker { level: 3, len: 4 }))]
    #[case("##\tTabbed", Some(HeadingMarker { level: 2, len: 3 }))]
    #[case("#hashtag", None)]
    #[case("Title #", None)]
    #[case(" # indented", None)]
    #[case("#\u{3000}标题", None)]
    #[case("#\u{a0}nbsp", None)]
    #[case("", None)]
    fn test_heading_marker(#[case] line: &str, #[case] expected: Option<HeadingMarker>) {
        assert_eq!(starts_with_heading_marker(line), expected);
    }

    #[rstest]
    #[case("- item", Some(ListMarker { indent: 0, kind: ListKind::Bullet('-'), len: 2 }))]
    #[case("  * item", Some(ListMarker { indent: 2, kind: ListKind::Bullet('*'), len: 4 }))]
    #[case("+ item", Some(ListMarker { indent: 0, kind: ListKind::Bullet('+'), len: 2 }))]
    #[case("12. item", Some(ListMarker { indent: 0, kind: ListKind::Ordered(12), len: 4 }))]
    #[case("\t3. item", Some(ListMarker { indent: 1, kind: ListKind::Ordered(3), len: 4 }))]
    #[case("-item", None)]
    #[case("1.item", None)]
    #[case("1234567890. too long", None)]
    #[case("plain text", None)]
    #[case("-\u{3000}项目", None)]
    #[case("1.\u{a0}item", None)]
    #[case("\u{3000}- item", None)]
    fn test_list_marker(#[case] line: &str, #[case] expected: Option<ListMarker>) {
        assert_eq!(starts_with_list_marker(line), expected);
    }

    #[rstest]
    #[case("- [ ] todo", Some(TaskMarker { checked: false, len: 6 }))]
    #[case("  * [x] done", Some(TaskMarker { checked: true, len: 8 }))]
    #[case("- [X] done", Some(TaskMarker { checked: true, len: 6 }))]
    #[case("- [] broken", None)]
    #[case("- item", None)]
    #[case("- [ ]\u{3000}任务", None)]
    fn test_task_marker(#[case] line: &str, #[case] expected: Option<TaskMarker>) {
        assert_eq!(starts_with_task_marker(line), expected);
    }

    #[test]
    fn test_quote_marker() {
        assert_eq!(starts_with_quote_marker("> quoted"), Some(1));
        assert_eq!(starts_with_quote_marker("  >> nested"), Some(3));
        assert_eq!(starts_with_quote_marker("a > b"), None);
        assert_eq!(starts_with_quote_marker("\u{3000}> b"), None);
    }
}
