use markdown_toolbar_engine::editing::placeholders::Placeholders;
use markdown_toolbar_engine::{
    Command, CommandEngine, DocumentSession, MarkdownRenderer, MemoryStore, Renderer,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn len(text: &str) -> usize {
    text.chars().count()
}

/// Every valid `(start, end)` pair over a buffer
fn selections(buffer: &str) -> Vec<(usize, usize)> {
    let n = len(buffer);
    (0..=n)
        .flat_map(|start| (start..=n).map(move |end| (start, end)))
        .collect()
}

#[rstest]
#[case("")]
#[case("hello")]
#[case("a\nb\n")]
#[case("你好\n世界")]
#[case("# Title\n\n- item\nbody\n")]
fn cursor_stays_in_bounds_for_every_command(#[case] buffer: &str) {
    let engine = CommandEngine::default();

    for command in Command::all() {
        for (start, end) in selections(buffer) {
            let result = engine.apply(buffer, start..end, &command).unwrap();
            let new_len = len(&result.buffer);

            assert!(
                result.cursor <= new_len,
                "{command} over {start}..{end} of {buffer:?}: cursor {} past {new_len}",
                result.cursor
            );
            assert_eq!(result.splice.apply_to(buffer), result.buffer);

            // Only a heading level reduction may shrink the buffer
            if !matches!(command, Command::Heading(_)) {
                assert!(
                    new_len >= len(buffer) - (end - start),
                    "{command} over {start}..{end} of {buffer:?} lost text"
                );
            }
        }
    }
}

#[rstest]
#[case("Title", 0)]
#[case("Title", 5)]
#[case("# Title", 3)]
#[case("#### Title\nnext", 7)]
fn heading_retoggle_is_idempotent(#[case] buffer: &str, #[case] caret: usize) {
    let engine = CommandEngine::default();

    let once = engine.apply(buffer, caret..caret, &Command::Heading(2)).unwrap();
    let twice = engine
        .apply(&once.buffer, once.cursor..once.cursor, &Command::Heading(2))
        .unwrap();

    assert!(once.buffer.starts_with("## Title"));
    assert_eq!(twice.buffer, once.buffer);
    assert_eq!(twice.cursor, once.cursor);
}

#[rstest]
#[case(Command::Bold, "****x****")]
#[case(Command::Italic, "***x***")]
#[case(Command::Strikethrough, "~~**x**~~")]
fn wrap_commands_never_strip_markers(#[case] command: Command, #[case] expected: &str) {
    let result = CommandEngine::default()
        .apply("**x**", 0..5, &command)
        .unwrap();
    assert_eq!(result.buffer, expected);
}

#[test]
fn unordered_list_preserves_blank_lines() {
    let result = CommandEngine::default()
        .apply("a\n\nb", 0..4, &Command::UnorderedList)
        .unwrap();
    assert_eq!(result.buffer, "- a\n\n- b");
    assert_eq!(result.cursor, 0);
}

#[test]
fn ordered_list_numbers_from_one() {
    let result = CommandEngine::default()
        .apply("x\ny\nz", 0..5, &Command::OrderedList)
        .unwrap();
    assert_eq!(result.buffer, "1. x\n2. y\n3. z");
}

#[test]
fn ordered_list_counts_only_non_blank_lines() {
    let result = CommandEngine::default()
        .apply("x\n\ny", 0..4, &Command::OrderedList)
        .unwrap();
    assert_eq!(result.buffer, "1. x\n\n2. y");
}

#[test]
fn link_at_caret_in_empty_buffer() {
    let result = CommandEngine::default()
        .apply("", 0..0, &Command::Link)
        .unwrap();
    assert_eq!(result.buffer, "[链接文本](https://example.com)");
    assert_eq!(result.cursor, 1);
}

#[test]
fn table_is_inserted_between_neighbours() {
    let template = Placeholders::default().table;
    let result = CommandEngine::default()
        .apply("AB", 1..1, &Command::Table)
        .unwrap();

    assert_eq!(result.buffer, format!("A{template}B"));
    assert_eq!(result.cursor, 1 + len(template));
}

#[test]
fn horizontal_rule_renders_as_thematic_break() {
    let mut session = DocumentSession::new(
        CommandEngine::default(),
        MarkdownRenderer::default(),
        MemoryStore::new(),
    );
    session.insert_text("para").unwrap();
    session.apply_command(&Command::HorizontalRule).unwrap();

    assert_eq!(session.text(), "para\n\n---\n");
    assert!(session.preview().contains("<p>para</p>"), "{}", session.preview());
    assert!(session.preview().contains("<hr />"), "{}", session.preview());
}

#[test]
fn rendering_is_deterministic_across_a_session() {
    let mut session = DocumentSession::new(
        CommandEngine::default(),
        MarkdownRenderer::default(),
        MemoryStore::new(),
    );
    for tag in ["task", "table", "flowchart", "codeblock"] {
        session.apply_tag(tag, None).unwrap();
        session.insert_text("\n\n").unwrap();
    }

    let fresh = MarkdownRenderer::default().render(&session.text()).unwrap();
    assert_eq!(session.preview(), fresh);
}
