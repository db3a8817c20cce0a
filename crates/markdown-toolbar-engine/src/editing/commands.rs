use crate::editing::EditError;

/// Toolbar commands that can be applied around a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Heading level 1-6
    Heading(u8),
    Bold,
    Italic,
    Strikethrough,
    UnorderedList,
    OrderedList,
    TaskList,
    Blockquote,
    InlineCode,
    CodeBlock,
    HorizontalRule,
    Link,
    Image,
    Table,
    Flowchart,
    SequenceDiagram,
}

impl Command {
    /// Every command, headings included once per level
    pub fn all() -> Vec<Command> {
        let mut commands: Vec<Command> = (1..=6).map(Command::Heading).collect();
        commands.extend([
            Command::Bold,
            Command::Italic,
            Command::Strikethrough,
            Command::UnorderedList,
            Command::OrderedList,
            Command::TaskList,
            Command::Blockquote,
            Command::InlineCode,
            Command::CodeBlock,
            Command::HorizontalRule,
            Command::Link,
            Command::Image,
            Command::Table,
            Command::Flowchart,
            Command::SequenceDiagram,
        ]);
        commands
    }

    /// Parse a toolbar button's `data-command` tag and optional `data-value`.
    ///
    /// Short tags (`ul`, `codeblock`, `hr`) and their long spellings
    /// (`unordered-list`, `code-block`, `horizontal-rule`) are both accepted.
    pub fn parse(tag: &str, value: Option<&str>) -> Result<Self, EditError> {
        let command = match tag {
            "heading" => {
                let value = value.ok_or(EditError::MissingHeadingLevel)?;
                let level: u32 =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| EditError::InvalidParameter {
                            tag: tag.to_string(),
                            value: value.to_string(),
                        })?;
                if !(1..=6).contains(&level) {
                    return Err(EditError::InvalidHeadingLevel(level));
                }
                return Ok(Command::Heading(level as u8));
            }
            "bold" => Command::Bold,
            "italic" => Command::Italic,
            "strikethrough" => Command::Strikethrough,
            "ul" | "unordered-list" => Command::UnorderedList,
            "ol" | "ordered-list" => Command::OrderedList,
            "task" | "task-list" => Command::TaskList,
            "quote" | "blockquote" => Command::Blockquote,
            "code" | "inline-code" => Command::InlineCode,
            "codeblock" | "code-block" => Command::CodeBlock,
            "hr" | "horizontal-rule" => Command::HorizontalRule,
            "link" => Command::Link,
            "image" => Command::Image,
            "table" => Command::Table,
            "flowchart" | "flowchart-diagram" => Command::Flowchart,
            "sequence" | "sequence-diagram" => Command::SequenceDiagram,
            _ => return Err(EditError::UnknownCommand(tag.to_string())),
        };

        // Empty data-value attributes come through as empty strings
        match value {
            Some(v) if !v.trim().is_empty() => Err(EditError::UnexpectedParameter(tag.to_string())),
            _ => Ok(command),
        }
    }

    /// Canonical short tag, as used by the toolbar markup
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Heading(_) => "heading",
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::Strikethrough => "strikethrough",
            Command::UnorderedList => "ul",
            Command::OrderedList => "ol",
            Command::TaskList => "task",
            Command::Blockquote => "quote",
            Command::InlineCode => "code",
            Command::CodeBlock => "codeblock",
            Command::HorizontalRule => "hr",
            Command::Link => "link",
            Command::Image => "image",
            Command::Table => "table",
            Command::Flowchart => "flowchart",
            Command::SequenceDiagram => "sequence",
        }
    }

    /// The integer parameter carried by the command, if any
    pub fn value(&self) -> Option<u8> {
        match self {
            Command::Heading(level) => Some(*level),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({value})", self.tag()),
            None => f.write_str(self.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bold", None, Command::Bold)]
    #[case("ul", None, Command::UnorderedList)]
    #[case("unordered-list", None, Command::UnorderedList)]
    #[case("ol", None, Command::OrderedList)]
    #[case("codeblock", Some(""), Command::CodeBlock)]
    #[case("hr", None, Command::HorizontalRule)]
    #[case("sequence-diagram", None, Command::SequenceDiagram)]
    #[case("heading", Some("3"), Command::Heading(3))]
    #[case("heading", Some(" 6 "), Command::Heading(6))]
    fn test_parse_accepts_known_tags(
        #[case] tag: &str,
        #[case] value: Option<&str>,
        #[case] expected: Command,
    ) {
        assert_eq!(Command::parse(tag, value), Ok(expected));
    }

    #[rstest]
    #[case("underline", None, EditError::UnknownCommand("underline".to_string()))]
    #[case("", None, EditError::UnknownCommand(String::new()))]
    #[case("heading", None, EditError::MissingHeadingLevel)]
    #[case("heading", Some("0"), EditError::InvalidHeadingLevel(0))]
    #[case("heading", Some("7"), EditError::InvalidHeadingLevel(7))]
    #[case(
        "heading",
        Some("two"),
        EditError::InvalidParameter { tag: "heading".to_string(), value: "two".to_string() }
    )]
    #[case("bold", Some("2"), EditError::UnexpectedParameter("bold".to_string()))]
    fn test_parse_rejects_invalid_input(
        #[case] tag: &str,
        #[case] value: Option<&str>,
        #[case] expected: EditError,
    ) {
        assert_eq!(Command::parse(tag, value), Err(expected));
    }

    #[test]
    fn test_tag_round_trips_through_parse() {
        for command in Command::all() {
            let value = command.value().map(|v| v.to_string());
            assert_eq!(
                Command::parse(command.tag(), value.as_deref()),
                Ok(command),
                "tag {} should parse back",
                command.tag()
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::Heading(2).to_string(), "heading(2)");
        assert_eq!(Command::TaskList.to_string(), "task");
    }
}
