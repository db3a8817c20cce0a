use serde::{Deserialize, Serialize};

/// Language of the placeholder text inserted when nothing is selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

pub const LINK_URL: &str = "https://example.com";
pub const IMAGE_URL: &str = "https://example.com/image.jpg";

/// Default text for caret-only toolbar commands and the fixed block templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub bold: &'static str,
    pub italic: &'static str,
    pub strikethrough: &'static str,
    pub list_item: &'static str,
    pub task_item: &'static str,
    pub quote: &'static str,
    pub code: &'static str,
    pub link_text: &'static str,
    pub image_alt: &'static str,
    pub table: &'static str,
    pub flowchart: &'static str,
    pub sequence: &'static str,
}

impl Placeholders {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Zh => Self {
                bold: "粗体文本",
                italic: "斜体文本",
                strikethrough: "删除线文本",
                list_item: "列表项",
                task_item: "任务项",
                quote: "引用文本",
                code: "代码",
                link_text: "链接文本",
                image_alt: "图片描述",
                table: "| 表头1 | 表头2 | 表头3 |\n\
                        | --- | --- | --- |\n\
                        | 单元格1 | 单元格2 | 单元格3 |\n",
                flowchart: "```mermaid\n\
                            graph TD\n    \
                            A[开始] --> B{判断}\n    \
                            B -->|是| C[处理]\n    \
                            B -->|否| D[结束]\n    \
                            C --> D\n\
                            ```\n",
                sequence: "```mermaid\n\
                           sequenceDiagram\n    \
                           participant 用户\n    \
                           participant 服务器\n    \
                           用户->>服务器: 请求\n    \
                           服务器-->>用户: 响应\n\
                           ```\n",
            },
            Locale::En => Self {
                bold: "bold text",
                italic: "italic text",
                strikethrough: "strikethrough text",
                list_item: "list item",
                task_item: "task",
                quote: "quote",
                code: "code",
                link_text: "link text",
                image_alt: "image description",
                table: "| Header 1 | Header 2 | Header 3 |\n\
                        | --- | --- | --- |\n\
                        | Cell 1 | Cell 2 | Cell 3 |\n",
                flowchart: "```mermaid\n\
                            graph TD\n    \
                            A[Start] --> B{Decision}\n    \
                            B -->|Yes| C[Process]\n    \
                            B -->|No| D[End]\n    \
                            C --> D\n\
                            ```\n",
                sequence: "```mermaid\n\
                           sequenceDiagram\n    \
                           participant User\n    \
                           participant Server\n    \
                           User->>Server: Request\n    \
                           Server-->>User: Response\n\
                           ```\n",
            },
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
