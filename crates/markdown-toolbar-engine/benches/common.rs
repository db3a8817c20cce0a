// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Plain paragraph lines for the line-prefix commands
#[allow(dead_code)]
pub fn generate_plain_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("Line {i} of plain text"))
        .collect::<Vec<_>>()
        .join("\n")
}
