pub mod editing;
pub mod io;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::*;
pub use io::*;
pub use render::{MarkdownRenderer, RenderError, Renderer, render_standalone_html};
