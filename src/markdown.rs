//! Markdown rendering for blog posts.
//!
//! Fenced code blocks are highlighted with syntect before the remaining text
//! goes through comrak with GitHub Flavored Markdown extensions. The excerpt
//! extractor produces plain text teasers for listings.

mod excerpt;
mod renderer;

pub use excerpt::{DEFAULT_EXCERPT_WORDS, excerpt};
pub use renderer::MarkdownRenderer;
