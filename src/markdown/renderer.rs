//! Markdown rendering with highlighted code blocks.

use comrak::Options;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::highlight::Highlighter;

/// Fence with a language word on the opening line.
static TAGGED_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)\n(.*?)\n```").expect("valid fence pattern"));

/// Fence without a language word.
static BARE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\n(.*?)\n```").expect("valid fence pattern"));

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Fenced code blocks are replaced by inline styled HTML before the text is
/// handed to comrak, so stored posts keep rendering identically regardless
/// of stylesheet. Raw HTML is passed through: post authors are trusted.
pub struct MarkdownRenderer {
    highlighter: Highlighter,
}

impl MarkdownRenderer {
    /// Creates renderer with the default highlighting theme.
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::default(),
        }
    }

    /// Creates renderer highlighting code with the named syntect theme.
    pub fn with_theme(theme: &str) -> Self {
        Self {
            highlighter: Highlighter::new(theme),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// Language tagged fences are highlighted first, then untagged ones with
    /// the plain text syntax. An unterminated fence is left alone and reaches
    /// comrak as ordinary text. Rendering cannot fail.
    ///
    /// # Arguments
    ///
    /// * `content`: Raw markdown, possibly containing fenced code blocks
    ///
    /// # Returns
    ///
    /// Rendered HTML, unsanitized
    pub fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let prepared = self.highlight_fences(content);
        comrak::markdown_to_html(&prepared, &Self::options())
    }

    /// Replaces fenced code blocks with highlighted HTML fragments.
    ///
    /// Each fragment is placed on its own lines so comrak treats it as a raw
    /// `<pre>` HTML block, which may contain blank lines.
    fn highlight_fences(&self, content: &str) -> String {
        let tagged = TAGGED_FENCE.replace_all(content, |caps: &Captures| {
            let html = self.highlighter.highlight(&caps[2], Some(&caps[1]));
            format!("\n{}\n", html)
        });

        BARE_FENCE
            .replace_all(&tagged, |caps: &Captures| {
                let html = self.highlighter.highlight(&caps[1], None);
                format!("\n{}\n", html)
            })
            .into_owned()
    }

    /// Comrak options for post bodies.
    fn options() -> Options<'static> {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        // Highlighted fragments are raw HTML
        options.render.unsafe_ = true;

        options
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
