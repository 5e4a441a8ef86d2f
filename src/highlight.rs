//! Syntax highlighting for fenced code blocks with syntect.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when the configured theme is not bundled with syntect.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Produces self contained, inline styled HTML for code snippets.
///
/// Loads the bundled syntax definitions and themes once. Output never
/// depends on an external stylesheet: every span carries its own colors
/// and the wrapping `<pre>` carries the theme background.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Creates highlighter for the named theme.
    ///
    /// Unknown theme names fall back to [`DEFAULT_THEME`].
    pub fn new(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = match themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = theme_name, fallback = DEFAULT_THEME, "Unknown theme");
                themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Highlights code, returning a `<pre class="highlight">` fragment.
    ///
    /// The language is matched against syntax names and file extensions. An
    /// empty or unrecognized language renders with the plain text syntax.
    /// Highlighting never fails: if syntect reports an error the code is
    /// emitted escaped and unstyled.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let syntax = language
            .and_then(|lang| self.find_syntax(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let lang_class = language.filter(|l| !l.is_empty()).unwrap_or("text");

        let background = self.theme.settings.background.unwrap_or(Color::WHITE);
        let body = self
            .highlight_lines(code, syntax, background)
            .unwrap_or_else(|e| {
                tracing::warn!(language = lang_class, error = %e, "Highlighting failed");
                escape_html(code)
            });

        format!(
            "<pre class=\"highlight\" style=\"background-color:#{:02x}{:02x}{:02x};\">\
             <code class=\"language-{}\">{}</code></pre>",
            background.r,
            background.g,
            background.b,
            escape_html(lang_class),
            body
        )
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    fn highlight_lines(
        &self,
        code: &str,
        syntax: &SyntaxReference,
        background: Color,
    ) -> Result<String, syntect::Error> {
        let mut lines = HighlightLines::new(syntax, &self.theme);
        let mut html = String::with_capacity(code.len() * 4);

        for line in LinesWithEndings::from(code) {
            let regions = lines.highlight_line(line, &self.syntax_set)?;
            html.push_str(&styled_line_to_highlighted_html(
                &regions[..],
                IncludeBackground::IfDifferent(background),
            )?);
        }

        Ok(html)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

/// Escapes HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_python_uses_inline_styles() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter.highlight("def main():\n    pass\n", Some("python"));

        // Assert
        assert!(html.starts_with("<pre class=\"highlight\""), "{}", html);
        assert!(html.contains("style=\"color:"), "Should inline colors: {}", html);
        assert!(html.contains("language-python"));
        assert!(html.ends_with("</code></pre>"));
    }

    #[test]
    fn test_highlight_unknown_language_falls_back_to_plain_text() {
        // Arrange
        let highlighter = Highlighter::default();

        // Act
        let html = highlighter.highlight("hello", Some("zzz"));

        // Assert
        assert!(html.contains("hello"), "Should keep text: {}", html);
        assert!(html.contains("language-zzz"), "Should keep tag: {}", html);
    }

    #[test]
    fn test_highlight_without_language() {
        // Arrange & Act
        let html = Highlighter::default().highlight("plain words", None);

        // Assert
        assert!(html.contains("language-text"));
        assert!(html.contains("plain words"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        // Arrange
        let code = "let s = \"<b>&</b>\";";

        // Act
        let html = Highlighter::default().highlight(code, Some("rust"));

        // Assert
        assert!(html.contains("&lt;b&gt;"), "Should escape '<': {}", html);
        assert!(!html.contains("<b>"), "Raw tag must not leak: {}", html);
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange & Act
        let html = Highlighter::default().highlight("", Some("rust"));

        // Assert
        assert!(html.contains("<code class=\"language-rust\"></code>"), "{}", html);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        // Arrange
        let highlighter = Highlighter::new("No-Such-Theme");
        let code = "fn main() {}\n";

        // Act
        let html = highlighter.highlight(code, Some("rust"));

        // Assert
        assert_eq!(html, Highlighter::default().highlight(code, Some("rust")));
    }

    #[test]
    fn test_escape_html_all_characters() {
        // Arrange
        let input = r#"<>&"'"#;

        // Act
        let output = escape_html(input);

        // Assert
        assert_eq!(output, "&lt;&gt;&amp;&quot;&#39;");
    }
}
