//! Plain text teasers from raw markdown.

use regex::Regex;
use std::sync::LazyLock;

/// Word budget used by listings when none is given.
pub const DEFAULT_EXCERPT_WORDS: usize = 30;

/// Successive rewrites applied before counting words. Order matters: each
/// pattern sees the output of the previous one.
static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?s)```[\w\s]*\n(.*?)\n```", ""),
        (r"\*\*(.*?)\*\*", "$1"),
        (r"\*(.*?)\*", "$1"),
        (r"__(.*?)__", "$1"),
        (r"_(.*?)_", "$1"),
        (r"\[(.*?)\]\(.*?\)", "$1"),
        (r"(?m)^#+\s+", ""),
        // Heading marker left mid-line once newlines are gone from the teaser
        (r"(\s)#+\s+", "$1"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid excerpt pattern"),
            replacement,
        )
    })
    .collect()
});

/// Produces a plain text excerpt of at most `word_count` words.
///
/// Code blocks are dropped, emphasis and link markup reduced to their text,
/// heading markers removed. When the stripped text is longer than the
/// budget, `...` is appended to the truncated words.
///
/// # Examples
///
/// ```
/// use blogsite::excerpt;
///
/// let teaser = excerpt("**bold** and [link](http://x) and # Heading", 30);
/// assert_eq!(teaser, "bold and link and Heading");
/// ```
pub fn excerpt(markdown: &str, word_count: usize) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let mut text = markdown.to_string();
    for (pattern, replacement) in STRIP_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut teaser = words
        .iter()
        .take(word_count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if words.len() > word_count {
        teaser.push_str("...");
    }

    teaser.trim().to_string()
}
