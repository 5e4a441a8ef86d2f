//! CSS asset bundling

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/layout.css");
const BLOG: &str = include_str!("../assets/blog.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// URL the bundled stylesheet is served from.
pub const STYLESHEET_PATH: &str = "/static/site.css";

/// Returns all bundled CSS joined into one stylesheet
pub fn stylesheet() -> String {
    [BASE, LAYOUT, BLOG, MARKDOWN].join("\n")
}
