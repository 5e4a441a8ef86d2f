//! Blog post detail page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::Section;
use crate::components::post_card::post_meta;
use crate::post::Post;

/// Generates the full post page
///
/// # Arguments
///
/// * `post`: Post being shown
/// * `content_html`: Rendered markdown body, inserted unescaped
/// * `updated`: Human readable last update, e.g. "3 days ago"
pub fn generate(post: &Post, content_html: &str, updated: &str) -> Markup {
    page_wrapper(
        post.title(),
        Some(Section::Blog),
        html! {
            article class="post" {
                header class="post-header" {
                    h1 { (post.title()) }
                    (post_meta(post.category(), post.published_at()))
                }
                @if let Some(image) = post.featured_image() {
                    img src=(image) alt=(post.title()) class="post-featured-image";
                }
                div class="markdown-body" {
                    (PreEscaped(content_html))
                }
                p class="post-updated" { "Updated " (updated) }
            }
            p { a href="/blog/" { "← Back to all posts" } }
        },
    )
}
