//! Post summary card and category filter components

use chrono::{DateTime, Utc};
use maud::{Markup, html};

use super::icons::category_icon;
use crate::markdown::{DEFAULT_EXCERPT_WORDS, excerpt};
use crate::post::{Category, Post};
use crate::util::{format_date, iso_date};

/// Renders a post card for listings
///
/// Shows the featured image when present, title link, category badge,
/// publish date and a plain text excerpt of the content.
pub fn post_card(post: &Post) -> Markup {
    let teaser = excerpt(post.content(), DEFAULT_EXCERPT_WORDS);

    html! {
        article class="post-card" {
            @if let Some(image) = post.featured_image() {
                a href=(post.absolute_url()) class="post-card-image" {
                    img src=(image) alt=(post.title()) loading="lazy";
                }
            }
            div class="post-card-body" {
                h2 class="post-card-title" {
                    a href=(post.absolute_url()) { (post.title()) }
                }
                (post_meta(post.category(), post.published_at()))
                @if !teaser.is_empty() {
                    p class="post-card-excerpt" { (teaser) }
                }
            }
        }
    }
}

/// Renders category badge and publish date
pub fn post_meta(category: Category, published: Option<DateTime<Utc>>) -> Markup {
    html! {
        div class="post-meta" {
            a href=(format!("/blog/?category={}", category.as_str())) class="category-badge" {
                (category_icon(category))
                " " (category.label())
            }
            @if let Some(at) = published {
                time class="post-date" datetime=(iso_date(at)) { (format_date(at)) }
            } @else {
                span class="post-date post-draft" { "Draft" }
            }
        }
    }
}

/// Renders category chips for the blog list
///
/// "All" clears the filter. The search term, when present, is carried
/// into each chip link.
pub fn category_filter(selected: Option<Category>, search: Option<&str>) -> Markup {
    let suffix = search
        .map(|q| format!("q={}", encode_query(q)))
        .unwrap_or_default();
    let all_href = if suffix.is_empty() {
        "/blog/".to_string()
    } else {
        format!("/blog/?{}", suffix)
    };

    html! {
        nav class="category-filter" {
            a href=(all_href) class=(chip_class(selected.is_none())) { "All" }
            @for category in Category::ALL {
                @let href = if suffix.is_empty() {
                    format!("/blog/?category={}", category.as_str())
                } else {
                    format!("/blog/?category={}&{}", category.as_str(), suffix)
                };
                a href=(href) class=(chip_class(selected == Some(category))) {
                    (category_icon(category))
                    " " (category.label())
                }
            }
        }
    }
}

fn chip_class(active: bool) -> &'static str {
    if active { "chip chip-active" } else { "chip" }
}

/// Percent encodes a query value.
fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
