//! Home page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::Section;
use crate::components::post_card::post_card;
use crate::config::Profile;
use crate::post::Post;

/// Number of posts shown on the home page.
pub const RECENT_POSTS: usize = 5;

/// Generates home page with an introduction and the latest posts
pub fn generate(profile: &Profile, recent: &[&Post]) -> Markup {
    page_wrapper(
        "Home",
        Some(Section::Home),
        html! {
            section class="intro" {
                h1 { "Hi, I'm " (profile.author) }
                p {
                    "Notes on software, travel, money and things built by hand. "
                    a href="/about/" { "More about me" } "."
                }
            }

            section {
                h2 { "Recent posts" }
                @if recent.is_empty() {
                    p class="empty-state" { "Nothing published yet." }
                } @else {
                    div class="post-list" {
                        @for post in recent {
                            (post_card(post))
                        }
                    }
                    p { a href="/blog/" { "All posts →" } }
                }
            }
        },
    )
}
