//! Blog list page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::Section;
use crate::components::post_card::{category_filter, post_card};
use crate::post::{Category, Post};

/// Data container for blog list page generation
pub struct BlogListData<'a> {
    pub posts: &'a [&'a Post],
    pub selected: Option<Category>,
    pub search: Option<&'a str>,
}

/// Generates the blog list page with category chips and search box
pub fn generate(data: BlogListData<'_>) -> Markup {
    let title = match data.selected {
        Some(category) => format!("{} posts", category.label()),
        None => "Blog".to_string(),
    };

    page_wrapper(
        &title,
        Some(Section::Blog),
        html! {
            h1 { (title) }

            form class="search-form" method="get" action="/blog/" {
                @if let Some(category) = data.selected {
                    input type="hidden" name="category" value=(category.as_str());
                }
                input type="search" name="q" placeholder="Search posts" value=[data.search];
                button type="submit" { "Search" }
            }

            (category_filter(data.selected, data.search))

            @if data.posts.is_empty() {
                p class="empty-state" {
                    @if let Some(term) = data.search {
                        "No posts match \"" (term) "\"."
                    } @else {
                        "No posts yet."
                    }
                }
            } @else {
                div class="post-list" {
                    @for post in data.posts {
                        (post_card(post))
                    }
                }
            }
        },
    )
}
