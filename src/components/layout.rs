//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::{Section, site_nav};
use crate::assets::STYLESHEET_PATH;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, head, navigation and footer across all
/// pages. The caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `active`: Navigation section to highlight, if any
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, active: Option<Section>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Blog" }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                link rel="stylesheet" href=(STYLESHEET_PATH);
            }
            body {
                (site_nav(active))
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
