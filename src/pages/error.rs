//! Error page generation

use maud::{Markup, html};

/// Generates an error page for the given status
pub fn generate(status: u16, heading: &str, message: &str) -> Markup {
    crate::components::layout::page_wrapper(
        heading,
        None,
        html! {
            section class="error-page" {
                p class="error-code" { (status) }
                h1 { (heading) }
                p { (message) }
                a href="/" { "Go home" }
            }
        },
    )
}

/// Page shown for unknown paths and slugs
pub fn not_found() -> Markup {
    generate(
        404,
        "Page not found",
        "The page you are looking for does not exist or has moved.",
    )
}
