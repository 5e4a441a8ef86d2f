//! Bus arrivals page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;

/// Generates the page showing the collected bus report lines
pub fn generate(lines: &[String]) -> Markup {
    page_wrapper(
        "Next Bus",
        None,
        html! {
            h1 { "Next bus" }
            pre class="bus-report" { (lines.join("\n")) }
        },
    )
}
