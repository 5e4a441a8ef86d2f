//! Page footer component

use maud::{Markup, html};

pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Built with "
                a href="https://github.com/lambda-fairy/maud" target="_blank" { "maud" }
                " and "
                a href="https://github.com/trishume/syntect" target="_blank" { "syntect" }
            }
        }
    }
}
