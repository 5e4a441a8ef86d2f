//! Site navigation component

use maud::{Markup, html};

/// Top level site section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Blog,
    About,
}

impl Section {
    const ALL: [Section; 3] = [Section::Home, Section::Blog, Section::About];

    pub fn href(&self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::Blog => "/blog/",
            Section::About => "/about/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Blog => "Blog",
            Section::About => "About",
        }
    }
}

/// Renders the site header with section links
///
/// The active section is marked with `aria-current` and a modifier class.
/// The secret page is deliberately absent.
pub fn site_nav(active: Option<Section>) -> Markup {
    html! {
        header class="site-header" {
            nav class="site-nav" {
                a href="/" class="site-brand" {
                    i class="ph ph-notebook" {}
                    " Blog"
                }
                ul class="nav-links" {
                    @for section in Section::ALL {
                        li {
                            @if active == Some(section) {
                                a href=(section.href()) class="nav-link nav-link-active" aria-current="page" {
                                    (section.label())
                                }
                            } @else {
                                a href=(section.href()) class="nav-link" { (section.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
