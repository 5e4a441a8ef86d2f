//! Category icon rendering

use maud::{Markup, html};

use crate::post::Category;

/// Renders the Phosphor icon for a post category
pub fn category_icon(category: Category) -> Markup {
    html! {
        i class=(format!("{} icon-{}", icon_class(category), category.as_str())) {}
    }
}

/// Returns Phosphor icon class for a category
pub fn icon_class(category: Category) -> &'static str {
    match category {
        Category::Tech => "ph ph-code",
        Category::Travel => "ph ph-airplane-tilt",
        Category::Finance => "ph ph-chart-line-up",
        Category::Diy => "ph ph-hammer",
    }
}
