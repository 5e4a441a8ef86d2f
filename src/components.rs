//! Reusable HTML components for page generation
//!
//! Maud component functions shared across the blog pages. Components handle
//! one UI element each with consistent styling, so page modules only
//! arrange them.

pub mod footer;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod post_card;
