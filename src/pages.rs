//! Page generation modules for the blog views
//!
//! Each page module renders one view from data the handler has already
//! fetched, using the shared components.

pub mod about;
pub mod blog_detail;
pub mod blog_list;
pub mod error;
pub mod home;
pub mod secret;
