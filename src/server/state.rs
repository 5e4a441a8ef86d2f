//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use crate::config::{Config, Profile};
use crate::markdown::MarkdownRenderer;
use crate::store::PostStore;
use crate::transit::{BusTimeClient, StopMonitoring};

/// Application state shared across all handlers.
pub struct AppState {
    /// Posts served by the blog pages.
    pub posts: Box<dyn PostStore>,
    /// Markdown renderer for post bodies.
    pub renderer: MarkdownRenderer,
    /// Stop monitoring source for the bus page.
    pub transit: Arc<dyn StopMonitoring>,
    pub api_key: String,
    /// About page details.
    pub profile: Profile,
}

impl AppState {
    /// Builds state from server configuration and loaded posts.
    pub fn from_config(config: &Config, posts: impl PostStore + 'static) -> Self {
        Self {
            posts: Box::new(posts),
            renderer: MarkdownRenderer::with_theme(&config.theme),
            transit: Arc::new(BusTimeClient::new(config.transit.mta_api_url.clone())),
            api_key: config.transit.mta_api_key.clone(),
            profile: config.profile.clone(),
        }
    }
}
