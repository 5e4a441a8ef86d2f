//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use super::handlers;
use super::state::AppState;
use crate::assets::STYLESHEET_PATH;

/// Create the application router.
///
/// Page paths end with a slash. The bare forms redirect to them.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about/", get(handlers::about))
        .route("/blog/", get(handlers::blog_list))
        .route("/blog/{slug}/", get(handlers::blog_detail))
        .route("/secret/", get(handlers::secret))
        .route("/about", get(|| async { Redirect::permanent("/about/") }))
        .route("/blog", get(|| async { Redirect::permanent("/blog/") }))
        .route("/secret", get(|| async { Redirect::permanent("/secret/") }))
        .route("/blog/{slug}", get(handlers::blog_detail_redirect))
        .route(STYLESHEET_PATH, get(handlers::stylesheet))
        .fallback(handlers::not_found)
        .with_state(state)
}
