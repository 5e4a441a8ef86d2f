//! Page handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{Uri, header};
use axum::response::{Html, IntoResponse, Redirect};
use chrono::Utc;
use serde::Deserialize;

use super::error::ServerError;
use super::state::AppState;
use crate::assets;
use crate::pages;
use crate::post::Category;
use crate::store::PostFilter;
use crate::transit::run_all_checks;
use crate::util::format_relative;

/// Query parameters for GET /blog/.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    category: Option<String>,
    q: Option<String>,
}

pub(crate) async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let filter = PostFilter::published(Utc::now()).limit(pages::home::RECENT_POSTS);
    let recent = state.posts.list(&filter);
    Html(pages::home::generate(&state.profile, &recent).into_string())
}

pub(crate) async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::about::generate(&state.profile).into_string())
}

/// GET /blog/ with optional `category` and `q`.
///
/// An unknown category matches no posts.
pub(crate) async fn blog_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let requested = params.category.as_deref().filter(|c| !c.is_empty());
    let search = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let (selected, posts) = match requested.map(str::parse::<Category>) {
        Some(Err(e)) => {
            tracing::debug!(error = %e, "Ignoring unknown category");
            (None, Vec::new())
        }
        parsed => {
            let selected = parsed.and_then(Result::ok);
            let filter = PostFilter::published(Utc::now())
                .category(selected)
                .search(search.map(String::from));
            (selected, state.posts.list(&filter))
        }
    };

    tracing::debug!(count = posts.len(), category = ?selected, "Rendering blog list");
    Html(
        pages::blog_list::generate(pages::blog_list::BlogListData {
            posts: &posts,
            selected,
            search,
        })
        .into_string(),
    )
}

/// GET /blog/{slug}/. Drafts are reachable by direct link.
pub(crate) async fn blog_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ServerError> {
    let post = state
        .posts
        .find_by_slug(&slug)
        .ok_or_else(|| ServerError::NotFound(format!("/blog/{}/", slug)))?;

    tracing::debug!(slug = %slug, "Rendering post");
    let content = state.renderer.render(post.content());
    let updated = format_relative(post.updated_at(), Utc::now());
    Ok(Html(
        pages::blog_detail::generate(post, &content, &updated).into_string(),
    ))
}

pub(crate) async fn blog_detail_redirect(Path(slug): Path<String>) -> Redirect {
    Redirect::permanent(&format!("/blog/{}/", slug))
}

/// GET /secret/. Runs every bus check on a blocking thread.
pub(crate) async fn secret(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let lines = tokio::task::spawn_blocking(move || {
        let mut lines: Vec<String> = Vec::new();
        run_all_checks(state.transit.as_ref(), &state.api_key, &mut lines);
        lines
    })
    .await?;

    Ok(Html(pages::secret::generate(&lines).into_string()))
}

pub(crate) async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::stylesheet(),
    )
}

pub(crate) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
