//! HTTP server for category pages.
//!
//! Known slugs and the fallback policy are resolved once at startup. Each
//! request then resolves its own props and renders a fresh page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cms::CmsSource;
use crate::pages::RouteState;
use crate::render::render_category_page;
use crate::resolve::{CategoryResolver, ResolvedPaths};
use crate::slug::CategorySlug;

/// Shared, read-only server state
pub struct AppState<S> {
    pub resolver: CategoryResolver<S>,
    pub resolved: ResolvedPaths,
}

impl<S: CmsSource> AppState<S> {
    /// Resolve the category paths once and keep them for the server's lifetime
    pub async fn load(resolver: CategoryResolver<S>) -> Self {
        let resolved = resolver.resolve_categories().await.into_value();
        tracing::info!(
            paths = resolved.static_paths.paths.len(),
            fallback = resolved.static_paths.fallback,
            "Category paths resolved"
        );
        Self { resolver, resolved }
    }
}

/// Build the Axum application router
pub fn build_app<S>(state: Arc<AppState<S>>) -> Router
where
    S: CmsSource + 'static,
{
    Router::new()
        .route("/category/:slug", get(category_handler::<S>))
        .route("/health", get(health_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn category_handler<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: CmsSource + 'static,
{
    let Ok(slug) = CategorySlug::parse(slug) else {
        return not_found();
    };

    let paths = &state.resolved.static_paths;
    if !paths.contains(&slug) && !paths.fallback {
        tracing::debug!(slug = %slug, "Unknown category and fallback disabled");
        return not_found();
    }

    let props = state.resolver.resolve_props(&slug).await;
    let html = render_category_page(
        &RouteState::Resolved(slug),
        &props.value().posts,
        &state.resolved.categories,
    );

    Html(html).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    endpoint_configured: bool,
    known_paths: usize,
    fallback: bool,
}

/// Health check endpoint
async fn health_handler<S>(State(state): State<Arc<AppState<S>>>) -> Json<HealthResponse>
where
    S: CmsSource + 'static,
{
    Json(HealthResponse {
        status: "ok",
        endpoint_configured: state.resolver.is_configured(),
        known_paths: state.resolved.static_paths.paths.len(),
        fallback: state.resolved.static_paths.fallback,
    })
}
