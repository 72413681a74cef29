// Folio site
// Decision: Server-rendered HTML; the only JSON endpoint is /health
// Decision: Identity comes from an external provider; the site never stores
// users or passwords
//
// Routes:
// - GET  /                      index (public)
// - GET  /login, /logout        hand-off to the identity provider
// - GET  /articles/new          new article form (admin)
// - POST /articles/new
// - GET  /blog/settings         blog settings form (admin)
// - POST /blog/settings
// - GET  /articles/:id/edit     edit article form (admin)
// - POST /articles/:id/edit
// - GET  /articles/:id/delete   delete confirmation (admin)
// - POST /articles/:id/delete
// - GET  /health

pub mod auth;
pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod views;

use axum::{
    extract::{FromRef, State},
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use folio_storage::StorageBackend;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::auth::AuthState;
use crate::services::{ArticleService, BlogService};

/// App state shared across routes
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth: AuthState,
    pub blogs: Arc<BlogService>,
    pub articles: Arc<ArticleService>,
    health: HealthState,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    auth_mode: &'static str,
    storage: &'static str,
}

impl AppState {
    pub fn new(storage: StorageBackend, auth: AuthState) -> Self {
        let health = HealthState {
            auth_mode: auth.provider.name(),
            storage: storage.kind(),
        };

        Self {
            auth,
            blogs: Arc::new(BlogService::new(storage.clone())),
            articles: Arc::new(ArticleService::new(storage)),
            health,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    auth_mode: &'static str,
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        auth_mode: state.auth_mode,
        storage: state.storage,
    })
}

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'";

/// Build the site router with all pages and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::index))
        .route(
            "/articles/new",
            get(views::new_article).post(views::create_article),
        )
        .route(
            "/blog/settings",
            get(views::edit_blog).post(views::update_blog),
        )
        .route(
            "/articles/:id/edit",
            get(views::edit_article).post(views::update_article),
        )
        .route(
            "/articles/:id/delete",
            get(views::confirm_delete).post(views::delete_article),
        )
        .route("/health", get(health))
        .merge(auth::routes())
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(TraceLayer::new_for_http())
}
