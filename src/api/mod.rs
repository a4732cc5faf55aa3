//! REST API layer.
//!
//! Thin axum routes over the store and the search workflow. Every response
//! uses the same envelope; user errors (bad input, duplicate name) come
//! back as messages rather than bare status codes, and read failures
//! degrade to an empty result with a surfaced message.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::search::SearchWorkflow;
use crate::store::NameStore;

pub mod routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NameStore>,
    pub search: SearchWorkflow,
    pub page_size: i64,
}

impl AppState {
    pub fn new(store: Arc<dyn NameStore>, page_size: i64) -> Self {
        let search = SearchWorkflow::new(store.clone());
        Self {
            store,
            search,
            page_size,
        }
    }
}

/// Common response envelope.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// A recovered read failure: an empty result the caller can render as
    /// "no results", plus the message explaining why.
    pub fn degraded(empty: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Some(empty),
            error: Some(message.into()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health_check))
        .route(
            "/api/names",
            get(routes::list_names).post(routes::register_name),
        )
        .route("/api/search", get(routes::search_names))
        .route("/api/top", get(routes::top_names))
        .route("/api/stats", get(routes::statistics))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
