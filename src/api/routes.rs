//! Route handlers.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use crate::error::CatalogError;
use crate::models::{NameRecord, NewName, RecordPage};
use crate::search::SearchOutcome;
use crate::stats::{self, StatsSummary};

use super::{ApiResponse, AppState};

const DEFAULT_TOP_LIMIT: i64 = 10;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub meaning: Option<String>,
    pub origin: Option<String>,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub origin: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

#[derive(Deserialize)]
pub struct TopQuery {
    pub limit: Option<i64>,
}

/// Treat blank optional fields as absent.
fn clean(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::ok("OK".to_string()))
}

pub async fn register_name(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> (StatusCode, Json<ApiResponse<NameRecord>>) {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("name is required")),
        );
    }

    let new = NewName {
        name,
        meaning: clean(request.meaning),
        origin: clean(request.origin),
        reason: clean(request.reason),
    };

    match state.store.insert(&new).await {
        Ok(record) => (StatusCode::CREATED, Json(ApiResponse::ok(record))),
        Err(e @ CatalogError::Duplicate { .. }) => {
            (StatusCode::CONFLICT, Json(ApiResponse::error(e.to_string())))
        }
        Err(e) => {
            warn!("Failed to register name '{}': {}", new.name, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("registration failed, try again later")),
            )
        }
    }
}

pub async fn list_names(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ApiResponse<RecordPage>> {
    let name_filter = query.name.unwrap_or_default();
    let origin_filter = query.origin.unwrap_or_default();
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.filter(|&n| n > 0).unwrap_or(state.page_size);

    match state
        .store
        .list_filtered(name_filter.trim(), origin_filter.trim(), page, per_page)
        .await
    {
        Ok(page) => Json(ApiResponse::ok(page)),
        Err(e) => {
            warn!("Failed to list names: {}", e);
            let empty = RecordPage {
                records: Vec::new(),
                total_count: 0,
                page_index: 1,
                page_count: 1,
            };
            Json(ApiResponse::degraded(empty, "listing is unavailable right now"))
        }
    }
}

pub async fn search_names(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Json<ApiResponse<SearchOutcome>>) {
    match state.search.run(&query.term).await {
        Ok(outcome) => (StatusCode::OK, Json(ApiResponse::ok(outcome))),
        Err(e @ CatalogError::Validation(_)) => {
            (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())))
        }
        Err(e) => {
            warn!("Search '{}' failed: {}", query.term, e);
            let empty = SearchOutcome {
                records: Vec::new(),
                failed_ids: Vec::new(),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::degraded(empty, "search is unavailable right now")),
            )
        }
    }
}

pub async fn top_names(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Json<ApiResponse<Vec<NameRecord>>> {
    let limit = query.limit.filter(|&n| n > 0).unwrap_or(DEFAULT_TOP_LIMIT);
    match state.store.top_by_search_count(limit).await {
        Ok(records) => Json(ApiResponse::ok(records)),
        Err(e) => {
            warn!("Failed to fetch top names: {}", e);
            Json(ApiResponse::degraded(
                Vec::new(),
                "leaderboard is unavailable right now",
            ))
        }
    }
}

pub async fn statistics(State(state): State<AppState>) -> Json<ApiResponse<StatsSummary>> {
    match stats::gather(state.store.as_ref()).await {
        Ok(summary) => Json(ApiResponse::ok(summary)),
        Err(e) => {
            warn!("Failed to gather statistics: {}", e);
            let empty = stats::summarize(0, &[], Vec::new());
            Json(ApiResponse::degraded(empty, "statistics are unavailable right now"))
        }
    }
}
