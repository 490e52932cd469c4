//! services/api/src/web/search.rs
//!
//! Search and the recent-searches list.

use crate::error::{port_error_response, HandlerError};
use crate::web::protocol::{DeletedResponse, SearchHistoryResponse, SearchHit, SearchParams, SearchResponse};
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use quran_reader_core::domain::SearchHistoryEntry;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Search Surahs by name or id, and Juz or pages by number.
///
/// Non-blank queries are recorded in the search history.
#[utoipa::path(
    get,
    path = "/search",
    params(("q" = String, Query, description = "Free text or a number")),
    responses((status = 200, description = "Juz and page hits first, then Surahs in canonical order", body = SearchResponse))
)]
pub async fn search_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default().trim().to_string();
    let results = app_state.reference.search(&query);
    debug!(query = %query, hits = results.len(), "Search executed");

    if !query.is_empty() {
        // A lost history entry must not fail the search itself.
        let entry = SearchHistoryEntry::new(&query);
        let keep = app_state.config.recent_search_limit;
        if let Err(e) = app_state.db.record_search(entry, keep).await {
            warn!("Failed to record search history: {:?}", e);
        }
    }

    let reference = &app_state.reference;
    Json(SearchResponse {
        query,
        results: results
            .into_iter()
            .map(|result| SearchHit::new(result, reference))
            .collect(),
    })
}

/// The most recent searches, newest first.
#[utoipa::path(
    get,
    path = "/search/history",
    responses((status = 200, description = "Recent searches", body = [SearchHistoryResponse]))
)]
pub async fn search_history_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<SearchHistoryResponse>>, HandlerError> {
    let entries = app_state
        .db
        .recent_searches(app_state.config.recent_search_limit)
        .await
        .map_err(|e| port_error_response("Failed to load search history", e))?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Remove every search history entry.
#[utoipa::path(
    delete,
    path = "/search/history",
    responses((status = 200, description = "History cleared", body = DeletedResponse))
)]
pub async fn clear_search_history_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<DeletedResponse>, HandlerError> {
    let deleted = app_state
        .db
        .clear_search_history()
        .await
        .map_err(|e| port_error_response("Failed to clear search history", e))?;
    Ok(Json(DeletedResponse { deleted }))
}

/// Remove one search history entry.
#[utoipa::path(
    delete,
    path = "/search/history/{id}",
    params(("id" = Uuid, Path, description = "History entry id")),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 404, description = "No such entry")
    )
)]
pub async fn delete_search_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    app_state
        .db
        .delete_search(id)
        .await
        .map_err(|e| port_error_response("Failed to delete search entry", e))?;
    Ok(StatusCode::NO_CONTENT)
}
