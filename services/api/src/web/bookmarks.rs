//! services/api/src/web/bookmarks.rs
//!
//! Bookmark endpoints. At most one bookmark per page is the client's
//! convention; the store does not enforce it.

use crate::error::{port_error_response, HandlerError};
use crate::web::protocol::{BookmarkResponse, CreateBookmarkRequest, DeletedResponse};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use quran_reader_core::domain::{Bookmark, TOTAL_PAGES};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// List bookmarks, newest first.
#[utoipa::path(
    get,
    path = "/bookmarks",
    responses((status = 200, description = "All bookmarks", body = [BookmarkResponse]))
)]
pub async fn list_bookmarks_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookmarkResponse>>, HandlerError> {
    let bookmarks = app_state
        .db
        .list_bookmarks()
        .await
        .map_err(|e| port_error_response("Failed to list bookmarks", e))?;
    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

/// Bookmark a page. The owning Surah is looked up and stored with the bookmark.
#[utoipa::path(
    post,
    path = "/bookmarks",
    request_body = CreateBookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created", body = BookmarkResponse),
        (status = 400, description = "Page outside the mushaf")
    )
)]
pub async fn create_bookmark_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let surah = app_state
        .reference
        .locator()
        .surah_for_page(req.page_number)
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("page_number must be between 1 and {}", TOTAL_PAGES),
            )
        })?;

    let bookmark = app_state
        .db
        .create_bookmark(Bookmark::new(req.page_number, surah, req.note))
        .await
        .map_err(|e| port_error_response("Failed to create bookmark", e))?;

    info!(page = bookmark.page_number, surah = bookmark.surah_id, "Bookmark added");
    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(bookmark))))
}

/// The bookmark on a page, if any.
#[utoipa::path(
    get,
    path = "/bookmarks/page/{number}",
    params(("number" = u16, Path, description = "Page number")),
    responses(
        (status = 200, description = "The bookmark", body = BookmarkResponse),
        (status = 404, description = "Page is not bookmarked")
    )
)]
pub async fn get_page_bookmark_handler(
    State(app_state): State<Arc<AppState>>,
    Path(number): Path<u16>,
) -> Result<Json<BookmarkResponse>, HandlerError> {
    let bookmark = app_state
        .db
        .get_bookmark_for_page(number)
        .await
        .map_err(|e| port_error_response("Failed to load bookmark", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Page {} is not bookmarked", number)))?;
    Ok(Json(bookmark.into()))
}

/// Delete one bookmark by id.
#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    params(("id" = Uuid, Path, description = "Bookmark id")),
    responses(
        (status = 204, description = "Bookmark removed"),
        (status = 404, description = "No such bookmark")
    )
)]
pub async fn delete_bookmark_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HandlerError> {
    app_state
        .db
        .delete_bookmark(id)
        .await
        .map_err(|e| port_error_response("Failed to delete bookmark", e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every bookmark on a page.
#[utoipa::path(
    delete,
    path = "/bookmarks/page/{number}",
    params(("number" = u16, Path, description = "Page number")),
    responses((status = 200, description = "Bookmarks removed", body = DeletedResponse))
)]
pub async fn delete_page_bookmarks_handler(
    State(app_state): State<Arc<AppState>>,
    Path(number): Path<u16>,
) -> Result<Json<DeletedResponse>, HandlerError> {
    let deleted = app_state
        .db
        .delete_bookmarks_for_page(number)
        .await
        .map_err(|e| port_error_response("Failed to delete bookmarks", e))?;
    Ok(Json(DeletedResponse { deleted }))
}
