//! services/api/src/web/rest.rs
//!
//! Contains the master definition for the OpenAPI specification and the
//! router that wires every REST handler to its path.

use crate::web::{bookmarks, protocol, reference, search, settings, state::AppState};
use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        reference::list_surahs_handler,
        reference::get_surah_handler,
        reference::list_juz_handler,
        reference::get_juz_handler,
        reference::get_page_handler,
        search::search_handler,
        search::search_history_handler,
        search::clear_search_history_handler,
        search::delete_search_handler,
        bookmarks::list_bookmarks_handler,
        bookmarks::create_bookmark_handler,
        bookmarks::get_page_bookmark_handler,
        bookmarks::delete_bookmark_handler,
        bookmarks::delete_page_bookmarks_handler,
        settings::get_settings_handler,
        settings::update_settings_handler,
    ),
    components(
        schemas(
            protocol::SurahResponse,
            protocol::JuzResponse,
            protocol::JuzDetailResponse,
            protocol::PageResponse,
            protocol::SearchHit,
            protocol::SearchResponse,
            protocol::SearchHistoryResponse,
            protocol::CreateBookmarkRequest,
            protocol::BookmarkResponse,
            protocol::DeletedResponse,
            protocol::SettingsResponse,
            protocol::UpdateSettingsRequest,
        )
    ),
    tags(
        (name = "Quran Reader API", description = "Page locator, search, bookmarks and settings for the reader.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Router
//=========================================================================================

/// Builds the API router over a fully loaded state.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/surahs", get(reference::list_surahs_handler))
        .route("/surahs/{id}", get(reference::get_surah_handler))
        .route("/juz", get(reference::list_juz_handler))
        .route("/juz/{number}", get(reference::get_juz_handler))
        .route("/pages/{number}", get(reference::get_page_handler))
        .route("/search", get(search::search_handler))
        .route(
            "/search/history",
            get(search::search_history_handler).delete(search::clear_search_history_handler),
        )
        .route("/search/history/{id}", delete(search::delete_search_handler))
        .route(
            "/bookmarks",
            get(bookmarks::list_bookmarks_handler).post(bookmarks::create_bookmark_handler),
        )
        .route("/bookmarks/{id}", delete(bookmarks::delete_bookmark_handler))
        .route(
            "/bookmarks/page/{number}",
            get(bookmarks::get_page_bookmark_handler).delete(bookmarks::delete_page_bookmarks_handler),
        )
        .route(
            "/settings",
            get(settings::get_settings_handler).patch(settings::update_settings_handler),
        )
        .with_state(app_state)
}
