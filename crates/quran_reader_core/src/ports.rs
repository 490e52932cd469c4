//! crates/quran_reader_core/src/ports.rs
//!
//! Defines the service contract (trait) between the pure core and its
//! persistence collaborator. The locator, resolver and search functions never
//! touch this trait; they take already-loaded slices. Only the adapter layer
//! (and whoever wires it up) depends on it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Bookmark, Juz, SearchHistoryEntry, Settings, SettingsUpdate, Surah};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of the storage backend.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait DatabaseService: Send + Sync {
    // --- Reference Data ---
    async fn load_surahs(&self) -> PortResult<Vec<Surah>>;

    async fn load_juz_list(&self) -> PortResult<Vec<Juz>>;

    // --- Bookmarks ---
    async fn create_bookmark(&self, bookmark: Bookmark) -> PortResult<Bookmark>;

    /// Newest first.
    async fn list_bookmarks(&self) -> PortResult<Vec<Bookmark>>;

    async fn get_bookmark_for_page(&self, page_number: u16) -> PortResult<Option<Bookmark>>;

    async fn delete_bookmark(&self, bookmark_id: Uuid) -> PortResult<()>;

    /// Returns the number of bookmarks removed.
    async fn delete_bookmarks_for_page(&self, page_number: u16) -> PortResult<u64>;

    // --- Settings ---
    /// Inserts the default row on first use.
    async fn get_or_create_settings(&self) -> PortResult<Settings>;

    /// Applies `update` to the stored row as one atomic read-modify-write.
    async fn update_settings(&self, update: SettingsUpdate) -> PortResult<Settings>;

    // --- Search History ---
    /// Appends `entry`, then drops everything but the newest `keep` entries.
    async fn record_search(&self, entry: SearchHistoryEntry, keep: u32) -> PortResult<()>;

    /// Newest first, at most `limit` entries.
    async fn recent_searches(&self, limit: u32) -> PortResult<Vec<SearchHistoryEntry>>;

    async fn delete_search(&self, entry_id: Uuid) -> PortResult<()>;

    async fn clear_search_history(&self) -> PortResult<u64>;
}
