//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use crate::error::ApiError;
use quran_reader_core::integrity::ReferenceData;
use quran_reader_core::ports::DatabaseService;
use std::sync::Arc;
use tracing::info;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseService>,
    /// Validated before the router is built, so handlers never see a partial list.
    pub reference: Arc<ReferenceData>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Reads the reference tables back through the port and validates them.
    pub async fn load(db: Arc<dyn DatabaseService>, config: Arc<Config>) -> Result<Self, ApiError> {
        let surahs = db.load_surahs().await?;
        let juz_list = db.load_juz_list().await?;
        info!(
            surahs = surahs.len(),
            juz = juz_list.len(),
            "Reference data loaded from store"
        );

        let reference = Arc::new(ReferenceData::new(surahs, juz_list)?);
        Ok(Self {
            db,
            reference,
            config,
        })
    }
}
