//! services/api/src/web/reference.rs
//!
//! Read-only handlers over the reference arena: Surahs, Juz and pages.

use crate::web::protocol::{JuzDetailResponse, JuzResponse, PageResponse, SurahResponse};
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use quran_reader_core::domain::{PageRange, Surah};
use quran_reader_core::integrity::ReferenceData;
use std::sync::Arc;

use crate::error::HandlerError;

fn surah_response(reference: &ReferenceData, surah: &Surah) -> SurahResponse {
    let range = reference
        .surah_page_range(surah.id)
        .unwrap_or(PageRange::new(surah.start_page, surah.start_page));
    SurahResponse::new(surah, range)
}

fn not_found(what: &str, id: u32) -> HandlerError {
    (StatusCode::NOT_FOUND, format!("{} {} not found", what, id))
}

/// List all Surahs in canonical order.
#[utoipa::path(
    get,
    path = "/surahs",
    responses((status = 200, description = "All 114 Surahs", body = [SurahResponse]))
)]
pub async fn list_surahs_handler(State(app_state): State<Arc<AppState>>) -> Json<Vec<SurahResponse>> {
    let reference = &app_state.reference;
    Json(
        reference
            .surahs()
            .iter()
            .map(|surah| surah_response(reference, surah))
            .collect(),
    )
}

/// Fetch one Surah and the pages it owns.
#[utoipa::path(
    get,
    path = "/surahs/{id}",
    params(("id" = u32, Path, description = "Surah id, 1..=114")),
    responses(
        (status = 200, description = "The Surah", body = SurahResponse),
        (status = 404, description = "No such Surah")
    )
)]
pub async fn get_surah_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<SurahResponse>, HandlerError> {
    let reference = &app_state.reference;
    let surah = u8::try_from(id)
        .ok()
        .and_then(|id| reference.surah(id))
        .ok_or_else(|| not_found("Surah", id))?;
    Ok(Json(surah_response(reference, surah)))
}

/// List all Juz with their resolved page ranges.
#[utoipa::path(
    get,
    path = "/juz",
    responses((status = 200, description = "All 30 Juz; a Juz in which no Surah begins spans pages 1..=604", body = [JuzResponse]))
)]
pub async fn list_juz_handler(State(app_state): State<Arc<AppState>>) -> Json<Vec<JuzResponse>> {
    let reference = &app_state.reference;
    Json(
        reference
            .juz_list()
            .iter()
            .filter_map(|juz| {
                reference
                    .juz_page_range(juz.id)
                    .map(|range| JuzResponse::new(juz, range))
            })
            .collect(),
    )
}

/// Fetch one Juz, its page range and the Surahs that begin inside it.
#[utoipa::path(
    get,
    path = "/juz/{number}",
    params(("number" = u32, Path, description = "Juz number, 1..=30")),
    responses(
        (status = 200, description = "The Juz; with no member Surahs the range is pages 1..=604", body = JuzDetailResponse),
        (status = 404, description = "No such Juz")
    )
)]
pub async fn get_juz_handler(
    State(app_state): State<Arc<AppState>>,
    Path(number): Path<u32>,
) -> Result<Json<JuzDetailResponse>, HandlerError> {
    let reference = &app_state.reference;
    let (juz, range) = u8::try_from(number)
        .ok()
        .and_then(|n| Some((reference.juz(n)?, reference.juz_page_range(n)?)))
        .ok_or_else(|| not_found("Juz", number))?;

    let surahs = reference
        .surahs_in_juz(juz.id)
        .into_iter()
        .map(|surah| surah_response(reference, surah))
        .collect();

    Ok(Json(JuzDetailResponse {
        juz: JuzResponse::new(juz, range),
        surahs,
    }))
}

/// Describe a reader page: owning Surah, Juz and neighbours.
#[utoipa::path(
    get,
    path = "/pages/{number}",
    params(("number" = u32, Path, description = "Page number, 1..=604")),
    responses(
        (status = 200, description = "The page", body = PageResponse),
        (status = 404, description = "Page outside the mushaf")
    )
)]
pub async fn get_page_handler(
    State(app_state): State<Arc<AppState>>,
    Path(number): Path<u32>,
) -> Result<Json<PageResponse>, HandlerError> {
    let reference = &app_state.reference;
    let info = u16::try_from(number)
        .ok()
        .and_then(|page| reference.page_info(page))
        .ok_or_else(|| not_found("Page", number))?;

    let range = reference
        .surah_page_range(info.surah.id)
        .unwrap_or(PageRange::new(info.page_number, info.page_number));
    Ok(Json(PageResponse::new(info, range)))
}
