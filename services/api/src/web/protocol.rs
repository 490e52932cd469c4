//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the reader client and the API
//! server. Core domain types stay free of web concerns; these mirror them with
//! the `ToSchema` derives the OpenAPI document needs.

use chrono::{DateTime, Utc};
use quran_reader_core::domain::{
    Bookmark, Juz, PageInfo, PageRange, SearchHistoryEntry, SearchResult, Settings,
    SettingsUpdate, Surah,
};
use quran_reader_core::integrity::ReferenceData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//=========================================================================================
// Reference Data
//=========================================================================================

/// A Surah together with the pages it owns in the reader.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct SurahResponse {
    pub id: u8,
    pub arabic_name: String,
    pub transliterated_name: String,
    pub translated_name: String,
    pub verse_count: u16,
    /// `meccan` or `medinan`.
    pub revelation_place: String,
    pub juz_number: u8,
    pub start_page: u16,
    /// Last owned page. Lower than `start_page` when the next Surah begins on the same page.
    pub end_page: u16,
}

impl SurahResponse {
    pub fn new(surah: &Surah, range: PageRange) -> Self {
        Self {
            id: surah.id,
            arabic_name: surah.arabic_name.clone(),
            transliterated_name: surah.transliterated_name.clone(),
            translated_name: surah.translated_name.clone(),
            verse_count: surah.verse_count,
            revelation_place: surah.revelation_place.as_str().to_string(),
            juz_number: surah.juz_number,
            start_page: surah.start_page,
            end_page: range.end_page,
        }
    }
}

/// A Juz with its verse boundaries and resolved page range.
///
/// Page ranges are derived from the Surahs that begin inside the Juz. A Juz
/// in which no Surah begins (2 and 5) reports the whole mushaf, 1..=604.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct JuzResponse {
    pub id: u8,
    pub start_surah: u8,
    pub start_ayah: u16,
    pub end_surah: u8,
    pub end_ayah: u16,
    pub start_page: u16,
    pub end_page: u16,
}

impl JuzResponse {
    pub fn new(juz: &Juz, range: PageRange) -> Self {
        Self {
            id: juz.id,
            start_surah: juz.start_surah,
            start_ayah: juz.start_ayah,
            end_surah: juz.end_surah,
            end_ayah: juz.end_ayah,
            start_page: range.start_page,
            end_page: range.end_page,
        }
    }
}

/// A Juz and the Surahs that begin inside it.
#[derive(Serialize, Debug, ToSchema)]
pub struct JuzDetailResponse {
    pub juz: JuzResponse,
    pub surahs: Vec<SurahResponse>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PageResponse {
    pub page_number: u16,
    pub juz_number: u8,
    pub previous_page: Option<u16>,
    pub next_page: Option<u16>,
    pub surah: SurahResponse,
}

impl PageResponse {
    pub fn new(info: PageInfo, surah_range: PageRange) -> Self {
        Self {
            page_number: info.page_number,
            juz_number: info.juz_number,
            previous_page: info.previous_page,
            next_page: info.next_page,
            surah: SurahResponse::new(&info.surah, surah_range),
        }
    }
}

//=========================================================================================
// Search
//=========================================================================================

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit {
    Juz {
        juz_number: u8,
        start_page: u16,
        end_page: u16,
    },
    Page {
        page_number: u16,
    },
    Surah {
        surah: SurahResponse,
    },
}

impl SearchHit {
    pub fn new(result: SearchResult, reference: &ReferenceData) -> Self {
        match result {
            SearchResult::Juz {
                juz_number,
                start_page,
                end_page,
            } => SearchHit::Juz {
                juz_number,
                start_page,
                end_page,
            },
            SearchResult::Page { page_number } => SearchHit::Page { page_number },
            SearchResult::Surah { surah } => {
                let range = reference
                    .surah_page_range(surah.id)
                    .unwrap_or(PageRange::new(surah.start_page, surah.start_page));
                SearchHit::Surah {
                    surah: SurahResponse::new(&surah, range),
                }
            }
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SearchHistoryResponse {
    pub id: Uuid,
    pub query: String,
    pub created_at: DateTime<Utc>,
    /// `surah`, `juz` or `page`.
    pub result_type: String,
}

impl From<SearchHistoryEntry> for SearchHistoryResponse {
    fn from(entry: SearchHistoryEntry) -> Self {
        Self {
            id: entry.id,
            query: entry.query,
            created_at: entry.created_at,
            result_type: entry.result_type.as_str().to_string(),
        }
    }
}

//=========================================================================================
// Bookmarks
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateBookmarkRequest {
    pub page_number: u16,
    pub note: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub page_number: u16,
    pub surah_name: String,
    pub surah_id: u8,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            page_number: bookmark.page_number,
            surah_name: bookmark.surah_name,
            surah_id: bookmark.surah_id,
            note: bookmark.note,
            created_at: bookmark.created_at,
        }
    }
}

/// Returned by bulk deletes.
#[derive(Serialize, Debug, ToSchema)]
pub struct DeletedResponse {
    pub deleted: u64,
}

//=========================================================================================
// Settings
//=========================================================================================

#[derive(Serialize, Debug, ToSchema)]
pub struct SettingsResponse {
    pub dark_mode: bool,
    pub font_size: u16,
    pub arabic_font: String,
    pub translation_language: String,
    pub info_text_size: u16,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            dark_mode: settings.dark_mode,
            font_size: settings.font_size,
            arabic_font: settings.arabic_font,
            translation_language: settings.translation_language,
            info_text_size: settings.info_text_size,
        }
    }
}

/// Fields left out are not changed.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateSettingsRequest {
    pub dark_mode: Option<bool>,
    pub font_size: Option<u16>,
    pub arabic_font: Option<String>,
    pub translation_language: Option<String>,
    pub info_text_size: Option<u16>,
}

impl From<UpdateSettingsRequest> for SettingsUpdate {
    fn from(request: UpdateSettingsRequest) -> Self {
        Self {
            dark_mode: request.dark_mode,
            font_size: request.font_size,
            arabic_font: request.arabic_font,
            translation_language: request.translation_language,
            info_text_size: request.info_text_size,
        }
    }
}
