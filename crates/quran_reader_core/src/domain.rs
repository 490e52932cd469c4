//! crates/quran_reader_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or web framework; they only
//! carry `serde` derives so adapters can move them across their boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ports::PortError;

/// Number of pages in the standard Madani print layout.
pub const TOTAL_PAGES: u16 = 604;
pub const TOTAL_SURAHS: u8 = 114;
pub const TOTAL_JUZ: u8 = 30;
pub const TOTAL_AYAHS: u32 = 6236;

//=========================================================================================
// Reference Data
//=========================================================================================

/// Where a Surah was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl RevelationPlace {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevelationPlace::Meccan => "meccan",
            RevelationPlace::Medinan => "medinan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "meccan" => Some(RevelationPlace::Meccan),
            "medinan" => Some(RevelationPlace::Medinan),
            _ => None,
        }
    }
}

/// One of the 114 chapters. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub id: u8,
    pub arabic_name: String,
    pub transliterated_name: String,
    pub translated_name: String,
    pub verse_count: u16,
    pub revelation_place: RevelationPlace,
    /// The Juz containing the Surah's first verse.
    pub juz_number: u8,
    pub start_page: u16,
}

/// One of the 30 divisions, bounded at verse level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Juz {
    pub id: u8,
    pub start_surah: u8,
    pub start_ayah: u16,
    pub end_surah: u8,
    pub end_ayah: u16,
}

/// An inclusive span of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start_page: u16,
    pub end_page: u16,
}

impl PageRange {
    pub fn new(start_page: u16, end_page: u16) -> Self {
        Self {
            start_page,
            end_page,
        }
    }

    pub fn contains(&self, page: u16) -> bool {
        self.start_page <= page && page <= self.end_page
    }

    /// Zero for the empty ranges of Surahs that share a start page with the next one.
    pub fn page_count(&self) -> u16 {
        if self.end_page < self.start_page {
            0
        } else {
            self.end_page - self.start_page + 1
        }
    }
}

/// Everything a reader header needs to describe one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_number: u16,
    pub surah: Surah,
    pub juz_number: u8,
    pub previous_page: Option<u16>,
    pub next_page: Option<u16>,
}

//=========================================================================================
// Search
//=========================================================================================

/// A single hit returned by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResult {
    Juz {
        juz_number: u8,
        start_page: u16,
        end_page: u16,
    },
    Page {
        page_number: u16,
    },
    Surah {
        surah: Surah,
    },
}

impl SearchResult {
    pub fn result_type(&self) -> SearchResultType {
        match self {
            SearchResult::Juz { .. } => SearchResultType::Juz,
            SearchResult::Page { .. } => SearchResultType::Page,
            SearchResult::Surah { .. } => SearchResultType::Surah,
        }
    }
}

/// The category tag stored alongside a search history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultType {
    Surah,
    Juz,
    Page,
}

impl SearchResultType {
    /// Tags a query by its shape: small numbers name a Juz, other numbers a
    /// page, anything else a Surah name.
    pub fn classify(query: &str) -> Self {
        match query.trim().parse::<i64>() {
            Ok(n) if (1..=i64::from(TOTAL_JUZ)).contains(&n) => SearchResultType::Juz,
            Ok(_) => SearchResultType::Page,
            Err(_) => SearchResultType::Surah,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchResultType::Surah => "surah",
            SearchResultType::Juz => "juz",
            SearchResultType::Page => "page",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "surah" => Some(SearchResultType::Surah),
            "juz" => Some(SearchResultType::Juz),
            "page" => Some(SearchResultType::Page),
            _ => None,
        }
    }
}

/// An executed search, kept for the "recent searches" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub query: String,
    pub created_at: DateTime<Utc>,
    pub result_type: SearchResultType,
}

impl SearchHistoryEntry {
    pub fn new(query: &str) -> Self {
        let query = query.trim().to_string();
        let result_type = SearchResultType::classify(&query);
        Self {
            id: Uuid::new_v4(),
            query,
            created_at: Utc::now(),
            result_type,
        }
    }
}

//=========================================================================================
// User Data
//=========================================================================================

/// A user-created marker on a reader page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub page_number: u16,
    /// Denormalised at creation time.
    pub surah_name: String,
    pub surah_id: u8,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(page_number: u16, surah: &Surah, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            page_number,
            surah_name: surah.transliterated_name.clone(),
            surah_id: surah.id,
            note: note.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        }
    }
}

pub const MIN_FONT_SIZE: u16 = 12;
pub const MAX_FONT_SIZE: u16 = 40;
pub const MIN_INFO_TEXT_SIZE: u16 = 10;
pub const MAX_INFO_TEXT_SIZE: u16 = 28;

/// The singleton row of reader preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
    pub font_size: u16,
    pub arabic_font: String,
    pub translation_language: String,
    pub info_text_size: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: 18,
            arabic_font: "uthmani".to_string(),
            translation_language: "en".to_string(),
            info_text_size: 14,
        }
    }
}

/// A partial change to [`Settings`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub dark_mode: Option<bool>,
    pub font_size: Option<u16>,
    pub arabic_font: Option<String>,
    pub translation_language: Option<String>,
    pub info_text_size: Option<u16>,
}

impl Settings {
    /// Returns the merged settings, or `InvalidInput` if a size is out of bounds
    /// or a text field is blank. `self` is untouched on error.
    pub fn apply(&self, update: SettingsUpdate) -> Result<Settings, PortError> {
        let mut next = self.clone();

        if let Some(dark_mode) = update.dark_mode {
            next.dark_mode = dark_mode;
        }
        if let Some(font_size) = update.font_size {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&font_size) {
                return Err(PortError::InvalidInput(format!(
                    "font_size must be between {} and {}",
                    MIN_FONT_SIZE, MAX_FONT_SIZE
                )));
            }
            next.font_size = font_size;
        }
        if let Some(info_text_size) = update.info_text_size {
            if !(MIN_INFO_TEXT_SIZE..=MAX_INFO_TEXT_SIZE).contains(&info_text_size) {
                return Err(PortError::InvalidInput(format!(
                    "info_text_size must be between {} and {}",
                    MIN_INFO_TEXT_SIZE, MAX_INFO_TEXT_SIZE
                )));
            }
            next.info_text_size = info_text_size;
        }
        if let Some(arabic_font) = update.arabic_font {
            next.arabic_font = non_blank("arabic_font", arabic_font)?;
        }
        if let Some(language) = update.translation_language {
            next.translation_language = non_blank("translation_language", language)?;
        }

        Ok(next)
    }
}

fn non_blank(field: &str, value: String) -> Result<String, PortError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PortError::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tags_queries_by_shape() {
        assert_eq!(SearchResultType::classify("5"), SearchResultType::Juz);
        assert_eq!(SearchResultType::classify(" 30 "), SearchResultType::Juz);
        assert_eq!(SearchResultType::classify("31"), SearchResultType::Page);
        assert_eq!(SearchResultType::classify("0"), SearchResultType::Page);
        assert_eq!(SearchResultType::classify("kahf"), SearchResultType::Surah);
    }

    #[test]
    fn empty_page_range_has_no_pages() {
        let range = PageRange::new(587, 586);
        assert_eq!(range.page_count(), 0);
        assert!(!range.contains(587));
        assert_eq!(PageRange::new(1, 1).page_count(), 1);
    }

    #[test]
    fn settings_apply_merges_only_present_fields() {
        let update = SettingsUpdate {
            dark_mode: Some(true),
            font_size: Some(24),
            ..Default::default()
        };
        let next = Settings::default().apply(update).unwrap();
        assert!(next.dark_mode);
        assert_eq!(next.font_size, 24);
        assert_eq!(next.arabic_font, "uthmani");
        assert_eq!(next.info_text_size, 14);
    }

    #[test]
    fn settings_apply_rejects_out_of_bounds_sizes() {
        let too_small = SettingsUpdate {
            font_size: Some(MIN_FONT_SIZE - 1),
            ..Default::default()
        };
        assert!(matches!(
            Settings::default().apply(too_small),
            Err(PortError::InvalidInput(_))
        ));

        let too_large = SettingsUpdate {
            info_text_size: Some(MAX_INFO_TEXT_SIZE + 1),
            ..Default::default()
        };
        assert!(Settings::default().apply(too_large).is_err());

        let blank_font = SettingsUpdate {
            arabic_font: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(Settings::default().apply(blank_font).is_err());
    }

    #[test]
    fn search_result_serializes_with_type_tag() {
        let json = serde_json::to_value(SearchResult::Page { page_number: 5 }).unwrap();
        assert_eq!(json["type"], "page");
        assert_eq!(json["page_number"], 5);
    }

    #[test]
    fn bookmark_drops_blank_notes() {
        let surah = Surah {
            id: 1,
            arabic_name: "الفاتحة".to_string(),
            transliterated_name: "Al-Fatihah".to_string(),
            translated_name: "The Opener".to_string(),
            verse_count: 7,
            revelation_place: RevelationPlace::Meccan,
            juz_number: 1,
            start_page: 1,
        };
        let bookmark = Bookmark::new(1, &surah, Some("   ".to_string()));
        assert_eq!(bookmark.note, None);
        assert_eq!(bookmark.surah_name, "Al-Fatihah");
        assert_eq!(bookmark.surah_id, 1);
    }
}
