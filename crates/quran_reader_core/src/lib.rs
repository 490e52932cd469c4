pub mod arabic;
pub mod domain;
pub mod integrity;
pub mod juz_range;
pub mod locator;
pub mod ports;
pub mod reference;
pub mod search;

pub use domain::{
    Bookmark, Juz, PageInfo, PageRange, RevelationPlace, SearchHistoryEntry, SearchResult,
    SearchResultType, Settings, SettingsUpdate, Surah, TOTAL_AYAHS, TOTAL_JUZ, TOTAL_PAGES,
    TOTAL_SURAHS,
};
pub use integrity::{IntegrityError, ReferenceData};
pub use juz_range::resolve_juz_page_range;
pub use locator::{find_surah_for_page, juz_for_page, PageLocator};
pub use ports::{DatabaseService, PortError, PortResult};
pub use search::search;
