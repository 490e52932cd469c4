//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `DatabaseService` port from the `core` crate. It handles all interactions
//! with the local SQLite store using `sqlx`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quran_reader_core::domain::{
    Bookmark, Juz, RevelationPlace, SearchHistoryEntry, SearchResultType, Settings, SettingsUpdate,
    Surah,
};
use quran_reader_core::ports::{DatabaseService, PortError, PortResult};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `DatabaseService` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: SqlitePool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Writes the reference tables. Rows already present are left alone, so
    /// this is safe to call on every start.
    pub async fn seed_reference_data(&self, surahs: &[Surah], juz_list: &[Juz]) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for surah in surahs {
            sqlx::query(
                "INSERT OR IGNORE INTO surahs (id, arabic_name, transliterated_name, translated_name, verse_count, revelation_place, juz_number, start_page) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(i64::from(surah.id))
            .bind(&surah.arabic_name)
            .bind(&surah.transliterated_name)
            .bind(&surah.translated_name)
            .bind(i64::from(surah.verse_count))
            .bind(surah.revelation_place.as_str())
            .bind(i64::from(surah.juz_number))
            .bind(i64::from(surah.start_page))
            .execute(&mut *tx)
            .await?;
        }

        for juz in juz_list {
            sqlx::query(
                "INSERT OR IGNORE INTO juz (id, start_surah, start_ayah, end_surah, end_ayah) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(i64::from(juz.id))
            .bind(i64::from(juz.start_surah))
            .bind(i64::from(juz.start_ayah))
            .bind(i64::from(juz.end_surah))
            .bind(i64::from(juz.end_ayah))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(surahs = surahs.len(), juz = juz_list.len(), "Reference data seeded");
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct SurahRecord {
    id: i64,
    arabic_name: String,
    transliterated_name: String,
    translated_name: String,
    verse_count: i64,
    revelation_place: String,
    juz_number: i64,
    start_page: i64,
}
impl SurahRecord {
    fn to_domain(self) -> PortResult<Surah> {
        let revelation_place = RevelationPlace::parse(&self.revelation_place).ok_or_else(|| {
            PortError::Unexpected(format!(
                "Surah {} has unknown revelation place '{}'",
                self.id, self.revelation_place
            ))
        })?;
        Ok(Surah {
            id: narrow("surahs.id", self.id)?,
            arabic_name: self.arabic_name,
            transliterated_name: self.transliterated_name,
            translated_name: self.translated_name,
            verse_count: narrow("surahs.verse_count", self.verse_count)?,
            revelation_place,
            juz_number: narrow("surahs.juz_number", self.juz_number)?,
            start_page: narrow("surahs.start_page", self.start_page)?,
        })
    }
}

#[derive(FromRow)]
struct JuzRecord {
    id: i64,
    start_surah: i64,
    start_ayah: i64,
    end_surah: i64,
    end_ayah: i64,
}
impl JuzRecord {
    fn to_domain(self) -> PortResult<Juz> {
        Ok(Juz {
            id: narrow("juz.id", self.id)?,
            start_surah: narrow("juz.start_surah", self.start_surah)?,
            start_ayah: narrow("juz.start_ayah", self.start_ayah)?,
            end_surah: narrow("juz.end_surah", self.end_surah)?,
            end_ayah: narrow("juz.end_ayah", self.end_ayah)?,
        })
    }
}

#[derive(FromRow)]
struct BookmarkRecord {
    id: Uuid,
    page_number: i64,
    surah_name: String,
    surah_id: i64,
    note: Option<String>,
    created_at: DateTime<Utc>,
}
impl BookmarkRecord {
    fn to_domain(self) -> PortResult<Bookmark> {
        Ok(Bookmark {
            id: self.id,
            page_number: narrow("bookmarks.page_number", self.page_number)?,
            surah_name: self.surah_name,
            surah_id: narrow("bookmarks.surah_id", self.surah_id)?,
            note: self.note,
            created_at: self.created_at,
        })
    }
}

#[derive(FromRow)]
struct SettingsRecord {
    dark_mode: bool,
    font_size: i64,
    arabic_font: String,
    translation_language: String,
    info_text_size: i64,
}
impl SettingsRecord {
    fn to_domain(self) -> PortResult<Settings> {
        Ok(Settings {
            dark_mode: self.dark_mode,
            font_size: narrow("settings.font_size", self.font_size)?,
            arabic_font: self.arabic_font,
            translation_language: self.translation_language,
            info_text_size: narrow("settings.info_text_size", self.info_text_size)?,
        })
    }
}

#[derive(FromRow)]
struct SearchHistoryRecord {
    id: Uuid,
    query: String,
    created_at: DateTime<Utc>,
    result_type: String,
}
impl SearchHistoryRecord {
    fn to_domain(self) -> PortResult<SearchHistoryEntry> {
        let result_type = SearchResultType::parse(&self.result_type).ok_or_else(|| {
            PortError::Unexpected(format!("Unknown search result type '{}'", self.result_type))
        })?;
        Ok(SearchHistoryEntry {
            id: self.id,
            query: self.query,
            created_at: self.created_at,
            result_type,
        })
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

/// SQLite hands back every integer as `i64`; a value that does not fit the domain type is corrupt.
fn narrow<T: TryFrom<i64>>(column: &str, value: i64) -> PortResult<T> {
    T::try_from(value)
        .map_err(|_| PortError::Unexpected(format!("Column {} holds out-of-range value {}", column, value)))
}

/// Inserts the default row if missing, then reads it back on the same connection.
async fn load_or_create_settings(conn: &mut SqliteConnection) -> PortResult<Settings> {
    let defaults = Settings::default();
    sqlx::query(
        "INSERT OR IGNORE INTO settings (id, dark_mode, font_size, arabic_font, translation_language, info_text_size) VALUES (1, ?, ?, ?, ?, ?)",
    )
    .bind(defaults.dark_mode)
    .bind(i64::from(defaults.font_size))
    .bind(&defaults.arabic_font)
    .bind(&defaults.translation_language)
    .bind(i64::from(defaults.info_text_size))
    .execute(&mut *conn)
    .await
    .map_err(unexpected)?;

    let record = sqlx::query_as::<_, SettingsRecord>(
        "SELECT dark_mode, font_size, arabic_font, translation_language, info_text_size FROM settings WHERE id = 1",
    )
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => PortError::NotFound("Settings row not found".to_string()),
        _ => PortError::Unexpected(e.to_string()),
    })?;

    record.to_domain()
}

//=========================================================================================
// `DatabaseService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DatabaseService for DbAdapter {
    async fn load_surahs(&self) -> PortResult<Vec<Surah>> {
        let records = sqlx::query_as::<_, SurahRecord>(
            "SELECT id, arabic_name, transliterated_name, translated_name, verse_count, revelation_place, juz_number, start_page FROM surahs ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn load_juz_list(&self) -> PortResult<Vec<Juz>> {
        let records = sqlx::query_as::<_, JuzRecord>(
            "SELECT id, start_surah, start_ayah, end_surah, end_ayah FROM juz ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn create_bookmark(&self, bookmark: Bookmark) -> PortResult<Bookmark> {
        sqlx::query(
            "INSERT INTO bookmarks (id, page_number, surah_name, surah_id, note, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(bookmark.id)
        .bind(i64::from(bookmark.page_number))
        .bind(&bookmark.surah_name)
        .bind(i64::from(bookmark.surah_id))
        .bind(&bookmark.note)
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        debug!(bookmark_id = %bookmark.id, page = bookmark.page_number, "Bookmark created");
        Ok(bookmark)
    }

    async fn list_bookmarks(&self) -> PortResult<Vec<Bookmark>> {
        let records = sqlx::query_as::<_, BookmarkRecord>(
            "SELECT id, page_number, surah_name, surah_id, note, created_at FROM bookmarks ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn get_bookmark_for_page(&self, page_number: u16) -> PortResult<Option<Bookmark>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            "SELECT id, page_number, surah_name, surah_id, note, created_at FROM bookmarks WHERE page_number = ? ORDER BY created_at DESC, rowid DESC LIMIT 1",
        )
        .bind(i64::from(page_number))
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        record.map(|r| r.to_domain()).transpose()
    }

    async fn delete_bookmark(&self, bookmark_id: Uuid) -> PortResult<()> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(bookmark_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Bookmark {} not found", bookmark_id)));
        }
        Ok(())
    }

    async fn delete_bookmarks_for_page(&self, page_number: u16) -> PortResult<u64> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE page_number = ?")
            .bind(i64::from(page_number))
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(result.rows_affected())
    }

    async fn get_or_create_settings(&self) -> PortResult<Settings> {
        let mut conn = self.pool.acquire().await.map_err(unexpected)?;
        load_or_create_settings(&mut *conn).await
    }

    async fn update_settings(&self, update: SettingsUpdate) -> PortResult<Settings> {
        // The default-row insert is the first statement, so the write lock is
        // held from the read through to the update.
        let mut tx = self.pool.begin().await.map_err(unexpected)?;
        let next = load_or_create_settings(&mut *tx).await?.apply(update)?;

        sqlx::query(
            "UPDATE settings SET dark_mode = ?, font_size = ?, arabic_font = ?, translation_language = ?, info_text_size = ? WHERE id = 1",
        )
        .bind(next.dark_mode)
        .bind(i64::from(next.font_size))
        .bind(&next.arabic_font)
        .bind(&next.translation_language)
        .bind(i64::from(next.info_text_size))
        .execute(&mut *tx)
        .await
        .map_err(unexpected)?;

        tx.commit().await.map_err(unexpected)?;
        Ok(next)
    }

    async fn record_search(&self, entry: SearchHistoryEntry, keep: u32) -> PortResult<()> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        sqlx::query(
            "INSERT INTO search_history (id, query, created_at, result_type) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.id)
        .bind(&entry.query)
        .bind(entry.created_at)
        .bind(entry.result_type.as_str())
        .execute(&mut *tx)
        .await
        .map_err(unexpected)?;

        let pruned = sqlx::query(
            "DELETE FROM search_history WHERE id NOT IN (SELECT id FROM search_history ORDER BY created_at DESC, rowid DESC LIMIT ?)",
        )
        .bind(i64::from(keep))
        .execute(&mut *tx)
        .await
        .map_err(unexpected)?
        .rows_affected();

        tx.commit().await.map_err(unexpected)?;
        debug!(query = %entry.query, pruned, "Search recorded");
        Ok(())
    }

    async fn recent_searches(&self, limit: u32) -> PortResult<Vec<SearchHistoryEntry>> {
        let records = sqlx::query_as::<_, SearchHistoryRecord>(
            "SELECT id, query, created_at, result_type FROM search_history ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        records.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn delete_search(&self, entry_id: Uuid) -> PortResult<()> {
        let result = sqlx::query("DELETE FROM search_history WHERE id = ?")
            .bind(entry_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Search entry {} not found", entry_id)));
        }
        Ok(())
    }

    async fn clear_search_history(&self) -> PortResult<u64> {
        let result = sqlx::query("DELETE FROM search_history")
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surah_record(id: i64) -> SurahRecord {
        SurahRecord {
            id,
            arabic_name: "الفاتحة".to_string(),
            transliterated_name: "Al-Fatihah".to_string(),
            translated_name: "The Opener".to_string(),
            verse_count: 7,
            revelation_place: "meccan".to_string(),
            juz_number: 1,
            start_page: 1,
        }
    }

    #[test]
    fn in_range_row_converts() {
        let surah = surah_record(1).to_domain().unwrap();
        assert_eq!(surah.id, 1);
        assert_eq!(surah.revelation_place, RevelationPlace::Meccan);
    }

    #[test]
    fn oversized_id_is_rejected_rather_than_wrapped() {
        assert!(matches!(surah_record(300).to_domain(), Err(PortError::Unexpected(_))));
        assert!(matches!(surah_record(-1).to_domain(), Err(PortError::Unexpected(_))));
    }

    #[test]
    fn out_of_range_page_and_ayah_values_are_rejected() {
        let bookmark = BookmarkRecord {
            id: Uuid::new_v4(),
            page_number: 70_000,
            surah_name: "Al-Kahf".to_string(),
            surah_id: 18,
            note: None,
            created_at: Utc::now(),
        };
        assert!(bookmark.to_domain().is_err());

        let juz = JuzRecord {
            id: 1,
            start_surah: 1,
            start_ayah: 1,
            end_surah: 2,
            end_ayah: -141,
        };
        assert!(juz.to_domain().is_err());
    }
}
