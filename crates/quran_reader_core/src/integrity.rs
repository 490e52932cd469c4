//! crates/quran_reader_core/src/integrity.rs
//!
//! The validated, immutable reference arena.
//!
//! The locator, resolver and search functions assume well-formed lists and do
//! not check them. [`ReferenceData::new`] is the gate the loading side passes
//! its Surah and Juz lists through once at startup; everything downstream
//! borrows from the result.

use tracing::debug;

use crate::domain::{
    Juz, PageInfo, PageRange, SearchResult, Surah, TOTAL_AYAHS, TOTAL_JUZ, TOTAL_PAGES,
    TOTAL_SURAHS,
};
use crate::juz_range::{resolve_with_locator, surahs_in_juz};
use crate::locator::PageLocator;
use crate::search::search_with_locator;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("expected {expected} surahs, found {found}")]
    SurahCount { expected: usize, found: usize },
    #[error("surah ids must run 1..=114 without gaps, found {found} at position {position}")]
    SurahId { position: usize, found: u8 },
    #[error("surah {0} has a start page outside 1..=604")]
    StartPageOutOfRange(u8),
    #[error("surah {0} starts before the surah preceding it")]
    StartPageDecreasing(u8),
    #[error("surah {0} must start on page 1")]
    FirstPage(u8),
    #[error("surah {0} names a juz outside 1..=30")]
    JuzNumberOutOfRange(u8),
    #[error("verse counts sum to {0}, expected 6236")]
    AyahTotal(u32),
    #[error("expected {expected} juz, found {found}")]
    JuzCount { expected: usize, found: usize },
    #[error("juz ids must run 1..=30 without gaps, found {found} at position {position}")]
    JuzId { position: usize, found: u8 },
    #[error("juz {0} references a verse that does not exist")]
    JuzBoundary(u8),
    #[error("juz {0} does not start right after the previous juz ends")]
    JuzGap(u8),
    #[error("juz divisions must start at 1:1 and end at the last verse of surah 114")]
    JuzCoverage,
}

/// Surah and Juz lists that passed validation, held in id order.
#[derive(Debug)]
pub struct ReferenceData {
    surahs: Vec<Surah>,
    juz_list: Vec<Juz>,
}

impl ReferenceData {
    /// Validates and takes ownership of the lists, in any order.
    pub fn new(mut surahs: Vec<Surah>, mut juz_list: Vec<Juz>) -> Result<Self, IntegrityError> {
        surahs.sort_by_key(|s| s.id);
        juz_list.sort_by_key(|j| j.id);

        check_surahs(&surahs)?;
        check_juz(&juz_list, &surahs)?;

        debug!(
            surahs = surahs.len(),
            juz = juz_list.len(),
            "Reference data passed integrity checks"
        );

        Ok(Self { surahs, juz_list })
    }

    /// Loads the compiled-in canonical tables.
    pub fn canonical() -> Result<Self, IntegrityError> {
        Self::new(crate::reference::surahs(), crate::reference::juz_divisions())
    }

    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn juz_list(&self) -> &[Juz] {
        &self.juz_list
    }

    pub fn surah(&self, id: u8) -> Option<&Surah> {
        let index = usize::from(id).checked_sub(1)?;
        self.surahs.get(index)
    }

    pub fn juz(&self, id: u8) -> Option<&Juz> {
        let index = usize::from(id).checked_sub(1)?;
        self.juz_list.get(index)
    }

    /// Ids are contiguous and start pages non-decreasing in id, so id order
    /// already is start-page order and no sort is needed.
    pub fn locator(&self) -> PageLocator<'_> {
        PageLocator::presorted(&self.surahs)
    }

    pub fn surahs_in_juz(&self, juz_number: u8) -> Vec<&Surah> {
        surahs_in_juz(&self.surahs, juz_number)
    }

    /// `None` for ids outside 1..=30.
    pub fn juz_page_range(&self, juz_number: u8) -> Option<PageRange> {
        self.juz(juz_number)?;
        Some(resolve_with_locator(&self.locator(), juz_number))
    }

    pub fn surah_page_range(&self, surah_id: u8) -> Option<PageRange> {
        self.surah(surah_id)?;
        self.locator().page_range_of(surah_id)
    }

    /// Describes a reader page; `None` outside 1..=604.
    pub fn page_info(&self, page_number: u16) -> Option<PageInfo> {
        let surah = self.locator().surah_for_page(page_number)?.clone();
        let juz_number = surah.juz_number;
        Some(PageInfo {
            page_number,
            surah,
            juz_number,
            previous_page: (page_number > 1).then(|| page_number - 1),
            next_page: (page_number < TOTAL_PAGES).then(|| page_number + 1),
        })
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search_with_locator(query, &self.surahs, &self.locator(), &self.juz_list)
    }
}

fn check_surahs(surahs: &[Surah]) -> Result<(), IntegrityError> {
    if surahs.len() != usize::from(TOTAL_SURAHS) {
        return Err(IntegrityError::SurahCount {
            expected: usize::from(TOTAL_SURAHS),
            found: surahs.len(),
        });
    }

    let mut previous_page = 0u16;
    let mut ayahs = 0u32;
    for (position, surah) in surahs.iter().enumerate() {
        if usize::from(surah.id) != position + 1 {
            return Err(IntegrityError::SurahId {
                position,
                found: surah.id,
            });
        }
        if !(1..=TOTAL_PAGES).contains(&surah.start_page) {
            return Err(IntegrityError::StartPageOutOfRange(surah.id));
        }
        if surah.start_page < previous_page {
            return Err(IntegrityError::StartPageDecreasing(surah.id));
        }
        if !(1..=TOTAL_JUZ).contains(&surah.juz_number) {
            return Err(IntegrityError::JuzNumberOutOfRange(surah.id));
        }
        previous_page = surah.start_page;
        ayahs += u32::from(surah.verse_count);
    }

    if surahs[0].start_page != 1 {
        return Err(IntegrityError::FirstPage(surahs[0].id));
    }
    if ayahs != TOTAL_AYAHS {
        return Err(IntegrityError::AyahTotal(ayahs));
    }
    Ok(())
}

fn check_juz(juz_list: &[Juz], surahs: &[Surah]) -> Result<(), IntegrityError> {
    if juz_list.len() != usize::from(TOTAL_JUZ) {
        return Err(IntegrityError::JuzCount {
            expected: usize::from(TOTAL_JUZ),
            found: juz_list.len(),
        });
    }

    let verse_count = |surah_id: u8| -> Option<u16> {
        let index = usize::from(surah_id).checked_sub(1)?;
        surahs.get(index).map(|s| s.verse_count)
    };
    let is_verse = |surah_id: u8, ayah: u16| -> bool {
        verse_count(surah_id).is_some_and(|count| (1..=count).contains(&ayah))
    };

    let mut previous_end: Option<(u8, u16)> = None;
    for (position, juz) in juz_list.iter().enumerate() {
        if usize::from(juz.id) != position + 1 {
            return Err(IntegrityError::JuzId {
                position,
                found: juz.id,
            });
        }
        if !is_verse(juz.start_surah, juz.start_ayah)
            || !is_verse(juz.end_surah, juz.end_ayah)
            || (juz.start_surah, juz.start_ayah) > (juz.end_surah, juz.end_ayah)
        {
            return Err(IntegrityError::JuzBoundary(juz.id));
        }

        let expected_start = match previous_end {
            None => (1, 1),
            Some((surah_id, ayah)) if Some(ayah) == verse_count(surah_id) => (surah_id + 1, 1),
            Some((surah_id, ayah)) => (surah_id, ayah + 1),
        };
        if (juz.start_surah, juz.start_ayah) != expected_start {
            return Err(if previous_end.is_none() {
                IntegrityError::JuzCoverage
            } else {
                IntegrityError::JuzGap(juz.id)
            });
        }
        previous_end = Some((juz.end_surah, juz.end_ayah));
    }

    let last_surah = &surahs[surahs.len() - 1];
    if previous_end != Some((last_surah.id, last_surah.verse_count)) {
        return Err(IntegrityError::JuzCoverage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    #[test]
    fn canonical_tables_pass() {
        let data = ReferenceData::canonical().unwrap();
        assert_eq!(data.surahs().len(), 114);
        assert_eq!(data.juz_list().len(), 30);
        assert_eq!(data.surah(114).map(|s| s.transliterated_name.as_str()), Some("An-Nas"));
        assert!(data.surah(0).is_none());
        assert!(data.juz(31).is_none());
    }

    #[test]
    fn accepts_lists_in_any_order() {
        let mut surahs = reference::surahs();
        let mut juz = reference::juz_divisions();
        surahs.reverse();
        juz.reverse();
        let data = ReferenceData::new(surahs, juz).unwrap();
        assert_eq!(data.surahs()[0].id, 1);
        assert_eq!(data.juz_list()[29].id, 30);
    }

    #[test]
    fn rejects_partial_surah_list() {
        let mut surahs = reference::surahs();
        surahs.truncate(100);
        assert_eq!(
            ReferenceData::new(surahs, reference::juz_divisions()).unwrap_err(),
            IntegrityError::SurahCount {
                expected: 114,
                found: 100
            }
        );
        assert!(matches!(
            ReferenceData::new(Vec::new(), Vec::new()),
            Err(IntegrityError::SurahCount { .. })
        ));
    }

    #[test]
    fn rejects_decreasing_start_pages() {
        let mut surahs = reference::surahs();
        surahs[9].start_page = 100;
        assert_eq!(
            ReferenceData::new(surahs, reference::juz_divisions()).unwrap_err(),
            IntegrityError::StartPageDecreasing(10)
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut surahs = reference::surahs();
        surahs[5].id = 5;
        assert!(matches!(
            ReferenceData::new(surahs, reference::juz_divisions()),
            Err(IntegrityError::SurahId { .. })
        ));
    }

    #[test]
    fn rejects_gap_between_juz() {
        let mut juz = reference::juz_divisions();
        juz[1].start_ayah = 150;
        assert_eq!(
            ReferenceData::new(reference::surahs(), juz).unwrap_err(),
            IntegrityError::JuzGap(2)
        );
    }

    #[test]
    fn rejects_boundary_past_surah_end() {
        let mut juz = reference::juz_divisions();
        juz[0].end_ayah = 300;
        assert_eq!(
            ReferenceData::new(reference::surahs(), juz).unwrap_err(),
            IntegrityError::JuzBoundary(1)
        );
    }

    #[test]
    fn rejects_truncated_final_juz() {
        let mut juz = reference::juz_divisions();
        juz[29].end_surah = 113;
        juz[29].end_ayah = 5;
        assert_eq!(
            ReferenceData::new(reference::surahs(), juz).unwrap_err(),
            IntegrityError::JuzCoverage
        );
    }

    #[test]
    fn page_info_describes_neighbours() {
        let data = ReferenceData::canonical().unwrap();

        let first = data.page_info(1).unwrap();
        assert_eq!(first.surah.id, 1);
        assert_eq!(first.previous_page, None);
        assert_eq!(first.next_page, Some(2));

        let last = data.page_info(604).unwrap();
        assert_eq!(last.surah.id, 114);
        assert_eq!(last.juz_number, 30);
        assert_eq!(last.next_page, None);

        assert!(data.page_info(0).is_none());
        assert!(data.page_info(605).is_none());
    }

    #[test]
    fn juz_page_range_rejects_unknown_ids() {
        let data = ReferenceData::canonical().unwrap();
        assert_eq!(data.juz_page_range(1), Some(PageRange::new(1, 49)));
        assert_eq!(data.juz_page_range(0), None);
        assert_eq!(data.juz_page_range(31), None);
        assert_eq!(data.surah_page_range(2), Some(PageRange::new(2, 49)));
    }
}
