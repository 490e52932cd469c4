//! crates/quran_reader_core/src/locator.rs
//!
//! Maps a page number to the Surah that owns it.
//!
//! Ownership is decided by start pages alone: a Surah owns
//! `[start_page, next.start_page - 1]`, the last one owns up to page 604.
//! Surahs that share a start page with their successor get an empty range,
//! so every page in `1..=604` has exactly one owner.

use crate::domain::{PageRange, Surah, TOTAL_PAGES};

/// Juz reported when a page has no owning Surah.
pub const FALLBACK_JUZ: u8 = 1;

/// A start-page-ordered view over a Surah list, built once and queried many times.
#[derive(Debug, Clone)]
pub struct PageLocator<'a> {
    sorted: Vec<&'a Surah>,
}

impl<'a> PageLocator<'a> {
    /// Sorts by start page, ties broken by id.
    pub fn new(surahs: &'a [Surah]) -> Self {
        let mut sorted: Vec<&Surah> = surahs.iter().collect();
        sorted.sort_by_key(|s| (s.start_page, s.id));
        Self { sorted }
    }

    /// Trusts that `surahs` is already ordered by `(start_page, id)`.
    pub(crate) fn presorted(surahs: &'a [Surah]) -> Self {
        Self {
            sorted: surahs.iter().collect(),
        }
    }

    /// The Surahs in start-page order.
    pub fn sorted(&self) -> &[&'a Surah] {
        &self.sorted
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn surah_for_page(&self, page: u16) -> Option<&'a Surah> {
        if !(1..=TOTAL_PAGES).contains(&page) {
            return None;
        }
        // The owner is the last Surah starting on or before `page`; every later
        // Surah starts after it, so its range reaches at least `page`.
        let idx = self.sorted.partition_point(|s| s.start_page <= page);
        idx.checked_sub(1).map(|i| self.sorted[i])
    }

    /// Juz of the owning Surah's first verse, or [`FALLBACK_JUZ`] when the page is unowned.
    pub fn juz_for_page(&self, page: u16) -> u8 {
        self.surah_for_page(page)
            .map(|s| s.juz_number)
            .unwrap_or(FALLBACK_JUZ)
    }

    /// The inclusive range of the Surah at `position` in start-page order.
    pub fn range_at(&self, position: usize) -> Option<PageRange> {
        let surah = self.sorted.get(position)?;
        let end_page = match self.sorted.get(position + 1) {
            Some(next) => next.start_page.saturating_sub(1),
            None => TOTAL_PAGES,
        };
        Some(PageRange::new(surah.start_page, end_page))
    }

    pub fn page_range_of(&self, surah_id: u8) -> Option<PageRange> {
        let position = self.sorted.iter().position(|s| s.id == surah_id)?;
        self.range_at(position)
    }

    /// Every Surah with its owned range, in start-page order.
    pub fn ranges(&self) -> Vec<(&'a Surah, PageRange)> {
        (0..self.sorted.len())
            .filter_map(|i| self.range_at(i).map(|range| (self.sorted[i], range)))
            .collect()
    }
}

/// Finds the Surah owning `page`. Sorts on every call; prefer a shared
/// [`PageLocator`] for repeated lookups.
pub fn find_surah_for_page(surahs: &[Surah], page: u16) -> Option<&Surah> {
    PageLocator::new(surahs).surah_for_page(page)
}

/// Juz for `page`, falling back to Juz 1 when no Surah owns it.
pub fn juz_for_page(surahs: &[Surah], page: u16) -> u8 {
    PageLocator::new(surahs).juz_for_page(page)
}
