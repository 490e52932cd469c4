//! crates/quran_reader_core/src/juz_range.rs
//!
//! Derives the page span of a Juz from Surah start pages.
//!
//! Juz boundaries are verse-level but this works at Surah granularity: a Juz
//! runs from the first page of the first Surah that begins inside it to the
//! page before the Surah following the last one that begins inside it. A Juz
//! that starts mid-Surah (Juz 2 begins at Al-Baqarah 142) has no member
//! Surahs and resolves to the whole mushaf. This is a known approximation of
//! the printed layout, where a single page may hold verses of two Juz.

use crate::domain::{PageRange, Surah, TOTAL_PAGES};
use crate::locator::PageLocator;

/// Resolves the page range of `juz_number` against an arbitrary Surah list.
pub fn resolve_juz_page_range(surahs: &[Surah], juz_number: u8) -> PageRange {
    resolve_with_locator(&PageLocator::new(surahs), juz_number)
}

pub fn resolve_with_locator(locator: &PageLocator<'_>, juz_number: u8) -> PageRange {
    let sorted = locator.sorted();
    let first = sorted.iter().position(|s| s.juz_number == juz_number);
    let last = sorted.iter().rposition(|s| s.juz_number == juz_number);

    match (first, last) {
        (Some(first), Some(last)) => {
            let end_page = match sorted.get(last + 1) {
                Some(next) => next.start_page.saturating_sub(1),
                None => TOTAL_PAGES,
            };
            PageRange::new(sorted[first].start_page, end_page)
        }
        _ => PageRange::new(1, TOTAL_PAGES),
    }
}

/// The Surahs whose first verse lies in `juz_number`, in the given order.
pub fn surahs_in_juz(surahs: &[Surah], juz_number: u8) -> Vec<&Surah> {
    surahs.iter().filter(|s| s.juz_number == juz_number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    #[test]
    fn first_juz_spans_fatihah_and_baqarah() {
        let surahs = reference::surahs();
        assert_eq!(resolve_juz_page_range(&surahs, 1), PageRange::new(1, 49));
    }

    #[test]
    fn last_juz_runs_to_the_final_page() {
        let surahs = reference::surahs();
        assert_eq!(resolve_juz_page_range(&surahs, 30), PageRange::new(582, 604));
        assert_eq!(resolve_juz_page_range(&surahs, 29), PageRange::new(562, 581));
    }

    #[test]
    fn juz_without_member_surahs_falls_back_to_whole_mushaf() {
        let surahs = reference::surahs();
        assert!(surahs_in_juz(&surahs, 2).is_empty());
        assert_eq!(resolve_juz_page_range(&surahs, 2), PageRange::new(1, TOTAL_PAGES));
        assert_eq!(resolve_juz_page_range(&[], 1), PageRange::new(1, TOTAL_PAGES));
    }

    #[test]
    fn adjacent_juz_with_members_are_contiguous() {
        let surahs = reference::surahs();
        for juz in 1..30u8 {
            if surahs_in_juz(&surahs, juz).is_empty() || surahs_in_juz(&surahs, juz + 1).is_empty() {
                continue;
            }
            let current = resolve_juz_page_range(&surahs, juz);
            let next = resolve_juz_page_range(&surahs, juz + 1);
            assert!(current.start_page <= current.end_page, "juz {} is empty", juz);
            assert_eq!(current.end_page + 1, next.start_page, "juz {} -> {}", juz, juz + 1);
        }
    }

    #[test]
    fn surahs_in_juz_keeps_input_order() {
        let surahs = reference::surahs();
        let ids: Vec<u8> = surahs_in_juz(&surahs, 26).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![46, 47, 48, 49, 50, 51]);
    }
}
