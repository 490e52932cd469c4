//! Property tests over the canonical reference tables.

use proptest::prelude::*;
use quran_reader_core::{
    find_surah_for_page, juz_for_page, reference, resolve_juz_page_range, search, PageLocator,
    SearchResult, Surah, TOTAL_PAGES,
};

#[test]
fn every_page_has_exactly_one_owner() {
    let surahs = reference::surahs();
    let locator = PageLocator::new(&surahs);
    let ranges = locator.ranges();

    for page in 1..=TOTAL_PAGES {
        let owners: Vec<&Surah> = ranges
            .iter()
            .filter(|(_, range)| range.contains(page))
            .map(|(surah, _)| *surah)
            .collect();
        assert_eq!(owners.len(), 1, "page {} has {} owners", page, owners.len());

        let found = find_surah_for_page(&surahs, page).expect("page should be owned");
        assert_eq!(found.id, owners[0].id);
    }
}

#[test]
fn juz_ranges_ascend_where_surahs_begin_inside_them() {
    let surahs = reference::surahs();
    let mut previous_end = 0u16;
    for juz in 1..=30u8 {
        if !surahs.iter().any(|s| s.juz_number == juz) {
            continue;
        }
        let range = resolve_juz_page_range(&surahs, juz);
        assert!(range.start_page > previous_end, "juz {} overlaps its predecessor", juz);
        assert!(range.start_page <= range.end_page);
        previous_end = range.end_page;
    }
    assert_eq!(previous_end, TOTAL_PAGES);
}

#[test]
fn numeric_query_five_is_both_juz_and_page() {
    let surahs = reference::surahs();
    let juz = reference::juz_divisions();
    let results = search("5", &surahs, &juz);
    assert!(results
        .iter()
        .any(|r| matches!(r, SearchResult::Juz { juz_number: 5, .. })));
    assert!(results.contains(&SearchResult::Page { page_number: 5 }));
}

proptest! {
    #[test]
    fn owner_starts_on_or_before_page(page in 1u16..=TOTAL_PAGES) {
        let surahs = reference::surahs();
        let owner = find_surah_for_page(&surahs, page).unwrap();
        prop_assert!(owner.start_page <= page);
        prop_assert!(surahs
            .iter()
            .filter(|s| s.id > owner.id)
            .all(|s| s.start_page > page));
        prop_assert_eq!(juz_for_page(&surahs, page), owner.juz_number);
    }

    #[test]
    fn pages_past_the_mushaf_are_unowned(page in (TOTAL_PAGES + 1)..=u16::MAX) {
        let surahs = reference::surahs();
        prop_assert!(find_surah_for_page(&surahs, page).is_none());
    }

    #[test]
    fn search_is_deterministic(query in "\\PC{0,12}") {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        prop_assert_eq!(search(&query, &surahs, &juz), search(&query, &surahs, &juz));
    }

    #[test]
    fn numeric_results_precede_surah_matches(number in 0i64..700) {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        let results = search(&number.to_string(), &surahs, &juz);
        let first_surah = results
            .iter()
            .position(|r| matches!(r, SearchResult::Surah { .. }))
            .unwrap_or(results.len());
        let tail_all_surahs = results[first_surah..]
            .iter()
            .all(|r| matches!(r, SearchResult::Surah { .. }));
        prop_assert!(tail_all_surahs);
        prop_assert_eq!(
            results.contains(&SearchResult::Page { page_number: number as u16 }),
            (1..=604).contains(&number)
        );
    }
}
