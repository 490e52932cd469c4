//! crates/quran_reader_core/src/search.rs
//!
//! Classifies a free-text query and assembles the flat result list.
//!
//! A numeric query may name a Juz and a page at the same time ("5" is both),
//! and any query is also matched against Surah names and ids. Results come
//! back as Juz, then page, then Surahs in input order. There is no scoring.

use crate::arabic::normalize_for_search;
use crate::domain::{Juz, SearchResult, Surah, TOTAL_JUZ, TOTAL_PAGES};
use crate::juz_range::resolve_with_locator;
use crate::locator::PageLocator;

pub fn search(query: &str, surahs: &[Surah], juz_list: &[Juz]) -> Vec<SearchResult> {
    search_with_locator(query, surahs, &PageLocator::new(surahs), juz_list)
}

/// Same as [`search`], reusing a locator built over `surahs`.
pub fn search_with_locator(
    query: &str,
    surahs: &[Surah],
    locator: &PageLocator<'_>,
    juz_list: &[Juz],
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    if let Ok(number) = query.parse::<i64>() {
        if (1..=i64::from(TOTAL_JUZ)).contains(&number) {
            let juz_number = number as u8;
            if juz_list.iter().any(|j| j.id == juz_number) {
                let range = resolve_with_locator(locator, juz_number);
                results.push(SearchResult::Juz {
                    juz_number,
                    start_page: range.start_page,
                    end_page: range.end_page,
                });
            }
        }
        if (1..=i64::from(TOTAL_PAGES)).contains(&number) {
            results.push(SearchResult::Page {
                page_number: number as u16,
            });
        }
    }

    let needle = normalize_for_search(query);
    results.extend(
        surahs
            .iter()
            .filter(|surah| matches_surah(surah, query, &needle))
            .map(|surah| SearchResult::Surah {
                surah: surah.clone(),
            }),
    );

    results
}

/// `needle` is empty when the query was nothing but marks; such a query matches no name.
fn matches_surah(surah: &Surah, query: &str, needle: &str) -> bool {
    surah.id.to_string() == query
        || (!needle.is_empty()
            && [
                &surah.arabic_name,
                &surah.transliterated_name,
                &surah.translated_name,
            ]
            .iter()
            .any(|name| normalize_for_search(name).contains(needle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchResultType;
    use crate::reference;

    fn surah_ids(results: &[SearchResult]) -> Vec<u8> {
        results
            .iter()
            .filter_map(|r| match r {
                SearchResult::Surah { surah } => Some(surah.id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn blank_queries_return_nothing() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        assert!(search("", &surahs, &juz).is_empty());
        assert!(search("   ", &surahs, &juz).is_empty());
    }

    #[test]
    fn small_number_matches_juz_page_and_surah_id() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        let results = search("5", &surahs, &juz);

        assert_eq!(
            results[0],
            SearchResult::Juz {
                juz_number: 5,
                start_page: 1,
                end_page: TOTAL_PAGES,
            }
        );
        assert_eq!(results[1], SearchResult::Page { page_number: 5 });
        assert_eq!(surah_ids(&results), vec![5]);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn juz_result_carries_resolved_range() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        let results = search("30", &surahs, &juz);
        assert_eq!(
            results[0],
            SearchResult::Juz {
                juz_number: 30,
                start_page: 582,
                end_page: 604,
            }
        );
    }

    #[test]
    fn larger_numbers_only_match_pages_and_ids() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();

        let results = search("114", &surahs, &juz);
        assert_eq!(results[0], SearchResult::Page { page_number: 114 });
        assert_eq!(surah_ids(&results), vec![114]);

        let results = search("604", &surahs, &juz);
        assert_eq!(results, vec![SearchResult::Page { page_number: 604 }]);

        assert!(search("605", &surahs, &juz).is_empty());
        assert!(search("0", &surahs, &juz).is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        assert_eq!(surah_ids(&search("baqarah", &surahs, &juz)), vec![2]);
        assert_eq!(surah_ids(&search("BAQARAH", &surahs, &juz)), vec![2]);
        assert_eq!(surah_ids(&search("  the cow ", &surahs, &juz)), vec![2]);
    }

    #[test]
    fn text_matches_keep_canonical_order() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        let results = search("the letter", &surahs, &juz);
        assert_eq!(surah_ids(&results), vec![38, 50]);
        assert!(results.iter().all(|r| r.result_type() == SearchResultType::Surah));
    }

    #[test]
    fn arabic_query_with_tashkeel_matches_bare_name() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        assert_eq!(surah_ids(&search("الْكَهْف", &surahs, &juz)), vec![18]);
        assert_eq!(surah_ids(&search("ابراهيم", &surahs, &juz)), vec![14]);
    }

    #[test]
    fn mark_only_queries_match_no_names() {
        let surahs = reference::surahs();
        let juz = reference::juz_divisions();
        assert!(search("\u{064E}", &surahs, &juz).is_empty());
        assert!(search("\u{0640}", &surahs, &juz).is_empty());
        assert!(search("\u{0651}\u{0651}", &surahs, &juz).is_empty());
    }

    #[test]
    fn missing_juz_list_suppresses_juz_results() {
        let surahs = reference::surahs();
        let results = search("3", &surahs, &[]);
        assert_eq!(results[0], SearchResult::Page { page_number: 3 });
        assert_eq!(surah_ids(&results), vec![3]);
    }
}
