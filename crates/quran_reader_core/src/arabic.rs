//! crates/quran_reader_core/src/arabic.rs
//!
//! Text folding used by the search engine so that a query typed with or
//! without tashkeel, and with any alef variant, finds the same Surah name.

/// Tashkeel, Quranic annotation marks and tatweel.
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}

/// Folds `text` into the form compared by search:
/// - lowercase (Latin transliterations and translations)
/// - alef variants (أ إ آ ٱ) become a plain alef (ا)
/// - alef maqsura (ى) becomes ya (ي)
/// - ta marbuta (ة) becomes ha (ه)
/// - diacritics and tatweel are dropped
pub fn normalize_for_search(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.chars() {
        if is_diacritic(c) {
            continue;
        }
        match c {
            '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' => folded.push('\u{0627}'),
            '\u{0649}' => folded.push('\u{064A}'),
            '\u{0629}' => folded.push('\u{0647}'),
            _ => folded.extend(c.to_lowercase()),
        }
    }

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tashkeel() {
        assert_eq!(normalize_for_search("الْفَاتِحَة"), normalize_for_search("الفاتحة"));
    }

    #[test]
    fn unifies_alef_variants() {
        assert_eq!(normalize_for_search("إبراهيم"), "ابراهيم");
        assert_eq!(normalize_for_search("آل عمران"), "ال عمران");
    }

    #[test]
    fn folds_ta_marbuta_and_alef_maqsura() {
        assert_eq!(normalize_for_search("البقرة"), "البقره");
        assert_eq!(normalize_for_search("الشورى"), "الشوري");
    }

    #[test]
    fn lowercases_latin_text() {
        assert_eq!(normalize_for_search("Al-BAQARAH"), "al-baqarah");
    }
}
