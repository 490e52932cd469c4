//! crates/quran_reader_core/src/reference.rs
//!
//! The canonical reference tables: 114 Surahs and 30 Juz in the standard
//! Madani 604-page layout. These are the seed rows the persistence adapter
//! writes on first start; running code reads them back through the port and
//! validates them with [`crate::ReferenceData::new`].

use crate::domain::{Juz, RevelationPlace, Surah};

use RevelationPlace::{Meccan as MC, Medinan as MD};

// (arabic, transliterated, translated, verses, place, juz, start page), in id order.
const SURAH_TABLE: [(&str, &str, &str, u16, RevelationPlace, u8, u16); 114] = [
    ("الفاتحة", "Al-Fatihah", "The Opener", 7, MC, 1, 1),
    ("البقرة", "Al-Baqarah", "The Cow", 286, MD, 1, 2),
    ("آل عمران", "Ali 'Imran", "Family of Imran", 200, MD, 3, 50),
    ("النساء", "An-Nisa", "The Women", 176, MD, 4, 77),
    ("المائدة", "Al-Ma'idah", "The Table Spread", 120, MD, 6, 106),
    ("الأنعام", "Al-An'am", "The Cattle", 165, MC, 7, 128),
    ("الأعراف", "Al-A'raf", "The Heights", 206, MC, 8, 151),
    ("الأنفال", "Al-Anfal", "The Spoils of War", 75, MD, 9, 177),
    ("التوبة", "At-Tawbah", "The Repentance", 129, MD, 10, 187),
    ("يونس", "Yunus", "Jonah", 109, MC, 11, 208),
    ("هود", "Hud", "Hud", 123, MC, 11, 221),
    ("يوسف", "Yusuf", "Joseph", 111, MC, 12, 235),
    ("الرعد", "Ar-Ra'd", "The Thunder", 43, MD, 13, 249),
    ("إبراهيم", "Ibrahim", "Abraham", 52, MC, 13, 255),
    ("الحجر", "Al-Hijr", "The Rocky Tract", 99, MC, 14, 262),
    ("النحل", "An-Nahl", "The Bee", 128, MC, 14, 267),
    ("الإسراء", "Al-Isra", "The Night Journey", 111, MC, 15, 282),
    ("الكهف", "Al-Kahf", "The Cave", 110, MC, 15, 293),
    ("مريم", "Maryam", "Mary", 98, MC, 16, 305),
    ("طه", "Taha", "Ta-Ha", 135, MC, 16, 312),
    ("الأنبياء", "Al-Anbya", "The Prophets", 112, MC, 17, 322),
    ("الحج", "Al-Hajj", "The Pilgrimage", 78, MD, 17, 332),
    ("المؤمنون", "Al-Mu'minun", "The Believers", 118, MC, 18, 342),
    ("النور", "An-Nur", "The Light", 64, MD, 18, 350),
    ("الفرقان", "Al-Furqan", "The Criterion", 77, MC, 18, 359),
    ("الشعراء", "Ash-Shu'ara", "The Poets", 227, MC, 19, 367),
    ("النمل", "An-Naml", "The Ant", 93, MC, 19, 377),
    ("القصص", "Al-Qasas", "The Stories", 88, MC, 20, 385),
    ("العنكبوت", "Al-'Ankabut", "The Spider", 69, MC, 20, 396),
    ("الروم", "Ar-Rum", "The Romans", 60, MC, 21, 404),
    ("لقمان", "Luqman", "Luqman", 34, MC, 21, 411),
    ("السجدة", "As-Sajdah", "The Prostration", 30, MC, 21, 415),
    ("الأحزاب", "Al-Ahzab", "The Combined Forces", 73, MD, 21, 418),
    ("سبإ", "Saba", "Sheba", 54, MC, 22, 428),
    ("فاطر", "Fatir", "Originator", 45, MC, 22, 434),
    ("يس", "Ya-Sin", "Ya Sin", 83, MC, 22, 440),
    ("الصافات", "As-Saffat", "Those Who Set the Ranks", 182, MC, 23, 446),
    ("ص", "Sad", "The Letter Sad", 88, MC, 23, 453),
    ("الزمر", "Az-Zumar", "The Troops", 75, MC, 23, 458),
    ("غافر", "Ghafir", "The Forgiver", 85, MC, 24, 467),
    ("فصلت", "Fussilat", "Explained in Detail", 54, MC, 24, 477),
    ("الشورى", "Ash-Shuraa", "The Consultation", 53, MC, 25, 483),
    ("الزخرف", "Az-Zukhruf", "The Ornaments of Gold", 89, MC, 25, 489),
    ("الدخان", "Ad-Dukhan", "The Smoke", 59, MC, 25, 496),
    ("الجاثية", "Al-Jathiyah", "The Crouching", 37, MC, 25, 499),
    ("الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills", 35, MC, 26, 502),
    ("محمد", "Muhammad", "Muhammad", 38, MD, 26, 507),
    ("الفتح", "Al-Fath", "The Victory", 29, MD, 26, 511),
    ("الحجرات", "Al-Hujurat", "The Rooms", 18, MD, 26, 515),
    ("ق", "Qaf", "The Letter Qaf", 45, MC, 26, 518),
    ("الذاريات", "Adh-Dhariyat", "The Winnowing Winds", 60, MC, 26, 520),
    ("الطور", "At-Tur", "The Mount", 49, MC, 27, 523),
    ("النجم", "An-Najm", "The Star", 62, MC, 27, 526),
    ("القمر", "Al-Qamar", "The Moon", 55, MC, 27, 528),
    ("الرحمن", "Ar-Rahman", "The Beneficent", 78, MD, 27, 531),
    ("الواقعة", "Al-Waqi'ah", "The Inevitable", 96, MC, 27, 534),
    ("الحديد", "Al-Hadid", "The Iron", 29, MD, 27, 537),
    ("المجادلة", "Al-Mujadila", "The Pleading Woman", 22, MD, 28, 542),
    ("الحشر", "Al-Hashr", "The Exile", 24, MD, 28, 545),
    ("الممتحنة", "Al-Mumtahanah", "She That Is to Be Examined", 13, MD, 28, 549),
    ("الصف", "As-Saf", "The Ranks", 14, MD, 28, 551),
    ("الجمعة", "Al-Jumu'ah", "The Congregation", 11, MD, 28, 553),
    ("المنافقون", "Al-Munafiqun", "The Hypocrites", 11, MD, 28, 554),
    ("التغابن", "At-Taghabun", "The Mutual Disillusion", 18, MD, 28, 556),
    ("الطلاق", "At-Talaq", "The Divorce", 12, MD, 28, 558),
    ("التحريم", "At-Tahrim", "The Prohibition", 12, MD, 28, 560),
    ("الملك", "Al-Mulk", "The Sovereignty", 30, MC, 29, 562),
    ("القلم", "Al-Qalam", "The Pen", 52, MC, 29, 564),
    ("الحاقة", "Al-Haqqah", "The Reality", 52, MC, 29, 566),
    ("المعارج", "Al-Ma'arij", "The Ascending Stairways", 44, MC, 29, 568),
    ("نوح", "Nuh", "Noah", 28, MC, 29, 570),
    ("الجن", "Al-Jinn", "The Jinn", 28, MC, 29, 572),
    ("المزمل", "Al-Muzzammil", "The Enshrouded One", 20, MC, 29, 574),
    ("المدثر", "Al-Muddaththir", "The Cloaked One", 56, MC, 29, 575),
    ("القيامة", "Al-Qiyamah", "The Resurrection", 40, MC, 29, 577),
    ("الإنسان", "Al-Insan", "The Man", 31, MD, 29, 578),
    ("المرسلات", "Al-Mursalat", "The Emissaries", 50, MC, 29, 580),
    ("النبإ", "An-Naba", "The Tidings", 40, MC, 30, 582),
    ("النازعات", "An-Nazi'at", "Those Who Drag Forth", 46, MC, 30, 583),
    ("عبس", "'Abasa", "He Frowned", 42, MC, 30, 585),
    ("التكوير", "At-Takwir", "The Overthrowing", 29, MC, 30, 586),
    ("الانفطار", "Al-Infitar", "The Cleaving", 19, MC, 30, 587),
    ("المطففين", "Al-Mutaffifin", "The Defrauding", 36, MC, 30, 587),
    ("الانشقاق", "Al-Inshiqaq", "The Sundering", 25, MC, 30, 589),
    ("البروج", "Al-Buruj", "The Mansions of the Stars", 22, MC, 30, 590),
    ("الطارق", "At-Tariq", "The Nightcomer", 17, MC, 30, 591),
    ("الأعلى", "Al-A'la", "The Most High", 19, MC, 30, 591),
    ("الغاشية", "Al-Ghashiyah", "The Overwhelming", 26, MC, 30, 592),
    ("الفجر", "Al-Fajr", "The Dawn", 30, MC, 30, 593),
    ("البلد", "Al-Balad", "The City", 20, MC, 30, 594),
    ("الشمس", "Ash-Shams", "The Sun", 15, MC, 30, 595),
    ("الليل", "Al-Layl", "The Night", 21, MC, 30, 595),
    ("الضحى", "Ad-Duhaa", "The Morning Hours", 11, MC, 30, 596),
    ("الشرح", "Ash-Sharh", "The Relief", 8, MC, 30, 596),
    ("التين", "At-Tin", "The Fig", 8, MC, 30, 597),
    ("العلق", "Al-'Alaq", "The Clot", 19, MC, 30, 597),
    ("القدر", "Al-Qadr", "The Power", 5, MC, 30, 598),
    ("البينة", "Al-Bayyinah", "The Clear Proof", 8, MD, 30, 598),
    ("الزلزلة", "Az-Zalzalah", "The Earthquake", 8, MD, 30, 599),
    ("العاديات", "Al-'Adiyat", "The Courser", 11, MC, 30, 599),
    ("القارعة", "Al-Qari'ah", "The Calamity", 11, MC, 30, 600),
    ("التكاثر", "At-Takathur", "The Rivalry in World Increase", 8, MC, 30, 600),
    ("العصر", "Al-'Asr", "The Declining Day", 3, MC, 30, 601),
    ("الهمزة", "Al-Humazah", "The Traducer", 9, MC, 30, 601),
    ("الفيل", "Al-Fil", "The Elephant", 5, MC, 30, 601),
    ("قريش", "Quraysh", "Quraysh", 4, MC, 30, 602),
    ("الماعون", "Al-Ma'un", "The Small Kindnesses", 7, MC, 30, 602),
    ("الكوثر", "Al-Kawthar", "The Abundance", 3, MC, 30, 602),
    ("الكافرون", "Al-Kafirun", "The Disbelievers", 6, MC, 30, 603),
    ("النصر", "An-Nasr", "The Divine Support", 3, MD, 30, 603),
    ("المسد", "Al-Masad", "The Palm Fiber", 5, MC, 30, 603),
    ("الإخلاص", "Al-Ikhlas", "The Sincerity", 4, MC, 30, 604),
    ("الفلق", "Al-Falaq", "The Daybreak", 5, MC, 30, 604),
    ("الناس", "An-Nas", "Mankind", 6, MC, 30, 604),
];

// (start surah, start ayah, end surah, end ayah), in id order.
const JUZ_TABLE: [(u8, u16, u8, u16); 30] = [
    (1, 1, 2, 141),
    (2, 142, 2, 252),
    (2, 253, 3, 92),
    (3, 93, 4, 23),
    (4, 24, 4, 147),
    (4, 148, 5, 81),
    (5, 82, 6, 110),
    (6, 111, 7, 87),
    (7, 88, 8, 40),
    (8, 41, 9, 92),
    (9, 93, 11, 5),
    (11, 6, 12, 52),
    (12, 53, 14, 52),
    (15, 1, 16, 128),
    (17, 1, 18, 74),
    (18, 75, 20, 135),
    (21, 1, 22, 78),
    (23, 1, 25, 20),
    (25, 21, 27, 55),
    (27, 56, 29, 45),
    (29, 46, 33, 30),
    (33, 31, 36, 27),
    (36, 28, 39, 31),
    (39, 32, 41, 46),
    (41, 47, 45, 37),
    (46, 1, 51, 30),
    (51, 31, 57, 29),
    (58, 1, 66, 12),
    (67, 1, 77, 50),
    (78, 1, 114, 6),
];

/// All 114 Surahs in canonical id order.
pub fn surahs() -> Vec<Surah> {
    SURAH_TABLE
        .iter()
        .zip(1u8..)
        .map(
            |(&(arabic, transliterated, translated, verses, place, juz, page), id)| Surah {
                id,
                arabic_name: arabic.to_string(),
                transliterated_name: transliterated.to_string(),
                translated_name: translated.to_string(),
                verse_count: verses,
                revelation_place: place,
                juz_number: juz,
                start_page: page,
            },
        )
        .collect()
}

/// All 30 Juz in id order.
pub fn juz_divisions() -> Vec<Juz> {
    JUZ_TABLE
        .iter()
        .zip(1u8..)
        .map(|(&(start_surah, start_ayah, end_surah, end_ayah), id)| Juz {
            id,
            start_surah,
            start_ayah,
            end_surah,
            end_ayah,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TOTAL_AYAHS, TOTAL_JUZ, TOTAL_SURAHS};

    #[test]
    fn tables_have_canonical_sizes() {
        assert_eq!(surahs().len(), usize::from(TOTAL_SURAHS));
        assert_eq!(juz_divisions().len(), usize::from(TOTAL_JUZ));
    }

    #[test]
    fn verse_counts_sum_to_total_ayahs() {
        let total: u32 = surahs().iter().map(|s| u32::from(s.verse_count)).sum();
        assert_eq!(total, TOTAL_AYAHS);
    }

    #[test]
    fn revelation_split_is_86_meccan_28_medinan() {
        let medinan = surahs()
            .iter()
            .filter(|s| s.revelation_place == RevelationPlace::Medinan)
            .count();
        assert_eq!(medinan, 28);
    }

    #[test]
    fn each_surah_juz_contains_its_first_verse() {
        let juz = juz_divisions();
        for surah in surahs() {
            let division = &juz[usize::from(surah.juz_number) - 1];
            let first_verse = (surah.id, 1u16);
            assert!(
                (division.start_surah, division.start_ayah) <= first_verse
                    && first_verse <= (division.end_surah, division.end_ayah),
                "surah {} does not start in juz {}",
                surah.id,
                surah.juz_number
            );
        }
    }
}
