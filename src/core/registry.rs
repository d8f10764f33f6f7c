// src/core/registry.rs
//! Compiled-in code-point ranges and per-script transliteration tables.
//!
//! Devanagari, Tamil and Bengali tables carry full syllables (consonants
//! already include the inherent "a"). Telugu is split into sub-tables so the
//! converter can decide the inherent vowel from context.
use crate::core::types::{CodePointRange, Script};
use log::debug;
use phf::{phf_map, Map};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const TELUGU_VIRAMA: char = '\u{0c4d}';

static DEVANAGARI: Map<char, &str> = phf_map! {
    'अ' => "a",
    'आ' => "aa",
    'इ' => "i",
    'ई' => "ii",
    'उ' => "u",
    'ऊ' => "uu",
    'ऋ' => "ri",
    'ए' => "e",
    'ऐ' => "ai",
    'ओ' => "o",
    'औ' => "au",
    '\u{093e}' => "aa",
    '\u{093f}' => "i",
    '\u{0940}' => "ii",
    '\u{0941}' => "u",
    '\u{0942}' => "uu",
    '\u{0943}' => "ri",
    '\u{0947}' => "e",
    '\u{0948}' => "ai",
    '\u{094b}' => "o",
    '\u{094c}' => "au",
    '\u{094d}' => "",
    'क' => "ka",
    'ख' => "kha",
    'ग' => "ga",
    'घ' => "gha",
    'ङ' => "nga",
    'च' => "cha",
    'छ' => "chha",
    'ज' => "ja",
    'झ' => "jha",
    'ञ' => "nya",
    'ट' => "ta",
    'ठ' => "tha",
    'ड' => "da",
    'ढ' => "dha",
    'ण' => "na",
    'त' => "ta",
    'थ' => "tha",
    'द' => "da",
    'ध' => "dha",
    'न' => "na",
    'प' => "pa",
    'फ' => "pha",
    'ब' => "ba",
    'भ' => "bha",
    'म' => "ma",
    'य' => "ya",
    'र' => "ra",
    'ल' => "la",
    'व' => "va",
    'श' => "sha",
    'ष' => "sha",
    'स' => "sa",
    'ह' => "ha",
    '\u{0902}' => "n",
    '\u{0903}' => "h",
    '\u{0901}' => "n",
};

static TAMIL: Map<char, &str> = phf_map! {
    'அ' => "a",
    'ஆ' => "aa",
    'இ' => "i",
    'ஈ' => "ii",
    'உ' => "u",
    'ஊ' => "uu",
    'எ' => "e",
    'ஏ' => "ee",
    'ஐ' => "ai",
    'ஒ' => "o",
    'ஓ' => "oo",
    'ஔ' => "au",
    '\u{0bbe}' => "aa",
    '\u{0bbf}' => "i",
    '\u{0bc0}' => "ii",
    '\u{0bc1}' => "u",
    '\u{0bc2}' => "uu",
    '\u{0bc6}' => "e",
    '\u{0bc7}' => "ee",
    '\u{0bc8}' => "ai",
    '\u{0bca}' => "o",
    '\u{0bcb}' => "oo",
    '\u{0bcc}' => "au",
    '\u{0bcd}' => "",
    'க' => "ka",
    'ங' => "nga",
    'ச' => "cha",
    'ஞ' => "nya",
    'ட' => "ta",
    'ண' => "na",
    'த' => "tha",
    'ந' => "na",
    'ப' => "pa",
    'ம' => "ma",
    'ய' => "ya",
    'ர' => "ra",
    'ல' => "la",
    'வ' => "va",
    'ழ' => "zha",
    'ள' => "la",
    'ற' => "ra",
    'ன' => "na",
    'ஃ' => "h",
};

static TELUGU_INDEPENDENT_VOWELS: Map<char, &str> = phf_map! {
    'అ' => "a",
    'ఆ' => "aa",
    'ఇ' => "i",
    'ఈ' => "ii",
    'ఉ' => "u",
    'ఊ' => "uu",
    'ఋ' => "ri",
    'ఎ' => "e",
    'ఏ' => "ee",
    'ఐ' => "ai",
    'ఒ' => "o",
    'ఓ' => "oo",
    'ఔ' => "au",
};

static TELUGU_VOWEL_SIGNS: Map<char, &str> = phf_map! {
    '\u{0c3e}' => "aa",
    '\u{0c3f}' => "i",
    '\u{0c40}' => "ii",
    '\u{0c41}' => "u",
    '\u{0c42}' => "uu",
    '\u{0c43}' => "ri",
    '\u{0c46}' => "e",
    '\u{0c47}' => "ee",
    '\u{0c48}' => "ai",
    '\u{0c4a}' => "o",
    '\u{0c4b}' => "oo",
    '\u{0c4c}' => "au",
};

static TELUGU_CONSONANTS: Map<char, &str> = phf_map! {
    'క' => "k",
    'ఖ' => "kh",
    'గ' => "g",
    'ఘ' => "gh",
    'ఙ' => "ng",
    'చ' => "ch",
    'ఛ' => "chh",
    'జ' => "j",
    'ఝ' => "jh",
    'ఞ' => "ny",
    'ట' => "t",
    'ఠ' => "th",
    'డ' => "d",
    'ఢ' => "dh",
    'ణ' => "n",
    'త' => "t",
    'థ' => "th",
    'ద' => "d",
    'ధ' => "dh",
    'న' => "n",
    'ప' => "p",
    'ఫ' => "ph",
    'బ' => "b",
    'భ' => "bh",
    'మ' => "m",
    'య' => "y",
    'ర' => "r",
    'ల' => "l",
    'వ' => "v",
    'శ' => "sh",
    'ష' => "sh",
    'స' => "s",
    'హ' => "h",
    'ళ' => "l",
};

static TELUGU_MISC: Map<char, &str> = phf_map! {
    '\u{0c02}' => "m",
    '\u{0c03}' => "h",
    '\u{0c01}' => "n",
};

static BENGALI: Map<char, &str> = phf_map! {
    'অ' => "a",
    'আ' => "aa",
    'ই' => "i",
    'ঈ' => "ii",
    'উ' => "u",
    'ঊ' => "uu",
    'ঋ' => "ri",
    'এ' => "e",
    'ঐ' => "ai",
    'ও' => "o",
    'ঔ' => "au",
    '\u{09be}' => "aa",
    '\u{09bf}' => "i",
    '\u{09c0}' => "ii",
    '\u{09c1}' => "u",
    '\u{09c2}' => "uu",
    '\u{09c3}' => "ri",
    '\u{09c7}' => "e",
    '\u{09c8}' => "ai",
    '\u{09cb}' => "o",
    '\u{09cc}' => "au",
    '\u{09cd}' => "",
    'ক' => "ka",
    'খ' => "kha",
    'গ' => "ga",
    'ঘ' => "gha",
    'ঙ' => "nga",
    'চ' => "cha",
    'ছ' => "chha",
    'জ' => "ja",
    'ঝ' => "jha",
    'ঞ' => "nya",
    'ট' => "ta",
    'ঠ' => "tha",
    'ড' => "da",
    'ঢ' => "dha",
    'ণ' => "na",
    'ত' => "ta",
    'থ' => "tha",
    'দ' => "da",
    'ধ' => "dha",
    'ন' => "na",
    'প' => "pa",
    'ফ' => "pha",
    'ব' => "ba",
    'ভ' => "bha",
    'ম' => "ma",
    'য' => "ya",
    'র' => "ra",
    'ল' => "la",
    'শ' => "sha",
    'ষ' => "sha",
    'স' => "sa",
    'হ' => "ha",
    '\u{0982}' => "ng",
    '\u{0983}' => "h",
    '\u{0981}' => "n",
};

static ARABIC: Map<char, &str> = phf_map! {
    'ا' => "a",
    'أ' => "a",
    'إ' => "i",
    'آ' => "aa",
    'ب' => "b",
    'ت' => "t",
    'ث' => "th",
    'ج' => "j",
    'ح' => "h",
    'خ' => "kh",
    'د' => "d",
    'ذ' => "dh",
    'ر' => "r",
    'ز' => "z",
    'س' => "s",
    'ش' => "sh",
    'ص' => "s",
    'ض' => "d",
    'ط' => "t",
    'ظ' => "z",
    'ع' => "a",
    'غ' => "gh",
    'ف' => "f",
    'ق' => "q",
    'ك' => "k",
    'ل' => "l",
    'م' => "m",
    'ن' => "n",
    'ه' => "h",
    'و' => "w",
    'ي' => "y",
    'ء' => "a",
    'ى' => "a",
    'ة' => "h",
    '\u{064e}' => "a",
    '\u{0650}' => "i",
    '\u{064f}' => "u",
    '\u{0652}' => "",
    '\u{0651}' => "",
};

static CYRILLIC: Map<char, &str> = phf_map! {
    'А' => "A",
    'Б' => "B",
    'В' => "V",
    'Г' => "G",
    'Д' => "D",
    'Е' => "E",
    'Ё' => "Yo",
    'Ж' => "Zh",
    'З' => "Z",
    'И' => "I",
    'Й' => "Y",
    'К' => "K",
    'Л' => "L",
    'М' => "M",
    'Н' => "N",
    'О' => "O",
    'П' => "P",
    'Р' => "R",
    'С' => "S",
    'Т' => "T",
    'У' => "U",
    'Ф' => "F",
    'Х' => "Kh",
    'Ц' => "Ts",
    'Ч' => "Ch",
    'Ш' => "Sh",
    'Щ' => "Shch",
    'Ъ' => "",
    'Ы' => "Y",
    'Ь' => "",
    'Э' => "E",
    'Ю' => "Yu",
    'Я' => "Ya",
    'а' => "a",
    'б' => "b",
    'в' => "v",
    'г' => "g",
    'д' => "d",
    'е' => "e",
    'ё' => "yo",
    'ж' => "zh",
    'з' => "z",
    'и' => "i",
    'й' => "y",
    'к' => "k",
    'л' => "l",
    'м' => "m",
    'н' => "n",
    'о' => "o",
    'п' => "p",
    'р' => "r",
    'с' => "s",
    'т' => "t",
    'у' => "u",
    'ф' => "f",
    'х' => "kh",
    'ц' => "ts",
    'ч' => "ch",
    'ш' => "sh",
    'щ' => "shch",
    'ъ' => "",
    'ы' => "y",
    'ь' => "",
    'э' => "e",
    'ю' => "yu",
    'я' => "ya",
};

static HEBREW: Map<char, &str> = phf_map! {
    'א' => "a",
    'ב' => "b",
    'ג' => "g",
    'ד' => "d",
    'ה' => "h",
    'ו' => "v",
    'ז' => "z",
    'ח' => "kh",
    'ט' => "t",
    'י' => "y",
    'כ' => "k",
    'ך' => "k",
    'ל' => "l",
    'מ' => "m",
    'ם' => "m",
    'נ' => "n",
    'ן' => "n",
    'ס' => "s",
    'ע' => "a",
    'פ' => "p",
    'ף' => "p",
    'צ' => "ts",
    'ץ' => "ts",
    'ק' => "k",
    'ר' => "r",
    'ש' => "sh",
    'ת' => "t",
};
/// Range table, tested top to bottom. Ranges must stay pairwise disjoint.
const RANGES: [(Script, CodePointRange); 7] = [
    (Script::Devanagari, CodePointRange::new('\u{0900}', '\u{097f}')),
    (Script::Tamil, CodePointRange::new('\u{0b80}', '\u{0bff}')),
    (Script::Telugu, CodePointRange::new('\u{0c00}', '\u{0c7f}')),
    (Script::Bengali, CodePointRange::new('\u{0980}', '\u{09ff}')),
    (Script::Arabic, CodePointRange::new('\u{0600}', '\u{06ff}')),
    (Script::Cyrillic, CodePointRange::new('\u{0400}', '\u{04ff}')),
    (Script::Hebrew, CodePointRange::new('\u{0590}', '\u{05ff}')),
];

/// An immutable map from one source character to its Latin replacement.
/// An empty replacement silences the character.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    entries: HashMap<char, &'static str>,
}

impl TransliterationTable {
    fn from_maps(maps: &[&'static Map<char, &'static str>]) -> Self {
        let mut entries = HashMap::new();
        for map in maps {
            for (&c, &latin) in map.entries() {
                entries.insert(c, latin);
            }
        }
        Self { entries }
    }

    fn with(mut self, c: char, latin: &'static str) -> Self {
        self.entries.insert(c, latin);
        self
    }

    #[inline]
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().map(|(&c, &latin)| (c, latin))
    }
}

#[derive(Debug)]
pub struct ScriptEntry {
    pub script: Script,
    pub range: CodePointRange,
    pub table: TransliterationTable,
}

/// All registered scripts, built once and shared read-only.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<ScriptEntry>,
}

impl Registry {
    /// Get or initialize the global registry.
    pub fn global() -> &'static Registry {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE.get_or_init(Registry::build)
    }

    fn build() -> Self {
        let entries: Vec<ScriptEntry> = RANGES
            .iter()
            .map(|&(script, range)| ScriptEntry {
                script,
                range,
                table: table_source(script),
            })
            .collect();

        debug_assert!(
            entries.iter().enumerate().all(|(i, a)| entries[i + 1..]
                .iter()
                .all(|b| !a.range.overlaps(&b.range))),
            "script ranges overlap"
        );
        debug_assert!(telugu::sub_tables_disjoint(), "telugu sub-tables overlap");
        debug!(
            "script registry built: {} scripts, {} table entries",
            entries.len(),
            entries.iter().map(|e| e.table.len()).sum::<usize>()
        );
        Self { entries }
    }

    /// Entries in classification order.
    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    fn entry(&self, script: Script) -> Option<&ScriptEntry> {
        self.entries.iter().find(|e| e.script == script)
    }

    /// `None` only for [`Script::Unknown`].
    pub fn range_for(&self, script: Script) -> Option<CodePointRange> {
        self.entry(script).map(|e| e.range)
    }

    /// `None` only for [`Script::Unknown`].
    pub fn table_for(&self, script: Script) -> Option<&TransliterationTable> {
        self.entry(script).map(|e| &e.table)
    }
}

fn table_source(script: Script) -> TransliterationTable {
    match script {
        Script::Devanagari => TransliterationTable::from_maps(&[&DEVANAGARI]),
        Script::Tamil => TransliterationTable::from_maps(&[&TAMIL]),
        Script::Telugu => {
            TransliterationTable::from_maps(&telugu::sub_tables()).with(TELUGU_VIRAMA, "")
        }
        Script::Bengali => TransliterationTable::from_maps(&[&BENGALI]),
        Script::Arabic => TransliterationTable::from_maps(&[&ARABIC]),
        Script::Cyrillic => TransliterationTable::from_maps(&[&CYRILLIC]),
        Script::Hebrew => TransliterationTable::from_maps(&[&HEBREW]),
        Script::Unknown => TransliterationTable::default(),
    }
}

/// Telugu sub-table lookups used by the contextual converter.
pub mod telugu {
    use super::*;

    /// Which Telugu sub-table a character belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Class {
        IndependentVowel(&'static str),
        VowelSign(&'static str),
        Virama,
        Mark(&'static str),
        Consonant(&'static str),
    }

    /// Sub-tables are checked in fixed precedence order.
    pub fn class_of(c: char) -> Option<Class> {
        if let Some(&v) = TELUGU_INDEPENDENT_VOWELS.get(&c) {
            Some(Class::IndependentVowel(v))
        } else if let Some(&v) = TELUGU_VOWEL_SIGNS.get(&c) {
            Some(Class::VowelSign(v))
        } else if c == TELUGU_VIRAMA {
            Some(Class::Virama)
        } else if let Some(&v) = TELUGU_MISC.get(&c) {
            Some(Class::Mark(v))
        } else {
            TELUGU_CONSONANTS.get(&c).map(|&v| Class::Consonant(v))
        }
    }

    pub(crate) fn sub_tables() -> [&'static Map<char, &'static str>; 4] {
        [
            &TELUGU_INDEPENDENT_VOWELS,
            &TELUGU_VOWEL_SIGNS,
            &TELUGU_CONSONANTS,
            &TELUGU_MISC,
        ]
    }

    /// No character sits in two sub-tables, and none holds the virama.
    pub(crate) fn sub_tables_disjoint() -> bool {
        let tables = sub_tables();
        tables.iter().enumerate().all(|(i, a)| {
            !a.contains_key(&TELUGU_VIRAMA)
                && tables[i + 1..]
                    .iter()
                    .all(|b| a.keys().all(|k| !b.contains_key(k)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_script_has_range_and_table() {
        let registry = Registry::global();
        for script in Script::all() {
            assert!(registry.range_for(script).is_some(), "{script}");
            let table = registry.table_for(script).unwrap();
            assert!(!table.is_empty(), "{script}");
        }
        assert!(registry.range_for(Script::Unknown).is_none());
        assert!(registry.table_for(Script::Unknown).is_none());
    }

    #[test]
    fn ranges_are_disjoint() {
        for (i, (a_script, a)) in RANGES.iter().enumerate() {
            for (b_script, b) in &RANGES[i + 1..] {
                assert!(!a.overlaps(b), "{a_script} overlaps {b_script}");
            }
        }
    }

    #[test]
    fn table_keys_lie_inside_their_range() {
        for entry in Registry::global().entries() {
            for (c, _) in entry.table.iter() {
                assert!(entry.range.contains(c), "{c:?} outside {}", entry.script);
            }
        }
    }

    #[test]
    fn telugu_sub_tables_are_disjoint() {
        assert!(telugu::sub_tables_disjoint());
        let tables = telugu::sub_tables();
        for (i, a) in tables.iter().enumerate() {
            for b in &tables[i + 1..] {
                assert!(a.keys().all(|k| !b.contains_key(k)));
            }
            assert!(!a.contains_key(&TELUGU_VIRAMA));
        }
    }

    #[test]
    fn telugu_composite_is_union_of_parts() {
        let table = Registry::global().table_for(Script::Telugu).unwrap();
        let parts: usize = telugu::sub_tables().iter().map(|t| t.len()).sum();
        assert_eq!(table.len(), parts + 1);
        assert_eq!(table.get(TELUGU_VIRAMA), Some(""));
        assert_eq!(table.get('క'), Some("k"));
    }

    #[test]
    fn telugu_classes() {
        assert_eq!(telugu::class_of('అ'), Some(telugu::Class::IndependentVowel("a")));
        assert_eq!(telugu::class_of('\u{0c3e}'), Some(telugu::Class::VowelSign("aa")));
        assert_eq!(telugu::class_of(TELUGU_VIRAMA), Some(telugu::Class::Virama));
        assert_eq!(telugu::class_of('\u{0c02}'), Some(telugu::Class::Mark("m")));
        assert_eq!(telugu::class_of('ష'), Some(telugu::Class::Consonant("sh")));
        assert_eq!(telugu::class_of('౦'), None);
    }

    #[test]
    fn lossy_entries_share_output() {
        let arabic = Registry::global().table_for(Script::Arabic).unwrap();
        assert_eq!(arabic.get('ص'), arabic.get('س'));
    }
}
