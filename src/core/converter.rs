// src/core/converter.rs
use crate::core::classifier::classify;
use crate::core::registry::telugu::{self, Class};
use crate::core::registry::Registry;
use crate::core::types::{Cell, Script};

const INHERENT_VOWEL: &str = "a";

/// Renders source-script words into Latin, one output per input character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator;

impl Transliterator {
    pub fn new() -> Self {
        Self
    }

    /// One Latin string per `char` of `word`, in order.
    pub fn transliterate(&self, word: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(word.len());
        let mut chars = word.chars().peekable();

        while let Some(c) = chars.next() {
            let next = chars.peek().copied();
            out.push(self.render_char(c, next));
        }
        out
    }

    /// Source characters paired with their renderings.
    pub fn cells(&self, word: &str) -> Vec<Cell> {
        word.chars()
            .zip(self.transliterate(word))
            .map(|(source, latin)| Cell { source, latin })
            .collect()
    }

    /// The whole word as a single Latin string.
    pub fn render(&self, word: &str) -> String {
        self.transliterate(word).concat()
    }

    fn render_char(&self, c: char, next: Option<char>) -> String {
        match classify(c) {
            Script::Telugu => render_telugu(c, next),
            script => Registry::global()
                .table_for(script)
                .and_then(|table| table.get(c))
                .map_or_else(|| c.to_string(), str::to_string),
        }
    }
}

fn render_telugu(c: char, next: Option<char>) -> String {
    match telugu::class_of(c) {
        Some(Class::IndependentVowel(v)) | Some(Class::VowelSign(v)) | Some(Class::Mark(v)) => {
            v.to_string()
        }
        Some(Class::Virama) => String::new(),
        Some(Class::Consonant(bare)) => {
            if next.is_some_and(suppresses_inherent_vowel) {
                bare.to_string()
            } else {
                format!("{bare}{INHERENT_VOWEL}")
            }
        }
        None => c.to_string(),
    }
}

/// A following vowel sign or virama replaces the consonant's "a".
fn suppresses_inherent_vowel(next: char) -> bool {
    classify(next) == Script::Telugu
        && matches!(
            telugu::class_of(next),
            Some(Class::VowelSign(_)) | Some(Class::Virama)
        )
}

/// Shorthand for [`Transliterator::transliterate`].
pub fn transliterate(word: &str) -> Vec<String> {
    Transliterator.transliterate(word)
}
