// src/core/classifier.rs
use crate::core::registry::Registry;
use crate::core::types::Script;

/// Returns the first registered script whose range contains `c`.
pub fn classify(c: char) -> Script {
    Registry::global()
        .entries()
        .iter()
        .find(|entry| entry.range.contains(c))
        .map_or(Script::Unknown, |entry| entry.script)
}

/// The script of the first recognized character in `word`.
pub fn resolve_script(word: &str) -> Script {
    word.chars()
        .map(classify)
        .find(|script| script.is_known())
        .unwrap_or(Script::Unknown)
}
