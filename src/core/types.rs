// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A writing system the engine knows how to render into Latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Tamil,
    Telugu,
    Bengali,
    Arabic,
    Cyrillic,
    Hebrew,
    Unknown,
}

impl Script {
    /// The recognized scripts, in the order ranges are tested.
    pub const fn all() -> [Script; 7] {
        [
            Script::Devanagari,
            Script::Tamil,
            Script::Telugu,
            Script::Bengali,
            Script::Arabic,
            Script::Cyrillic,
            Script::Hebrew,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Tamil => "tamil",
            Script::Telugu => "telugu",
            Script::Bengali => "bengali",
            Script::Arabic => "arabic",
            Script::Cyrillic => "cyrillic",
            Script::Hebrew => "hebrew",
            Script::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != Script::Unknown
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive interval of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub start: char,
    pub end: char,
}

impl CodePointRange {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    pub fn overlaps(&self, other: &CodePointRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Whitespace,
}

/// A maximal run of either whitespace or non-whitespace text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// One source character paired with its Latin rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub source: char,
    pub latin: String,
}
