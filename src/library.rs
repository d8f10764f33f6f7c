// File: src/library.rs
use crate::core::classifier::resolve_script;
use crate::core::types::Script;
use crate::error::{LipiError, Result};
use serde::{Deserialize, Serialize};

/// A saved passage the reader can reopen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredText {
    pub id: String,
    pub title: String,
    pub script: Script,
    pub text: String,
}

impl StoredText {
    /// Builds an entry, inferring the script from the text itself.
    pub fn new(id: &str, title: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            script: resolve_script(text),
            text: text.to_string(),
        }
    }
}

const SAMPLES: [(&str, &str, &str); 7] = [
    ("telugu-1", "Telugu greeting", "నమస్కారం మీకు ఎలా ఉంది"),
    ("hindi-1", "Hindi phrase", "यह एक सरल उदाहरण है"),
    ("tamil-1", "Tamil phrase", "இந்த உரை ஒரு உதாரணம்"),
    ("bengali-1", "Bengali phrase", "এটি একটি উদাহরণ বাক্য"),
    ("arabic-1", "Arabic phrase", "هذا مثال بسيط للنص"),
    ("cyrillic-1", "Cyrillic phrase", "Это простой пример текста"),
    ("hebrew-1", "Hebrew phrase", "זהו משפט לדוגמה"),
];

/// Ordered collection of stored texts with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    texts: Vec<StoredText>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// One sample passage per supported script.
    pub fn with_samples() -> Self {
        Self {
            texts: SAMPLES
                .iter()
                .map(|&(id, title, text)| StoredText::new(id, title, text))
                .collect(),
        }
    }

    pub fn add(&mut self, text: StoredText) -> Result<()> {
        if self.get(&text.id).is_some() {
            return Err(LipiError::DuplicateId(text.id));
        }
        self.texts.push(text);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<StoredText> {
        let pos = self
            .texts
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LipiError::NotFound(id.to_string()))?;
        Ok(self.texts.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&StoredText> {
        self.texts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredText> {
        self.texts.iter()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
