use crate::config::TranslateConfig;
use crate::core::classifier::resolve_script;
use crate::core::converter::Transliterator;
use crate::core::tokenizer::tokenize;
use crate::core::types::{Cell, Script, Token};
use crate::error::{LipiError, Result};
use crate::translate::translate_url;
use log::debug;
use unicode_width::UnicodeWidthStr;

/// Everything the presentation layer shows for one selected word.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WordView {
    pub word: String,
    pub script: Script,
    pub cells: Vec<Cell>,
    pub translate_url: String,
}

impl WordView {
    pub fn new(word: &str, translate: &TranslateConfig) -> Self {
        Self {
            word: word.to_string(),
            script: resolve_script(word),
            cells: Transliterator::new().cells(word),
            translate_url: translate_url(word, translate),
        }
    }

    /// Terminal column width per cell, wide enough for both rows.
    pub fn column_widths(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|cell| {
                let mut buf = [0u8; 4];
                let source = cell.source.encode_utf8(&mut buf).width();
                source.max(cell.latin.width()).max(1)
            })
            .collect()
    }

    pub fn latin(&self) -> String {
        self.cells.iter().map(|c| c.latin.as_str()).collect()
    }
}

/// Processed text plus the currently selected word, as held by a reader UI.
pub struct ReaderSession {
    text: String,
    tokens: Vec<Token>,
    selected: Option<usize>,
    translate: TranslateConfig,
}

impl ReaderSession {
    pub fn new(translate: TranslateConfig) -> Self {
        Self {
            text: String::new(),
            tokens: Vec::new(),
            selected: None,
            translate,
        }
    }

    /// Replaces the processed text. Any previous selection is dropped.
    pub fn process(&mut self, text: &str) {
        self.text = text.to_string();
        self.tokens = tokenize(text);
        self.selected = None;
        debug!("processed text into {} tokens", self.tokens.len());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Indices (into [`Self::tokens`]) of the selectable word tokens.
    pub fn word_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_word())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn select(&mut self, index: usize) -> Result<&Token> {
        let token = self.tokens.get(index).ok_or(LipiError::OutOfRange {
            index,
            len: self.tokens.len(),
        })?;
        if !token.is_word() {
            return Err(LipiError::NotAWord(index));
        }
        self.selected = Some(index);
        debug!("selected token {index}: {:?}", token.content);
        Ok(token)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Position of the selected word in [`Self::tokens`].
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Token> {
        self.selected.and_then(|i| self.tokens.get(i))
    }

    pub fn selected_view(&self) -> Option<WordView> {
        self.selected()
            .map(|token| WordView::new(&token.content, &self.translate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> ReaderSession {
        let mut s = ReaderSession::new(TranslateConfig::default());
        s.process(text);
        s
    }

    #[test]
    fn select_word_and_view() {
        let mut s = session("यह एक");
        assert_eq!(s.word_indices(), vec![0, 2]);
        s.select(2).unwrap();
        let view = s.selected_view().unwrap();
        assert_eq!(view.word, "एक");
        assert_eq!(view.script, Script::Devanagari);
        assert_eq!(view.latin(), "eka");
        assert!(view.translate_url.contains("sl=hi"));
    }

    #[test]
    fn whitespace_is_not_selectable() {
        let mut s = session("a b");
        assert!(matches!(s.select(1), Err(LipiError::NotAWord(1))));
        assert!(s.selected().is_none());
    }

    #[test]
    fn out_of_range_selection() {
        let mut s = session("a");
        assert!(matches!(
            s.select(5),
            Err(LipiError::OutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn processing_clears_selection() {
        let mut s = session("один два");
        s.select(0).unwrap();
        s.process("три");
        assert!(s.selected_view().is_none());
        assert_eq!(s.text(), "три");
    }

    #[test]
    fn repeated_word_selects_one_position() {
        let mut s = session("один один");
        s.select(2).unwrap();
        assert_eq!(s.selected_index(), Some(2));
        let marked: Vec<usize> = (0..s.tokens().len())
            .filter(|&i| s.selected_index() == Some(i))
            .collect();
        assert_eq!(marked, vec![2]);
        assert_eq!(s.tokens()[0].content, s.tokens()[2].content);
    }

    #[test]
    fn clear_selection() {
        let mut s = session("שלום");
        s.select(0).unwrap();
        s.clear_selection();
        assert!(s.selected().is_none());
    }

    #[test]
    fn column_widths_cover_both_rows() {
        let view = WordView::new("క్ష", &TranslateConfig::default());
        // virama is zero-width and renders empty; still gets one column
        assert_eq!(view.column_widths(), vec![1, 1, 3]);
        let wide = WordView::new("中", &TranslateConfig::default());
        assert_eq!(wide.column_widths(), vec![2]);
    }
}
