//! Query construction for the external translation view. No network I/O.

use crate::config::TranslateConfig;
use crate::core::classifier::resolve_script;
use crate::core::types::Script;

/// Source-language hint for a script; `"auto"` lets the service detect it.
pub fn language_code(script: Script) -> &'static str {
    match script {
        Script::Devanagari => "hi",
        Script::Tamil => "ta",
        Script::Telugu => "te",
        Script::Bengali => "bn",
        Script::Arabic => "ar",
        Script::Cyrillic => "ru",
        Script::Hebrew => "iw",
        Script::Unknown => "auto",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateQuery {
    pub source_lang: &'static str,
    pub target_lang: String,
    pub text: String,
}

impl TranslateQuery {
    pub fn for_word(word: &str, config: &TranslateConfig) -> Self {
        Self {
            source_lang: language_code(resolve_script(word)),
            target_lang: config.target_lang.clone(),
            text: word.to_string(),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/?sl={}&tl={}&text={}&op=translate",
            base_url.trim_end_matches('/'),
            self.source_lang,
            urlencoding::encode(&self.target_lang),
            urlencoding::encode(&self.text)
        )
    }
}

/// Convenience: the full URL for `word` under `config`.
pub fn translate_url(word: &str, config: &TranslateConfig) -> String {
    TranslateQuery::for_word(word, config).url(&config.base_url)
}
