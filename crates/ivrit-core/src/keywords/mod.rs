//! Reserved-word table.
//!
//! Maps whole Hebrew tokens to the keyword spellings the downstream compiler
//! expects. The table ships as embedded TOML and can be replaced once per
//! process with [`KeywordTable::init_custom`].

mod config;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_keywords_toml, KeywordConfigError};

use crate::error::TranslateError;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_keywords.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default keyword TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: BTreeMap<String, String>,
}

impl KeywordTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, KeywordConfigError> {
        Ok(Self {
            entries: parse_keywords_toml(toml_str)?,
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KeywordConfigError> {
        // Validate eagerly
        parse_keywords_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KeywordConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KeywordTable {
        static INSTANCE: OnceLock<KeywordTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            KeywordTable::from_toml(toml_str).expect("keyword TOML must be valid")
        })
    }

    /// Exact whole-token match; a prefix of a reserved word is not reserved.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Keyword spelling for a reserved word.
    pub fn spelling(&self, word: &str) -> Result<&str, TranslateError> {
        self.entries
            .get(word)
            .map(|s| s.as_str())
            .ok_or_else(|| TranslateError::UnknownReservedWord(word.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
