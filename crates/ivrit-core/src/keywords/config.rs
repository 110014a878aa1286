use std::collections::BTreeMap;

use serde::Deserialize;

use crate::alphabet::is_source_letter;

#[derive(Deserialize)]
struct KeywordConfig {
    keywords: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KeywordConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[keywords] table is empty")]
    Empty,
    #[error("reserved word must be Hebrew letters only: {0:?}")]
    NonSourceKey(String),
    #[error("keyword for {0:?} must be lowercase ASCII letters")]
    NonTargetValue(String),
    #[error("keyword table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<reserved word, keyword>`.
pub fn parse_keywords_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KeywordConfigError> {
    let config: KeywordConfig =
        toml::from_str(toml_str).map_err(|e| KeywordConfigError::Parse(e.to_string()))?;

    if config.keywords.is_empty() {
        return Err(KeywordConfigError::Empty);
    }

    for (key, value) in &config.keywords {
        // A key the collector can never produce would be dead config.
        if key.is_empty() || !key.chars().all(is_source_letter) {
            return Err(KeywordConfigError::NonSourceKey(key.clone()));
        }
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(KeywordConfigError::NonTargetValue(key.clone()));
        }
    }

    Ok(config.keywords)
}
