//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! keyword table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::alphabet::{is_line_terminator, is_source_letter, is_target_letter};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scan: ScanSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    pub comment_marker: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub prefix: String,
    #[serde(default)]
    pub keep_partial: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let invalid = |field: &str, reason: &str| SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let marker = s.scan.comment_marker;
    if is_source_letter(marker) || is_target_letter(marker) {
        return Err(invalid("scan.comment_marker", "must not be a letter"));
    }
    if is_line_terminator(marker) {
        return Err(invalid(
            "scan.comment_marker",
            "must not be a line terminator",
        ));
    }

    if s.output.prefix.is_empty() {
        return Err(invalid("output.prefix", "must not be empty"));
    }
    if s.output.prefix.contains(['/', '\\']) {
        return Err(invalid(
            "output.prefix",
            "must not contain a path separator",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.scan.comment_marker, '#');
        assert_eq!(s.output.prefix, "translated_");
        assert!(!s.output.keep_partial);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[scan]
comment_marker = ";"

[output]
prefix = "en_"
keep_partial = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.scan.comment_marker, ';');
        assert_eq!(s.output.prefix, "en_");
        assert!(s.output.keep_partial);
    }

    #[test]
    fn keep_partial_defaults_off() {
        let toml = "[scan]\ncomment_marker = \"#\"\n[output]\nprefix = \"t_\"\n";
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.output.keep_partial);
    }

    #[test]
    fn error_letter_marker() {
        for marker in ["a", "א", "\\n"] {
            let toml = format!(
                "[scan]\ncomment_marker = \"{marker}\"\n[output]\nprefix = \"t_\"\n"
            );
            let err = parse_settings_toml(&toml).unwrap_err();
            assert!(
                matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "scan.comment_marker"),
                "marker={marker:?} err={err}"
            );
        }
    }

    #[test]
    fn error_multichar_marker() {
        let toml = "[scan]\ncomment_marker = \"//\"\n[output]\nprefix = \"t_\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_bad_prefix() {
        for prefix in ["", "out/", "out\\\\"] {
            let toml = format!("[scan]\ncomment_marker = \"#\"\n[output]\nprefix = \"{prefix}\"\n");
            let err = parse_settings_toml(&toml).unwrap_err();
            assert!(
                matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "output.prefix"),
                "prefix={prefix:?} err={err}"
            );
        }
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[scan]\ncomment_marker = \"#\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
