use std::fs;
use std::path::Path;

use ivrit::{keywords, settings, KeywordTable};

pub fn keywords_export() {
    print!("{}", keywords::default_toml());
}

pub fn keywords_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(keywords::parse_keywords_toml(&content), "Error: {}");
    println!("OK: {} keywords", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: scan.comment_marker={:?}, output.prefix={:?}, output.keep_partial={}",
        s.scan.comment_marker, s.output.prefix, s.output.keep_partial
    );
}

/// Install user-supplied keyword and settings files before anything reads the
/// process-wide tables.
pub fn init_custom(keywords_file: Option<&Path>, settings_file: Option<&Path>) {
    if let Some(path) = keywords_file {
        let content = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(KeywordTable::init_custom(content), "Error in keyword file: {}");
    }
    if let Some(path) = settings_file {
        let content = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(settings::init_custom(content), "Error in settings file: {}");
    }
}
