use std::path::Path;

use ivrit::settings::Settings;
use ivrit::{output_path, scan_file, settings, translate_file, KeywordTable};

/// Apply command-line overrides on top of the loaded settings. A flag can only
/// turn `keep_partial` on; leaving it off keeps the configured value.
pub fn effective_settings(base: &Settings, keep_partial: bool) -> Settings {
    let mut settings = base.clone();
    if keep_partial {
        settings.output.keep_partial = true;
    }
    settings
}

pub fn translate_cmd(file: &Path, out_dir: Option<&Path>, keep_partial: bool, to_stdout: bool) {
    let keywords = KeywordTable::global();
    let settings = effective_settings(settings::settings(), keep_partial);

    if to_stdout {
        let t = die!(scan_file(file, keywords, &settings), "[ERROR]: {}");
        print!("{}", t.output);
        return;
    }

    let out = die!(
        output_path(file, &settings.output.prefix, out_dir),
        "[ERROR]: {}"
    );
    let stats = die!(
        translate_file(file, &out, keywords, &settings),
        "[ERROR]: {}"
    );
    eprintln!(
        "Translated {} -> {} ({} keywords, {} identifiers, {} comments)",
        file.display(),
        out.display(),
        stats.keywords,
        stats.identifiers,
        stats.comments
    );
}

pub fn check_cmd(file: &Path, json: bool) {
    let settings = settings::settings();
    let t = die!(
        scan_file(file, KeywordTable::global(), settings),
        "[ERROR]: {}"
    );
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&t.stats).expect("JSON serialization failed")
        );
    } else {
        println!("OK: {}", file.display());
        println!("  Keywords:     {:>6}", t.stats.keywords);
        println!("  Identifiers:  {:>6}", t.stats.identifiers);
        println!("  Comments:     {:>6}", t.stats.comments);
        println!("  Source chars: {:>6}", t.stats.source_chars);
        println!("  Output chars: {:>6}", t.stats.output_chars);
    }
}

#[cfg(test)]
mod tests {
    use ivrit::settings::parse_settings_toml;

    use super::*;

    fn base(keep_partial: bool) -> Settings {
        let toml = format!(
            "[scan]\ncomment_marker = \"#\"\n[output]\nprefix = \"t_\"\nkeep_partial = {keep_partial}\n"
        );
        parse_settings_toml(&toml).unwrap()
    }

    #[test]
    fn flag_turns_keep_partial_on() {
        let s = effective_settings(&base(false), true);
        assert!(s.output.keep_partial);
        assert_eq!(s.output.prefix, "t_");
    }

    #[test]
    fn absent_flag_keeps_configured_value() {
        assert!(effective_settings(&base(true), false).output.keep_partial);
        assert!(!effective_settings(&base(false), false).output.keep_partial);
    }
}
