//! File-level driver: load the source, scan it, write the artifact.
//!
//! The scan runs into an in-memory buffer. On success the buffer is written
//! to `<out>.tmp` and renamed over `<out>`, so a failed run never leaves a
//! half-written file behind. With `output.keep_partial` the text produced
//! before a scan error is written to `<out>` instead.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ivrit_core::settings::Settings;
use ivrit_core::{KeywordTable, ScanStats, Scanner, TranslateError};
use tracing::{debug_span, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("file was not found or could not be read: {}: {source}", .path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Translate {
        path: PathBuf,
        source: TranslateError,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("not a file path: {}", .0.display())]
    NoFileName(PathBuf),
}

/// Result of scanning a file without writing an artifact.
pub struct Translation {
    pub output: String,
    pub stats: ScanStats,
}

/// Output file name: the configured prefix plus the source's base name, placed
/// in `out_dir` or, when absent, the current directory.
pub fn output_path(
    source: &Path,
    prefix: &str,
    out_dir: Option<&Path>,
) -> Result<PathBuf, RunError> {
    let base = source
        .file_name()
        .ok_or_else(|| RunError::NoFileName(source.to_path_buf()))?;
    let mut name = OsString::from(prefix);
    name.push(base);
    Ok(match out_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}

/// Read the whole source into memory. Invalid UTF-8 counts as unreadable.
pub fn load_source(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|source| RunError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan a file into memory.
pub fn scan_file(
    source_path: &Path,
    keywords: &KeywordTable,
    settings: &Settings,
) -> Result<Translation, RunError> {
    let source = load_source(source_path)?;
    let mut buf = Vec::with_capacity(source.len());
    let stats = Scanner::new(&source, keywords, settings.scan.comment_marker, &mut buf)
        .run()
        .map_err(|e| translate_error(source_path, e))?;
    let output = String::from_utf8(buf).map_err(|e| {
        translate_error(source_path, TranslateError::Io(io::Error::other(e)))
    })?;
    Ok(Translation { output, stats })
}

/// Translate `source_path` into `out_path`.
pub fn translate_file(
    source_path: &Path,
    out_path: &Path,
    keywords: &KeywordTable,
    settings: &Settings,
) -> Result<ScanStats, RunError> {
    let _span = debug_span!(
        "translate_file",
        source = %source_path.display(),
        output = %out_path.display()
    )
    .entered();

    // Read before creating anything so a missing source leaves no artifact.
    let source = load_source(source_path)?;
    info!(chars = source.chars().count(), "source loaded");

    let mut buf = Vec::with_capacity(source.len());
    let result = Scanner::new(&source, keywords, settings.scan.comment_marker, &mut buf).run();

    match result {
        Ok(stats) => {
            write_atomic(out_path, &buf).map_err(|source| RunError::Write {
                path: out_path.to_path_buf(),
                source,
            })?;
            info!(
                keywords = stats.keywords,
                identifiers = stats.identifiers,
                comments = stats.comments,
                "translation written"
            );
            Ok(stats)
        }
        Err(e) => {
            if settings.output.keep_partial {
                // The scan error is what the caller needs to see; a failed
                // partial write is only logged.
                match write_partial(out_path, &buf) {
                    Ok(()) => warn!(bytes = buf.len(), "partial output kept"),
                    Err(write_err) => warn!(
                        output = %out_path.display(),
                        error = %write_err,
                        "could not keep partial output"
                    ),
                }
            }
            Err(translate_error(source_path, e))
        }
    }
}

fn translate_error(path: &Path, source: TranslateError) -> RunError {
    RunError::Translate {
        path: path.to_path_buf(),
        source,
    }
}

/// Atomic write: write to .tmp then rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn write_partial(path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}
