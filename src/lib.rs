//! File-level front end for the transliterator.
//!
//! Re-exports the scanning engine from `ivrit_core` and adds the file
//! pipeline and tracing setup used by the `ivrit` binary.

pub mod pipeline;
pub mod trace_init;

pub use ivrit_core::{keywords, settings};
pub use ivrit_core::{translate_str, KeywordTable, ScanStats, TranslateError};
pub use pipeline::{output_path, scan_file, translate_file, RunError};
