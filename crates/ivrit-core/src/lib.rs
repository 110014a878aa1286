//! Hebrew-to-Latin transliteration of source text.
//!
//! Reserved Hebrew words become keywords, other Hebrew identifiers are
//! transliterated letter by letter, comments are dropped and everything else
//! is copied through unchanged.

pub mod alphabet;
mod error;
pub mod keywords;
pub mod scanner;
pub mod settings;
pub mod sink;
pub mod translit;

pub use error::TranslateError;
pub use keywords::KeywordTable;
pub use scanner::{translate_str, ScanStats, Scanner};
