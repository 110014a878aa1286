//! Single-pass scanner.
//!
//! Walks the source once with a monotonic cursor. Runs of Hebrew letters are
//! collected into a fresh token and emitted either as a keyword or as a
//! transliterated identifier; comments are dropped up to (not including) the
//! line terminator; everything else is copied through. A Latin letter in
//! source position aborts the scan, leaving whatever was already emitted in
//! the sink.


use std::io::Write;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::alphabet::{classify, is_line_terminator, is_source_letter, CharClass};
use crate::error::TranslateError;
use crate::keywords::KeywordTable;
use crate::sink::OutputSink;
use crate::translit::transliterate;

/// Counters for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub keywords: usize,
    pub identifiers: usize,
    pub comments: usize,
    pub source_chars: usize,
    pub output_chars: usize,
}

pub struct Scanner<'a, W: Write> {
    chars: Vec<char>,
    cursor: usize,
    sink: OutputSink<W>,
    keywords: &'a KeywordTable,
    comment_marker: char,
    stats: ScanStats,
}

impl<'a, W: Write> Scanner<'a, W> {
    pub fn new(source: &str, keywords: &'a KeywordTable, comment_marker: char, out: W) -> Self {
        Self {
            chars: source.chars().collect(),
            cursor: 0,
            sink: OutputSink::new(out),
            keywords,
            comment_marker,
            stats: ScanStats::default(),
        }
    }

    /// Scan to the end of input, flushing the writer on success.
    pub fn run(mut self) -> Result<ScanStats, TranslateError> {
        while self.cursor < self.chars.len() {
            let ch = self.chars[self.cursor];
            match classify(ch, self.comment_marker) {
                CharClass::SourceLetter => self.collect_identifier()?,
                CharClass::TargetLetter => return Err(self.mixed_alphabet(ch)),
                CharClass::CommentMarker => self.skip_comment(),
                CharClass::Other => {
                    self.sink.write_char(ch)?;
                    self.cursor += 1;
                }
            }
        }

        self.stats.source_chars = self.chars.len();
        self.stats.output_chars = self.sink.chars_written();
        self.sink.finish()?;
        Ok(self.stats)
    }

    fn collect_identifier(&mut self) -> Result<(), TranslateError> {
        let start = self.cursor;
        let mut token = Vec::new();
        while self.cursor < self.chars.len() && is_source_letter(self.chars[self.cursor]) {
            token.push(self.chars[self.cursor]);
            self.cursor += 1;
        }

        let word: String = token.iter().collect();
        let keywords = self.keywords;
        if keywords.is_reserved(&word) {
            let keyword = keywords.spelling(&word)?;
            debug!(%word, keyword, offset = start, "keyword");
            self.sink.write_str(keyword)?;
            self.stats.keywords += 1;
        } else {
            let ident = transliterate(token)?;
            debug!(%word, %ident, offset = start, "identifier");
            self.sink.write_str(&ident)?;
            self.stats.identifiers += 1;
        }
        Ok(())
    }

    /// End of input counts as a terminator.
    fn skip_comment(&mut self) {
        let start = self.cursor;
        while self.cursor < self.chars.len() && !is_line_terminator(self.chars[self.cursor]) {
            self.cursor += 1;
        }
        trace!(offset = start, len = self.cursor - start, "comment");
        self.stats.comments += 1;
    }

    fn mixed_alphabet(&self, ch: char) -> TranslateError {
        // `\r\n` is one break; a lone `\r` or `\n` is one break each.
        let mut line = 1;
        let mut line_start = 0;
        for (i, &c) in self.chars[..self.cursor].iter().enumerate() {
            let crlf = c == '\r' && self.chars.get(i + 1) == Some(&'\n');
            if is_line_terminator(c) && !crlf {
                line += 1;
                line_start = i + 1;
            }
        }
        let column = self.cursor - line_start + 1;
        warn!(%ch, offset = self.cursor, line, column, "latin letter in source");
        TranslateError::MixedAlphabet {
            ch,
            offset: self.cursor,
            line,
            column,
        }
    }
}

/// Scan `source` into a `String`.
pub fn translate_str(
    source: &str,
    keywords: &KeywordTable,
    comment_marker: char,
) -> Result<String, TranslateError> {
    let mut buf = Vec::with_capacity(source.len());
    Scanner::new(source, keywords, comment_marker, &mut buf).run()?;
    // Only valid UTF-8 is ever written to the sink.
    String::from_utf8(buf).map_err(|e| TranslateError::Io(std::io::Error::other(e)))
}
