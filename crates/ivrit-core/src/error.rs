use std::io;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(
        "cannot write in English when using Hebrew mode: '{ch}' at line {line}, column {column}"
    )]
    MixedAlphabet {
        ch: char,
        /// Character offset into the source.
        offset: usize,
        line: usize,
        column: usize,
    },
    #[error("reserved word has no keyword spelling: {0}")]
    UnknownReservedWord(String),
    #[error("not a Hebrew letter: '{0}'")]
    UnmappedLetter(char),
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}
