//! Character classification and the Hebrew → Latin letter tables.

/// The 22 Hebrew base letters in alphabetical order. A letter's index here
/// selects its Latin counterpart in [`TARGET_ALPHABET`].
pub const SOURCE_ALPHABET: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', 'ק',
    'ר', 'ש', 'ת',
];

/// Latin letters by position. `x` and `w` are swapped on purpose; generated
/// identifiers depend on this exact ordering.
pub const TARGET_ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'x', 'w', 'y', 'z',
];

/// Final forms (sofit) and the fixed Latin letter each one becomes. Each maps
/// to the same letter as its base form.
pub const FINAL_FORMS: [(char, char); 5] = [
    ('ך', 'k'),
    ('ם', 'm'),
    ('ן', 'n'),
    ('ף', 'q'),
    ('ץ', 'r'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    SourceLetter,
    TargetLetter,
    CommentMarker,
    Other,
}

pub fn is_final_form(c: char) -> bool {
    FINAL_FORMS.iter().any(|&(f, _)| f == c)
}

pub fn is_source_letter(c: char) -> bool {
    SOURCE_ALPHABET.contains(&c) || is_final_form(c)
}

/// Any ASCII letter counts, upper case included: letting `A` through would
/// mix alphabets just as `a` would.
pub fn is_target_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Classify a single character relative to the configured comment marker.
pub fn classify(c: char, comment_marker: char) -> CharClass {
    if is_source_letter(c) {
        CharClass::SourceLetter
    } else if is_target_letter(c) {
        CharClass::TargetLetter
    } else if c == comment_marker {
        CharClass::CommentMarker
    } else {
        CharClass::Other
    }
}

/// Latin letter for a single Hebrew letter, or `None` if `c` is not one.
pub fn target_letter(c: char) -> Option<char> {
    if let Some(&(_, latin)) = FINAL_FORMS.iter().find(|&&(f, _)| f == c) {
        return Some(latin);
    }
    SOURCE_ALPHABET
        .iter()
        .position(|&s| s == c)
        .map(|i| TARGET_ALPHABET[i])
}
