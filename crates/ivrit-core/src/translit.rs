//! Letter-for-letter transliteration of non-reserved identifiers.

use crate::alphabet::target_letter;
use crate::error::TranslateError;

/// Map a collected token into a Latin identifier of the same length.
///
/// Final forms take their fixed override letter; every other Hebrew letter
/// takes the Latin letter at the same alphabet position. The buffer is
/// rewritten in place and then joined.
pub fn transliterate(mut token: Vec<char>) -> Result<String, TranslateError> {
    for ch in token.iter_mut() {
        *ch = target_letter(*ch).ok_or(TranslateError::UnmappedLetter(*ch))?;
    }
    Ok(token.into_iter().collect())
}
