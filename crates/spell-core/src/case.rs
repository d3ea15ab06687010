// Case checks and conversion for byte words

use crate::character::{is_lower, is_upper};

/// Whether the word contains at least one lowercase ASCII letter.
///
/// Words without one ("NASA", "1234") are looked up exactly as typed
/// before any folding is attempted.
pub fn has_lower(word: &[u8]) -> bool {
    word.iter().any(|&b| is_lower(b))
}

/// Lowercase every byte of the word.
pub fn lower_all(word: &mut [u8]) {
    word.make_ascii_lowercase();
}

/// Lowercase every byte after the first, leaving the first byte as typed.
pub fn lower_tail(word: &mut [u8]) {
    if let Some((_, tail)) = word.split_first_mut() {
        tail.make_ascii_lowercase();
    }
}

/// Lowercase only the first byte.
pub fn lower_first(word: &mut [u8]) {
    if let Some(first) = word.first_mut() {
        first.make_ascii_lowercase();
    }
}

/// Whether the first byte of the word is an uppercase letter.
pub fn starts_upper(word: &[u8]) -> bool {
    word.first().is_some_and(|&b| is_upper(b))
}
