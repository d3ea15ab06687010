// Byte-level character classification
//
// Words are handled as raw bytes. Classification follows the C locale:
// only ASCII letters have case, and only ASCII vowels count as vowels.
// Bytes outside the buffer are reported as 0 by callers, which is neither
// a vowel nor a letter.

/// English vowels used by the reducer. `y` counts as a vowel.
const VOWELS: &[u8] = b"aeiouy";

/// Check whether a byte is a vowel (case-insensitive).
///
/// The vowel set is `a e i o u y`. Every other byte, including 0 and
/// non-ASCII bytes, is treated as a consonant-like boundary.
pub fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b.to_ascii_lowercase())
}

/// Check whether a byte is an uppercase ASCII letter.
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Check whether a byte is a lowercase ASCII letter.
pub fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Fold a byte to lowercase. Non-letters are returned unchanged.
pub fn fold(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Check whether any byte of the slice is a vowel.
pub fn has_vowel(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| is_vowel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_include_y() {
        for &b in b"aeiouyAEIOUY" {
            assert!(is_vowel(b), "{} should be a vowel", b as char);
        }
    }

    #[test]
    fn consonants_and_boundaries_are_not_vowels() {
        for &b in b"bcdfghjklmnpqrstvwxz'-\n" {
            assert!(!is_vowel(b), "{} should not be a vowel", b as char);
        }
        assert!(!is_vowel(0));
        assert!(!is_vowel(0xC3));
    }

    #[test]
    fn case_is_ascii_only() {
        assert!(is_upper(b'A'));
        assert!(!is_upper(b'a'));
        assert!(is_lower(b'z'));
        assert!(!is_lower(b'1'));
        // Latin-1 / UTF-8 lead bytes have no case
        assert!(!is_upper(0xC4));
        assert!(!is_lower(0xE4));
    }

    #[test]
    fn fold_leaves_non_letters() {
        assert_eq!(fold(b'Q'), b'q');
        assert_eq!(fold(b'q'), b'q');
        assert_eq!(fold(b'\''), b'\'');
        assert_eq!(fold(0xC4), 0xC4);
    }

    #[test]
    fn has_vowel_scans_whole_slice() {
        assert!(has_vowel(b"rhythm"));
        assert!(!has_vowel(b"bcd"));
        assert!(!has_vowel(b""));
    }
}
