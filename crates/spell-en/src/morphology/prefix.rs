// Prefix list tried after a direct dictionary lookup fails

use spell_core::character::{fold, has_vowel};

use super::stem::Stem;

/// Prefixes in the order they are tried. The first match wins, so "under"
/// precedes "un" and "inter" sits after "intra".
pub const PREFIXES: &[&str] = &[
    "anti", "bio", "dis", "electro", "en", "fore", "hyper", "intra", "inter", "iso", "kilo",
    "magneto", "meta", "micro", "milli", "mis", "mono", "multi", "non", "out", "over", "photo",
    "poly", "pre", "pseudo", "re", "semi", "stereo", "sub", "super", "thermo", "ultra", "under",
    "un",
];

/// Find the first prefix at `start` whose remainder up to the stem end
/// still contains a vowel.
///
/// Matching folds the word's bytes to lowercase. Returns the prefix and the
/// offset just past it.
pub fn match_prefix(stem: Stem<'_>, start: usize) -> Option<(&'static str, usize)> {
    let word = stem.word();
    let end = stem.end();

    PREFIXES.iter().find_map(|&prefix| {
        let rest = start + prefix.len();
        let head = word.get(start..rest)?;
        let matches = head
            .iter()
            .zip(prefix.as_bytes())
            .all(|(&b, &p)| fold(b) == p);
        (matches && rest < end && has_vowel(&word[rest..end])).then_some((prefix, rest))
    })
}
