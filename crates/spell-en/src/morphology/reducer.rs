// Recursive suffix and prefix reduction against a dictionary

use spell_core::character::{has_vowel, is_vowel};
use spell_lexicon::Lexicon;

use super::derivation::Derivation;
use super::prefix::match_prefix;
use super::stem::Stem;
use super::suffix::{SuffixTable, Transform};

/// Levels reserved per suffix step in the derivation slots.
pub const DLEV: usize = 2;

/// A prefix chain whose annotation reaches this length stops growing.
pub const PREFIX_ANNOTATION_MAX: usize = 20;

/// Reduces one candidate word at a time against a dictionary.
///
/// The reducer borrows the rule table and the dictionary and owns the
/// per-word state: derivation slots, the accepted derivation, and an
/// optional log of every stem probed. Call [`Reducer::begin_word`] between
/// words.
pub struct Reducer<'a, L: Lexicon + ?Sized> {
    table: &'a SuffixTable,
    lexicon: &'a L,
    derivation: Derivation<'a>,
    accepted: Option<String>,
    probes: Option<Vec<Vec<u8>>>,
}

impl<'a, L: Lexicon + ?Sized> Reducer<'a, L> {
    pub fn new(table: &'a SuffixTable, lexicon: &'a L) -> Self {
        Self {
            table,
            lexicon,
            derivation: Derivation::new(),
            accepted: None,
            probes: None,
        }
    }

    /// Record every stem handed to the dictionary.
    pub fn set_trace(&mut self, trace: bool) {
        self.probes = trace.then(Vec::new);
    }

    /// Clear all per-word state.
    pub fn begin_word(&mut self) {
        self.derivation.reset();
        self.accepted = None;
        if let Some(probes) = &mut self.probes {
            probes.clear();
        }
    }

    /// Look the stem up directly, then behind each matching prefix.
    pub fn lookup_with_prefixes(&mut self, stem: Stem<'_>) -> bool {
        self.trypref(stem, ".", 0)
    }

    /// Strip suffixes from the stem until a dictionary word appears.
    pub fn strip_suffixes(&mut self, stem: Stem<'_>) -> bool {
        self.suffix(stem, 0)
    }

    /// Derivation of the last accepted stem.
    pub fn derivation(&self) -> Option<&str> {
        self.accepted.as_deref()
    }

    /// Stems probed since the last [`Reducer::begin_word`], oldest first.
    /// Empty unless tracing is on.
    pub fn take_probes(&mut self) -> Vec<Vec<u8>> {
        self.probes.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Apply the first matching suffix rule.
    ///
    /// The primary transform writes one level deeper than the secondary
    /// one, which starts from cleared slots.
    pub(crate) fn suffix(&mut self, stem: Stem<'_>, lev: usize) -> bool {
        let lev = lev + DLEV;
        self.derivation.clear(lev);
        self.derivation.clear(lev - 1);

        let table = self.table;
        let Some((rule, start)) = table.first_match(stem) else {
            return false;
        };
        if !has_vowel(&stem.word()[..start]) {
            return false;
        }
        if self.apply(&rule.primary, stem, lev + 1) {
            return true;
        }
        let Some(secondary) = &rule.secondary else {
            return false;
        };
        self.derivation.clear(lev);
        self.derivation.clear(lev + 1);
        self.apply(secondary, stem, lev)
    }

    fn apply(&mut self, transform: &'a Transform, stem: Stem<'_>, lev: usize) -> bool {
        self.repair(
            transform.repair,
            stem.shortened(transform.strip),
            &transform.undo,
            &transform.redo,
            lev,
        )
    }

    /// Record `annotation` at `lev` and look the stem up, first as is and
    /// then behind successively longer prefix chains.
    pub(crate) fn trypref(&mut self, stem: Stem<'_>, annotation: &'a str, lev: usize) -> bool {
        self.derivation.set(lev, annotation);
        if self.tryword(stem, 0, lev) {
            return true;
        }

        let mut chain = String::new();
        let mut start = 0;
        let mut found = false;
        while let Some((prefix, rest)) = match_prefix(stem, start) {
            chain.push('+');
            chain.push_str(prefix);
            self.derivation.set(lev + 1, chain.clone());
            start = rest;
            if self.tryword(stem, start, lev + 1) {
                found = true;
                break;
            }
            if chain.len() >= PREFIX_ANNOTATION_MAX {
                return false;
            }
        }
        self.derivation.clear(lev + 1);
        self.derivation.clear(lev + 2);
        found
    }

    /// Look up `stem[start..end]`, or the same with a doubled final
    /// consonant undone.
    fn tryword(&mut self, stem: Stem<'_>, start: usize, lev: usize) -> bool {
        let end = stem.end();
        if end <= start + 1 {
            return false;
        }
        let word = stem.word();
        let vowel_follows = is_vowel(stem.following());
        if vowel_follows && monosyllable(&word[start..end]) {
            return false;
        }

        let mut lev = lev;
        let mut found = self.lookup(&word[start..end]);
        if !found
            && vowel_follows
            && word[end - 1] == word[end - 2]
            && monosyllable(&word[start..end - 1])
        {
            lev += 1;
            self.derivation
                .set(lev, format!("+{}", char::from(word[end - 1])));
            found = self.lookup(&word[start..end - 1]);
        }

        if found {
            let derivation = self.derivation.assemble(lev);
            tracing::trace!(%derivation, "stem accepted");
            self.accepted = Some(derivation);
        }
        found
    }

    fn lookup(&mut self, candidate: &[u8]) -> bool {
        if let Some(probes) = &mut self.probes {
            probes.push(candidate.to_vec());
        }
        let found = self.lexicon.has_word(candidate);
        tracing::trace!(stem = %String::from_utf8_lossy(candidate), found, "dictionary probe");
        found
    }
}

/// Whether a stem is a single closed syllable: consonants, one vowel, one
/// final consonant other than `w` or `x`.
///
/// Such stems double their final consonant before a vowel ending ("run",
/// "running"), so the undoubled form is not accepted in front of one.
pub fn monosyllable(stem: &[u8]) -> bool {
    let [head @ .., penult, last] = stem else {
        return false;
    };
    if is_vowel(*last) || !is_vowel(*penult) || matches!(*last, b'x' | b'w') {
        return false;
    }
    !has_vowel(head)
}

/// Step back from `pos` over at most one vowel and then over consonants.
///
/// Returns the position of the preceding vowel, or -1 when the start of the
/// word is reached first.
pub fn skip_vowel(word: &[u8], mut pos: isize) -> isize {
    let at = |i: isize| usize::try_from(i).ok().and_then(|i| word.get(i).copied());
    if at(pos).is_some_and(is_vowel) {
        pos -= 1;
    }
    while at(pos).is_some_and(|b| !is_vowel(b)) {
        pos -= 1;
    }
    pos
}
