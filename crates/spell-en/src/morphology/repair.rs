// Repair rules run on a stem after its suffix has been cut
//
// Each repair decides whether the cut stem needs restoring (a dropped
// silent e, a y that became i, a doubled consonant) and which annotation
// to record, then hands the stem back to the reducer. Edits are made on a
// copy of the buffer, so a failed branch leaves nothing to undo.

use spell_core::character::{is_upper, is_vowel};
use spell_lexicon::Lexicon;

use super::reducer::{DLEV, Reducer, skip_vowel};
use super::stem::Stem;

/// What to do with a stem once a suffix has been cut from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repair {
    /// Try the bare stem, then strip further suffixes.
    Strip,
    /// Plural or possessive `s`; refuses "ss" and deep nesting.
    Plural,
    /// Plural `es` after a sibilant, or `ies` from `y`.
    PluralEs,
    /// `-n`/`-ian` forms of capitalized names.
    ProperName,
    /// Restore the `e` of an `-ize` verb before `-ation`.
    Ize,
    /// Restore a dropped silent `e`.
    YToE,
    /// `y` that became `i` before the ending, otherwise a plain strip.
    Ily,
    /// `-nce`/`-ncy` back to `-nt`.
    Ncy,
    /// `-ibility` back to `-ible`.
    Bility,
    /// Turn a trailing `i` back into `y`.
    IToY,
    /// `-metry` back to `-meter`.
    Metry,
    /// `-tion`, `-tive`, `-ator` endings.
    Tion,
    /// Consonant cluster before the ending decides on a silent `e`.
    CCe,
    /// Vowel-consonant before the ending suggests a silent `e`.
    VCe,
    /// Blocks the suffix: the word is never reduced by this rule.
    Nop,
}

impl<'a, L: Lexicon + ?Sized> Reducer<'a, L> {
    pub(crate) fn repair(
        &mut self,
        repair: Repair,
        stem: Stem<'_>,
        undo: &'a str,
        redo: &'a str,
        lev: usize,
    ) -> bool {
        match repair {
            Repair::Strip => self.strip(stem, redo, lev),
            Repair::Plural => self.plural(stem, redo, lev),
            Repair::PluralEs => self.plural_es(stem, undo, redo, lev),
            Repair::ProperName => self.proper_name(stem, redo, lev),
            // identical edit: append the e and strip with the undo note
            Repair::Ize | Repair::YToE => self.y_to_e(stem, undo, lev),
            Repair::Ily => self.ily(stem, undo, redo, lev),
            Repair::Ncy => self.ncy(stem, redo, lev),
            Repair::Bility => self.bility(stem, undo, lev),
            Repair::IToY => self.i_to_y(stem, undo, redo, lev),
            Repair::Metry => self.metry(stem, redo, lev),
            Repair::Tion => self.tion(stem, undo, redo, lev),
            Repair::CCe => self.cce(stem, undo, redo, lev),
            Repair::VCe => self.vce(stem, undo, redo, lev),
            Repair::Nop => false,
        }
    }

    fn strip(&mut self, stem: Stem<'_>, annotation: &'a str, lev: usize) -> bool {
        self.trypref(stem, annotation, lev) || self.suffix(stem, lev)
    }

    fn plural(&mut self, stem: Stem<'_>, redo: &'a str, lev: usize) -> bool {
        if lev > DLEV + 1 {
            return false;
        }
        if stem.following() == b's' && stem.before(1) == b's' {
            return false;
        }
        self.strip(stem, redo, lev)
    }

    fn plural_es(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        if lev > DLEV {
            return false;
        }
        match stem.before(1) {
            b'i' => self.i_to_y(stem, undo, redo, lev),
            b's' | b'h' | b'z' | b'x' => self.strip(stem, redo, lev),
            _ => false,
        }
    }

    fn proper_name(&mut self, stem: Stem<'_>, redo: &'a str, lev: usize) -> bool {
        is_upper(stem.first()) && self.trypref(stem, redo, lev)
    }

    fn y_to_e(&mut self, stem: Stem<'_>, undo: &'a str, lev: usize) -> bool {
        let end = stem.end();
        let buf = stem.rewrite(end, b"e");
        self.strip(Stem::with_end(&buf, end + 1), undo, lev)
    }

    fn ily(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        if stem.before(1) == b'i' {
            self.i_to_y(stem, undo, redo, lev)
        } else {
            self.strip(stem, redo, lev)
        }
    }

    fn ncy(&mut self, stem: Stem<'_>, redo: &'a str, lev: usize) -> bool {
        let end = stem.end();
        let Some(last) = end.checked_sub(1) else {
            return false;
        };
        // the stem needs a syllable before the final cluster
        let word = stem.word();
        if skip_vowel(word, skip_vowel(word, last as isize)) < 0 {
            return false;
        }
        let buf = stem.rewrite(last, b"t");
        self.strip(Stem::with_end(&buf, end), redo, lev)
    }

    fn bility(&mut self, stem: Stem<'_>, undo: &'a str, lev: usize) -> bool {
        let end = stem.end();
        let buf = stem.rewrite(end, b"l");
        self.y_to_e(Stem::with_end(&buf, end + 1), undo, lev)
    }

    fn i_to_y(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        let end = stem.end();
        if stem.before(1) == b'i' {
            let buf = stem.rewrite(end - 1, b"y");
            self.strip(Stem::with_end(&buf, end), undo, lev)
        } else {
            self.strip(stem, redo, lev)
        }
    }

    fn metry(&mut self, stem: Stem<'_>, redo: &'a str, lev: usize) -> bool {
        let end = stem.end();
        let Some(at) = end.checked_sub(2) else {
            return false;
        };
        let buf = stem.rewrite(at, b"er");
        self.strip(Stem::with_end(&buf, end), redo, lev)
    }

    fn tion(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        match stem.before(2) {
            b'c' | b'r' => self.trypref(stem, redo, lev),
            b'a' => self.y_to_e(stem, undo, lev),
            _ => false,
        }
    }

    fn cce(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        let last = stem.before(1);
        let prev = stem.before(2);

        match last {
            b'l' => {
                if !is_vowel(prev) && !matches!(prev, b'l' | b'r' | b'w') {
                    return self.y_to_e(stem, undo, lev);
                }
            }
            b's' if prev == b's' => {}
            b's' | b'c' | b'g' | b'v' | b'z' | b'u' => {
                // soft c and g stay soft before a
                if matches!(last, b's' | b'c' | b'g') && stem.following() == b'a' {
                    return false;
                }
                if last == b'u' || !is_vowel(prev) {
                    if self.y_to_e(stem, undo, lev) {
                        return true;
                    }
                    if !(prev == b'n' && last == b'g') {
                        return false;
                    }
                }
            }
            _ => {}
        }
        self.vce(stem, undo, redo, lev)
    }

    fn vce(&mut self, stem: Stem<'_>, undo: &'a str, redo: &'a str, lev: usize) -> bool {
        let last = stem.before(1);
        if last == b'e' {
            return false;
        }
        if !is_vowel(last) && is_vowel(stem.before(2)) {
            let end = stem.end();
            let buf = stem.rewrite(end, b"e");
            let restored = Stem::with_end(&buf, end + 1);
            if self.trypref(restored, undo, lev) || self.suffix(restored, lev) {
                return true;
            }
        }
        self.strip(stem, redo, lev)
    }
}
