// SpellHandle: owns the rule table, dictionary and options

use std::path::Path;

use spell_core::verdict::Verdict;
use spell_lexicon::{Lexicon, LexiconError, WordList};

use crate::morphology::SuffixTable;
use crate::speller::pipeline::{SpellOptions, spell_check};

/// Owning entry point for spell checking.
///
/// The handle holds the rule table for the chosen spelling and the
/// dictionary. A short-lived reducer borrowing both is built for each
/// word, which keeps the handle free of self-references.
#[derive(Debug)]
pub struct SpellHandle<L> {
    lexicon: L,
    table: SuffixTable,
    options: SpellOptions,
}

impl<L: Lexicon> SpellHandle<L> {
    pub fn new(lexicon: L, options: SpellOptions) -> Self {
        Self {
            lexicon,
            table: SuffixTable::new(options.spelling),
            options,
        }
    }

    /// Check a word given as raw bytes.
    pub fn check(&self, word: &[u8]) -> Verdict {
        spell_check(word, &self.table, &self.lexicon, &self.options)
    }

    /// Whether `word` is accepted.
    pub fn spell(&self, word: &str) -> bool {
        self.check(word.as_bytes()).is_ok()
    }

    pub fn options(&self) -> &SpellOptions {
        &self.options
    }

    /// Turn probe collection on or off. The rule table is unaffected.
    pub fn set_trace(&mut self, trace: bool) {
        self.options.trace = trace;
    }

    pub fn table(&self) -> &SuffixTable {
        &self.table
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }
}

impl SpellHandle<Vec<WordList>> {
    /// Load every word list in `paths` and build a handle over all of them.
    ///
    /// A word is in the dictionary if any list contains it.
    pub fn open<P: AsRef<Path>>(paths: &[P], options: SpellOptions) -> Result<Self, LexiconError> {
        let lists = paths
            .iter()
            .map(WordList::open)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(lists, options))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use spell_core::enums::Spelling;
    use spell_lexicon::WordSet;

    use super::*;

    #[test]
    fn handle_checks_words() {
        let handle = SpellHandle::new(
            WordSet::from_words(["happy", "run"]),
            SpellOptions::default(),
        );
        assert!(handle.spell("happiness"));
        assert!(handle.spell("running"));
        assert!(!handle.spell("runing"));
        assert_eq!(handle.check(b"happiness").derivation, "-y+iness");
    }

    #[test]
    fn table_follows_spelling() {
        let options = SpellOptions {
            spelling: Spelling::British,
            ..SpellOptions::default()
        };
        let handle = SpellHandle::new(WordSet::new(), options);
        assert_eq!(handle.table().spelling(), Spelling::British);
    }

    #[test]
    fn trace_toggle() {
        let mut handle = SpellHandle::new(WordSet::from_words(["act"]), SpellOptions::default());
        assert!(handle.check(b"acting").probes.is_empty());
        handle.set_trace(true);
        assert!(handle.options().trace);
        assert_eq!(handle.check(b"acting").probes.len(), 2);
    }

    #[test]
    fn open_loads_all_lists() {
        let first = list_file(b"act\nhappy\n");
        let second = list_file(b"run\nstop\n");

        let handle =
            SpellHandle::open(&[first.path(), second.path()], SpellOptions::default()).unwrap();
        assert_eq!(handle.lexicon().len(), 2);
        assert!(handle.spell("happily"));
        assert!(handle.spell("stopped"));
    }

    #[test]
    fn open_reports_missing_list() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words");
        let err = SpellHandle::open(&[missing], SpellOptions::default()).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    fn list_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }
}
