// Hashed in-memory word set

use hashbrown::HashSet;

use crate::Lexicon;

/// An unordered in-memory dictionary.
///
/// Useful for small embedded vocabularies and for tests, where building a
/// sorted corpus would be needless ceremony.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<Box<[u8]>>,
}

impl WordSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any collection of words.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Add a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &[u8]) -> bool {
        self.words.insert(word.into())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordSet {
    fn has_word(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut set = WordSet::new();
        assert!(set.is_empty());
        assert!(set.insert(b"happy"));
        assert!(!set.insert(b"happy"));
        assert_eq!(set.len(), 1);
        assert!(set.has_word(b"happy"));
        assert!(!set.has_word(b"Happy"));
    }

    #[test]
    fn from_words_accepts_strings_and_bytes() {
        let set = WordSet::from_words(["run", "stop"]);
        assert!(set.has_word(b"run"));

        let set = WordSet::from_words(vec![b"act".to_vec()]);
        assert!(set.has_word(b"act"));
        assert!(!set.has_word(b"ac"));
    }
}
