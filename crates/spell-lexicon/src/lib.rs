//! Dictionary lookup for the spellprog engine.
//!
//! The reducer only ever asks one question: is this exact byte string a
//! known word? This crate answers it for a few backends.
//!
//! - [`look`] -- binary and linear search over a sorted, newline-delimited corpus
//! - [`wordlist`] -- a word-list file held in memory and searched with [`look`]
//! - [`wordset`] -- a hashed in-memory word set

pub mod look;
pub mod wordlist;
pub mod wordset;

use std::path::PathBuf;

pub use wordlist::WordList;
pub use wordset::WordSet;

/// Error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: file too large ({size} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64 },
}

/// A dictionary that can answer exact-match membership queries.
///
/// Lookups never fail and never mutate the dictionary; they may be issued
/// any number of times per word under test.
pub trait Lexicon {
    /// Whether `word` is present exactly, byte for byte.
    fn has_word(&self, word: &[u8]) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn has_word(&self, word: &[u8]) -> bool {
        (**self).has_word(word)
    }
}

/// Several dictionaries consulted in order; the first hit wins.
impl<L: Lexicon> Lexicon for [L] {
    fn has_word(&self, word: &[u8]) -> bool {
        self.iter().any(|lexicon| lexicon.has_word(word))
    }
}

impl<L: Lexicon> Lexicon for Vec<L> {
    fn has_word(&self, word: &[u8]) -> bool {
        self.as_slice().has_word(word)
    }
}
