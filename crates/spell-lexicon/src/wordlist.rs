// Sorted word-list dictionary held in memory

use std::path::Path;

use crate::look::look;
use crate::{Lexicon, LexiconError};

/// A sorted, newline-delimited word list.
///
/// The corpus is kept exactly as read; lookups bisect it directly with
/// [`look`](crate::look::look). Lines must be sorted case-insensitively
/// (`sort -f`). An all-lowercase list sorted with plain `sort` already
/// satisfies this.
pub struct WordList {
    name: String,
    data: Vec<u8>,
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("name", &self.name)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl WordList {
    /// Wrap an in-memory corpus. `name` is only used in diagnostics.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Read a word-list file into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let io_err = |source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if usize::try_from(size).is_err() {
            return Err(LexiconError::TooLarge {
                path: path.to_path_buf(),
                size,
            });
        }

        let data = std::fs::read(path).map_err(io_err)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "loaded word list");

        Ok(Self::from_bytes(path.display().to_string(), data))
    }

    /// Name given at construction (the file path for opened lists).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the corpus in bytes.
    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    /// Iterate over the non-empty lines of the corpus.
    pub fn words(&self) -> impl Iterator<Item = &[u8]> {
        self.data
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
    }

    /// Find the first pair of adjacent lines that are out of order.
    ///
    /// Returns the 1-based position, counting non-empty lines only, of the
    /// second line of the pair. Lookups in an unsorted list silently miss
    /// words, so callers check this once after loading.
    pub fn first_unsorted_line(&self) -> Option<usize> {
        let mut prev: Option<&[u8]> = None;
        for (i, line) in self.words().enumerate() {
            if let Some(p) = prev {
                let p = p.iter().map(u8::to_ascii_lowercase);
                if p.gt(line.iter().map(u8::to_ascii_lowercase)) {
                    return Some(i + 1);
                }
            }
            prev = Some(line);
        }
        None
    }
}

impl Lexicon for WordList {
    fn has_word(&self, word: &[u8]) -> bool {
        look(word, &self.data)
    }
}
