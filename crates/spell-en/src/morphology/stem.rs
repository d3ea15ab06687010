// Read-only view of a candidate word with a movable end

/// A candidate word buffer together with the end of the current stem.
///
/// Bytes past `end` are the ending stripped so far; rules still inspect
/// the first of them. Reads outside the buffer yield 0, which is neither
/// a vowel nor a letter.
///
/// The buffer is never written through a `Stem`. A rule that needs to
/// change a byte copies the buffer with [`Stem::rewrite`] and recurses on a
/// view of the copy, so a failed attempt leaves the caller's word intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stem<'w> {
    word: &'w [u8],
    end: usize,
}

impl<'w> Stem<'w> {
    /// The whole word as a stem.
    pub fn new(word: &'w [u8]) -> Self {
        Self {
            word,
            end: word.len(),
        }
    }

    /// A stem ending at `end`. Clamped to the buffer length.
    pub fn with_end(word: &'w [u8], end: usize) -> Self {
        Self {
            word,
            end: end.min(word.len()),
        }
    }

    /// The full buffer, including any stripped ending.
    pub fn word(&self) -> &'w [u8] {
        self.word
    }

    /// Offset one past the last stem byte.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The stem bytes.
    pub fn bytes(&self) -> &'w [u8] {
        &self.word[..self.end]
    }

    /// The first byte of the buffer.
    pub fn first(&self) -> u8 {
        self.word.first().copied().unwrap_or(0)
    }

    /// The byte `n` positions before the end (`before(1)` is the last stem
    /// byte).
    pub fn before(&self, n: usize) -> u8 {
        self.end
            .checked_sub(n)
            .and_then(|i| self.word.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// The first byte after the stem.
    pub fn following(&self) -> u8 {
        self.word.get(self.end).copied().unwrap_or(0)
    }

    /// The same buffer with the end moved back by `n` bytes.
    pub fn shortened(&self, n: usize) -> Self {
        Self {
            word: self.word,
            end: self.end.saturating_sub(n),
        }
    }

    /// Match a reversed suffix against the end of the stem.
    ///
    /// Returns the offset where the suffix begins.
    pub fn match_reversed(&self, reversed: &[u8]) -> Option<usize> {
        let start = self.end.checked_sub(reversed.len())?;
        self.word[start..self.end]
            .iter()
            .rev()
            .eq(reversed)
            .then_some(start)
    }

    /// Copy the buffer and overwrite bytes from `at`, growing the copy if
    /// the write runs past its end.
    pub fn rewrite(&self, at: usize, bytes: &[u8]) -> Vec<u8> {
        let mut buf = self.word.to_vec();
        let stop = at + bytes.len();
        if buf.len() < stop {
            buf.resize(stop, 0);
        }
        buf[at..stop].copy_from_slice(bytes);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_view() {
        let s = Stem::new(b"running");
        assert_eq!(s.end(), 7);
        assert_eq!(s.bytes(), b"running");
        assert_eq!(s.following(), 0);
        assert_eq!(s.before(1), b'g');
        assert_eq!(s.first(), b'r');
    }

    #[test]
    fn shortened_view_sees_stripped_ending() {
        let s = Stem::new(b"running").shortened(3);
        assert_eq!(s.bytes(), b"runn");
        assert_eq!(s.following(), b'i');
        assert_eq!(s.before(2), b'n');
        assert_eq!(s.word(), b"running");
    }

    #[test]
    fn reads_outside_buffer_are_zero() {
        let s = Stem::new(b"ab");
        assert_eq!(s.before(3), 0);
        assert_eq!(s.shortened(5).end(), 0);
        assert_eq!(s.shortened(5).before(1), 0);
        assert_eq!(Stem::new(b"").first(), 0);
    }

    #[test]
    fn match_reversed_suffix() {
        let s = Stem::new(b"happiness");
        assert_eq!(s.match_reversed(b"ssen"), Some(5));
        assert_eq!(s.match_reversed(b"s"), Some(8));
        assert_eq!(s.match_reversed(b"ssel"), None);
        assert_eq!(Stem::new(b"ss").match_reversed(b"ssen"), None);
    }

    #[test]
    fn rewrite_copies_and_leaves_original() {
        let word = b"happiness".to_vec();
        let s = Stem::with_end(&word, 5);
        let edited = s.rewrite(4, b"y");
        assert_eq!(edited, b"happyness");
        assert_eq!(word, b"happiness");
    }

    #[test]
    fn rewrite_grows_when_needed() {
        let s = Stem::new(b"ab");
        assert_eq!(s.rewrite(2, b"le"), b"able");
    }

    #[test]
    fn with_end_clamps() {
        let s = Stem::with_end(b"abc", 10);
        assert_eq!(s.end(), 3);
    }
}
