// Binary search over a sorted, newline-delimited corpus
//
// This is the algorithm of the classic `look` utility: bisect on byte
// offsets, re-synchronise on the next line start, then finish with a
// short linear scan. No line index is built, so a corpus can be searched
// straight from the bytes it was loaded as.
//
// Lines are ordered by ASCII case-insensitive byte comparison (the order
// produced by `sort -f`). A probe only matches a line that is byte-for-byte
// identical, so "America" in the corpus does not accept "america".

use std::cmp::Ordering;

use spell_core::character::fold;

/// Whether `key` appears as a whole line of the sorted `corpus`.
pub fn look(key: &[u8], corpus: &[u8]) -> bool {
    let front = binary_search(key, corpus);
    linear_search(key, corpus, front)
}

/// Offset just past the next newline at or after `pos`, bounded by `back`.
fn skip_past_newline(corpus: &[u8], pos: usize, back: usize) -> usize {
    match corpus[pos..back].iter().position(|&b| b == b'\n') {
        Some(i) => pos + i + 1,
        None => back,
    }
}

/// The line starting at `pos`, without its newline or a trailing `\r`.
fn line_at(corpus: &[u8], pos: usize) -> &[u8] {
    let rest = &corpus[pos..];
    let line = match rest.iter().position(|&b| b == b'\n') {
        Some(i) => &rest[..i],
        None => rest,
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Order `key` against `line`, ignoring ASCII case.
fn compare(key: &[u8], line: &[u8]) -> Ordering {
    key.iter().map(|&b| fold(b)).cmp(line.iter().map(|&b| fold(b)))
}

/// Find the start of a line at or before the first line not less than
/// `key`. Every line before the returned offset sorts below `key`.
fn binary_search(key: &[u8], corpus: &[u8]) -> usize {
    let mut front = 0;
    let mut back = corpus.len();
    let mut p = skip_past_newline(corpus, front + (back - front) / 2, back);

    while p < back && back > front {
        if compare(key, line_at(corpus, p)) == Ordering::Greater {
            front = p;
        } else {
            back = p;
        }
        p = skip_past_newline(corpus, front + (back - front) / 2, back);
    }
    front
}

/// Scan forward from `front` through every line that folds equal to `key`,
/// stopping at the first line that sorts above it.
fn linear_search(key: &[u8], corpus: &[u8], mut front: usize) -> bool {
    let back = corpus.len();
    while front < back {
        let line = line_at(corpus, front);
        match compare(key, line) {
            Ordering::Equal if line == key => return true,
            Ordering::Less => return false,
            Ordering::Equal | Ordering::Greater => {}
        }
        front = skip_past_newline(corpus, front, back);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[u8] = b"act\nAmerica\napple\nhappy\nrun\nstop\nzebra\n";

    #[test]
    fn finds_every_line() {
        for word in WORDS.split(|&b| b == b'\n').filter(|w| !w.is_empty()) {
            assert!(look(word, WORDS), "{}", String::from_utf8_lossy(word));
        }
    }

    #[test]
    fn rejects_prefixes_and_extensions() {
        assert!(!look(b"hap", WORDS));
        assert!(!look(b"happyness", WORDS));
        assert!(!look(b"ac", WORDS));
        assert!(!look(b"zebras", WORDS));
    }

    #[test]
    fn rejects_words_outside_the_range() {
        assert!(!look(b"aardvark", WORDS));
        assert!(!look(b"zzz", WORDS));
    }

    #[test]
    fn case_must_match_exactly() {
        assert!(look(b"America", WORDS));
        assert!(!look(b"america", WORDS));
        assert!(!look(b"Happy", WORDS));
    }

    #[test]
    fn case_variants_are_all_reachable() {
        let corpus = b"polish\nPolish\nzoo\n";
        assert!(look(b"Polish", corpus));
        assert!(look(b"polish", corpus));
        assert!(!look(b"POLISH", corpus));
    }

    #[test]
    fn missing_final_newline_and_crlf() {
        assert!(look(b"zebra", b"apple\nzebra"));
        assert!(look(b"apple", b"apple\r\nzebra\r\n"));
        assert!(look(b"zebra", b"apple\r\nzebra\r\n"));
    }

    #[test]
    fn empty_corpus_finds_nothing() {
        assert!(!look(b"anything", b""));
    }

    #[test]
    fn large_corpus_bisects_correctly() {
        let mut words: Vec<String> = (0..2000).map(|i| format!("w{i:05}")).collect();
        words.sort();
        let corpus = words.join("\n").into_bytes();
        for w in words.iter().step_by(37) {
            assert!(look(w.as_bytes(), &corpus), "{w}");
        }
        assert!(!look(b"w99999", &corpus));
        assert!(!look(b"w0", &corpus));
    }
}
