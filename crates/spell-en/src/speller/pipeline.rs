// Case handling and retry loop for a single word
//
// A word is tried as typed first. Words without any lowercase letter get
// one exact attempt and are then folded to "Capitalized" form. If a
// capitalized word still fails, it is retried with the first letter
// lowered, which is how sentence-initial words reach the dictionary.

use spell_core::case::{has_lower, lower_all, lower_first, lower_tail, starts_upper};
use spell_core::enums::Spelling;
use spell_core::verdict::Verdict;
use spell_lexicon::Lexicon;

use crate::morphology::{Reducer, Stem, SuffixTable};

/// Options for spell checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpellOptions {
    /// Which suffix table to use.
    pub spelling: Spelling,
    /// Collect every stem probed against the dictionary.
    pub trace: bool,
}

/// Check one word against `lexicon` using the rules in `table`.
pub fn spell_check<L: Lexicon + ?Sized>(
    word: &[u8],
    table: &SuffixTable,
    lexicon: &L,
    options: &SpellOptions,
) -> Verdict {
    let mut reducer = Reducer::new(table, lexicon);
    reducer.set_trace(options.trace);
    reducer.begin_word();

    let accepted = classify(&mut reducer, word);
    let probes = reducer.take_probes();
    let verdict = if accepted {
        let derivation = reducer.derivation().unwrap_or_default().to_owned();
        Verdict::accepted(derivation, probes)
    } else {
        Verdict::rejected(probes)
    };

    tracing::debug!(
        word = %String::from_utf8_lossy(word),
        result = ?verdict.result,
        derivation = %verdict.derivation,
        "checked word"
    );
    verdict
}

fn classify<L: Lexicon + ?Sized>(reducer: &mut Reducer<'_, L>, original: &[u8]) -> bool {
    let mut buf = original.to_vec();
    let mut folded = false;

    if !has_lower(original) {
        if reducer.lookup_with_prefixes(Stem::new(&buf)) {
            return true;
        }
        lower_tail(&mut buf);
        folded = true;
    }

    loop {
        let stem = Stem::new(&buf);
        if reducer.lookup_with_prefixes(stem) || reducer.strip_suffixes(stem) {
            return true;
        }
        if !starts_upper(&buf) {
            return false;
        }
        buf = original.to_vec();
        if folded {
            lower_all(&mut buf);
        }
        lower_first(&mut buf);
    }
}
