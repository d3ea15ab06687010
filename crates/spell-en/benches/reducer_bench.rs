// Criterion benchmarks for spell-en.
//
// Uses a small built-in dictionary and a mix of words that hit the
// dictionary directly, reduce through one or two suffixes, or fail after
// exhausting the rules.
//
// Run:
//   cargo bench -p spell-en

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use spell_core::enums::Spelling;
use spell_en::morphology::SuffixTable;
use spell_en::{SpellHandle, SpellOptions};
use spell_lexicon::{WordList, WordSet};

const DICTIONARY: &[&str] = &[
    "act", "America", "box", "country", "create", "easy", "handle", "happy", "hope", "kind",
    "move", "possible", "real", "run", "stop", "tell", "urgent",
];

const WORDS: &[&str] = &[
    "happy", "happiness", "unhappiness", "Americans", "running", "stopped", "creation", "handling",
    "movement", "countries", "urgency", "possibility", "xyzzy", "theater", "bcment", "STOP",
];

fn sorted_corpus() -> Vec<u8> {
    let mut words: Vec<&str> = DICTIONARY.to_vec();
    words.sort_by_key(|w| w.to_ascii_lowercase());
    let mut corpus = words.join("\n").into_bytes();
    corpus.push(b'\n');
    corpus
}

fn bench_wordset(c: &mut Criterion) {
    let handle = SpellHandle::new(WordSet::from_words(DICTIONARY), SpellOptions::default());
    c.bench_function("check_words_wordset", |b| {
        b.iter(|| {
            for w in WORDS {
                black_box(handle.check(black_box(w.as_bytes())));
            }
        })
    });
}

fn bench_wordlist(c: &mut Criterion) {
    let list = WordList::from_bytes("bench", sorted_corpus());
    let handle = SpellHandle::new(list, SpellOptions::default());
    c.bench_function("check_words_wordlist", |b| {
        b.iter(|| {
            for w in WORDS {
                black_box(handle.check(black_box(w.as_bytes())));
            }
        })
    });
}

fn bench_traced(c: &mut Criterion) {
    let options = SpellOptions {
        trace: true,
        ..SpellOptions::default()
    };
    let handle = SpellHandle::new(WordSet::from_words(DICTIONARY), options);
    c.bench_function("check_words_traced", |b| {
        b.iter(|| {
            for w in WORDS {
                black_box(handle.check(black_box(w.as_bytes())));
            }
        })
    });
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("suffix_table_british", |b| {
        b.iter(|| black_box(SuffixTable::new(black_box(Spelling::British))))
    });
}

criterion_group!(
    benches,
    bench_wordset,
    bench_wordlist,
    bench_traced,
    bench_table_build
);
criterion_main!(benches);
