// spell-cli: shared pieces of the spellprog command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use spell_core::enums::MAX_WORD_BYTES;
use spell_core::verdict::Verdict;
use spell_en::SpellHandle;
use spell_lexicon::{Lexicon, WordList};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SPELLPROG_LOG";

/// Install a stderr subscriber filtered by `SPELLPROG_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

/// Load every word list, warning about any that is not sorted.
pub fn load_word_lists(paths: &[PathBuf]) -> anyhow::Result<Vec<WordList>> {
    paths
        .iter()
        .map(|path| -> anyhow::Result<WordList> {
            let list = WordList::open(path).context("failed to load word list")?;
            if let Some(line) = list.first_unsorted_line() {
                tracing::warn!(
                    list = list.name(),
                    line,
                    "word list is not sorted, lookups may miss words"
                );
            }
            Ok(list)
        })
        .collect()
}

/// Reads one word per input line, as raw bytes.
///
/// Words longer than the limit are cut at the limit; the rest of the line
/// is skipped and a warning is logged. A final line without a newline is
/// still returned.
pub struct WordReader<R> {
    inner: R,
    limit: usize,
    line: u64,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, MAX_WORD_BYTES)
    }

    pub fn with_limit(inner: R, limit: usize) -> Self {
        Self {
            inner,
            limit,
            line: 0,
        }
    }

    /// Read the next word into `buf`, replacing its contents.
    ///
    /// Returns `false` at end of input.
    pub fn read_word(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let mut seen = false;
        let mut truncated = false;

        loop {
            let (used, done) = {
                let available = match self.inner.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    break;
                }
                seen = true;

                let newline = available.iter().position(|&b| b == b'\n');
                let chunk = &available[..newline.unwrap_or(available.len())];
                let room = self.limit.saturating_sub(buf.len());
                if chunk.len() > room {
                    truncated = true;
                }
                buf.extend_from_slice(&chunk[..chunk.len().min(room)]);

                match newline {
                    Some(i) => (i + 1, true),
                    None => (available.len(), false),
                }
            };
            self.inner.consume(used);
            if done {
                break;
            }
        }

        if !seen {
            return Ok(false);
        }
        self.line += 1;
        if truncated {
            tracing::warn!(line = self.line, limit = self.limit, "word too long, truncated");
        }
        Ok(true)
    }
}

/// Writes per-word results: misses to one stream, accepted words to an
/// optional found file.
pub struct Report<O, F> {
    misses: O,
    found: Option<F>,
    verbose: bool,
    trace: bool,
}

impl<O: Write, F: Write> Report<O, F> {
    pub fn new(misses: O, found: Option<F>) -> Self {
        Self {
            misses,
            found,
            verbose: false,
            trace: false,
        }
    }

    /// Prefix found words with their derivation and a tab.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Print every probed stem as `=stem` before the word's result.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn record(&mut self, word: &[u8], verdict: &Verdict) -> io::Result<()> {
        if self.trace {
            for probe in &verdict.probes {
                self.misses.write_all(b"=")?;
                self.misses.write_all(probe)?;
                self.misses.write_all(b"\n")?;
            }
        }

        if !verdict.is_ok() {
            self.misses.write_all(word)?;
            return self.misses.write_all(b"\n");
        }
        if let Some(found) = &mut self.found {
            if self.verbose && !verdict.derivation.is_empty() {
                found.write_all(verdict.derivation.as_bytes())?;
                found.write_all(b"\t")?;
            }
            found.write_all(word)?;
            found.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush both streams.
    pub fn finish(&mut self) -> io::Result<()> {
        self.misses.flush()?;
        if let Some(found) = &mut self.found {
            found.flush()?;
        }
        Ok(())
    }
}

/// Counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub words: u64,
    pub accepted: u64,
}

/// Check every word of `input` and record the results.
pub fn run<L, R, O, F>(
    handle: &SpellHandle<L>,
    input: R,
    report: &mut Report<O, F>,
) -> io::Result<RunStats>
where
    L: Lexicon,
    R: BufRead,
    O: Write,
    F: Write,
{
    let mut reader = WordReader::new(input);
    let mut word = Vec::new();
    let mut stats = RunStats::default();

    while reader.read_word(&mut word)? {
        let verdict = handle.check(&word);
        stats.words += 1;
        if verdict.is_ok() {
            stats.accepted += 1;
        }
        report.record(&word, &verdict)?;
    }
    report.finish()?;

    tracing::debug!(words = stats.words, accepted = stats.accepted, "end of input");
    Ok(stats)
}
