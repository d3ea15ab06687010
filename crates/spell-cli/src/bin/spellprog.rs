// spellprog: report words from stdin that the word lists do not cover.
//
// Each input line is one word. A word is accepted if it, or a stem reached
// by stripping English prefixes and suffixes, is in one of the sorted word
// lists. Rejected words are written to stdout unchanged; accepted words go
// to the found file when one is given.
//
// Usage:
//   spellprog [-b] [-v] [-x] [-o FILE] WORDLIST...
//
// Logging goes to stderr and is filtered by SPELLPROG_LOG (default "warn").

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spell_core::enums::Spelling;
use spell_en::{SpellHandle, SpellOptions};

#[derive(Parser)]
#[command(name = "spellprog", about = "Check words from stdin against sorted word lists")]
struct Cli {
    /// Use British spelling rules (-ise, -isation).
    #[arg(short = 'b')]
    british: bool,

    /// Write each found word's derivation before it, separated by a tab.
    #[arg(short = 'v')]
    verbose: bool,

    /// Print every stem tried against the word lists as "=stem".
    #[arg(short = 'x')]
    trace: bool,

    /// File receiving the accepted words.
    #[arg(short = 'o', value_name = "FILE")]
    found: Option<PathBuf>,

    /// Word lists, sorted case-insensitively.
    #[arg(required = true, value_name = "WORDLIST")]
    lists: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    spell_cli::init_logging();

    let options = SpellOptions {
        spelling: if cli.british {
            Spelling::British
        } else {
            Spelling::American
        },
        trace: cli.trace,
    };
    let lists = spell_cli::load_word_lists(&cli.lists)?;
    let handle = SpellHandle::new(lists, options);

    let found = cli
        .found
        .as_deref()
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("cannot create {}", path.display()))
        })
        .transpose()?;

    let stdout = io::stdout();
    let mut report = spell_cli::Report::new(BufWriter::new(stdout.lock()), found)
        .verbose(cli.verbose)
        .trace(cli.trace);

    let stdin = io::stdin();
    spell_cli::run(&handle, stdin.lock(), &mut report).context("spell check failed")?;
    Ok(())
}
