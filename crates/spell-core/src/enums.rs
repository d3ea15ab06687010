// Shared enums and bounds

/// Outcome of checking one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// The word reduced to a dictionary stem.
    Ok,
    /// No reduction reached a dictionary stem.
    Failed,
}

/// Spelling variant selecting the suffix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    /// `-ize`, `-ization` endings.
    #[default]
    American,
    /// `-ise`, `-isation` endings.
    British,
}

/// Size of the input line buffer, terminator included.
pub const LINE_MAX: usize = 2048;

/// Longest word read from one input line. Longer lines are truncated to
/// this many bytes and the remainder of the line is discarded.
pub const MAX_WORD_BYTES: usize = LINE_MAX - 1;
