// Per-word classification result

use crate::enums::SpellResult;

/// Result of running one word through the reducer.
///
/// `derivation` holds the concatenated rule annotations of the accepting
/// reduction, deepest rule first ("+p+ed" for "stopped"). It is empty for
/// rejected words and for words found exactly as typed.
///
/// `probes` lists every stem looked up in the dictionary, in order. It is
/// only filled when tracing is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub result: SpellResult,
    pub derivation: String,
    pub probes: Vec<Vec<u8>>,
}

impl Verdict {
    /// A verdict for a word that reduced to a dictionary stem.
    pub fn accepted(derivation: String, probes: Vec<Vec<u8>>) -> Self {
        Self {
            result: SpellResult::Ok,
            derivation,
            probes,
        }
    }

    /// A verdict for a word no rule could reduce.
    pub fn rejected(probes: Vec<Vec<u8>>) -> Self {
        Self {
            result: SpellResult::Failed,
            derivation: String::new(),
            probes,
        }
    }

    /// Whether the word is considered correctly spelled.
    pub fn is_ok(&self) -> bool {
        self.result == SpellResult::Ok
    }
}
