// Morphological reduction: rule tables and the recursive reducer

pub mod derivation;
pub mod prefix;
pub mod reducer;
mod repair;
pub mod stem;
pub mod suffix;

pub use derivation::Derivation;
pub use reducer::Reducer;
pub use repair::Repair;
pub use stem::Stem;
pub use suffix::{SuffixRule, SuffixTable, Transform};
