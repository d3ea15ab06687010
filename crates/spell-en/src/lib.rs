//! English spelling engine built on suffix and prefix stripping.
//!
//! A word is accepted when a chain of morphological reductions turns it
//! into a dictionary stem: "happiness" becomes "happy", "stopped" becomes
//! "stop", "Americans" becomes "America". The rules are a fixed,
//! priority-ordered suffix table plus a short prefix list.
//!
//! - [`morphology`] -- stem view, rule tables, repair rules, reducer
//! - [`speller`] -- per-word case handling around the reducer
//! - [`handle`] -- an owning entry point holding table, dictionary and options

pub mod handle;
pub mod morphology;
pub mod speller;

pub use handle::SpellHandle;
pub use speller::pipeline::{SpellOptions, spell_check};
