//! Shared types and byte-level utilities for the spellprog engine.
//!
//! - [`character`] -- vowel classification and ASCII case helpers
//! - [`case`] -- lowercase check and folding of word buffers
//! - [`enums`] -- result and spelling-variant enums, input bounds
//! - [`verdict`] -- the per-word outcome reported by the classifier

pub mod case;
pub mod character;
pub mod enums;
pub mod verdict;
