// Level-indexed annotation slots describing how a word was reduced

use std::borrow::Cow;

/// Annotations recorded while reducing one word.
///
/// Each recursion level owns one slot. Suffix rules write at even levels
/// two apart; prefix chains and doubled consonants use the slots between.
/// When a stem is found in the dictionary, the annotations from the
/// accepting level down to level 1 are concatenated. Slot 0 holds the
/// top-level marker and never appears in the result.
#[derive(Debug, Clone, Default)]
pub struct Derivation<'t> {
    slots: Vec<Option<Cow<'t, str>>>,
}

impl<'t> Derivation<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all annotations. Capacity is kept for the next word.
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Record an annotation at `level`, growing the slot vector if needed.
    pub fn set(&mut self, level: usize, annotation: impl Into<Cow<'t, str>>) {
        if self.slots.len() <= level {
            self.slots.resize(level + 1, None);
        }
        self.slots[level] = Some(annotation.into());
    }

    pub fn clear(&mut self, level: usize) {
        if let Some(slot) = self.slots.get_mut(level) {
            *slot = None;
        }
    }

    pub fn get(&self, level: usize) -> Option<&str> {
        self.slots.get(level)?.as_deref()
    }

    /// Concatenate annotations from `level` down to 1, skipping empty slots.
    pub fn assemble(&self, level: usize) -> String {
        (1..=level).rev().filter_map(|l| self.get(l)).collect()
    }
}
