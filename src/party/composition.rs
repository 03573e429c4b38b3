//! Party composition: the bounded, ordered list of companion slots.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Maximum number of companion slots.
pub const MAX_SLOTS: usize = 7;

/// Companion classes that can be dragged into the party.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CharacterClass {
    /// Front-line melee.
    Warrior,
    /// Ranged arcane damage.
    Mage,
    /// Stealth and traps.
    Rogue,
    /// Healing and support.
    Cleric,
    /// Ranged physical damage.
    Ranger,
    /// Armored support.
    Paladin,
}

impl CharacterClass {
    /// Human-readable label.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
            Self::Ranger => "Ranger",
            Self::Paladin => "Paladin",
        }
    }
}

/// One filled companion slot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PartySlot {
    class: CharacterClass,
    name: String,
}

impl PartySlot {
    /// Creates a slot with an empty name.
    pub fn new(class: CharacterClass) -> Self {
        Self {
            class,
            name: String::new(),
        }
    }
}

/// Ordered companion list, capped at [`MAX_SLOTS`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartyComposition {
    slots: Vec<PartySlot>,
}

impl PartyComposition {
    /// Creates an empty composition.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled slots in order.
    pub fn slots(&self) -> &[PartySlot] {
        &self.slots
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True at capacity.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_SLOTS
    }

    /// Appends a companion. Returns false (and changes nothing) at capacity.
    #[instrument(skip(self), fields(len = self.slots.len()))]
    pub fn add(&mut self, class: CharacterClass) -> bool {
        if self.is_full() {
            debug!("Composition full, ignoring add");
            return false;
        }
        self.slots.push(PartySlot::new(class));
        debug!(len = self.slots.len(), "Companion added");
        true
    }

    /// Removes the companion at `index`; later entries shift down.
    #[instrument(skip(self), fields(len = self.slots.len()))]
    pub fn remove(&mut self, index: usize) -> Option<PartySlot> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    /// Sets the name of the companion at `index`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Fills an empty composition from `classes`, up to capacity.
    ///
    /// Does nothing when the composition already has members.
    #[instrument(skip(self, classes))]
    pub fn seed(&mut self, classes: &[CharacterClass]) {
        if !self.is_empty() {
            return;
        }
        for class in classes.iter().take(MAX_SLOTS) {
            self.slots.push(PartySlot::new(*class));
        }
        debug!(len = self.slots.len(), "Default composition seeded");
    }

    /// Classes in slot order.
    pub fn classes(&self) -> Vec<CharacterClass> {
        self.slots.iter().map(|s| s.class).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_parsing_is_case_insensitive() {
        assert_eq!("Warrior".parse::<CharacterClass>().ok(), Some(CharacterClass::Warrior));
        assert_eq!("mage".parse::<CharacterClass>().ok(), Some(CharacterClass::Mage));
        assert!("necromancer".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_seed_only_fills_empty_composition() {
        let mut party = PartyComposition::new();
        party.add(CharacterClass::Rogue);
        party.seed(&[CharacterClass::Warrior, CharacterClass::Cleric]);
        assert_eq!(party.classes(), vec![CharacterClass::Rogue]);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut party = PartyComposition::new();
        party.add(CharacterClass::Mage);
        assert!(party.remove(3).is_none());
        assert_eq!(party.len(), 1);
    }
}
