//! Party builder: drag sources, slot rendering and game configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use super::composition::{CharacterClass, MAX_SLOTS, PartyComposition, PartySlot};
use super::drag::DragState;
use crate::element::{Element, ElementKind, ElementSpec, mount};

/// Container holding one draggable source per class.
pub const CLASS_SOURCES_ID: &str = "class-sources";
/// Container holding the rendered slots.
pub const SLOT_LIST_ID: &str = "party-slots";
/// The `count/7` label.
pub const SLOT_COUNT_ID: &str = "party-slot-count";
/// Monster count input.
pub const MONSTER_COUNT_ID: &str = "monster-count";
/// Player move range input.
pub const MOVE_RANGE_ID: &str = "move-range";

/// Fallback monster count.
pub const DEFAULT_MONSTER_COUNT: u32 = 10;
/// Fallback player move range.
pub const DEFAULT_MOVE_RANGE: u32 = 3;
/// Players per game.
pub const MAX_PLAYERS: u32 = 4;
/// Difficulty sent with every new game.
pub const DEFAULT_DIFFICULTY: &str = "normal";

/// Style class applied to a slot while a valid drag hovers it.
pub const DRAG_OVER_CLASS: &str = "drag-over";

/// Id of the slot element at `index`.
pub fn slot_id(index: usize) -> String {
    format!("party-slot-{}", index)
}

/// Id of the name input inside the filled slot at `index`.
pub fn slot_name_id(index: usize) -> String {
    format!("party-slot-name-{}", index)
}

/// Id of the remove button inside the filled slot at `index`.
pub fn slot_remove_id(index: usize) -> String {
    format!("party-slot-remove-{}", index)
}

/// Id of the draggable source for a class.
pub fn class_source_id(class: CharacterClass) -> String {
    format!("class-source-{}", class)
}

/// Immutable game-creation settings derived from the party builder.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    max_players: u32,
    difficulty: String,
    npc_count: usize,
    npc_classes: Vec<PartySlot>,
    monster_count: u32,
    player_move_range: u32,
}

/// Owns the party composition and the party-setup form inputs.
#[derive(Debug, Clone, Default)]
pub struct PartyBuilder {
    composition: PartyComposition,
    drag: DragState,
    monster_count_input: String,
    move_range_input: String,
}

impl PartyBuilder {
    /// Creates an empty builder.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current composition.
    pub fn composition(&self) -> &PartyComposition {
        &self.composition
    }

    /// Current drag state.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Seeds a default composition when empty.
    #[instrument(skip(self))]
    pub fn seed_default(&mut self, classes: &[CharacterClass]) {
        self.composition.seed(classes);
    }

    /// Appends a companion by class name.
    ///
    /// Unknown class names are rejected. At capacity this is a silent no-op.
    #[instrument(skip(self))]
    pub fn add_to_slot(&mut self, class_name: &str) -> bool {
        let Ok(class) = class_name.parse::<CharacterClass>() else {
            warn!(class_name, "Rejecting unknown class");
            return false;
        };
        self.composition.add(class)
    }

    /// Removes the companion at `index`; later companions shift down.
    #[instrument(skip(self))]
    pub fn remove_from_slot(&mut self, index: usize) -> bool {
        match self.composition.remove(index) {
            Some(slot) => {
                debug!(class = %slot.class(), "Companion removed");
                true
            }
            None => {
                warn!(index, len = self.composition.len(), "Slot index out of range");
                false
            }
        }
    }

    /// Updates a companion's name as the user types.
    #[instrument(skip(self, name))]
    pub fn set_slot_name(&mut self, index: usize, name: &str) -> bool {
        self.composition.rename(index, name)
    }

    /// Sets the raw monster count text.
    pub fn set_monster_count_input(&mut self, value: &str) {
        self.monster_count_input = value.to_string();
    }

    /// Sets the raw move range text.
    pub fn set_move_range_input(&mut self, value: &str) {
        self.move_range_input = value.to_string();
    }

    /// Starts a drag from a class source.
    #[instrument(skip(self))]
    pub fn begin_drag(&mut self, payload: &str) {
        self.drag.begin(payload);
    }

    /// A drag moved over `slot`. Returns whether the slot shows the affordance.
    ///
    /// Only a payload naming a known class, over a slot under the cap,
    /// is accepted.
    #[instrument(skip(self))]
    pub fn drag_over(&mut self, slot: usize) -> bool {
        let known = self
            .drag
            .payload()
            .is_some_and(|p| p.parse::<CharacterClass>().is_ok());
        let accepting = known && slot < MAX_SLOTS && !self.composition.is_full();
        self.drag.over(slot, accepting)
    }

    /// The drag left `slot`.
    #[instrument(skip(self))]
    pub fn drag_leave(&mut self, slot: usize) {
        self.drag.leave(slot);
    }

    /// The drag was released over `slot`. Returns whether a companion was added.
    #[instrument(skip(self))]
    pub fn drop_on(&mut self, slot: usize) -> bool {
        let Some(payload) = self.drag.finish() else {
            debug!("Drop without an active drag");
            return false;
        };
        if slot >= MAX_SLOTS {
            return false;
        }
        let added = self.add_to_slot(&payload);
        if added {
            info!(class = %payload, len = self.composition.len(), "Companion dropped");
        }
        added
    }

    /// Abandons any active drag.
    #[instrument(skip(self))]
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Snapshot of the game-creation settings.
    #[instrument(skip(self))]
    pub fn get_config(&self) -> GameConfig {
        GameConfig {
            max_players: MAX_PLAYERS,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            npc_count: self.composition.len(),
            npc_classes: self.composition.slots().to_vec(),
            monster_count: parse_positive(&self.monster_count_input, DEFAULT_MONSTER_COUNT),
            player_move_range: parse_positive(&self.move_range_input, DEFAULT_MOVE_RANGE),
        }
    }

    /// Renders one draggable source per class into the region.
    #[instrument(skip(self, region))]
    pub fn render_sources(&self, region: &mut Element) {
        let Some(container) = region.find_mut(CLASS_SOURCES_ID) else {
            return;
        };
        container.clear_children();
        for class in CharacterClass::iter() {
            mount(
                container,
                ElementSpec::new(ElementKind::Button)
                    .id(class_source_id(class))
                    .class("class-source")
                    .text(class.label())
                    .attr("draggable", "true")
                    .attr("data-class", class.to_string()),
                false,
            );
        }
    }

    /// Regenerates the slot list: filled slots in order, then placeholders
    /// up to [`MAX_SLOTS`], and refreshes the `count/7` label and inputs.
    #[instrument(skip(self, region), fields(len = self.composition.len()))]
    pub fn render_slots(&self, region: &mut Element) {
        let hover = self.drag.hover();
        if let Some(list) = region.find_mut(SLOT_LIST_ID) {
            list.clear_children();
            for (index, slot) in self.composition.slots().iter().enumerate() {
                let class = if hover == Some(index) {
                    format!("party-slot filled {}", DRAG_OVER_CLASS)
                } else {
                    "party-slot filled".to_string()
                };
                mount(
                    list,
                    ElementSpec::new(ElementKind::Item)
                        .id(slot_id(index))
                        .class(class)
                        .attr("data-index", index.to_string())
                        .attr("data-class", slot.class().to_string())
                        .child(
                            ElementSpec::new(ElementKind::Text)
                                .class("slot-class")
                                .text(slot.class().label()),
                        )
                        .child(
                            ElementSpec::new(ElementKind::Input)
                                .id(slot_name_id(index))
                                .class("slot-name")
                                .text("Name")
                                .attr("value", slot.name().as_str())
                                .attr("placeholder", "Companion name"),
                        )
                        .child(
                            ElementSpec::new(ElementKind::Button)
                                .id(slot_remove_id(index))
                                .class("slot-remove")
                                .text("Remove"),
                        ),
                    false,
                );
            }
            for index in self.composition.len()..MAX_SLOTS {
                let class = if hover == Some(index) {
                    format!("party-slot empty {}", DRAG_OVER_CLASS)
                } else {
                    "party-slot empty".to_string()
                };
                mount(
                    list,
                    ElementSpec::new(ElementKind::Item)
                        .id(slot_id(index))
                        .class(class)
                        .text("Drop a class here")
                        .attr("data-index", index.to_string()),
                    false,
                );
            }
        }
        region.with(SLOT_COUNT_ID, |label| {
            label.set_text(format!("{}/{}", self.composition.len(), MAX_SLOTS));
        });
        region.with(MONSTER_COUNT_ID, |input| {
            input.set_value(self.monster_count_input.as_str())
        });
        region.with(MOVE_RANGE_ID, |input| {
            input.set_value(self.move_range_input.as_str())
        });
    }
}

/// Parses a positive integer, falling back to `default` for blank, zero
/// or non-numeric input.
#[instrument]
fn parse_positive(input: &str, default: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => default,
    }
}
