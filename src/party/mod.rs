//! Party composition builder.

mod builder;
mod composition;
mod drag;

pub use builder::{
    CLASS_SOURCES_ID, DEFAULT_DIFFICULTY, DEFAULT_MONSTER_COUNT, DEFAULT_MOVE_RANGE,
    DRAG_OVER_CLASS, GameConfig, MAX_PLAYERS, MONSTER_COUNT_ID, MOVE_RANGE_ID, PartyBuilder,
    SLOT_COUNT_ID, SLOT_LIST_ID, class_source_id, slot_id, slot_name_id, slot_remove_id,
};
pub use composition::{CharacterClass, MAX_SLOTS, PartyComposition, PartySlot};
pub use drag::DragState;
