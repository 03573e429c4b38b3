//! Party setup: companion composition, game settings and character choice.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::element::{Element, ElementKind, ElementSpec, create_element};
use crate::party::{
    CLASS_SOURCES_ID, CharacterClass, MAX_SLOTS, MONSTER_COUNT_ID, MOVE_RANGE_ID, PartyBuilder,
    SLOT_COUNT_ID, SLOT_LIST_ID,
};
use crate::screens::handler::{Effect, ScreenContext, ScreenHandler, UiEvent, index_suffix};
use crate::session::{CharacterSummary, ScreenId, SessionState};

/// Selected character summary line.
pub const CHARACTER_SUMMARY_ID: &str = "selected-character";
/// Opens the character-selection service.
pub const CHOOSE_CHARACTER_ID: &str = "choose-character";
/// Creates the game.
pub const CREATE_PARTY_GAME_ID: &str = "create-party-game";
/// Back to the main menu.
pub const PARTY_BACK_ID: &str = "party-back";
/// Inline status line.
pub const PARTY_STATUS_ID: &str = "party-status";

const SLOT_PREFIX: &str = "party-slot-";
const SLOT_NAME_PREFIX: &str = "party-slot-name-";
const SLOT_REMOVE_PREFIX: &str = "party-slot-remove-";
const SOURCE_PREFIX: &str = "class-source-";

pub(crate) fn layout() -> Element {
    create_element(
        ElementSpec::new(ElementKind::Container)
            .id(ScreenId::PartySetup.region_id())
            .class("screen")
            .hide(true)
            .child(
                ElementSpec::new(ElementKind::Heading)
                    .class("title")
                    .text("Party Setup"),
            )
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id(CLASS_SOURCES_ID)
                    .class("class-sources"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(SLOT_COUNT_ID)
                    .class("slot-count")
                    .text(format!("0/{}", MAX_SLOTS)),
            )
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id(SLOT_LIST_ID)
                    .class("party-slots"),
            )
            .child(
                ElementSpec::new(ElementKind::Input)
                    .id(MONSTER_COUNT_ID)
                    .text("Monsters")
                    .attr("inputmode", "numeric")
                    .attr("placeholder", "10"),
            )
            .child(
                ElementSpec::new(ElementKind::Input)
                    .id(MOVE_RANGE_ID)
                    .text("Move range")
                    .attr("inputmode", "numeric")
                    .attr("placeholder", "3"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(CHARACTER_SUMMARY_ID)
                    .class("character-summary"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(CHOOSE_CHARACTER_ID)
                    .class("btn")
                    .text("Choose Character"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(CREATE_PARTY_GAME_ID)
                    .class("btn primary")
                    .text("Create Game"),
            )
            .child(
                ElementSpec::new(ElementKind::Button)
                    .id(PARTY_BACK_ID)
                    .class("btn secondary")
                    .text("Back"),
            )
            .child(
                ElementSpec::new(ElementKind::Text)
                    .id(PARTY_STATUS_ID)
                    .class("status"),
            ),
    )
}

/// The player character chosen for this party-setup visit.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SelectedCharacter {
    id: String,
    snapshot: CharacterSummary,
}

/// Party setup state. The composition persists across visits.
#[derive(Debug, Default)]
pub struct PartySetupScreen {
    builder: PartyBuilder,
    default_party: Vec<CharacterClass>,
    selected: Option<SelectedCharacter>,
}

impl PartySetupScreen {
    /// Creates the screen with the composition seeded on first entry.
    #[instrument]
    pub fn new(default_party: Vec<CharacterClass>) -> Self {
        Self {
            builder: PartyBuilder::new(),
            default_party,
            selected: None,
        }
    }

    /// The party builder.
    pub fn builder(&self) -> &PartyBuilder {
        &self.builder
    }

    /// Character chosen on this visit.
    pub fn selected(&self) -> Option<&SelectedCharacter> {
        self.selected.as_ref()
    }

    fn render(&self, ctx: &mut ScreenContext<'_>) {
        if let Some(region) = ctx.region(ScreenId::PartySetup) {
            self.builder.render_slots(region);
        }
    }

    fn render_summary(&self, ctx: &mut ScreenContext<'_>) {
        let text = match &self.selected {
            Some(selected) => {
                let c = selected.snapshot();
                format!("{} (level {} {})", c.name(), c.level(), c.class())
            }
            None => "No character selected".to_string(),
        };
        ctx.with_element(ScreenId::PartySetup, CHARACTER_SUMMARY_ID, |e| e.set_text(text));
    }

    fn set_status(&self, ctx: &mut ScreenContext<'_>, text: &str) {
        ctx.with_element(ScreenId::PartySetup, PARTY_STATUS_ID, |e| e.set_text(text));
    }

    fn source_payload(ctx: &mut ScreenContext<'_>, id: &str) -> Option<String> {
        let region = ctx.region(ScreenId::PartySetup)?;
        region
            .find(id)
            .and_then(|e| e.attribute("data-class"))
            .map(str::to_string)
    }

    #[instrument(skip(self, ctx))]
    fn handle_click(&mut self, id: &str, ctx: &mut ScreenContext<'_>) -> Effect {
        if let Some(index) = index_suffix(id, SLOT_REMOVE_PREFIX) {
            self.builder.remove_from_slot(index);
            self.render(ctx);
        } else if id.starts_with(SOURCE_PREFIX) {
            // Click-to-place fallback: arm a drag from the source.
            if let Some(payload) = Self::source_payload(ctx, id) {
                self.builder.begin_drag(&payload);
                self.render(ctx);
            }
        } else if let Some(index) = index_suffix(id, SLOT_PREFIX) {
            if self.builder.drag().payload().is_some() {
                self.builder.drop_on(index);
                self.render(ctx);
            }
        } else if id == CHOOSE_CHARACTER_ID {
            return Effect::RequestCharacterSelection;
        } else if id == CREATE_PARTY_GAME_ID {
            match &self.selected {
                Some(selected) => {
                    let config = self.builder.get_config();
                    info!(
                        character_id = %selected.id(),
                        npc_count = config.npc_count(),
                        "Creating game"
                    );
                    self.set_status(ctx, "Creating game...");
                    ctx.callbacks.on_create_game(selected.id(), &config);
                }
                None => self.set_status(ctx, "Select a character first"),
            }
        } else if id == PARTY_BACK_ID {
            ctx.callbacks.on_back_to_main_menu();
        }
        Effect::None
    }

    #[instrument(skip(self, ctx, value))]
    fn handle_input(&mut self, id: &str, value: &str, ctx: &mut ScreenContext<'_>) {
        if let Some(index) = index_suffix(id, SLOT_NAME_PREFIX) {
            if self.builder.set_slot_name(index, value) {
                ctx.with_element(ScreenId::PartySetup, id, |e| e.set_value(value));
            }
        } else if id == MONSTER_COUNT_ID {
            self.builder.set_monster_count_input(value);
            ctx.with_element(ScreenId::PartySetup, id, |e| e.set_value(value));
        } else if id == MOVE_RANGE_ID {
            self.builder.set_move_range_input(value);
            ctx.with_element(ScreenId::PartySetup, id, |e| e.set_value(value));
        }
    }
}

impl ScreenHandler for PartySetupScreen {
    fn id(&self) -> ScreenId {
        ScreenId::PartySetup
    }

    #[instrument(skip(self, _state, ctx))]
    fn enter(&mut self, _state: &SessionState, ctx: &mut ScreenContext<'_>) {
        self.selected = None;
        self.builder.cancel_drag();
        self.builder.seed_default(&self.default_party);
        debug!(
            len = self.builder.composition().len(),
            "Entering party setup"
        );
        if let Some(region) = ctx.region(ScreenId::PartySetup) {
            self.builder.render_sources(region);
        }
        self.render(ctx);
        self.render_summary(ctx);
        self.set_status(ctx, "");
    }

    #[instrument(skip(self, ctx))]
    fn handle_event(&mut self, event: &UiEvent, ctx: &mut ScreenContext<'_>) -> Effect {
        match event {
            UiEvent::Click(id) => return self.handle_click(id, ctx),
            UiEvent::Input { id, value } => self.handle_input(id, value, ctx),
            UiEvent::DragStart(payload) => {
                self.builder.begin_drag(payload);
                self.render(ctx);
            }
            UiEvent::DragOver(slot) => {
                self.builder.drag_over(*slot);
                self.render(ctx);
            }
            UiEvent::DragLeave(slot) => {
                self.builder.drag_leave(*slot);
                self.render(ctx);
            }
            UiEvent::Drop(slot) => {
                self.builder.drop_on(*slot);
                self.render(ctx);
            }
            UiEvent::DragCancel => {
                self.builder.cancel_drag();
                self.render(ctx);
            }
        }
        Effect::None
    }

    #[instrument(skip(self, character, ctx), fields(character_id = %character.id()))]
    fn character_selected(&mut self, character: CharacterSummary, ctx: &mut ScreenContext<'_>) {
        // Set once per visit; re-entry clears it.
        if self.selected.is_some() {
            debug!("Character already selected for this visit, ignoring");
            return;
        }
        self.selected = Some(SelectedCharacter {
            id: character.id().clone(),
            snapshot: character,
        });
        self.render_summary(ctx);
        self.set_status(ctx, "");
    }
}
