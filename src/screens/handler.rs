//! Screen handler trait, user events and handler effects.

use tracing::trace;

use crate::callbacks::SessionCallbacks;
use crate::element::Element;
use crate::region::ScreenRegions;
use crate::session::{CharacterSummary, ScreenId, SessionState};

/// A user interaction routed to the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A control was activated.
    Click(String),
    /// A text field changed. Fired on every keystroke.
    Input {
        /// Id of the field.
        id: String,
        /// Full field value after the keystroke.
        value: String,
    },
    /// A drag started from a source carrying an opaque payload.
    DragStart(String),
    /// The active drag moved over a slot.
    DragOver(usize),
    /// The active drag left a slot.
    DragLeave(usize),
    /// The active drag was released over a slot.
    Drop(usize),
    /// The drag was abandoned without a drop.
    DragCancel,
}

impl UiEvent {
    /// Shorthand for [`UiEvent::Click`].
    pub fn click(id: impl Into<String>) -> Self {
        Self::Click(id.into())
    }

    /// Shorthand for [`UiEvent::Input`].
    pub fn input(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// What the caller must do after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    /// Nothing further.
    #[default]
    None,
    /// Run the character-selection service and deliver its result through
    /// [`ScreenManager::character_selected`](crate::ScreenManager::character_selected).
    RequestCharacterSelection,
}

/// Borrowed collaborators handed to a handler for one call.
pub struct ScreenContext<'a> {
    /// Display regions.
    pub regions: &'a mut dyn ScreenRegions,
    /// Upward callbacks.
    pub callbacks: &'a mut dyn SessionCallbacks,
}

impl<'a> ScreenContext<'a> {
    /// Bundles the collaborators.
    pub fn new(
        regions: &'a mut dyn ScreenRegions,
        callbacks: &'a mut dyn SessionCallbacks,
    ) -> Self {
        Self { regions, callbacks }
    }

    /// The region of a screen, if present.
    pub fn region(&mut self, id: ScreenId) -> Option<&mut Element> {
        let region = self.regions.region_mut(id);
        if region.is_none() {
            trace!(screen = %id, "Region absent");
        }
        region
    }

    /// Applies `f` to the element `element_id` inside the region of `screen`.
    ///
    /// Missing regions and elements are ignored.
    pub fn with_element<F: FnOnce(&mut Element)>(
        &mut self,
        screen: ScreenId,
        element_id: &str,
        f: F,
    ) -> bool {
        match self.region(screen) {
            Some(region) => region.with(element_id, f),
            None => false,
        }
    }
}

/// Behavior of one screen.
///
/// One instance exists per [`ScreenId`] and is reused across transitions.
/// Only the active handler ever receives `update` or events.
pub trait ScreenHandler: std::fmt::Debug {
    /// Screen this handler drives.
    fn id(&self) -> ScreenId;

    /// Called when the screen becomes active, after its region is shown.
    fn enter(&mut self, state: &SessionState, ctx: &mut ScreenContext<'_>);

    /// Called before the screen's region is hidden.
    fn exit(&mut self, _ctx: &mut ScreenContext<'_>) {}

    /// Called with every snapshot that keeps this screen active.
    fn update(&mut self, _state: &SessionState, _ctx: &mut ScreenContext<'_>) {}

    /// Handles a user interaction.
    fn handle_event(&mut self, _event: &UiEvent, _ctx: &mut ScreenContext<'_>) -> Effect {
        Effect::None
    }

    /// Receives the resolved character-selection result.
    fn character_selected(&mut self, _character: CharacterSummary, _ctx: &mut ScreenContext<'_>) {
    }
}

/// Parses the numeric suffix of ids such as `party-slot-3`.
pub(crate) fn index_suffix(id: &str, prefix: &str) -> Option<usize> {
    id.strip_prefix(prefix)?.parse().ok()
}
