//! Screen manager: owns the active screen and drives transitions.

use std::collections::VecDeque;

use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, trace};

use crate::callbacks::SessionCallbacks;
use crate::party::CharacterClass;
use crate::region::ScreenRegions;
use crate::screens::{Effect, ScreenContext, Screens, UiEvent};
use crate::session::{CharacterSummary, ConnectionStatus, ScreenId, SessionState};

/// Number of lifecycle events retained.
pub const JOURNAL_CAPACITY: usize = 64;

/// A handler lifecycle call made by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// `enter` ran for the screen.
    Entered(ScreenId),
    /// `exit` ran for the screen.
    Exited(ScreenId),
}

/// Drives screen transitions from session snapshots.
///
/// A transition happens only when the snapshot's screen differs from the
/// active one: the old handler exits, its region is hidden, the new region
/// is shown and the new handler enters. Otherwise the snapshot goes to the
/// active handler's `update`. The connection indicator is refreshed on
/// every snapshot.
pub struct ScreenManager<R: ScreenRegions> {
    regions: R,
    callbacks: Box<dyn SessionCallbacks>,
    screens: Screens,
    active: ScreenId,
    journal: VecDeque<Lifecycle>,
}

impl<R: ScreenRegions> std::fmt::Debug for ScreenManager<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenManager")
            .field("active", &self.active)
            .field("screens", &self.screens)
            .finish_non_exhaustive()
    }
}

impl<R: ScreenRegions> ScreenManager<R> {
    /// Creates the manager with the login screen active.
    #[instrument(skip(regions, callbacks))]
    pub fn new(
        regions: R,
        callbacks: Box<dyn SessionCallbacks>,
        default_party: Vec<CharacterClass>,
    ) -> Self {
        let mut manager = Self {
            regions,
            callbacks,
            screens: Screens::new(default_party),
            active: ScreenId::Login,
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
        };
        for id in ScreenId::iter() {
            manager.set_region_hidden(id, true);
        }
        let initial = SessionState::default();
        manager.activate(&initial);
        manager.refresh_indicator(*initial.connection_status());
        info!("Screen manager ready");
        manager
    }

    /// Active screen.
    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Display regions.
    pub fn regions(&self) -> &R {
        &self.regions
    }

    /// Mutable display regions.
    pub fn regions_mut(&mut self) -> &mut R {
        &mut self.regions
    }

    /// Handlers, for read-only inspection.
    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Most recent lifecycle calls, oldest first.
    pub fn journal(&self) -> impl Iterator<Item = &Lifecycle> {
        self.journal.iter()
    }

    /// Applies a session snapshot.
    ///
    /// Idempotent for an unchanged screen: only `update` and the indicator
    /// refresh run.
    #[instrument(skip(self, state), fields(active = %self.active, screen = %state.screen()))]
    pub fn update(&mut self, state: &SessionState) {
        if *state.screen() != self.active {
            self.transition(state);
        } else {
            trace!("Screen unchanged, forwarding update");
            let handler = self.screens.get_mut(self.active);
            let mut ctx = ScreenContext::new(&mut self.regions, self.callbacks.as_mut());
            handler.update(state, &mut ctx);
        }
        self.refresh_indicator(*state.connection_status());
    }

    /// Routes a user interaction to the active handler.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn dispatch(&mut self, event: UiEvent) -> Effect {
        let handler = self.screens.get_mut(self.active);
        let mut ctx = ScreenContext::new(&mut self.regions, self.callbacks.as_mut());
        let effect = handler.handle_event(&event, &mut ctx);
        if effect != Effect::None {
            debug!(effect = ?effect, "Handler requested effect");
        }
        effect
    }

    /// Delivers the resolved character-selection result to the active
    /// handler. A cancelled selection (`None`) changes nothing.
    #[instrument(skip(self, character), fields(active = %self.active))]
    pub fn character_selected(&mut self, character: Option<CharacterSummary>) {
        let Some(character) = character else {
            debug!("Character selection cancelled");
            return;
        };
        let handler = self.screens.get_mut(self.active);
        let mut ctx = ScreenContext::new(&mut self.regions, self.callbacks.as_mut());
        handler.character_selected(character, &mut ctx);
    }

    #[instrument(skip(self, state), fields(from = %self.active, to = %state.screen()))]
    fn transition(&mut self, state: &SessionState) {
        info!("Screen transition");
        let previous = self.active;
        {
            let handler = self.screens.get_mut(previous);
            let mut ctx = ScreenContext::new(&mut self.regions, self.callbacks.as_mut());
            handler.exit(&mut ctx);
        }
        self.record(Lifecycle::Exited(previous));
        self.set_region_hidden(previous, true);
        self.activate(state);
    }

    fn activate(&mut self, state: &SessionState) {
        self.active = *state.screen();
        self.set_region_hidden(self.active, false);
        let handler = self.screens.get_mut(self.active);
        let mut ctx = ScreenContext::new(&mut self.regions, self.callbacks.as_mut());
        handler.enter(state, &mut ctx);
        self.record(Lifecycle::Entered(self.active));
    }

    fn set_region_hidden(&mut self, id: ScreenId, hidden: bool) {
        match self.regions.region_mut(id) {
            Some(region) => region.set_hidden(hidden),
            None => debug!(screen = %id, "Region missing, skipping visibility change"),
        }
    }

    #[instrument(skip(self))]
    fn refresh_indicator(&mut self, status: ConnectionStatus) {
        let (label, class) = status.indicator();
        if let Some(indicator) = self.regions.indicator_mut() {
            indicator.set_text(label);
            indicator.swap_class("status-", class);
        }
    }

    fn record(&mut self, event: Lifecycle) {
        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(event);
    }
}
