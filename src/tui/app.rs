//! Interactive terminal app driving the screen manager.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use super::offline::{LocalSession, SharedState};
use super::render::{draw_region, focusable_ids};
use crate::ClientConfig;
use crate::element::{Element, ElementKind};
use crate::manager::ScreenManager;
use crate::region::{MemoryRegions, ScreenRegions};
use crate::screens::{Effect, UiEvent};

const HELP: &str = "Tab/↑↓: Focus | Enter: Activate | Type: Edit | Esc: Cancel drag | Ctrl+C: Quit";

/// What a key press asks the app loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing.
    None,
    /// Move focus forward or back.
    Focus(isize),
    /// Send an event to the active screen.
    Event(UiEvent),
    /// Leave the app.
    Quit,
}

/// Terminal front end over an offline loopback session.
#[derive(Debug)]
pub struct TerminalApp {
    manager: ScreenManager<MemoryRegions>,
    session: SharedState,
    focus: usize,
}

impl TerminalApp {
    /// Builds the app from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &ClientConfig) -> Self {
        let local = LocalSession::new(*config.auth_enabled());
        let session = local.state();
        let mut manager = ScreenManager::new(
            MemoryRegions::standard(),
            Box::new(local),
            config.default_party().clone(),
        );
        if let Some(name) = config.player_name() {
            manager.dispatch(UiEvent::input(crate::NAME_INPUT_ID, name.as_str()));
        }
        let snapshot = session.borrow().clone();
        manager.update(&snapshot);
        Self {
            manager,
            session,
            focus: 0,
        }
    }

    /// The screen manager.
    pub fn manager(&self) -> &ScreenManager<MemoryRegions> {
        &self.manager
    }

    fn active_region(&self) -> Option<&Element> {
        self.manager.regions().region(self.manager.active())
    }

    /// Id of the focused control.
    pub fn focused_id(&self) -> Option<String> {
        let ids = self.active_region().map(focusable_ids).unwrap_or_default();
        if ids.is_empty() {
            return None;
        }
        ids.get(self.focus % ids.len()).cloned()
    }

    /// Maps a key press to an action given the current focus.
    #[instrument(skip(self))]
    pub fn map_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        let focused = self.focused_id();
        let focused_node = focused
            .as_deref()
            .and_then(|id| self.active_region().and_then(|r| r.find(id)));
        let is_input = focused_node.is_some_and(|n| *n.kind() == ElementKind::Input);

        match key.code {
            KeyCode::Tab | KeyCode::Down => KeyAction::Focus(1),
            KeyCode::BackTab | KeyCode::Up => KeyAction::Focus(-1),
            KeyCode::Esc => KeyAction::Event(UiEvent::DragCancel),
            KeyCode::Enter => match focused {
                Some(id) => KeyAction::Event(UiEvent::Click(id)),
                None => KeyAction::None,
            },
            KeyCode::Char(c) if is_input => {
                let mut value = focused_node.map(|n| n.value().to_string()).unwrap_or_default();
                value.push(c);
                KeyAction::Event(UiEvent::Input {
                    id: focused.unwrap_or_default(),
                    value,
                })
            }
            KeyCode::Backspace if is_input => {
                let mut value = focused_node.map(|n| n.value().to_string()).unwrap_or_default();
                value.pop();
                KeyAction::Event(UiEvent::Input {
                    id: focused.unwrap_or_default(),
                    value,
                })
            }
            _ => KeyAction::None,
        }
    }

    /// Applies an action. Returns false when the app should quit.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => return false,
            KeyAction::Focus(step) => {
                let count = self.active_region().map(focusable_ids).unwrap_or_default().len();
                if count > 0 {
                    let current = (self.focus % count) as isize;
                    self.focus = (current + step).rem_euclid(count as isize) as usize;
                }
            }
            KeyAction::Event(event) => {
                let before = self.manager.active();
                if self.manager.dispatch(event) == Effect::RequestCharacterSelection {
                    debug!("Resolving character selection offline");
                    self.manager
                        .character_selected(Some(LocalSession::pick_character()));
                }
                let snapshot = self.session.borrow().clone();
                self.manager.update(&snapshot);
                if self.manager.active() != before {
                    self.focus = 0;
                }
            }
        }
        true
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting terminal app");
        loop {
            let focus = self.focused_id();
            let region = self.active_region();
            let indicator = self.manager.regions().indicator();
            terminal.draw(|f| draw_region(f, region, indicator, focus.as_deref(), HELP))?;

            if event::poll(std::time::Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let action = self.map_key(key);
                if !self.apply(action) {
                    info!("Terminal app quitting");
                    return Ok(());
                }
            }
        }
    }
}
