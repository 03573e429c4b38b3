//! Display regions keyed by screen.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::element::Element;
use crate::screens;
use crate::session::ScreenId;

/// Id of the connection indicator node.
pub const INDICATOR_ID: &str = "connection-status";

/// Source of display regions for the screen manager.
///
/// Every lookup is optional. A missing region or indicator is tolerated
/// by callers so one absent node cannot halt a transition.
pub trait ScreenRegions {
    /// Region root for a screen.
    fn region(&self, id: ScreenId) -> Option<&Element>;

    /// Mutable region root for a screen.
    fn region_mut(&mut self, id: ScreenId) -> Option<&mut Element>;

    /// The connection status indicator.
    fn indicator(&self) -> Option<&Element>;

    /// Mutable connection status indicator.
    fn indicator_mut(&mut self) -> Option<&mut Element>;

    /// Regions outside the screen set (legacy overlays and panels).
    fn auxiliary_mut(&mut self, name: &str) -> Option<&mut Element>;
}

/// In-memory region set.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegions {
    screens: BTreeMap<ScreenId, Element>,
    indicator: Option<Element>,
    auxiliary: BTreeMap<String, Element>,
}

impl MemoryRegions {
    /// Creates an empty region set.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the full region set with every screen's layout, the
    /// connection indicator and the legacy panels hidden by the game screen.
    #[instrument]
    pub fn standard() -> Self {
        let mut regions = Self::new();
        for id in ScreenId::iter() {
            regions.screens.insert(id, screens::layout(id));
        }
        let mut indicator = Element::container(INDICATOR_ID);
        indicator.set_text("Disconnected");
        indicator.add_class("status-disconnected");
        regions.indicator = Some(indicator);
        for name in screens::LEGACY_REGIONS {
            regions.auxiliary.insert(name.to_string(), Element::container(name));
        }
        debug!(count = regions.screens.len(), "Standard regions built");
        regions
    }

    /// Adds or replaces a screen region.
    pub fn with_region(mut self, id: ScreenId, root: Element) -> Self {
        self.screens.insert(id, root);
        self
    }

    /// Removes a screen region.
    pub fn without_region(mut self, id: ScreenId) -> Self {
        self.screens.remove(&id);
        self
    }

    /// Removes the connection indicator.
    pub fn without_indicator(mut self) -> Self {
        self.indicator = None;
        self
    }

    /// Immutable access to an auxiliary region.
    pub fn auxiliary(&self, name: &str) -> Option<&Element> {
        self.auxiliary.get(name)
    }

    /// Screens whose region root is currently visible.
    pub fn visible_screens(&self) -> Vec<ScreenId> {
        self.screens
            .iter()
            .filter(|(_, root)| !root.hidden())
            .map(|(id, _)| *id)
            .collect()
    }
}

impl ScreenRegions for MemoryRegions {
    fn region(&self, id: ScreenId) -> Option<&Element> {
        self.screens.get(&id)
    }

    fn region_mut(&mut self, id: ScreenId) -> Option<&mut Element> {
        self.screens.get_mut(&id)
    }

    fn indicator(&self) -> Option<&Element> {
        self.indicator.as_ref()
    }

    fn indicator_mut(&mut self) -> Option<&mut Element> {
        self.indicator.as_mut()
    }

    fn auxiliary_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.auxiliary.get_mut(name)
    }
}
