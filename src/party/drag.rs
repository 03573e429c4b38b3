//! Drag gesture state for the party builder.

use tracing::{instrument, trace};

/// An in-flight drag and the slot currently showing the hover affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    payload: Option<String>,
    hover: Option<usize>,
}

impl DragState {
    /// Creates an idle drag state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag carrying an opaque payload.
    #[instrument(skip(self))]
    pub fn begin(&mut self, payload: &str) {
        self.payload = Some(payload.to_string());
        self.hover = None;
    }

    /// Payload of the in-flight drag.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Slot showing the hover affordance.
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Marks `slot` as hovered when a drag is active and the target accepts.
    ///
    /// Returns whether the affordance is shown.
    #[instrument(skip(self))]
    pub fn over(&mut self, slot: usize, accepting: bool) -> bool {
        if self.payload.is_some() && accepting {
            self.hover = Some(slot);
            true
        } else {
            self.hover = None;
            false
        }
    }

    /// Reverts the affordance when the pointer leaves `slot`.
    #[instrument(skip(self))]
    pub fn leave(&mut self, slot: usize) {
        if self.hover == Some(slot) {
            trace!("Hover affordance cleared");
            self.hover = None;
        }
    }

    /// Completes the drag, returning its payload and clearing all state.
    #[instrument(skip(self))]
    pub fn finish(&mut self) -> Option<String> {
        self.hover = None;
        self.payload.take()
    }

    /// Abandons the drag.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        self.hover = None;
        self.payload = None;
    }
}
