//! Display node tree.

use std::collections::BTreeMap;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// What a display node represents when rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    /// Groups children; renders nothing itself.
    #[default]
    Container,
    /// Title line.
    Heading,
    /// Plain text.
    Text,
    /// Activatable control.
    Button,
    /// Free-text field. The current value lives in the `value` attribute.
    Input,
    /// One entry in a list (roster row, party slot).
    Item,
}

/// A styled display node.
///
/// Nodes are addressed by their optional `id`. Lookups that miss return
/// `None`; callers treat that as an absent optional region.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
pub struct Element {
    kind: ElementKind,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    hidden: bool,
    disabled: bool,
    children: Vec<Element>,
}

impl Element {
    /// Creates an empty node of the given kind.
    #[instrument]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Creates an empty container with an id, used for region roots.
    #[instrument(skip(id))]
    pub fn container(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns true when this node carries the given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Sets the id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Replaces the text.
    #[instrument(skip(self, text), fields(id = ?self.id))]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Hides or shows the node.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Enables or disables the node.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Returns true when the node carries the style class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a style class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Removes a style class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replaces every class matching `prefix` with `class`.
    ///
    /// Used for mutually exclusive state classes such as `status-*`.
    pub fn swap_class(&mut self, prefix: &str, class: impl Into<String>) {
        self.classes.retain(|c| !c.starts_with(prefix));
        self.add_class(class);
    }

    /// Looks up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Sets an inline style property.
    pub fn set_style(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.style.insert(key.into(), value.into());
    }

    /// Current value of an input node.
    pub fn value(&self) -> &str {
        self.attribute("value").unwrap_or("")
    }

    /// Sets the value of an input node.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_attribute("value", value);
    }

    /// Appends a child and returns a handle to it.
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Removes every child.
    #[instrument(skip(self), fields(id = ?self.id, count = self.children.len()))]
    pub fn clear_children(&mut self) {
        trace!("Clearing children");
        self.children.clear();
    }

    /// Depth-first search for a descendant (or self) with the given id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Mutable depth-first search for a descendant (or self) with the given id.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Applies `f` to the node with the given id, if present.
    ///
    /// Returns whether the node was found.
    pub fn with<F: FnOnce(&mut Element)>(&mut self, id: &str, f: F) -> bool {
        match self.find_mut(id) {
            Some(node) => {
                f(node);
                true
            }
            None => {
                trace!(id, "Element not present, skipping");
                false
            }
        }
    }

    /// Iterates over this node and all descendants in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    /// True when neither this node nor any node on the path is hidden.
    ///
    /// Only meaningful on a root; children inherit visibility from ancestors.
    pub fn is_visible(&self, id: &str) -> bool {
        fn walk(node: &Element, id: &str) -> Option<bool> {
            if node.has_id(id) {
                return Some(!node.hidden);
            }
            node.children
                .iter()
                .find_map(|c| walk(c, id))
                .map(|v| v && !node.hidden)
        }
        walk(self, id).unwrap_or(false)
    }
}
