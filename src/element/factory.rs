//! Builds display nodes from declarative descriptions.

use std::collections::BTreeMap;

use derive_setters::Setters;
use tracing::{instrument, trace};

use super::node::{Element, ElementKind};

/// Declarative description of a display node.
///
/// ```
/// use tactics_lobby::{ElementKind, ElementSpec, create_element};
///
/// let node = create_element(
///     ElementSpec::new(ElementKind::Button)
///         .id("start")
///         .class("btn primary")
///         .text("Start"),
/// );
/// assert!(node.has_class("primary"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(into, strip_option)]
pub struct ElementSpec {
    /// Node kind.
    pub kind: ElementKind,
    /// Optional id used for later lookup.
    pub id: Option<String>,
    /// Whitespace-separated style classes.
    pub class: Option<String>,
    /// Text content.
    pub text: Option<String>,
    /// Extra attributes.
    #[setters(skip)]
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties.
    #[setters(skip)]
    pub style: BTreeMap<String, String>,
    /// Initially hidden.
    #[setters(skip)]
    pub hidden: bool,
    /// Initially disabled.
    #[setters(skip)]
    pub disabled: bool,
    /// Nested descriptions.
    #[setters(skip)]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Starts a description of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Adds an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Adds an inline style property.
    pub fn css(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Marks the node hidden.
    pub fn hide(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Marks the node disabled.
    pub fn disable(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends a child description.
    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// Builds a node (and its subtree) from a description.
#[instrument(skip(spec), fields(kind = %spec.kind, id = ?spec.id))]
pub fn create_element(spec: ElementSpec) -> Element {
    let mut node = Element::new(spec.kind);
    if let Some(id) = spec.id {
        node.set_id(id);
    }
    if let Some(class) = spec.class {
        for c in class.split_whitespace() {
            node.add_class(c);
        }
    }
    if let Some(text) = spec.text {
        node.set_text(text);
    }
    for (k, v) in spec.attributes {
        node.set_attribute(k, v);
    }
    for (k, v) in spec.style {
        node.set_style(k, v);
    }
    node.set_hidden(spec.hidden);
    node.set_disabled(spec.disabled);
    for child in spec.children {
        node.push_child(create_element(child));
    }
    node
}

/// Builds a node and appends it to `container`, optionally clearing the
/// container's existing children first.
#[instrument(skip(container, spec), fields(container = ?container.id()))]
pub fn mount(container: &mut Element, spec: ElementSpec, clear: bool) -> &mut Element {
    if clear {
        container.clear_children();
    }
    trace!("Mounting element");
    container.push_child(create_element(spec))
}
