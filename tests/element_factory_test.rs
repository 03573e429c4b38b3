//! Tests for the declarative element factory and node lookups.

use tactics_lobby::{Element, ElementKind, ElementSpec, create_element, mount};

#[test]
fn test_create_applies_every_property() {
    let node = create_element(
        ElementSpec::new(ElementKind::Input)
            .id("name")
            .class("field  wide")
            .text("Name")
            .attr("placeholder", "Your name")
            .css("width", "20ch")
            .hide(true)
            .disable(true),
    );
    assert_eq!(*node.kind(), ElementKind::Input);
    assert!(node.has_id("name"));
    assert_eq!(node.classes(), &vec!["field".to_string(), "wide".to_string()]);
    assert_eq!(node.text(), "Name");
    assert_eq!(node.attribute("placeholder"), Some("Your name"));
    assert_eq!(node.style().get("width").map(String::as_str), Some("20ch"));
    assert!(*node.hidden());
    assert!(*node.disabled());
}

#[test]
fn test_children_are_built_in_order() {
    let node = create_element(
        ElementSpec::new(ElementKind::Container)
            .id("root")
            .child(ElementSpec::new(ElementKind::Text).id("a"))
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id("b")
                    .child(ElementSpec::new(ElementKind::Button).id("c")),
            ),
    );
    let ids: Vec<_> = node
        .descendants()
        .iter()
        .filter_map(|e| e.id().clone())
        .collect();
    assert_eq!(ids, vec!["root", "a", "b", "c"]);
}

#[test]
fn test_mount_appends_or_replaces() {
    let mut list = Element::container("list");
    mount(&mut list, ElementSpec::new(ElementKind::Item).text("one"), false);
    mount(&mut list, ElementSpec::new(ElementKind::Item).text("two"), false);
    assert_eq!(list.children().len(), 2);

    let fresh = mount(&mut list, ElementSpec::new(ElementKind::Item).text("three"), true);
    fresh.add_class("fresh");
    assert_eq!(list.children().len(), 1);
    assert!(list.children()[0].has_class("fresh"));
}

#[test]
fn test_swap_class_keeps_one_state_class() {
    let mut node = Element::container("status");
    node.add_class("indicator");
    node.swap_class("status-", "status-connecting");
    node.swap_class("status-", "status-connected");
    assert_eq!(
        node.classes(),
        &vec!["indicator".to_string(), "status-connected".to_string()]
    );
}

#[test]
fn test_missing_ids_are_tolerated() {
    let mut root = Element::container("root");
    assert!(root.find("nope").is_none());
    assert!(!root.with("nope", |e| e.set_text("x")));
    assert!(!root.is_visible("nope"));
}

#[test]
fn test_visibility_inherits_from_ancestors() {
    let mut root = create_element(
        ElementSpec::new(ElementKind::Container)
            .id("root")
            .child(
                ElementSpec::new(ElementKind::Container)
                    .id("group")
                    .hide(true)
                    .child(ElementSpec::new(ElementKind::Button).id("inner")),
            ),
    );
    assert!(!root.is_visible("inner"));
    root.with("group", |e| e.set_hidden(false));
    assert!(root.is_visible("inner"));
}

#[test]
fn test_input_value_round_trips_through_attribute() {
    let mut input = create_element(ElementSpec::new(ElementKind::Input).id("code"));
    assert_eq!(input.value(), "");
    input.set_value("AB12");
    assert_eq!(input.attribute("value"), Some("AB12"));
}
