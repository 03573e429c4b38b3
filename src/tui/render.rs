//! Renders element trees with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::element::{Element, ElementKind};
use crate::party::DRAG_OVER_CLASS;

/// Ids of visible, enabled controls in document order.
///
/// Buttons, inputs and party slots take focus.
#[instrument(skip(root))]
pub fn focusable_ids(root: &Element) -> Vec<String> {
    fn walk(node: &Element, out: &mut Vec<String>) {
        if *node.hidden() {
            return;
        }
        let focusable = matches!(node.kind(), ElementKind::Button | ElementKind::Input)
            || node.has_class("party-slot");
        if focusable
            && !*node.disabled()
            && let Some(id) = node.id()
        {
            out.push(id.clone());
        }
        for child in node.children() {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn status_color(node: &Element) -> Color {
    if node.has_class("status-connected") || node.has_class("ready") {
        Color::Green
    } else if node.has_class("status-disconnected") || node.has_class("disconnected") {
        Color::Red
    } else if node.classes().iter().any(|c| c.starts_with("status")) {
        Color::Yellow
    } else {
        Color::White
    }
}

/// Converts a region into styled lines, skipping hidden nodes.
#[instrument(skip(root))]
pub fn element_lines(root: &Element, focus: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_lines(root, focus, 0, &mut lines);
    lines
}

fn push_lines(node: &Element, focus: Option<&str>, depth: usize, out: &mut Vec<Line<'static>>) {
    if *node.hidden() {
        return;
    }
    let focused = focus.is_some() && node.id().as_deref() == focus;
    let indent = "  ".repeat(depth);
    let mut style = Style::default();
    if *node.disabled() {
        style = style.fg(Color::DarkGray);
    }
    if focused {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    let marker = if focused { "> " } else { "  " };

    match node.kind() {
        ElementKind::Container => {
            if !node.text().is_empty() {
                out.push(Line::from(format!("{}{}", indent, node.text())));
            }
            for child in node.children() {
                push_lines(child, focus, depth, out);
            }
        }
        ElementKind::Heading => {
            out.push(
                Line::from(Span::styled(
                    node.text().clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
        }
        ElementKind::Text => {
            if !node.text().is_empty() {
                out.push(Line::from(Span::styled(
                    format!("{}{}{}", indent, marker, node.text()),
                    Style::default().fg(status_color(node)),
                )));
            }
        }
        ElementKind::Button => {
            out.push(Line::from(Span::styled(
                format!("{}{}[ {} ]", indent, marker, node.text()),
                style,
            )));
        }
        ElementKind::Input => {
            let cursor = if focused { "_" } else { "" };
            let value = if node.value().is_empty() && !focused {
                node.attribute("placeholder").unwrap_or("").to_string()
            } else {
                format!("{}{}", node.value(), cursor)
            };
            out.push(Line::from(Span::styled(
                format!("{}{}{}: {}", indent, marker, node.text(), value),
                style,
            )));
        }
        ElementKind::Item => {
            let mut item_style = style;
            if node.has_class(DRAG_OVER_CLASS) {
                item_style = item_style.bg(Color::Blue);
            }
            let mut text = node.text().clone();
            for child in node.children() {
                if *child.kind() == ElementKind::Text {
                    if !text.is_empty() {
                        text.push_str("  ");
                    }
                    text.push_str(child.text());
                }
            }
            out.push(Line::from(Span::styled(
                format!("{}{}• {}", indent, marker, text),
                item_style.fg(status_color(node)),
            )));
            for child in node.children() {
                if *child.kind() != ElementKind::Text {
                    push_lines(child, focus, depth + 1, out);
                }
            }
        }
    }
}

/// Draws the active region with the connection indicator and key help.
#[instrument(skip(frame, region, indicator))]
pub fn draw_region(
    frame: &mut Frame,
    region: Option<&Element>,
    indicator: Option<&Element>,
    focus: Option<&str>,
    help: &str,
) {
    let area: Rect = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let (label, color) = match indicator {
        Some(node) => (node.text().clone(), status_color(node)),
        None => (String::new(), Color::DarkGray),
    };
    let status = Paragraph::new(label)
        .style(Style::default().fg(color))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("Connection"));
    frame.render_widget(status, chunks[0]);

    let lines = region.map(|r| element_lines(r, focus)).unwrap_or_default();
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, chunks[1]);

    let help = Paragraph::new(help.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}
