//! Text rendering for trees and selector views.

use tagpick::{SelectedTag, TagTree, VisibleTag};

use crate::ui::theme::{icon, icons, icons_ascii};

/// Render the reconstructed forest, one tag per line, indented by nesting.
pub fn render_tree(tree: &TagTree, unicode: bool) -> String {
    let mut out = String::new();
    tree.walk(|node, level| {
        let marker = if node.is_leaf() {
            icon(unicode, icons::LEAF, icons_ascii::LEAF)
        } else {
            icon(unicode, icons::BRANCH, icons_ascii::BRANCH)
        };
        out.push_str(&format!(
            "{}{} {} ({})\n",
            "  ".repeat(level),
            marker,
            node.tag.name,
            node.tag.id
        ));
    });
    out
}

/// Render the reduced selection as a single chip line.
pub fn render_selection(selection: &[SelectedTag<'_>], unicode: bool) -> String {
    if selection.is_empty() {
        return "Selected: (none)".to_string();
    }

    let chips: Vec<String> = selection
        .iter()
        .map(|s| {
            format!(
                "{} {}",
                icon(unicode, icons::SELECTED, icons_ascii::SELECTED),
                s.tag.name
            )
        })
        .collect();
    format!("Selected: {}", chips.join("  "))
}

/// Render one visible picker row.
pub fn render_visible_row(entry: &VisibleTag<'_>, is_active: bool, unicode: bool) -> String {
    let cursor = if is_active {
        format!("{} ", icon(unicode, icons::POINTER, icons_ascii::POINTER))
    } else {
        "  ".to_string()
    };
    let indent = "  ".repeat(usize::try_from(entry.tag.depth).unwrap_or(0));
    let state = if entry.disabled {
        icon(unicode, icons::SELECTED, icons_ascii::SELECTED)
    } else {
        icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
    };

    format!("{}{}{} {}", cursor, indent, state, entry.tag.name)
}

/// Render the whole visible list, with an optional cursor row.
pub fn render_visible(visible: &[VisibleTag<'_>], cursor: Option<usize>, unicode: bool) -> String {
    if visible.is_empty() {
        return "  (no matching tags)\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in visible.iter().enumerate() {
        out.push_str(&render_visible_row(entry, cursor == Some(i), unicode));
        out.push('\n');
    }
    out
}
