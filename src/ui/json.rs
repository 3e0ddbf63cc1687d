use std::io::{self, Write};

use serde_json::json;
use tagpick::{SelectedTag, Tag, TagSelector, TagpickError, VisibleTag};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

fn tag_json(tag: &Tag) -> serde_json::Value {
    json!({
        "id": tag.id,
        "name": tag.name,
        "lft": tag.lft,
        "rgt": tag.rgt,
        "depth": tag.depth,
    })
}

fn selected_json(entry: &SelectedTag<'_>) -> serde_json::Value {
    tag_json(entry.tag)
}

fn visible_json(entry: &VisibleTag<'_>) -> serde_json::Value {
    let mut value = tag_json(entry.tag);
    value["disabled"] = json!(entry.disabled);
    value
}

/// Full snapshot of a selector's state and derived views.
pub fn selector_snapshot(selector: &TagSelector) -> serde_json::Value {
    json!({
        "event": "query",
        "query": selector.query(),
        "selected_ids": selector.selected_ids(),
        "selection": selector.selection().iter().map(selected_json).collect::<Vec<_>>(),
        "visible": selector.visible().iter().map(visible_json).collect::<Vec<_>>(),
        "covered_ids": selector.covered_ids(),
    })
}

/// Nested tree document: each node carries its children inline.
pub fn tree_document(selector: &TagSelector) -> serde_json::Value {
    fn node_json(tree: &tagpick::TagTree, idx: usize) -> serde_json::Value {
        let node = tree.node(idx);
        let mut value = tag_json(&node.tag);
        value["children"] = node
            .children
            .iter()
            .map(|&child| node_json(tree, child))
            .collect();
        value
    }

    let tree = selector.tree();
    json!({
        "event": "tree",
        "roots": tree.roots().iter().map(|&idx| node_json(tree, idx)).collect::<Vec<_>>(),
    })
}

pub fn check_result(count: usize, result: &Result<(), TagpickError>) -> serde_json::Value {
    match result {
        Ok(()) => json!({ "event": "check", "valid": true, "tags": count }),
        Err(err) => json!({
            "event": "check",
            "valid": false,
            "tags": count,
            "error": err.to_string(),
        }),
    }
}
