use anyhow::Result;
use tagpick::{SelectorAction, TagSelector};

use super::CommandContext;
use crate::ui::{json, render};

/// Turn the `query` flags into transitions: selects in order, then
/// deselects, then the query (a select would clear it otherwise).
pub fn plan_actions(select: &[String], deselect: &[String], query: &str) -> Vec<SelectorAction> {
    let mut actions: Vec<SelectorAction> = select
        .iter()
        .cloned()
        .map(SelectorAction::Select)
        .chain(deselect.iter().cloned().map(SelectorAction::Deselect))
        .collect();
    if !query.is_empty() {
        actions.push(SelectorAction::SetQuery(query.to_string()));
    }
    actions
}

pub fn cmd_query(
    ctx: &CommandContext,
    select: &[String],
    deselect: &[String],
    query: &str,
) -> Result<()> {
    let tags = ctx.load_tags()?;
    let mut selector = TagSelector::new(&tags);
    selector.on_selection_change(|ids| tracing::info!(?ids, "selection changed"));

    for action in plan_actions(select, deselect, query) {
        selector.apply(action);
    }

    for id in selector.selected_ids() {
        if selector.tree().position(id).is_none() {
            tracing::warn!(%id, "selected id is not in the tag collection");
        }
    }

    if ctx.json {
        json::emit(json::selector_snapshot(&selector))?;
        return Ok(());
    }

    println!("{}", render::render_selection(&selector.selection(), ctx.unicode));
    println!();
    if !selector.query().is_empty() {
        println!("Matching \"{}\":", selector.query());
    }
    print!("{}", render::render_visible(&selector.visible(), None, ctx.unicode));

    Ok(())
}
