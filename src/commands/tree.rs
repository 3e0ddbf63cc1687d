use anyhow::Result;
use tagpick::TagSelector;

use super::CommandContext;
use crate::ui::{json, render};

pub fn cmd_tree(ctx: &CommandContext) -> Result<()> {
    let tags = ctx.load_tags()?;
    let selector = TagSelector::new(&tags);

    if ctx.json {
        json::emit(json::tree_document(&selector))?;
    } else {
        print!("{}", render::render_tree(selector.tree(), ctx.unicode));
    }

    Ok(())
}
