use anyhow::{bail, Result};
use crossterm::style::Stylize;
use tagpick::TagSelector;

use super::CommandContext;
use crate::ui::json;
use crate::ui::picker::{run_interactive, PickerMenu, PickerOutcome};
use crate::ui::theme::colors;

pub fn cmd_pick(ctx: &CommandContext) -> Result<()> {
    if !ctx.caps.is_tty || ctx.caps.is_ci {
        bail!("pick needs an interactive terminal; use `tagpick query` instead");
    }

    let tags = ctx.load_tags()?;
    let mut selector = TagSelector::new(&tags);
    selector.on_selection_change(|ids| tracing::debug!(?ids, "selection changed"));

    let mut menu = PickerMenu::new(selector);
    let outcome = run_interactive(&mut menu, ctx.unicode)?;

    let PickerOutcome::Confirmed(ids) = outcome else {
        eprintln!("{}", "Aborted".with(colors::DIM));
        return Ok(());
    };

    if ctx.json {
        json::emit(json::selector_snapshot(&menu.selector))?;
    } else {
        for id in &ids {
            println!("{}", id.as_str().with(colors::INFO));
        }
    }

    Ok(())
}
