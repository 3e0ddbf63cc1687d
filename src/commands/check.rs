use anyhow::Result;
use crossterm::style::Stylize;
use tagpick::validate;

use super::CommandContext;
use crate::ui::json;
use crate::ui::theme::{colors, icon, icons, icons_ascii};

/// Validate the tag collection. Returns whether it is well formed so the
/// caller can pick the exit code.
pub fn cmd_check(ctx: &CommandContext) -> Result<bool> {
    let tags = ctx.load_tags()?;
    let result = validate(&tags);

    if ctx.json {
        json::emit(json::check_result(tags.len(), &result))?;
        return Ok(result.is_ok());
    }

    match &result {
        Ok(()) => println!(
            "{} {} tags form a valid nested-set forest",
            icon(ctx.unicode, icons::SUCCESS, icons_ascii::SUCCESS).with(colors::SUCCESS),
            tags.len()
        ),
        Err(err) => println!(
            "{} {}",
            icon(ctx.unicode, icons::ERROR, icons_ascii::ERROR).with(colors::ERROR),
            err
        ),
    }

    Ok(result.is_ok())
}
