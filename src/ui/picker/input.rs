//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to picker actions and runs the raw-mode
//! terminal loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::menu::{PickerAction, PickerMenu, PickerOutcome};

/// Convert a keyboard event to a PickerAction
pub fn key_to_action(key: KeyEvent) -> Option<PickerAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(PickerAction::Abort),
        KeyCode::Char('r') if ctrl => Some(PickerAction::Reset),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(PickerAction::Input(c)),
        KeyCode::Up => Some(PickerAction::Up),
        KeyCode::Down => Some(PickerAction::Down),
        KeyCode::Backspace => Some(PickerAction::Backspace),
        KeyCode::Enter => Some(PickerAction::Select),
        KeyCode::Tab => Some(PickerAction::DeselectLast),
        KeyCode::Esc => Some(PickerAction::Confirm),
        _ => None,
    }
}

/// Run the picker interactively
pub fn run_interactive(menu: &mut PickerMenu, unicode: bool) -> std::io::Result<PickerOutcome> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        style::{Print, ResetColor, SetForegroundColor},
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    use crate::ui::theme::colors;

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, menu: &PickerMenu| -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        for line in menu.render(unicode).lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        execute!(
            stdout,
            SetForegroundColor(colors::DIM),
            Print("───────────────────────────────────────────────────────────────\r\n"),
        )?;
        for line in menu.render_help_bar().lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        execute!(stdout, ResetColor)?;

        stdout.flush()?;
        Ok(())
    };

    execute!(stdout, cursor::Hide)?;
    render_ui(&mut stdout, menu)?;

    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                tracing::trace!(?action, "picker key");
                if let Some(outcome) = menu.handle_action(action) {
                    break Ok(outcome);
                }
                if let Err(err) = render_ui(&mut stdout, menu) {
                    break Err(err);
                }
            }
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };

    // Restore terminal even when the loop failed.
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
