//! Picker state management and action handling.

use tagpick::{SelectorAction, TagSelector};

use crate::ui::render::{render_selection, render_visible};

/// Picker action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Append a character to the query
    Input(char),
    /// Remove the last query character
    Backspace,
    /// Select the highlighted tag
    Select,
    /// Remove the last representative chip
    DeselectLast,
    /// Clear query and selection
    Reset,
    /// Finish and report the selection
    Confirm,
    /// Quit without reporting
    Abort,
}

/// How the picker finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Confirmed(Vec<String>),
    Aborted,
}

pub struct PickerMenu {
    pub selector: TagSelector,
    /// Index into the visible list
    pub cursor: usize,
}

impl PickerMenu {
    pub fn new(selector: TagSelector) -> Self {
        Self {
            selector,
            cursor: 0,
        }
    }

    /// Handle a picker action. Returns the outcome once the picker is done.
    pub fn handle_action(&mut self, action: PickerAction) -> Option<PickerOutcome> {
        match action {
            PickerAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            PickerAction::Down => {
                if self.cursor + 1 < self.selector.visible().len() {
                    self.cursor += 1;
                }
            }
            PickerAction::Input(c) => {
                let mut query = self.selector.query().to_string();
                query.push(c);
                self.dispatch(SelectorAction::SetQuery(query));
            }
            PickerAction::Backspace => {
                let mut query = self.selector.query().to_string();
                query.pop();
                self.dispatch(SelectorAction::SetQuery(query));
            }
            PickerAction::Select => {
                let action = self
                    .selector
                    .visible()
                    .get(self.cursor)
                    .filter(|entry| !entry.disabled)
                    .map(|entry| entry.select());
                if let Some(action) = action {
                    self.dispatch(action);
                }
            }
            PickerAction::DeselectLast => {
                let action = self.selector.selection().last().map(|s| s.deselect());
                if let Some(action) = action {
                    self.dispatch(action);
                }
            }
            PickerAction::Reset => self.dispatch(SelectorAction::Reset),
            PickerAction::Confirm => {
                return Some(PickerOutcome::Confirmed(
                    self.selector.selected_ids().to_vec(),
                ));
            }
            PickerAction::Abort => return Some(PickerOutcome::Aborted),
        }
        None
    }

    fn dispatch(&mut self, action: SelectorAction) {
        self.selector.apply(action);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.selector.visible().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Render query line, chip line and the visible list.
    pub fn render(&self, unicode: bool) -> String {
        let mut out = format!("Search: {}\n", self.selector.query());
        out.push_str(&render_selection(&self.selector.selection(), unicode));
        out.push_str("\n\n");
        out.push_str(&render_visible(
            &self.selector.visible(),
            Some(self.cursor),
            unicode,
        ));
        out
    }

    pub fn render_help_bar(&self) -> String {
        String::from(
            "[Enter] Select    [Tab] Remove last    [Ctrl-R] Reset    [Esc] Done    [Ctrl-C] Abort\n\
             (Type to filter, use ↑↓ to move)",
        )
    }
}
