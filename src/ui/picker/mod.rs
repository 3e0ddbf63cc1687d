//! Interactive Tag Picker
//!
//! A type-to-filter picker over a [`tagpick::TagSelector`]. The query line
//! narrows the visible list, Enter picks the highlighted tag, and the chip
//! line shows the collapsed selection.
//!
//! # Module Structure
//!
//! - `menu` - Picker state: cursor plus selector, action handling
//! - `input` - Keyboard mapping and the raw-mode terminal loop

mod input;
mod menu;

pub use input::{key_to_action, run_interactive};
pub use menu::{PickerAction, PickerMenu, PickerOutcome};
