pub mod json;
pub mod picker;
pub mod render;
pub mod terminal;
pub mod theme;
