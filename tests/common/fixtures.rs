//! Test fixtures - reusable tag collections.

/// The three-tag example: root with children a and b.
pub const SIMPLE_TAGS: &str = r#"[
  {"id": "root", "name": "Root", "lft": 1, "rgt": 6, "depth": 0},
  {"id": "a", "name": "Alpha", "lft": 2, "rgt": 3, "depth": 1},
  {"id": "b", "name": "Beta", "lft": 4, "rgt": 5, "depth": 1}
]"#;

/// A campus taxonomy, deliberately out of order.
///
/// clubs > (chess, sports > (soccer, rowing > sculling)), events
pub const CAMPUS_TAGS: &str = r#"[
  {"id": "rowing", "name": "Rowing", "lft": 7, "rgt": 10, "depth": 2},
  {"id": "events", "name": "Events", "lft": 13, "rgt": 14, "depth": 0},
  {"id": "chess", "name": "Chess", "lft": 2, "rgt": 3, "depth": 1},
  {"id": "clubs", "name": "Clubs", "lft": 1, "rgt": 12, "depth": 0},
  {"id": "sculling", "name": "Sculling", "lft": 8, "rgt": 9, "depth": 3},
  {"id": "soccer", "name": "Soccer", "lft": 5, "rgt": 6, "depth": 2},
  {"id": "sports", "name": "Sports", "lft": 4, "rgt": 11, "depth": 1, "createdAt": "2024-09-01"}
]"#;

/// Crossing intervals: a(1,4) and b(2,6).
pub const CROSSING_TAGS: &str = r#"[
  {"id": "a", "name": "A", "lft": 1, "rgt": 4, "depth": 0},
  {"id": "b", "name": "B", "lft": 2, "rgt": 6, "depth": 1}
]"#;
