//! Tag selection state and its derived views
//!
//! [`TagSelector`] owns a rebuilt [`TagTree`] plus two pieces of user state:
//! the free-text query and the set of selected tag ids. Every transition
//! recomputes only the views that depend on what changed:
//!
//! - `set_tags` rebuilds the tree, the reduced selection and the visible list
//! - `select` / `deselect` / `reset` recompute the reduced selection and the
//!   visible list
//! - `set_query` recomputes the visible list only
//!
//! Views are read back by reference through [`TagSelector::selection`] and
//! [`TagSelector::visible`].

use std::collections::HashSet;
use std::fmt;

use crate::models::Tag;
use crate::tree::TagTree;

/// A selector transition, as a value.
///
/// The derived views hand these out so a presentation layer can wire a
/// chip's "remove" or a row's "pick" straight back into [`TagSelector::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    /// Replace the query text
    SetQuery(String),
    /// Add an id to the selection and clear the query
    Select(String),
    /// Remove an id from the selection
    Deselect(String),
    /// Clear both selection and query
    Reset,
}

/// One entry of the reduced selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTag<'a> {
    pub tag: &'a Tag,
}

impl SelectedTag<'_> {
    /// Removes exactly this tag's id. A collapsed parent does not expand
    /// back into its children.
    pub fn deselect(&self) -> SelectorAction {
        SelectorAction::Deselect(self.tag.id.clone())
    }
}

/// One entry of the query-filtered picker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTag<'a> {
    pub tag: &'a Tag,
    /// The id is already in the raw selected set
    pub disabled: bool,
}

impl VisibleTag<'_> {
    pub fn select(&self) -> SelectorAction {
        SelectorAction::Select(self.tag.id.clone())
    }
}

type SelectionObserver = Box<dyn FnMut(&[String])>;

/// Query and selection state over a nested-set tag tree.
pub struct TagSelector {
    tree: TagTree,
    query: String,
    /// Insertion-ordered, no duplicates
    selected: Vec<String>,
    /// Arena indices of the selection representatives
    reduced: Vec<usize>,
    /// Per arena index: inside some representative's subtree
    subsumed: Vec<bool>,
    /// Arena indices of visible nodes, pre-order
    visible: Vec<usize>,
    observer: Option<SelectionObserver>,
}

impl fmt::Debug for TagSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagSelector")
            .field("tags", &self.tree.len())
            .field("query", &self.query)
            .field("selected", &self.selected)
            .field("reduced", &self.reduced)
            .field("visible", &self.visible)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for TagSelector {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl TagSelector {
    /// Create a selector over `tags` with an empty query and selection.
    ///
    /// `tags` must form a valid nested-set forest; see [`crate::tree::validate`].
    pub fn new(tags: &[Tag]) -> Self {
        let mut selector = Self {
            tree: TagTree::build(tags),
            query: String::new(),
            selected: Vec::new(),
            reduced: Vec::new(),
            subsumed: Vec::new(),
            visible: Vec::new(),
            observer: None,
        };
        selector.refresh_selection();
        selector
    }

    /// Register a callback invoked with the selected ids whenever the
    /// selected set changes. Replaces any previous observer.
    pub fn on_selection_change(&mut self, observer: impl FnMut(&[String]) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replace the tag collection and rebuild the tree.
    ///
    /// Query and selection are kept as they are, including ids that no
    /// longer exist in the new collection.
    pub fn set_tags(&mut self, tags: &[Tag]) {
        self.tree = TagTree::build(tags);
        self.refresh_selection();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "query changed");
        self.refresh_visible();
    }

    /// Add `id` to the selection and clear the query.
    ///
    /// Unknown ids are accepted; selecting an id twice keeps one copy.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.query.clear();

        if self.selected.contains(&id) {
            tracing::debug!(%id, "already selected");
            self.refresh_visible();
            return;
        }

        tracing::debug!(%id, "select");
        self.selected.push(id);
        self.refresh_selection();
        self.notify();
    }

    pub fn deselect(&mut self, id: &str) {
        let before = self.selected.len();
        self.selected.retain(|other| other != id);
        if self.selected.len() == before {
            return;
        }

        tracing::debug!(%id, "deselect");
        self.refresh_selection();
        self.notify();
    }

    pub fn reset(&mut self) {
        let had_selection = !self.selected.is_empty();
        self.selected.clear();
        self.query.clear();
        tracing::debug!("reset");
        self.refresh_selection();
        if had_selection {
            self.notify();
        }
    }

    pub fn apply(&mut self, action: SelectorAction) {
        match action {
            SelectorAction::SetQuery(query) => self.set_query(query),
            SelectorAction::Select(id) => self.select(id),
            SelectorAction::Deselect(id) => self.deselect(&id),
            SelectorAction::Reset => self.reset(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw selected ids in insertion order
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn tree(&self) -> &TagTree {
        &self.tree
    }

    /// The minimal covering selection, in forest order.
    pub fn selection(&self) -> Vec<SelectedTag<'_>> {
        self.reduced
            .iter()
            .map(|&idx| SelectedTag {
                tag: &self.tree.node(idx).tag,
            })
            .collect()
    }

    /// Nodes matching the query plus their ancestors, in pre-order.
    pub fn visible(&self) -> Vec<VisibleTag<'_>> {
        self.visible
            .iter()
            .map(|&idx| {
                let tag = &self.tree.node(idx).tag;
                VisibleTag {
                    tag,
                    disabled: self.selected.contains(&tag.id),
                }
            })
            .collect()
    }

    /// Ids of every tag inside some representative's subtree, in pre-order.
    ///
    /// This is the tag filter a content search applies for the current
    /// selection.
    pub fn covered_ids(&self) -> Vec<&str> {
        self.subsumed
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(|(idx, _)| self.tree.node(idx).tag.id.as_str())
            .collect()
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.selected);
        }
    }

    fn refresh_selection(&mut self) {
        let selected: HashSet<&str> = self.selected.iter().map(String::as_str).collect();

        let mut reduced = Vec::new();
        reduce(&self.tree, self.tree.roots(), &selected, &mut reduced);

        let mut subsumed = vec![false; self.tree.len()];
        for &rep in &reduced {
            subsumed[rep] = true;
            for inner in self.tree.descendants(rep) {
                subsumed[inner] = true;
            }
        }

        self.reduced = reduced;
        self.subsumed = subsumed;
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        let needle = self.query.to_lowercase();
        let mut shown = vec![false; self.tree.len()];

        for (idx, node) in self.tree.nodes().iter().enumerate() {
            if self.subsumed[idx] || !node.tag.name_matches(&needle) {
                continue;
            }

            let mut cursor = Some(idx);
            while let Some(at) = cursor {
                if shown[at] {
                    break;
                }
                shown[at] = true;
                cursor = self.tree.parent(at);
            }
        }

        self.visible = shown
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(idx, _)| idx)
            .collect();
    }
}

/// Emit a representative for every node that is covered, descending only
/// into nodes that are not.
fn reduce(tree: &TagTree, level: &[usize], selected: &HashSet<&str>, out: &mut Vec<usize>) {
    for &idx in level {
        if is_covered(tree, idx, selected) {
            out.push(idx);
        } else {
            reduce(tree, &tree.node(idx).children, selected, out);
        }
    }
}

/// Selected directly, or a group of more than one child that is covered
/// throughout. A lone selected child never promotes its parent.
fn is_covered(tree: &TagTree, idx: usize, selected: &HashSet<&str>) -> bool {
    let node = tree.node(idx);
    selected.contains(node.tag.id.as_str())
        || (node.children.len() > 1
            && node
                .children
                .iter()
                .all(|&child| is_covered(tree, child, selected)))
}
