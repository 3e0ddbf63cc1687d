//! Nested-set tree reconstruction
//!
//! Rebuilds the parent/child hierarchy implied by a flat collection of
//! `(lft, rgt, depth)` tag records.
//!
//! Nodes are stored in an arena ordered by ascending `lft`, which is a
//! pre-order traversal of the forest. Children and roots refer to nodes by
//! arena index, so `children` lists are ascending as well.
//!
//! [`TagTree::build`] does not validate its input. A collection that breaks
//! the nested-set invariant yields an unspecified (but panic-free) tree; use
//! [`validate`] when the source is untrusted.

use std::collections::{HashMap, HashSet};

use crate::error::{TagpickError, TagpickResult};
use crate::models::Tag;

/// A reconstructed node: a tag plus its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub tag: Tag,
    /// Arena indices of direct children, ascending by `lft`
    pub children: Vec<usize>,
}

impl TreeNode {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Completed subtree waiting on the build stack for its parent
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    depth: i64,
}

/// A forest rebuilt from nested-set tags.
#[derive(Debug, Clone, Default)]
pub struct TagTree {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
    parents: Vec<Option<usize>>,
    by_id: HashMap<String, usize>,
}

impl TagTree {
    /// Reconstruct the forest.
    ///
    /// Tags are visited in closing (`rgt`) order, so a node's descendants
    /// are always complete before the node itself comes up. Frames deeper
    /// than the current tag are its direct children; anything deeper still
    /// was already folded into one of them.
    pub fn build(tags: &[Tag]) -> Self {
        let mut nodes: Vec<TreeNode> = tags.iter().cloned().map(TreeNode::new).collect();
        nodes.sort_by_key(|n| n.tag.lft);

        let mut closing: Vec<usize> = (0..nodes.len()).collect();
        closing.sort_by_key(|&i| nodes[i].tag.rgt);

        let mut parents: Vec<Option<usize>> = vec![None; nodes.len()];
        let mut stack: Vec<Frame> = Vec::new();
        for idx in closing {
            let depth = nodes[idx].tag.depth;
            let split = stack
                .iter()
                .rposition(|frame| frame.depth <= depth)
                .map_or(0, |pos| pos + 1);

            let mut children: Vec<usize> = stack.drain(split..).map(|f| f.node).collect();
            children.sort_unstable();
            for &child in &children {
                parents[child] = Some(idx);
            }
            nodes[idx].children = children;

            stack.push(Frame { node: idx, depth });
        }

        let mut roots: Vec<usize> = stack.into_iter().map(|f| f.node).collect();
        roots.sort_unstable();

        let by_id = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.tag.id.clone(), i))
            .collect();

        tracing::debug!(nodes = nodes.len(), roots = roots.len(), "rebuilt tag tree");

        Self {
            nodes,
            roots,
            parents,
            by_id,
        }
    }

    /// All nodes in pre-order (ascending `lft`)
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Arena indices of the forest roots, ascending by `lft`
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> &TreeNode {
        &self.nodes[idx]
    }

    /// Arena index of the direct parent, `None` for roots
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the tag with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.position(id).map(|idx| &self.nodes[idx])
    }

    /// Transitive descendants of `idx` in pre-order, excluding `idx` itself.
    pub fn descendants(&self, idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut pending: Vec<usize> = self.nodes[idx].children.iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.nodes[next].children.iter().rev().copied());
        }
        out
    }

    /// Visit every node depth-first with its nesting level in the rebuilt forest.
    pub fn walk(&self, mut visit: impl FnMut(&TreeNode, usize)) {
        fn go(tree: &TagTree, idx: usize, level: usize, visit: &mut impl FnMut(&TreeNode, usize)) {
            let node = &tree.nodes[idx];
            visit(node, level);
            for &child in &node.children {
                go(tree, child, level + 1, visit);
            }
        }

        for &root in &self.roots {
            go(self, root, 0, &mut visit);
        }
    }
}

/// Check that `tags` form a well-formed nested-set forest.
///
/// Returns the first violation found: duplicate ids and empty intervals are
/// reported before any nesting problem.
pub fn validate(tags: &[Tag]) -> TagpickResult<()> {
    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.id.as_str()) {
            return Err(TagpickError::DuplicateId { id: tag.id.clone() });
        }
        if tag.lft >= tag.rgt {
            return Err(TagpickError::EmptyInterval {
                id: tag.id.clone(),
                lft: tag.lft,
                rgt: tag.rgt,
            });
        }
    }

    let mut sorted: Vec<&Tag> = tags.iter().collect();
    sorted.sort_by_key(|t| t.lft);

    // Open intervals enclosing the current tag, outermost first.
    let mut open: Vec<&Tag> = Vec::new();
    for tag in sorted {
        while open.last().is_some_and(|top| top.rgt < tag.lft) {
            open.pop();
        }

        if let Some(top) = open.last() {
            if tag.lft <= top.lft || tag.rgt >= top.rgt {
                return Err(TagpickError::CrossingIntervals {
                    outer: top.id.clone(),
                    inner: tag.id.clone(),
                });
            }
        }

        let expected = open.len() as i64;
        if tag.depth != expected {
            return Err(TagpickError::DepthMismatch {
                id: tag.id.clone(),
                expected,
                actual: tag.depth,
            });
        }

        open.push(tag);
    }

    Ok(())
}
