//! Property tests for nested-set tree reconstruction.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tagpick::{validate, Tag, TagTree};

use crate::forest::forest;

fn arbitrary_tag() -> impl Strategy<Value = Tag> {
    ("[a-c]{1,2}", -4i64..20, -4i64..20, -2i64..5)
        .prop_map(|(id, lft, rgt, depth)| Tag::new(id.clone(), id, lft, rgt, depth))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every node's descendants are exactly the tags strictly inside its interval.
    #[test]
    fn property_descendants_match_interval_containment(tags in forest(40)) {
        let tree = TagTree::build(&tags);
        prop_assert_eq!(tree.len(), tags.len());

        for (idx, node) in tree.nodes().iter().enumerate() {
            let reached: BTreeSet<&str> = tree
                .descendants(idx)
                .into_iter()
                .map(|d| tree.node(d).tag.id.as_str())
                .collect();
            let contained: BTreeSet<&str> = tags
                .iter()
                .filter(|t| node.tag.is_ancestor_of(t))
                .map(|t| t.id.as_str())
                .collect();
            prop_assert_eq!(reached, contained, "subtree of {}", node.tag.id);
        }
    }

    /// PROPERTY: children are direct (one level deeper) and every non-root has exactly one parent.
    #[test]
    fn property_children_are_direct(tags in forest(40)) {
        let tree = TagTree::build(&tags);
        let mut child_count = 0;

        for (idx, node) in tree.nodes().iter().enumerate() {
            for &child in &node.children {
                prop_assert_eq!(tree.node(child).tag.depth, node.tag.depth + 1);
                prop_assert_eq!(tree.parent(child), Some(idx));
            }
            prop_assert!(node.children.windows(2).all(|w| tree.node(w[0]).tag.lft < tree.node(w[1]).tag.lft));
            child_count += node.children.len();
        }

        prop_assert_eq!(child_count + tree.roots().len(), tree.len());
        for &root in tree.roots() {
            prop_assert_eq!(tree.node(root).tag.depth, 0);
        }
    }

    /// PROPERTY: the flat node sequence is a pre-order (ascending `lft`).
    #[test]
    fn property_nodes_sorted_by_lft(tags in forest(40)) {
        let tree = TagTree::build(&tags);
        prop_assert!(tree.nodes().windows(2).all(|w| w[0].tag.lft < w[1].tag.lft));

        let mut walked = Vec::new();
        tree.walk(|node, _| walked.push(node.tag.lft));
        let flat: Vec<i64> = tree.nodes().iter().map(|n| n.tag.lft).collect();
        prop_assert_eq!(walked, flat);
    }

    /// PROPERTY: generated forests always validate.
    #[test]
    fn property_validate_accepts_well_formed(tags in forest(40)) {
        prop_assert!(validate(&tags).is_ok());
    }

    /// PROPERTY: bumping any tag's depth is always caught.
    #[test]
    fn property_validate_rejects_depth_drift(tags in forest(20), pick in any::<prop::sample::Index>()) {
        prop_assume!(!tags.is_empty());
        let mut tags = tags;
        let i = pick.index(tags.len());
        tags[i].depth += 1;
        prop_assert!(validate(&tags).is_err());
    }

    /// PROPERTY: build and validate never panic on arbitrary records.
    #[test]
    fn property_malformed_input_never_panics(tags in prop::collection::vec(arbitrary_tag(), 0..16)) {
        let tree = TagTree::build(&tags);
        prop_assert_eq!(tree.len(), tags.len());
        let _ = validate(&tags);
    }
}
