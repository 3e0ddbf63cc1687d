//! Property tests for query filtering and ancestor expansion.

use proptest::prelude::*;

use tagpick::{Tag, TagSelector};

use crate::forest::{forest, pick_ids, WORDS};

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(WORDS).prop_map(|w| w.to_lowercase()),
        prop::sample::select(WORDS).prop_map(|w| w[..2].to_uppercase()),
        "[0-9]{1,2}",
    ]
}

fn matches(tag: &Tag, query: &str) -> bool {
    tag.name.to_lowercase().contains(&query.to_lowercase())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: unsubsumed matches and all their ancestors are visible, and nothing else is.
    #[test]
    fn property_visible_is_matches_plus_ancestors(
        tags in forest(30),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        query in query_strategy(),
    ) {
        let ids = pick_ids(&tags, &picks);
        let mut selector = TagSelector::new(&tags);
        for id in &ids {
            selector.select(id.clone());
        }
        selector.set_query(query.clone());

        let reps: Vec<Tag> = selector.selection().iter().map(|s| s.tag.clone()).collect();
        let eligible: Vec<&Tag> = tags
            .iter()
            .filter(|t| matches(t, &query) && !reps.iter().any(|r| r.contains(t)))
            .collect();

        let visible: Vec<String> = selector.visible().iter().map(|v| v.tag.id.clone()).collect();

        for tag in &tags {
            let expected = eligible.iter().any(|m| tag.contains(m));
            prop_assert_eq!(visible.contains(&tag.id), expected, "tag {}", tag.id);
        }
    }

    /// PROPERTY: visible entries come out in pre-order and `disabled` mirrors the raw selection.
    #[test]
    fn property_visible_order_and_disabled_flag(
        tags in forest(30),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        query in query_strategy(),
    ) {
        let ids = pick_ids(&tags, &picks);
        let mut selector = TagSelector::new(&tags);
        for id in &ids {
            selector.select(id.clone());
        }
        selector.set_query(query);

        let visible = selector.visible();
        prop_assert!(visible.windows(2).all(|w| w[0].tag.lft < w[1].tag.lft));
        for entry in &visible {
            prop_assert_eq!(entry.disabled, ids.contains(&entry.tag.id));
        }
    }

    /// PROPERTY: any select clears the query; deselect leaves it alone.
    #[test]
    fn property_select_clears_query(
        tags in forest(20),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
        query in query_strategy(),
    ) {
        let ids = pick_ids(&tags, &picks);
        let mut selector = TagSelector::new(&tags);
        for id in &ids {
            selector.set_query(query.clone());
            selector.select(id.clone());
            prop_assert_eq!(selector.query(), "");
        }

        selector.set_query(query.clone());
        if let Some(id) = ids.first() {
            selector.deselect(id);
        }
        prop_assert_eq!(selector.query(), query.as_str());
    }
}
