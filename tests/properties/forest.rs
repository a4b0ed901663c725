//! Property tests for forest construction.

use std::collections::HashSet;

use proptest::prelude::*;

use tagtree::ForestBuilder;

use crate::strategy::records;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record appears exactly once, whatever the input order.
    #[test]
    fn property_every_record_placed_once(records in records()) {
        let forest = ForestBuilder::new().build(records.clone()).unwrap();

        prop_assert_eq!(forest.len(), records.len());
        let placed: Vec<&str> = forest.nodes().iter().map(|n| n.id.as_str()).collect();
        let unique: HashSet<&str> = placed.iter().copied().collect();
        prop_assert_eq!(unique.len(), placed.len());
        for record in &records {
            prop_assert!(forest.contains(&record.id));
        }
    }

    /// PROPERTY: structural parents are exactly the declared parents.
    #[test]
    fn property_parent_links_match_records(records in records()) {
        let forest = ForestBuilder::new().build(records.clone()).unwrap();

        for record in &records {
            prop_assert_eq!(forest.parent_id(&record.id), record.parent_id.as_deref());
        }
        prop_assert!(forest.promoted_orphans().is_empty());
    }

    /// PROPERTY: siblings are ordered by sort order, and a subtree never
    /// leaves its root's dimension.
    #[test]
    fn property_siblings_sorted_and_dimensions_closed(records in records()) {
        let forest = ForestBuilder::new().build(records).unwrap();

        for (dimension, roots) in forest.dimensions() {
            prop_assert!(roots.windows(2).all(|w| w[0].sort_order <= w[1].sort_order));
            for root in roots {
                prop_assert_eq!(root.level, 1);
                for id in root.descendant_ids() {
                    prop_assert_eq!(forest.get(id).unwrap().dimension, dimension);
                }
            }
        }
        for node in forest.nodes() {
            prop_assert!(node
                .children
                .windows(2)
                .all(|w| w[0].sort_order <= w[1].sort_order));
        }
    }

    /// PROPERTY: consistent levels pass a strict build unchanged.
    #[test]
    fn property_strict_levels_accept_consistent_input(records in records()) {
        let lenient = ForestBuilder::new().build(records.clone()).unwrap();
        let strict = ForestBuilder::new().with_strict_levels(true).build(records).unwrap();

        prop_assert_eq!(lenient.len(), strict.len());
        prop_assert_eq!(lenient.leaf_ids(), strict.leaf_ids());
    }
}
