//! Property tests for the display collapse.

use std::collections::HashSet;

use proptest::prelude::*;

use tagtree::domain::services::select_all;
use tagtree::{collapse, expand, minimal};

use crate::strategy::{forest_and_picks, pick_leaves};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: collapsing a collapsed selection changes nothing.
    #[test]
    fn property_collapse_is_idempotent((forest, picks, _t) in forest_and_picks()) {
        let selection = pick_leaves(&forest, &picks);

        let once = minimal(&forest, &selection).unwrap();
        let twice = minimal(&forest, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: chips expand back to exactly the leaves they came from.
    #[test]
    fn property_chips_expand_to_selection((forest, picks, _t) in forest_and_picks()) {
        let selection = pick_leaves(&forest, &picks);

        let chips = collapse(&forest, &selection).unwrap();
        let expanded = expand(&forest, chips.iter().map(|c| c.id.as_str())).unwrap();
        prop_assert_eq!(expanded, selection);
    }

    /// PROPERTY: no chip sits below another chip, and each chip names a
    /// fully covered subtree.
    #[test]
    fn property_chips_are_maximal((forest, picks, _t) in forest_and_picks()) {
        let selection = pick_leaves(&forest, &picks);
        let chips = collapse(&forest, &selection).unwrap();
        let ids: HashSet<&str> = chips.iter().map(|c| c.id.as_str()).collect();

        prop_assert_eq!(ids.len(), chips.len());
        for chip in &chips {
            for ancestor in forest.ancestors(&chip.id) {
                prop_assert!(!ids.contains(ancestor), "{} is under chip {}", chip.id, ancestor);
            }
            for leaf in forest.get(&chip.id).unwrap().leaf_ids() {
                prop_assert!(selection.contains(leaf));
            }
        }
    }

    /// PROPERTY: a full selection collapses to the roots.
    #[test]
    fn property_full_selection_collapses_to_roots((forest, _p, _t) in forest_and_picks()) {
        let chips = collapse(&forest, &select_all(&forest)).unwrap();

        let chip_ids: Vec<&str> = chips.iter().map(|c| c.id.as_str()).collect();
        let root_ids: Vec<&str> = forest
            .dimensions()
            .flat_map(|(_, roots)| roots.iter().map(|r| r.id.as_str()))
            .collect();
        prop_assert_eq!(chip_ids, root_ids);
    }
}
