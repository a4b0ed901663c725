//! Generators shared by the property tests.

use proptest::prelude::*;
use proptest::sample::Index;

use tagtree::{Forest, ForestBuilder, Node, SelectionSet, TagRecord, TaxonomyDimension};

/// How one record is attached: under an earlier record, or as a new root.
#[derive(Debug, Clone)]
struct Plan {
    parent: Option<Index>,
    dimension: usize,
    sort_order: i32,
}

fn plan() -> impl Strategy<Value = Plan> {
    (
        prop::option::weighted(0.75, any::<Index>()),
        0..TaxonomyDimension::ALL.len(),
        -2i32..3,
    )
        .prop_map(|(parent, dimension, sort_order)| Plan {
            parent,
            dimension,
            sort_order,
        })
}

/// Well-formed records in shuffled order.
///
/// Parents always come from earlier plans, so there are no cycles and no
/// orphans. Declared levels match the tree, so strict builds succeed too.
pub fn records() -> impl Strategy<Value = Vec<TagRecord>> {
    prop::collection::vec(plan(), 1..40)
        .prop_map(|plans| {
            let mut out: Vec<TagRecord> = Vec::with_capacity(plans.len());
            for (i, plan) in plans.into_iter().enumerate() {
                let id = format!("t{i}");
                let record = match plan.parent {
                    Some(index) if !out.is_empty() => {
                        let parent = &out[index.index(out.len())];
                        TagRecord::child(
                            id.clone(),
                            id,
                            parent.dimension,
                            parent.id.clone(),
                            parent.level,
                            plan.sort_order,
                        )
                    }
                    _ => TagRecord::root(
                        id.clone(),
                        id,
                        TaxonomyDimension::ALL[plan.dimension],
                        plan.sort_order,
                    ),
                };
                out.push(record);
            }
            out
        })
        .prop_shuffle()
}

/// A built forest plus raw picks to turn into selections and targets.
pub fn forest_and_picks() -> impl Strategy<Value = (Forest, Vec<Index>, Index)> {
    (
        records(),
        prop::collection::vec(any::<Index>(), 0..12),
        any::<Index>(),
    )
        .prop_map(|(records, picks, target)| {
            let forest = ForestBuilder::new().build(records).unwrap();
            (forest, picks, target)
        })
}

/// Leaf-form selection drawn from the forest's leaves
pub fn pick_leaves(forest: &Forest, picks: &[Index]) -> SelectionSet {
    let leaves = forest.leaf_ids();
    SelectionSet::from_ids(picks.iter().map(|p| leaves[p.index(leaves.len())]))
}

/// Any node of the forest
pub fn pick_node<'a>(forest: &'a Forest, target: &Index) -> &'a Node {
    let nodes = forest.nodes();
    nodes[target.index(nodes.len())]
}
