//! Scenario: narrowing an article to part of the corporate-admin tree
//!
//! Journey: an editor opens the JOB_CATEGORY tree, ticks the HR branch,
//! adds a sibling, ticks the whole department and finally clears it.

use tagtree::domain::ports::{SelectionRepository, TagSource};
use tagtree::infrastructure::{InMemorySelection, InMemoryTags};
use tagtree::{
    classify_id, collapse, expand, toggle, ForestBuilder, SelectionSet, SelectionState,
};

use crate::common::*;

fn state(forest: &tagtree::Forest, id: &str, selection: &SelectionSet) -> SelectionState {
    classify_id(forest, id, selection).unwrap()
}

fn chip_ids(forest: &tagtree::Forest, selection: &SelectionSet) -> Vec<String> {
    collapse(forest, selection)
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect()
}

/// SCENARIO: tick a branch, a sibling, the parent, then clear the parent
#[test]
fn scenario_corporate_admin_selection_walkthrough() {
    let forest = ForestBuilder::new()
        .build(InMemoryTags::new(job_category_records()).load_tags().unwrap())
        .unwrap();
    let empty = SelectionSet::new();

    // Step 1: tick 人事・採用 - its two leaves are stored, the parent goes partial.
    let s1 = toggle(&forest, "hr-recruitment", &empty).unwrap();
    assert_eq!(
        s1.to_ids(),
        vec!["hr-development-training", "recruitment-newgrad-mid"]
    );
    assert_eq!(state(&forest, "hr-recruitment", &s1), SelectionState::Checked);
    assert_eq!(state(&forest, "corporate-admin", &s1), SelectionState::Indeterminate);
    let chips = collapse(&forest, &s1).unwrap();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].id, "hr-recruitment");
    assert_eq!(chips[0].name, "人事・採用");

    // Step 2: add 経理・財務 - still partial, two chips.
    let s2 = toggle(&forest, "finance-accounting", &s1).unwrap();
    assert_eq!(state(&forest, "corporate-admin", &s2), SelectionState::Indeterminate);
    assert_eq!(
        chip_ids(&forest, &s2),
        vec!["hr-recruitment", "finance-accounting"]
    );

    // Step 3: tick the department - one chip covers all four leaves.
    let s3 = toggle(&forest, "corporate-admin", &s2).unwrap();
    assert_eq!(s3.len(), 4);
    assert_eq!(state(&forest, "corporate-admin", &s3), SelectionState::Checked);
    assert_eq!(chip_ids(&forest, &s3), vec!["corporate-admin"]);

    // Step 4: clear it - nothing left anywhere in the subtree.
    let s4 = toggle(&forest, "corporate-admin", &s3).unwrap();
    assert!(s4.is_empty());
    for id in ["corporate-admin", "hr-recruitment", "legal-ip", "recruitment-newgrad-mid"] {
        assert_eq!(state(&forest, id, &s4), SelectionState::Unchecked);
    }
    assert_eq!(state(&forest, "it-software", &s4), SelectionState::Unchecked);
}

/// SCENARIO: a selection persisted as chips comes back in leaf form
#[test]
fn scenario_persisted_chips_reload_as_leaves() {
    let forest = ForestBuilder::new().build(job_category_records()).unwrap();
    let store = InMemorySelection::new(vec!["hr-recruitment".into(), "legal-ip".into()]);

    let selection = expand(&forest, store.load().unwrap()).unwrap();

    assert_eq!(
        selection.to_ids(),
        vec!["hr-development-training", "legal-ip", "recruitment-newgrad-mid"]
    );
    assert_eq!(
        state(&forest, "corporate-admin", &selection),
        SelectionState::Indeterminate
    );

    store.save(&selection.to_ids()).unwrap();
    assert_eq!(store.load().unwrap().len(), 3);
}

/// SCENARIO: the same session driven through the binary
#[test]
fn scenario_job_category_via_cli() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);

    let result = env.run(&[
        "toggle",
        "-t",
        "tags.json",
        "-s",
        "selection.json",
        "--write",
        "hr-recruitment",
        "finance-accounting",
    ]);
    assert!(result.success, "toggle failed:\n{}", result.combined_output());
    assert_eq!(
        env.read_ids("selection.json"),
        vec![
            "finance-accounting",
            "hr-development-training",
            "recruitment-newgrad-mid"
        ]
    );

    let result = env.run(&["chips", "-t", "tags.json", "-s", "selection.json"]);
    assert!(result.success, "chips failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("職種"));
    assert!(result.stdout.contains("人事・採用 (hr-recruitment)"));
    assert!(result.stdout.contains("経理・財務 (finance-accounting)"));
    assert!(!result.stdout.contains("新卒・中途採用"));

    let result = env.run(&["tree", "-t", "tags.json", "-s", "selection.json"]);
    assert!(result.success);
    assert!(result.stdout.contains("[-] 管理部門"));
    assert!(result.stdout.contains("[x] 人事・採用"));
    assert!(result.stdout.contains("[ ] 法務・知財"));
}
