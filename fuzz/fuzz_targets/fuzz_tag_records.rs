#![no_main]

use libfuzzer_sys::fuzz_target;
use tagtree::infrastructure::JsonTagFile;
use tagtree::{ForestBuilder, OrphanPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(records) = JsonTagFile::new("fuzz.json").parse(content) else {
        return;
    };

    // Arbitrary parent pointers (cycles, orphans, duplicates) end in a
    // forest or an error, never a panic or a hang.
    for policy in [OrphanPolicy::Promote, OrphanPolicy::Reject] {
        if let Ok(forest) = ForestBuilder::new()
            .with_orphan_policy(policy)
            .build(records.clone())
        {
            assert_eq!(forest.nodes().len(), forest.len());
        }
    }
});
