#![no_main]

use libfuzzer_sys::fuzz_target;
use tagtree::{
    apply_toggles, collapse, expand, ForestBuilder, SelectionSet, TagRecord, TaxonomyDimension,
};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(ids) = serde_json::from_str::<Vec<String>>(content) else {
        return;
    };

    const DIM: TaxonomyDimension = TaxonomyDimension::Position;
    let forest = ForestBuilder::new()
        .build(vec![
            TagRecord::root("r", "R", DIM, 1),
            TagRecord::child("a", "A", DIM, "r", 1, 1),
            TagRecord::child("b", "B", DIM, "r", 1, 2),
            TagRecord::child("b1", "B1", DIM, "b", 2, 1),
        ])
        .expect("fixed forest builds");

    // Unknown ids are refused; known ones survive a collapse round trip.
    if let Ok(selection) = expand(&forest, &ids) {
        let chips = collapse(&forest, &selection).expect("expanded ids are known");
        let round = expand(&forest, chips.iter().map(|c| c.id.as_str()))
            .expect("chip ids are known");
        assert_eq!(round, selection);
    }
    let _ = apply_toggles(&forest, &ids, &SelectionSet::new());
});
