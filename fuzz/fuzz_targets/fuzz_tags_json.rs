#![no_main]

use libfuzzer_sys::fuzz_target;
use tagpick::{parse_tags, validate, TagSelector};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tags) = parse_tags(content) else {
        return;
    };

    // Malformed forests are undefined but must never panic
    let _ = validate(&tags);
    let mut selector = TagSelector::new(&tags);
    for tag in tags.iter().step_by(2) {
        selector.select(tag.id.clone());
    }
    selector.set_query(tags.first().map(|t| t.name.clone()).unwrap_or_default());
    let _ = selector.selection();
    let _ = selector.visible();
    let _ = selector.covered_ids();
    if let Some(tag) = tags.last() {
        selector.deselect(&tag.id);
    }
    selector.reset();
});
