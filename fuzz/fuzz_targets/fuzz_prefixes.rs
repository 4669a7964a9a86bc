#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    dictionary: Vec<String>,
    content: String,
}

fuzz_target!(|input: Input| {
    let Ok(all) = cmdprefix::matching::find_all_prefixes(&input.dictionary, &input.content) else {
        return;
    };

    // Every hit is a dictionary entry the content starts with, longest first
    for pair in all.windows(2) {
        assert!(pair[0].len() > pair[1].len());
    }
    for hit in &all {
        assert!(input.content.starts_with(hit.as_str()));
        assert!(input.dictionary.contains(hit));
    }

    let first = cmdprefix::matching::find_first_prefix(&input.dictionary, &input.content)
        .expect("first prefix");
    assert_eq!(first, all.first().cloned().unwrap_or_default());
});
