#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    dictionary: Vec<String>,
    phrase: String,
}

fuzz_target!(|input: Input| {
    let Ok(found) = cmdprefix::matching::find_commands(&input.dictionary, &input.phrase) else {
        return;
    };

    for hit in &found {
        assert!(input.dictionary.contains(hit));
        assert!(
            input
                .phrase
                .split_ascii_whitespace()
                .any(|word| word.as_bytes().ends_with(hit.as_bytes()))
        );
    }

    let again = cmdprefix::matching::find_commands(&input.dictionary, &input.phrase)
        .expect("second call");
    assert_eq!(found, again);
});
