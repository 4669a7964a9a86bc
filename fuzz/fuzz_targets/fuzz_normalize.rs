#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let options = cmdprefix::utils::PhraseOptions::default();
    let phrase = cmdprefix::utils::normalize_phrase(text, &options);
    assert!(phrase.chars().count() <= cmdprefix::utils::DEFAULT_MAX_WIDTH);
    assert!(!phrase.contains('\n'));
});
