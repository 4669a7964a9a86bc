//! Command detection by suffix matching
//!
//! A command "appears" in a word when the word ends with it: `prun`
//! contains `run`, `!!help` contains `help`. Suffix tests become prefix
//! tests on reversed bytes, so the dictionary is sorted by reversed key
//! and every token is reversed once before its views are searched.
//!
//! For a token of length `n` the views have lengths `n, n-1, ..., 1`.
//! The one-byte suffix is tested too.

use super::search::search;
use super::sorter::sort_dictionary;
use super::types::KeyOrder;
use crate::error::MatchResult;
use crate::result::ResultCollection;
use crate::utils::tokenizer::split_tokens;
use tracing::{debug, trace};

/// Find every dictionary entry that is a suffix of a whitespace token of `phrase`
///
/// Results follow token order, then decreasing suffix length within a
/// token. An entry is appended once per hit, so it can appear repeatedly.
pub fn find_commands<S: AsRef<str>>(dictionary: &[S], phrase: &str) -> MatchResult<ResultCollection> {
    let mut results = ResultCollection::new();
    if dictionary.is_empty() {
        return Ok(results);
    }

    let sorted = sort_dictionary(dictionary, KeyOrder::Reversed)?;
    let mut reversed: Vec<u8> = Vec::new();
    let mut token_count = 0usize;

    for token in split_tokens(phrase) {
        token_count += 1;
        reversed.clear();
        reversed.try_reserve(token.len())?;
        reversed.extend(token.iter().rev());

        for len in (1..=reversed.len()).rev() {
            if let Some(position) = search(sorted.entries(), &reversed[..len]) {
                let command = sorted.canonical(position);
                trace!(command, suffix_len = len, "command suffix match");
                results.append(command)?;
            }
        }
    }

    debug!(
        dictionary = dictionary.len(),
        tokens = token_count,
        found = results.len(),
        "command scan complete"
    );
    Ok(results)
}
