//! Prefix detection by progressive truncation
//!
//! The content is viewed at every length from its full size down to one
//! byte, longest first, and each view is looked up in the forward-sorted
//! dictionary. Views are slices over the caller's string; nothing is
//! truncated in place.

use super::search::search;
use super::sorter::sort_dictionary;
use super::types::{KeyOrder, SortedPosition};
use crate::error::MatchResult;
use crate::result::ResultCollection;
use tracing::{debug, trace};

/// Return the longest dictionary entry that is a prefix of `content`
///
/// The result is an owned copy of the matched entry. When nothing matches,
/// including for an empty dictionary or empty content, the result is an
/// empty string.
pub fn find_first_prefix<S: AsRef<str>>(dictionary: &[S], content: &str) -> MatchResult<String> {
    if dictionary.is_empty() || content.is_empty() {
        return Ok(String::new());
    }

    let sorted = sort_dictionary(dictionary, KeyOrder::Forward)?;
    let hit = shrinking_prefixes(content.as_bytes())
        .find_map(|view| search(sorted.entries(), view));

    match hit {
        Some(position) => {
            let entry = sorted.canonical(position);
            debug!(prefix = entry, "first prefix found");
            owned_copy(entry)
        }
        None => {
            debug!(content_len = content.len(), "no prefix found");
            Ok(String::new())
        }
    }
}

/// Collect every dictionary entry that is a prefix of `content`, longest first
pub fn find_all_prefixes<S: AsRef<str>>(
    dictionary: &[S],
    content: &str,
) -> MatchResult<ResultCollection> {
    let mut results = ResultCollection::new();
    if dictionary.is_empty() || content.is_empty() {
        return Ok(results);
    }

    let sorted = sort_dictionary(dictionary, KeyOrder::Forward)?;
    let hits = prefix_hits(sorted.entries(), content.as_bytes());
    for position in hits {
        let entry = sorted.canonical(position);
        trace!(prefix = entry, "prefix match");
        results.append(entry)?;
    }

    debug!(
        dictionary = dictionary.len(),
        content_len = content.len(),
        found = results.len(),
        "prefix scan complete"
    );
    Ok(results)
}

/// Views of `content` from full length down to one byte
fn shrinking_prefixes(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    (1..=content.len()).rev().map(move |len| &content[..len])
}

fn prefix_hits<'a, K: AsRef<[u8]>>(
    sorted: &'a [K],
    content: &'a [u8],
) -> impl Iterator<Item = SortedPosition> + 'a {
    shrinking_prefixes(content).filter_map(move |view| search(sorted, view))
}

fn owned_copy(entry: &str) -> MatchResult<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(entry.len())?;
    owned.push_str(entry);
    Ok(owned)
}
