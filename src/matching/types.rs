//! Types for dictionary matching
//!
//! A dictionary is sorted into a [`SortedDictionary`]: a list of
//! [`SortedEntry`] pairs, each holding a byte key and the index of the
//! entry it came from. Keeping the index inside the pair means the
//! permutation back to the caller's order can never drift from the keys.

/// Index into the caller's (unsorted) dictionary
pub type OriginalIndex = usize;

/// Index into a sorted key sequence
pub type SortedPosition = usize;

/// How keys are derived from dictionary entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Keys are the entries' bytes as-is (prefix matching)
    Forward,
    /// Keys are the entries' bytes reversed (suffix matching)
    Reversed,
}

/// One sorted key together with the original index it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedEntry {
    /// Byte key compared during search
    pub key: Box<[u8]>,
    /// Position of the source entry in the caller's dictionary
    pub original: OriginalIndex,
}

impl AsRef<[u8]> for SortedEntry {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

/// A borrowed dictionary plus its sorted key image
///
/// Built fresh per call by [`sort_dictionary`](super::sorter::sort_dictionary);
/// nothing is cached between calls.
#[derive(Debug)]
pub struct SortedDictionary<'d, S> {
    pub(super) dictionary: &'d [S],
    pub(super) entries: Vec<SortedEntry>,
}

impl<'d, S: AsRef<str>> SortedDictionary<'d, S> {
    /// Sorted entries, ascending by key
    pub fn entries(&self) -> &[SortedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a sorted position back to the caller's index
    pub fn original_index(&self, position: SortedPosition) -> OriginalIndex {
        self.entries[position].original
    }

    /// The caller's entry (not the key) at a sorted position
    pub fn canonical(&self, position: SortedPosition) -> &'d str {
        self.dictionary[self.original_index(position)].as_ref()
    }

    /// The permutation as a plain index array: `permutation()[p]` is the
    /// original index of the key at sorted position `p`
    pub fn permutation(&self) -> Vec<OriginalIndex> {
        self.entries.iter().map(|e| e.original).collect()
    }
}
