//! Owned, append-only match results.
//!
//! A [`ResultCollection`] keeps matches in the order they were found and
//! never deduplicates. The collection owns every string it holds; dropping
//! it releases them all, so release happens exactly once at scope exit.
//! Across the C ABI the same data travels as an [`FfiResult`](crate::ffi::FfiResult)
//! and is released with `free_result`.

use crate::error::MatchResult;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCollection {
    found: Vec<String>,
}

impl ResultCollection {
    /// Create an empty collection ready for appends
    pub fn new() -> Self {
        Self { found: Vec::new() }
    }

    /// Copy `value` into newly owned storage and append it.
    ///
    /// Reserves the slot and the string bytes fallibly, so running out of
    /// memory is reported instead of aborting or truncating silently.
    pub fn append(&mut self, value: &str) -> MatchResult<()> {
        self.found.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        self.found.push(owned);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Give up the collection and take the strings
    pub fn into_vec(self) -> Vec<String> {
        self.found
    }
}

impl Deref for ResultCollection {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.found
    }
}

impl IntoIterator for ResultCollection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.iter()
    }
}

impl From<Vec<String>> for ResultCollection {
    fn from(found: Vec<String>) -> Self {
        Self { found }
    }
}
