//! Dictionary loading
//!
//! A dictionary file holds one entry per line. Blank lines and lines
//! starting with `#` are skipped. Entries keep their surrounding spaces
//! (`"pls "` is a valid bot prefix), only the line terminator is stripped.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use tracing::{debug, warn};

/// An owned list of unique dictionary entries in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from entries, dropping duplicates after the first
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for entry in entries {
            let entry = entry.into();
            if seen.insert(entry.clone()) {
                kept.push(entry);
            } else {
                warn!(entry = %entry, "duplicate dictionary entry dropped");
            }
        }
        Self { entries: kept }
    }

    /// Read entries from a reader, one per line
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line.context("Failed to read dictionary line")?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            lines.push(line.to_string());
        }
        Ok(Self::new(lines))
    }

    /// Load a dictionary file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary {}", path.display()))?;
        let dictionary = Self::from_reader(file)
            .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
        debug!(path = %path.display(), entries = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl Deref for Dictionary {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.entries
    }
}
