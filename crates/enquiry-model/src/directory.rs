//! Ordered, read-only collection of entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{ModelError, Result};

/// The set of people a query is matched against.
///
/// Iteration order is the declaration order and is significant: when two
/// entries score equally the earlier one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DirectoryFile", into = "DirectoryFile")]
pub struct Directory {
    entries: Vec<Entry>,
}

impl Directory {
    /// Builds a directory, rejecting empty sets, blank names and duplicate
    /// full names (compared case-insensitively).
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ModelError::EmptyDirectory);
        }
        let mut seen = BTreeSet::new();
        for (index, entry) in entries.iter().enumerate() {
            let key = name_key(&entry.full_name);
            if key.is_empty() {
                return Err(ModelError::BlankName { index });
            }
            if !seen.insert(key) {
                return Err(ModelError::DuplicateName {
                    name: entry.full_name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by full name, ignoring case and surrounding space.
    ///
    /// Uses the same comparison as duplicate detection, so every stored name
    /// resolves to exactly one entry.
    pub fn get(&self, full_name: &str) -> Option<&Entry> {
        let wanted = name_key(full_name);
        self.entries
            .iter()
            .find(|entry| name_key(&entry.full_name) == wanted)
    }
}

fn name_key(full_name: &str) -> String {
    full_name.trim().to_lowercase()
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// On-disk shape shared by the TOML and JSON directory formats.
///
/// Unvalidated; convert with [`Directory::try_from`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryFile {
    #[serde(alias = "faculty")]
    pub entries: Vec<Entry>,
}

impl TryFrom<DirectoryFile> for Directory {
    type Error = ModelError;

    fn try_from(file: DirectoryFile) -> Result<Self> {
        Directory::new(file.entries)
    }
}

impl From<Directory> for DirectoryFile {
    fn from(directory: Directory) -> Self {
        Self {
            entries: directory.entries,
        }
    }
}
