//! Directory entry type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single person in the directory.
///
/// Field aliases accept the `name` / `designation` / `room_number` keys used
/// by older directory exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name, also the natural key within a directory.
    #[serde(alias = "name")]
    pub full_name: String,
    /// Role or designation (e.g., "HOD of ECE Department").
    #[serde(alias = "designation")]
    pub role: String,
    /// Room or location text.
    #[serde(alias = "room_number", alias = "room")]
    pub location: String,
    /// Free-text aliases matched as substrings of the normalized query.
    #[serde(default)]
    pub aliases: BTreeSet<String>,
}

impl Entry {
    pub fn new<I, S>(
        full_name: impl Into<String>,
        role: impl Into<String>,
        location: impl Into<String>,
        aliases: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            full_name: full_name.into(),
            role: role.into(),
            location: location.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Whitespace-separated tokens of the full name, lower-cased, with
    /// surrounding punctuation removed (`"Dr."` yields `"dr"`).
    pub fn name_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.full_name.split_whitespace().filter_map(|token| {
            let token = token
                .trim_matches(|ch: char| !ch.is_alphanumeric())
                .to_lowercase();
            (!token.is_empty()).then_some(token)
        })
    }
}
