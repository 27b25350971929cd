//! Results produced by the matcher for a single query.

use std::fmt;

use serde::Serialize;

use crate::entry::Entry;

/// The rule that produced a match score.
///
/// Variants are listed in ascending precedence of their flat scores; full-name
/// similarity carries its own ratio instead of a flat score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSignal {
    /// Similarity ratio between the normalized query and the full name.
    FullNameSimilarity,
    /// An alias appears inside the normalized query.
    Alias,
    /// A name token appears inside the normalized query.
    NameToken,
    /// A role synonym appears in the raw query and its keyword in the role.
    RoleKeyword,
}

impl MatchSignal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullNameSimilarity => "full name similarity",
            Self::Alias => "alias",
            Self::NameToken => "name token",
            Self::RoleKeyword => "role keyword",
        }
    }
}

impl fmt::Display for MatchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best match for a query, or no match at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub entry: Option<&'a Entry>,
    /// Score in `[0, 1]`; zero when nothing matched.
    pub score: f64,
    pub signal: Option<MatchSignal>,
}

impl<'a> MatchResult<'a> {
    pub fn new(entry: &'a Entry, score: f64, signal: MatchSignal) -> Self {
        Self {
            entry: Some(entry),
            score,
            signal: Some(signal),
        }
    }

    pub fn none() -> Self {
        Self {
            entry: None,
            score: 0.0,
            signal: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.entry.is_some()
    }
}

impl Default for MatchResult<'_> {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the matcher derives from one raw query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome<'a> {
    /// The query after filler words, punctuation and case were stripped.
    pub normalized: String,
    pub best_match: MatchResult<'a>,
    /// At most a handful of plausible entries, most similar first.
    pub suggestions: Vec<&'a Entry>,
}

impl<'a> QueryOutcome<'a> {
    pub fn best_entry(&self) -> Option<&'a Entry> {
        self.best_match.entry
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
