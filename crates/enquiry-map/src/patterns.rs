//! Fixed vocabularies used by the normalizer and matcher.

/// Words dropped from a query before name matching.
pub const FILLER_WORDS: &[&str] = &[
    "where",
    "is",
    "the",
    "room",
    "of",
    "office",
    "cabin",
    "sir",
    "madam",
    "professor",
    "doctor",
    "dr",
    "tell",
    "me",
    "find",
    "locate",
    "location",
];

/// A role keyword and the phrases that ask for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleKeyword {
    /// Searched for in the entry's role.
    pub keyword: &'static str,
    /// Searched for in the raw query.
    pub synonyms: &'static [&'static str],
}

impl RoleKeyword {
    pub const fn new(keyword: &'static str, synonyms: &'static [&'static str]) -> Self {
        Self { keyword, synonyms }
    }

    /// True if any synonym occurs in the lower-cased raw query.
    pub fn requested_by(&self, raw_lower: &str) -> bool {
        self.synonyms.iter().any(|synonym| raw_lower.contains(synonym))
    }

    /// True if the keyword occurs in the lower-cased role.
    pub fn held_by(&self, role_lower: &str) -> bool {
        role_lower.contains(self.keyword)
    }
}

pub const ROLE_KEYWORDS: &[RoleKeyword] = &[
    RoleKeyword::new("hod", &["hod", "head of department", "head"]),
    RoleKeyword::new("dean", &["dean"]),
    RoleKeyword::new("professor", &["professor", "prof"]),
];
