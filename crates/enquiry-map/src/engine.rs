//! Matching engine implementation.

use std::cmp::Ordering;

use enquiry_model::{Directory, Entry, MatchResult, MatchSignal, QueryOutcome};
use tracing::{debug, trace};

use crate::normalize::{is_filler_word, normalize};
use crate::patterns::{ROLE_KEYWORDS, RoleKeyword};
use crate::score::similarity;

/// Number of suggestions returned when no limit is given.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 4;

/// Thresholds and flat scores for each match signal.
///
/// The flat scores fix a precedence order: role keyword > name token > alias.
/// Full-name similarity is admitted only above `full_name_threshold` and wins
/// only when its ratio beats whatever flat score is already recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Minimum (exclusive) similarity ratio for a full-name match (default: 0.6).
    pub full_name_threshold: f64,
    /// Score for a name token found in the normalized query (default: 0.8).
    pub name_token_score: f64,
    /// Name tokens shorter than this many characters are ignored (default: 3).
    pub name_token_min_chars: usize,
    /// Score for an alias found in the normalized query (default: 0.7).
    pub alias_score: f64,
    /// Score for a requested role keyword held by the entry (default: 0.9).
    pub role_keyword_score: f64,
    /// Minimum (exclusive) similarity for a suggestion (default: 0.3).
    pub suggestion_threshold: f64,
    /// Queries shorter than this many characters get no suggestions (default: 2).
    pub suggestion_min_chars: usize,
    /// Maximum suggestions returned by [`Matcher::process`] (default: 4).
    pub suggestion_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            full_name_threshold: 0.6,
            name_token_score: 0.8,
            name_token_min_chars: 3,
            alias_score: 0.7,
            role_keyword_score: 0.9,
            suggestion_threshold: 0.3,
            suggestion_min_chars: 2,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Scores queries against a [`Directory`].
///
/// Stateless apart from its configuration; share one freely across threads.
///
/// # Example
///
/// ```ignore
/// use enquiry_map::Matcher;
///
/// let directory = enquiry_directory::load();
/// let outcome = Matcher::default().process("where is the dean?", directory);
/// assert!(outcome.best_match.is_match());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Runs the full pipeline for one raw query: normalization, best match
    /// and suggestions.
    pub fn process<'a>(&self, raw: &str, directory: &'a Directory) -> QueryOutcome<'a> {
        let normalized = normalize(raw);
        let best_match = self.find_best(&normalized, raw, directory);
        let suggestions = self.suggest(raw, directory, self.config.suggestion_limit);
        debug!(
            normalized = %normalized,
            matched = best_match.entry.map(|e| e.full_name.as_str()),
            score = best_match.score,
            suggestion_count = suggestions.len(),
            "query processed"
        );
        QueryOutcome {
            normalized,
            best_match,
            suggestions,
        }
    }

    /// Finds the highest-scoring entry for a query.
    ///
    /// Every entry is scanned. A candidate replaces the current best only
    /// when its score is strictly greater, so on ties the earliest entry (and
    /// within an entry the earliest signal) is kept. Returns
    /// [`MatchResult::none`] when no signal fired.
    pub fn find_best<'a>(
        &self,
        normalized: &str,
        raw: &str,
        directory: &'a Directory,
    ) -> MatchResult<'a> {
        let raw_lower = raw.trim().to_lowercase();
        let requested: Vec<&RoleKeyword> = ROLE_KEYWORDS
            .iter()
            .filter(|keyword| keyword.requested_by(&raw_lower))
            .collect();

        let mut best = MatchResult::none();
        for entry in directory {
            for (score, signal) in self.candidates(normalized, &requested, entry) {
                if score > best.score {
                    trace!(
                        entry = %entry.full_name,
                        signal = %signal,
                        score,
                        "new best candidate"
                    );
                    best = MatchResult::new(entry, score, signal);
                }
            }
        }
        best
    }

    /// Candidate scores for one entry, in evaluation order.
    fn candidates(
        &self,
        normalized: &str,
        requested: &[&RoleKeyword],
        entry: &Entry,
    ) -> Vec<(f64, MatchSignal)> {
        let mut candidates = Vec::new();

        let ratio = similarity(normalized, &entry.full_name);
        if ratio > self.config.full_name_threshold {
            candidates.push((ratio, MatchSignal::FullNameSimilarity));
        }

        for token in entry.name_tokens() {
            if token.chars().count() >= self.config.name_token_min_chars
                && !is_filler_word(&token)
                && normalized.contains(token.as_str())
            {
                candidates.push((self.config.name_token_score, MatchSignal::NameToken));
            }
        }

        for alias in &entry.aliases {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && normalized.contains(alias.as_str()) {
                candidates.push((self.config.alias_score, MatchSignal::Alias));
            }
        }

        if !requested.is_empty() {
            let role = entry.role.to_lowercase();
            for keyword in requested {
                if keyword.held_by(&role) {
                    candidates.push((self.config.role_keyword_score, MatchSignal::RoleKeyword));
                }
            }
        }

        candidates
    }

    /// Ranked shortlist of plausible entries for a raw query.
    pub fn suggest<'a>(&self, raw: &str, directory: &'a Directory, limit: usize) -> Vec<&'a Entry> {
        self.suggest_scored(raw, directory, limit)
            .into_iter()
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Like [`Self::suggest`], paired with each entry's full-name similarity.
    ///
    /// An entry is admitted when its similarity exceeds the suggestion
    /// threshold, or the query occurs in its name, role or an alias. Admitted
    /// entries are ordered by similarity alone, so a pure substring hit may
    /// rank low.
    pub fn suggest_scored<'a>(
        &self,
        raw: &str,
        directory: &'a Directory,
        limit: usize,
    ) -> Vec<(&'a Entry, f64)> {
        let query = raw.trim().to_lowercase();
        if query.chars().count() < self.config.suggestion_min_chars {
            return Vec::new();
        }

        let mut scored: Vec<(&Entry, f64)> = directory
            .iter()
            .map(|entry| (entry, similarity(&query, &entry.full_name)))
            .filter(|(entry, ratio)| {
                *ratio > self.config.suggestion_threshold || mentions(entry, &query)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored
    }
}

/// True if the lower-cased query occurs in the entry's name, role or aliases.
fn mentions(entry: &Entry, query: &str) -> bool {
    entry.full_name.to_lowercase().contains(query)
        || entry.role.to_lowercase().contains(query)
        || entry
            .aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(query))
}

/// [`Matcher::find_best`] with the default configuration.
pub fn find_best<'a>(normalized: &str, raw: &str, directory: &'a Directory) -> MatchResult<'a> {
    Matcher::default().find_best(normalized, raw, directory)
}

/// [`Matcher::suggest`] with the default configuration.
pub fn suggest<'a>(raw: &str, directory: &'a Directory, limit: usize) -> Vec<&'a Entry> {
    Matcher::default().suggest(raw, directory, limit)
}

/// [`Matcher::process`] with the default configuration.
pub fn process_query<'a>(raw: &str, directory: &'a Directory) -> QueryOutcome<'a> {
    Matcher::default().process(raw, directory)
}
