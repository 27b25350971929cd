//! Answers to single questions, shared by the `ask`, `directory` and
//! `interactive` commands.

use anyhow::{Result, bail};
use enquiry_map::{Matcher, Responder, similarity, spoken};
use enquiry_model::{Directory, Entry, MatchResult, QueryOutcome};
use serde::Serialize;

/// A processed query together with the sentences produced for it.
#[derive(Debug, Clone)]
pub struct Answer<'a> {
    pub query: String,
    pub outcome: QueryOutcome<'a>,
    pub response: String,
    pub spoken: String,
}

impl<'a> Answer<'a> {
    pub fn new(
        query: impl Into<String>,
        directory: &'a Directory,
        matcher: &Matcher,
        responder: &mut Responder,
    ) -> Self {
        let query = query.into();
        let outcome = matcher.process(&query, directory);
        let response = responder.generate(outcome.best_entry());
        let spoken = spoken(outcome.best_entry());
        Self {
            query,
            outcome,
            response,
            spoken,
        }
    }

    pub fn found(&self) -> bool {
        self.outcome.best_match.is_match()
    }

    /// Suggestions paired with their full-name similarity to the query.
    pub fn scored_suggestions(&self) -> Vec<(&'a Entry, f64)> {
        self.outcome
            .suggestions
            .iter()
            .map(|entry| (*entry, similarity(self.query.trim(), &entry.full_name)))
            .collect()
    }

    /// One-line description of the winning signal, if anything matched.
    pub fn match_summary(&self) -> Option<String> {
        let MatchResult {
            entry: Some(entry),
            score,
            signal: Some(signal),
        } = self.outcome.best_match
        else {
            return None;
        };
        Some(format!(
            "Matched {} by {signal} (score {score:.2})",
            entry.full_name
        ))
    }

    pub fn report(&self) -> AskReport<'_> {
        AskReport {
            query: &self.query,
            normalized: &self.outcome.normalized,
            response: &self.response,
            spoken: &self.spoken,
            best_match: self.outcome.best_match,
            suggestions: &self.outcome.suggestions,
        }
    }
}

/// JSON shape printed by `ask --format json`.
#[derive(Debug, Serialize)]
pub struct AskReport<'a> {
    pub query: &'a str,
    pub normalized: &'a str,
    pub response: &'a str,
    pub spoken: &'a str,
    pub best_match: MatchResult<'a>,
    pub suggestions: &'a [&'a Entry],
}

/// Reply for the entry with the given full name.
pub fn entry_response(
    directory: &Directory,
    full_name: &str,
    responder: &mut Responder,
) -> Result<String> {
    let Some(entry) = directory.get(full_name) else {
        bail!("no entry named {full_name:?} in the directory");
    };
    Ok(responder.generate(Some(entry)))
}
