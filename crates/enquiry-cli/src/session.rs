//! Conversation history for interactive use.
//!
//! The matcher keeps no state; a [`Session`] is owned by whoever drives the
//! conversation and records each query with the reply it received.

use std::fmt;

use chrono::{Local, NaiveTime};
use serde::Serialize;

/// Number of history entries shown to the user.
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// One answered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub query: String,
    pub response: String,
    /// Wall-clock time formatted as `HH:MM:SS`.
    pub timestamp: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}\n  -> {}", self.timestamp, self.query, self.response)
    }
}

/// Ordered record of a conversation. Grows without bound; only the most
/// recent entries are displayed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a query and its reply, stamped with the current local time.
    pub fn record(&mut self, query: impl Into<String>, response: impl Into<String>) {
        self.record_at(query, response, Local::now().time());
    }

    /// Records a query and its reply with an explicit time.
    pub fn record_at(
        &mut self,
        query: impl Into<String>,
        response: impl Into<String>,
        time: NaiveTime,
    ) {
        self.history.push(HistoryEntry {
            query: query.into(),
            response: response.into(),
            timestamp: time.format("%H:%M:%S").to_string(),
        });
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev().take(limit)
    }

    /// Renders the displayed part of the history, newest first.
    pub fn render_recent(&self) -> String {
        self.recent(HISTORY_DISPLAY_LIMIT)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
