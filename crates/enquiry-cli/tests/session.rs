//! Tests for the interactive session history.

use chrono::NaiveTime;
use enquiry_cli::session::{HISTORY_DISPLAY_LIMIT, Session};

fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
}

fn filled_session(count: u32) -> Session {
    let mut session = Session::new();
    for i in 0..count {
        session.record_at(
            format!("query {i}"),
            format!("response {i}"),
            at(9, i, 5),
        );
    }
    session
}

#[test]
fn recent_is_newest_first_and_bounded() {
    let session = filled_session(7);
    let queries: Vec<&str> = session
        .recent(HISTORY_DISPLAY_LIMIT)
        .map(|entry| entry.query.as_str())
        .collect();
    assert_eq!(
        queries,
        vec!["query 6", "query 5", "query 4", "query 3", "query 2"]
    );
    assert_eq!(session.len(), 7);
}

#[test]
fn timestamps_use_clock_format() {
    let mut session = Session::new();
    session.record_at("where is the dean", "Room A1", at(14, 3, 9));
    let entry = session.recent(1).next().expect("one entry");
    assert_eq!(entry.timestamp, "14:03:09");
}

#[test]
fn record_uses_current_time() {
    let mut session = Session::new();
    session.record("hod", "Dr. Manoj Pandey is in room A1-G12");
    let entry = session.recent(1).next().expect("one entry");
    assert_eq!(entry.timestamp.len(), 8);
    assert_eq!(entry.timestamp.matches(':').count(), 2);
}

#[test]
fn clear_empties_history() {
    let mut session = filled_session(3);
    session.clear();
    assert!(session.is_empty());
    assert_eq!(session.render_recent(), "");
}

#[test]
fn recent_history_rendering() {
    let session = filled_session(6);
    insta::assert_snapshot!(session.render_recent());
}
