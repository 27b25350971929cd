//! Matching behavior against the reference directory.

use enquiry_directory::load;
use enquiry_map::{Matcher, MatchConfig, find_best, normalize, process_query, suggest};
use enquiry_model::{MatchResult, MatchSignal};

fn best(raw: &str) -> MatchResult<'static> {
    find_best(&normalize(raw), raw, load())
}

fn best_name(raw: &str) -> Option<&'static str> {
    best(raw).entry.map(|entry| entry.full_name.as_str())
}

#[test]
fn exact_full_names_match_themselves() {
    let queries = [
        ("Dr. Manoj Pandey", "Dr. Manoj Pandey"),
        ("  DR.   MANOJ PANDEY  ", "Dr. Manoj Pandey"),
        ("dr. pankaj goswami", "Dr. Pankaj Goswami"),
        ("Dr. Abhishek Kumar", "Dr. Abhishek Kumar"),
        ("dr. SANJEEV kumar", "Dr. Sanjeev Kumar"),
    ];
    for (query, expected) in queries {
        let result = best(query);
        assert_eq!(
            result.entry.map(|e| e.full_name.as_str()),
            Some(expected),
            "query {query:?}"
        );
        assert!(result.score >= 0.6, "query {query:?} scored {}", result.score);
        assert_eq!(result.signal, Some(MatchSignal::FullNameSimilarity));
    }
}

#[test]
fn hod_query_uses_role_keyword() {
    let result = best("hod room number");
    assert_eq!(
        result.entry.map(|e| e.role.as_str()),
        Some("HOD of ECE Department")
    );
    assert_eq!(result.score, 0.9);
    assert_eq!(result.signal, Some(MatchSignal::RoleKeyword));
}

#[test]
fn head_of_department_phrase_finds_hod() {
    assert_eq!(best_name("Who is the head of department?"), Some("Dr. Manoj Pandey"));
}

#[test]
fn dean_query_uses_role_keyword() {
    let result = best("Dean's office location");
    assert_eq!(
        result.entry.map(|e| e.full_name.as_str()),
        Some("Dr. Pankaj Goswami")
    );
    assert_eq!(result.signal, Some(MatchSignal::RoleKeyword));
}

#[test]
fn single_name_prefers_name_token_over_alias() {
    let result = best("manoj");
    assert_eq!(result.entry.map(|e| e.full_name.as_str()), Some("Dr. Manoj Pandey"));
    assert_eq!(result.score, 0.8);
    assert_eq!(result.signal, Some(MatchSignal::NameToken));
}

#[test]
fn partial_name_in_sentence() {
    assert_eq!(best_name("Abhishek Kumar cabin"), Some("Dr. Abhishek Kumar"));
    assert_eq!(best_name("Cabin of Manoj Pandey"), Some("Dr. Manoj Pandey"));
}

#[test]
fn misspelled_name_falls_back_to_similarity() {
    let result = best("where is manog pandy");
    assert_eq!(result.entry.map(|e| e.full_name.as_str()), Some("Dr. Manoj Pandey"));
    assert_eq!(result.signal, Some(MatchSignal::FullNameSimilarity));
    assert!(result.score > 0.6 && result.score < 0.8, "{}", result.score);
}

#[test]
fn role_keyword_tie_goes_to_first_entry() {
    // Both Kumars hold a professor role; the earlier entry keeps the 0.9 score
    // even though the query names the later one.
    let result = best("prof sanjeev");
    assert_eq!(
        result.entry.map(|e| e.full_name.as_str()),
        Some("Dr. Abhishek Kumar")
    );
    assert_eq!(result.score, 0.9);
}

#[test]
fn honorific_glued_to_name_still_finds_the_name() {
    let queries = [
        ("Dr.Pankaj", "Dr. Pankaj Goswami"),
        ("where is Dr.Sanjeev", "Dr. Sanjeev Kumar"),
        ("dr.kumar", "Dr. Abhishek Kumar"),
    ];
    for (query, expected) in queries {
        let result = best(query);
        assert_eq!(
            result.entry.map(|e| e.full_name.as_str()),
            Some(expected),
            "query {query:?}"
        );
        assert_eq!(result.signal, Some(MatchSignal::NameToken), "query {query:?}");
        assert_eq!(result.score, 0.8);
    }
}

#[test]
fn unknown_query_has_no_match() {
    assert_eq!(best("xyz123notaname"), MatchResult::none());
    assert_eq!(best(""), MatchResult::none());
    assert_eq!(best("where is the office?"), MatchResult::none());
}

#[test]
fn single_character_query_has_no_suggestions() {
    assert!(suggest("a", load(), 4).is_empty());
    assert!(suggest(" a ", load(), 4).is_empty());
}

#[test]
fn kumar_suggests_both_kumars_by_similarity() {
    let names: Vec<&str> = suggest("kumar", load(), 4)
        .into_iter()
        .map(|entry| entry.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Dr. Sanjeev Kumar", "Dr. Abhishek Kumar"]);
}

#[test]
fn suggestions_are_sorted_and_bounded() {
    let matcher = Matcher::default();
    let scored = matcher.suggest_scored("dr", load(), 4);
    assert_eq!(scored.len(), 4);
    assert!(scored.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    assert_eq!(matcher.suggest_scored("dr", load(), 2).len(), 2);
}

#[test]
fn process_query_combines_match_and_suggestions() {
    let outcome = process_query("Where is Dr. Manoj Pandey?", load());
    assert_eq!(outcome.normalized, "manoj pandey");
    assert_eq!(
        outcome.best_entry().map(|e| e.full_name.as_str()),
        Some("Dr. Manoj Pandey")
    );
    assert!(outcome.has_suggestions());
    assert_eq!(outcome.suggestions[0].full_name, "Dr. Manoj Pandey");
    assert!(outcome.suggestions.len() <= 4);
}

#[test]
fn process_query_respects_configured_limit() {
    let matcher = Matcher::new(MatchConfig {
        suggestion_limit: 1,
        ..MatchConfig::default()
    });
    let outcome = matcher.process("dr", load());
    assert_eq!(outcome.suggestions.len(), 1);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let matcher = Matcher::default();
    let directory = load();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["manoj", "dean", "kumar", "hod"]
            .into_iter()
            .map(|query| {
                let matcher = &matcher;
                scope.spawn(move || matcher.process(query, directory).best_match.is_match())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("matcher thread"));
        }
    });
}
