//! Response generation against the reference directory.

use std::collections::BTreeSet;

use enquiry_directory::load;
use enquiry_map::{NOT_FOUND_MESSAGE, Responder, spoken, variants};

#[test]
fn generated_sentences_come_from_the_template_set() {
    let mut responder = Responder::seeded(42);
    for entry in load() {
        let allowed = variants(entry);
        for _ in 0..16 {
            let sentence = responder.generate(Some(entry));
            assert!(allowed.contains(&sentence), "unexpected sentence {sentence:?}");
            assert!(sentence.contains(&entry.full_name));
            assert!(sentence.contains(&entry.role));
            assert!(sentence.contains(&entry.location));
        }
    }
}

#[test]
fn all_templates_are_reachable() {
    let entry = &load().entries()[0];
    let mut responder = Responder::seeded(3);
    let seen: BTreeSet<String> = (0..200)
        .map(|_| responder.generate(Some(entry)))
        .collect();
    assert_eq!(seen.len(), 4);
}

#[test]
fn not_found_message_is_fixed() {
    let mut responder = Responder::from_entropy();
    assert_eq!(responder.generate(None), NOT_FOUND_MESSAGE);
    assert_eq!(responder.generate(None), NOT_FOUND_MESSAGE);
}

#[test]
fn spoken_lines_for_reference_directory() {
    let lines: Vec<String> = load().iter().map(|entry| spoken(Some(entry))).collect();
    insta::assert_snapshot!(lines.join("\n"));
}
