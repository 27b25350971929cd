//! Sentence generation for matched entries.

use enquiry_model::Entry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reply when nothing matched.
pub const NOT_FOUND_MESSAGE: &str = "I couldn't find any faculty member matching your query. \
                                     Please try again with a different name.";

/// Short reply for speech output when nothing matched.
pub const NOT_FOUND_SPOKEN: &str = "Sorry, I couldn't find that faculty member. Please try again.";

const TEMPLATE_COUNT: usize = 4;

/// Builds human-readable replies, picking a template at random per call.
///
/// The random source is injected so callers can seed it; every template
/// names the entry's full name, role and location.
#[derive(Debug, Clone)]
pub struct Responder<R = StdRng> {
    rng: R,
}

impl Responder<StdRng> {
    /// A responder with a deterministic sequence of template choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Responder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reply for a match result; [`NOT_FOUND_MESSAGE`] when `entry` is `None`.
    pub fn generate(&mut self, entry: Option<&Entry>) -> String {
        match entry {
            Some(entry) => {
                let index = self.rng.gen_range(0..TEMPLATE_COUNT);
                render(index, entry)
            }
            None => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Every sentence [`Responder::generate`] can produce for `entry`.
pub fn variants(entry: &Entry) -> Vec<String> {
    (0..TEMPLATE_COUNT).map(|index| render(index, entry)).collect()
}

/// Short form handed to a speech synthesizer.
pub fn spoken(entry: Option<&Entry>) -> String {
    match entry {
        Some(entry) => format!("{} is in room {}", entry.full_name, entry.location),
        None => NOT_FOUND_SPOKEN.to_string(),
    }
}

fn render(index: usize, entry: &Entry) -> String {
    let Entry {
        full_name: name,
        role,
        location: room,
        ..
    } = entry;
    match index {
        0 => format!("{name}, who is the {role}, is located in room {room}."),
        1 => format!("You can find {name} in room {room}. They are the {role}."),
        2 => format!("{name}'s office, as {role}, is in room {room}."),
        _ => format!("Room {room} is where you'll find {name}, the {role}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::new("Dr. Ada Rao", "HOD of Physics", "B1-101", ["ada"])
    }

    #[test]
    fn every_variant_names_all_fields() {
        let entry = entry();
        let variants = variants(&entry);
        assert_eq!(variants.len(), TEMPLATE_COUNT);
        for sentence in &variants {
            assert!(sentence.contains("Dr. Ada Rao"), "{sentence}");
            assert!(sentence.contains("HOD of Physics"), "{sentence}");
            assert!(sentence.contains("B1-101"), "{sentence}");
        }
    }

    #[test]
    fn same_seed_same_sentences() {
        let entry = entry();
        let mut first = Responder::seeded(7);
        let mut second = Responder::seeded(7);
        for _ in 0..8 {
            assert_eq!(first.generate(Some(&entry)), second.generate(Some(&entry)));
        }
    }

    #[test]
    fn absent_entry_is_not_found() {
        let mut responder = Responder::seeded(1);
        assert_eq!(responder.generate(None), NOT_FOUND_MESSAGE);
        assert_eq!(spoken(None), NOT_FOUND_SPOKEN);
    }

    #[test]
    fn spoken_form_names_room() {
        assert_eq!(spoken(Some(&entry())), "Dr. Ada Rao is in room B1-101");
    }
}
