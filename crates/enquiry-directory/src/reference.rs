//! The compiled-in reference directory.

use enquiry_model::{Directory, Entry};

/// Builds the reference deployment's four-person directory.
pub fn reference_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "Dr. Manoj Pandey",
            "HOD of ECE Department",
            "A1-G12",
            ["manoj", "pandey", "hod", "head"],
        ),
        Entry::new(
            "Dr. Pankaj Goswami",
            "Dean of Engineering and Applied Science",
            "A1-Ground floor (Near Lift)",
            ["pankaj", "goswami", "dean"],
        ),
        Entry::new(
            "Dr. Abhishek Kumar",
            "Assistant Professor",
            "A1-G13",
            ["abhishek", "kumar"],
        ),
        Entry::new(
            "Dr. Sanjeev Kumar",
            "Professor",
            "A1-G08",
            ["sanjeev", "kumar"],
        ),
    ]
}

pub(crate) fn reference_directory() -> Directory {
    Directory::new(reference_entries())
        .unwrap_or_else(|err| unreachable!("reference directory is invalid: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_directory_has_four_entries() {
        let directory = reference_directory();
        assert_eq!(directory.len(), 4);
        assert_eq!(directory.entries()[0].full_name, "Dr. Manoj Pandey");
        assert_eq!(directory.entries()[3].location, "A1-G08");
    }
}
