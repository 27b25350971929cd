pub mod directory;
pub mod entry;
pub mod error;
pub mod outcome;

pub use directory::{Directory, DirectoryFile};
pub use entry::Entry;
pub use error::{ModelError, Result};
pub use outcome::{MatchResult, MatchSignal, QueryOutcome};
