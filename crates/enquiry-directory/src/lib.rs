#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod reference;

use std::sync::OnceLock;

use enquiry_model::Directory;

pub use crate::error::DirectoryError;
pub use crate::loader::{DIRECTORY_ENV_VAR, configured_path, load_directory_file};

/// Cached reference directory.
static REFERENCE_DIRECTORY: OnceLock<Directory> = OnceLock::new();

/// Returns the built-in reference directory.
///
/// The directory is built on first access and shared for the lifetime of the
/// process.
pub fn load() -> &'static Directory {
    REFERENCE_DIRECTORY.get_or_init(|| {
        tracing::debug!("building reference directory");
        reference::reference_directory()
    })
}
