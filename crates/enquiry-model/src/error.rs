use thiserror::Error;

/// Validation failures when assembling a [`crate::Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("directory has no entries")]
    EmptyDirectory,
    #[error("entry {index} has a blank full name")]
    BlankName { index: usize },
    #[error("duplicate full name in directory: {name}")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
