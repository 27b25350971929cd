#![deny(unsafe_code)]

use std::path::PathBuf;

use enquiry_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML directory {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON directory {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported directory file format {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid directory {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl DirectoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
