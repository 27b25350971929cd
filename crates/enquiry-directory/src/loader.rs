//! Directory file loading.
//!
//! A directory file replaces the built-in reference directory. The format is
//! chosen by extension:
//!
//! - `.toml`: one `[[entries]]` table per person
//! - `.json`: `{"entries": [...]}` (a legacy `"faculty"` key is accepted)

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use enquiry_model::{Directory, DirectoryFile};

use crate::error::DirectoryError;

/// Environment variable naming a directory file to load instead of the
/// reference directory.
pub const DIRECTORY_ENV_VAR: &str = "ENQUIRY_DIRECTORY";

/// Resolves the directory file to load: an explicit path wins over
/// [`DIRECTORY_ENV_VAR`]. `None` means the reference directory.
pub fn configured_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_path(explicit, std::env::var_os(DIRECTORY_ENV_VAR))
}

fn resolve_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Reads and validates a directory file.
pub fn load_directory_file(path: &Path) -> Result<Directory, DirectoryError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let contents = fs::read_to_string(path).map_err(|err| DirectoryError::io(path, err))?;
    let file: DirectoryFile = match extension.as_deref() {
        Some("toml") => toml::from_str(&contents).map_err(|source| DirectoryError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => {
            serde_json::from_str(&contents).map_err(|source| DirectoryError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            return Err(DirectoryError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    let directory = Directory::try_from(file).map_err(|source| DirectoryError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        entries = directory.len(),
        "loaded directory file"
    );
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_environment() {
        let resolved = resolve_path(
            Some(Path::new("cli.toml")),
            Some(OsString::from("env.toml")),
        );
        assert_eq!(resolved, Some(PathBuf::from("cli.toml")));
    }

    #[test]
    fn environment_path_used_when_no_flag() {
        let resolved = resolve_path(None, Some(OsString::from("env.json")));
        assert_eq!(resolved, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        assert_eq!(resolve_path(None, Some(OsString::new())), None);
        assert_eq!(resolve_path(None, None), None);
    }
}
