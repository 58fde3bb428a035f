//! Unified path management for concierge files.
//!
//! All on-disk state (the configuration file and the local key-value cache)
//! lives under the platform config directory, resolved via the `dirs` crate
//! for consistency across Linux, macOS and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for concierge.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/concierge/         # Config directory
/// ├── config.toml              # Application configuration
/// └── local_store.toml         # Local key-value cache (session id, flags)
/// ```
pub struct ConciergePaths;

impl ConciergePaths {
    /// Returns the concierge configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/concierge/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("concierge"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the local key-value cache file.
    pub fn local_store_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("local_store.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_config_dir() {
        // dirs may be unavailable in odd environments; only assert shape
        // when resolution succeeds.
        if let Ok(dir) = ConciergePaths::config_dir() {
            assert!(ConciergePaths::config_file().unwrap().starts_with(&dir));
            assert!(ConciergePaths::local_store_file().unwrap().starts_with(&dir));
        }
    }
}
