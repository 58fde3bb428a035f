//! Configuration loading.
//!
//! Reads `ConciergeConfig` from the TOML file under the platform config
//! directory. An absent or empty file yields the defaults; a malformed file
//! is an error the caller should surface at startup.

use concierge_core::config::ConciergeConfig;
use concierge_core::error::{ConciergeError, Result};
use std::path::Path;
use tokio::fs;

use crate::paths::ConciergePaths;

/// Loads the configuration from `path`, or from the default location
/// (`~/.config/concierge/config.toml`) when `path` is `None`.
///
/// # Returns
///
/// - `Ok(config)`: parsed configuration, or defaults when the file is absent
///   or empty
/// - `Err(_)`: the file exists but could not be read or parsed
pub async fn load_config(path: Option<&Path>) -> Result<ConciergeConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => ConciergePaths::config_file()
            .map_err(|e| ConciergeError::config(e.to_string()))?,
    };

    if !fs::try_exists(&path).await? {
        tracing::debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(ConciergeConfig::default());
    }

    let content = fs::read_to_string(&path).await?;
    if content.trim().is_empty() {
        return Ok(ConciergeConfig::default());
    }

    let config = toml::from_str(&content)?;
    Ok(config)
}
