// CLI configuration: `~/.taskdesk/config.toml`.
//
// Everything here is optional; a missing or unparseable file degrades to
// defaults so the CLI always starts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Path to the config file: `~/.taskdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".taskdesk").join("config.toml"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL prefixed to the `Link:` line in summaries
    /// (e.g. `https://desk.example.com`). Without it the line stays a
    /// portal-relative path.
    pub portal_base_url: Option<String>,
}

impl CliConfig {
    /// Load from `~/.taskdesk/config.toml`, falling back to defaults.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific path. A missing file is defaults; a parse
    /// failure is logged and also degrades to defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        toml::from_str(&contents).unwrap_or_else(|error| {
            tracing::warn!("ignoring unparseable config {}: {error}", path.display());
            Self::default()
        })
    }
}
