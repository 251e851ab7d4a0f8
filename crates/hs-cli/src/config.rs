//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input lines echoed back when a document yields no entries, and the
    /// default line count of `hs inspect`.
    pub sample_lines: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("sample_lines", &self.sample_lines)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_lines: hs_core::SAMPLE_LINES,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (HS_*)
        figment = figment.merge(Env::prefixed("HS_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for hs.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("heatsheet"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_lines() {
        let config = Config::default();
        assert_eq!(config.sample_lines, 20);
    }

    #[test]
    fn test_dirs_config_path_ends_with_heatsheet() {
        if let Some(path) = dirs_config_path() {
            assert_eq!(path.file_name().unwrap(), "heatsheet");
        }
    }
}
