//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tc_core::{DEFAULT_HOURS_PRECISION, Unit};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unit used by `duration` and `overlap` when `--unit` is not given.
    pub default_unit: Unit,

    /// Decimal places used by `hours` when `--precision` is not given.
    pub hours_precision: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: Unit::Seconds,
            hours_precision: DEFAULT_HOURS_PRECISION,
        }
    }
}

impl Config {
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

        // Load from environment variables (TC_*)
        figment = figment.merge(Env::prefixed("TC_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for tc.
///
/// On Linux: `~/.config/tc`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tc"))
}
