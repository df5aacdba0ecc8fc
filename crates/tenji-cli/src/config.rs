//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tenji_core::{AliasCluster, RangeToken, VenueTables};

/// Application configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Range token applied when a request carries none. Parsed
    /// leniently: an unrecognized value falls back to `upcoming`
    /// rather than failing startup.
    #[serde(default)]
    pub default_range: Option<String>,

    /// Venue alias clusters merged after the built-in tables.
    #[serde(default)]
    pub extra_venues: Vec<AliasCluster>,

    /// Exhibition alias clusters merged after the built-in tables.
    #[serde(default)]
    pub extra_exhibitions: Vec<AliasCluster>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("default_range", &self.default_range)
            .field("extra_venues", &self.extra_venues.len())
            .field("extra_exhibitions", &self.extra_exhibitions.len())
            .finish()
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

        // Load from environment variables (TENJI_*)
        figment = figment.merge(Env::prefixed("TENJI_"));

        figment.extract()
    }

    /// The range token applied when a request carries none.
    #[must_use]
    pub fn default_range_token(&self) -> RangeToken {
        self.default_range
            .as_deref()
            .and_then(|token| token.parse().ok())
            .unwrap_or(RangeToken::Upcoming)
    }

    /// The alias tables with configured extras appended to the built-ins.
    #[must_use]
    pub fn venue_tables(&self) -> VenueTables {
        let mut tables = VenueTables::builtin();
        tables.venues.extend(self.extra_venues.iter().cloned());
        tables
            .exhibitions
            .extend(self.extra_exhibitions.iter().cloned());
        tables
    }
}

/// Returns the platform-specific config directory for tenji.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tenji"))
}
