//! src/config/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader
//!
//! Loads user-editable settings as TOML from the XDG-compliant config path
//! (via the `directories` crate), falling back to full defaults when no file
//! exists. Besides timing knobs, the config may replace the built-in seed
//! catalog, destination list, and persona roster wholesale.
//!
//! ```toml
//! confirm_delay = "600ms"
//! confirm_timeout = "10s"
//!
//! [[catalog]]
//! id = "1"
//! name = "example.mkv"
//! category = "video"
//! size_text = "1.2 GB"
//! date_text = "2024-03-01"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::entry::{FileEntry, seed_entries};
use crate::confirm::persona::{Persona, default_personas};
use crate::error::AppError;
use crate::model::destination::{Destination, default_destinations};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency before each confirmation message.
    #[serde(with = "humantime_serde")]
    pub confirm_delay: Duration,

    /// Upper bound on one confirmation call; on expiry the transfer run
    /// aborts and returns to idle.
    #[serde(with = "humantime_serde")]
    pub confirm_timeout: Duration,

    /// Seed catalog override; the built-in set when absent.
    pub catalog: Vec<FileEntry>,

    /// Destination list override.
    pub destinations: Vec<Destination>,

    /// Persona roster override.
    pub personas: Vec<Persona>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            confirm_delay: Duration::from_millis(600),
            confirm_timeout: Duration::from_secs(10),
            catalog: seed_entries(),
            destinations: default_destinations(),
            personas: default_personas(),
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns defaults when the file does not exist.
    pub async fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::config_path()?;
        if path.exists() {
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| AppError::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
            let cfg: Config = toml::from_str(&text)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// A config that empties any of the fixed lists would leave the session
    /// without a destination or persona to point at.
    fn validate(&self) -> Result<(), AppError> {
        if self.destinations.is_empty() {
            return Err(AppError::Other("config defines no destinations".into()));
        }
        if self.personas.is_empty() {
            return Err(AppError::Other("config defines no personas".into()));
        }
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "homelab", "movers")
            .ok_or_else(|| AppError::Other("could not determine config directory".into()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_seed_data() {
        let cfg = Config::default();
        assert_eq!(cfg.catalog.len(), 7);
        assert_eq!(cfg.destinations.len(), 5);
        assert_eq!(cfg.personas.len(), 3);
        assert_eq!(cfg.confirm_delay, Duration::from_millis(600));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("confirm_delay = \"250ms\"").expect("parse");
        assert_eq!(cfg.confirm_delay, Duration::from_millis(250));
        assert_eq!(cfg.catalog.len(), 7);
    }

    #[test]
    fn catalog_override_replaces_seed() {
        let text = r#"
            [[catalog]]
            id = "x"
            name = "sample.pdf"
            category = "pdf"
            size_text = "2 MB"
            date_text = "2024-01-01"
        "#;
        let cfg: Config = toml::from_str(text).expect("parse");
        assert_eq!(cfg.catalog.len(), 1);
        assert_eq!(cfg.catalog[0].id, "x");
    }

    #[test]
    fn empty_destination_list_is_rejected() {
        let cfg: Config = toml::from_str("destinations = []").expect("parse");
        assert!(cfg.validate().is_err());
    }
}
