//! The `config.toml` file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use petalfall_core::Intensity;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Project directories for petalfall, if the platform provides a home directory.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "petalfall")
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many petals to throw.
    pub intensity: Intensity,
    /// Force the reduced-motion signal on or off instead of reading the environment.
    pub reduced_motion: Option<bool>,
    /// Show the replaying confetti burst.
    pub confetti: bool,
    /// Show the rising hearts.
    pub hearts: bool,
    /// Milliseconds between confetti replays.
    pub confetti_period_ms: u64,
    /// Milliseconds the confetti stays hidden before each replay.
    pub confetti_gap_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intensity: Intensity::Celebration,
            reduced_motion: None,
            confetti: true,
            hearts: true,
            confetti_period_ms: 5_000,
            confetti_gap_ms: 100,
        }
    }
}

impl Config {
    /// Default location of `config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location. Missing file or home directory yields defaults.
    pub fn load() -> Result<Self, Error> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using default config", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Interval between confetti replays.
    pub fn confetti_period(&self) -> Duration {
        Duration::from_millis(self.confetti_period_ms.max(1))
    }

    /// Pause before a confetti replay.
    pub fn confetti_gap(&self) -> Duration {
        Duration::from_millis(self.confetti_gap_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.confetti_period(), Duration::from_secs(5));
        assert_eq!(config.confetti_gap(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "intensity = \"low\"\nreduced_motion = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.intensity, Intensity::Low);
        assert_eq!(config.reduced_motion, Some(true));
        assert!(config.confetti);
        assert_eq!(config.confetti_period_ms, 5_000);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "intensity = \"extreme\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Parse { .. })
        ));
    }
}
