/// CLI configuration
use crate::error::{CliError, Result};
use cadence_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Prefix of environment overrides, e.g. `CADENCE_PLAYBACK__SHUFFLE_SEED=7`
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CADENCE_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Parse configuration from TOML text alone
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CliError::Config("log_filter must not be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            playback: PlaybackConfig::default(),
        }
    }
}

fn default_log_filter() -> String {
    "cadence_cli=info,cadence_playback=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_playback::ShuffleAlgorithm;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = CliConfig::from_toml(
            r#"
            log_filter = "cadence_playback=debug"

            [playback]
            repeat = true
            shuffle_algorithm = "smart"
            shuffle_seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "cadence_playback=debug");
        assert!(config.playback.repeat);
        assert_eq!(config.playback.shuffle_algorithm, ShuffleAlgorithm::Smart);
        assert_eq!(config.playback.shuffle_seed, Some(42));
    }

    #[test]
    fn unknown_algorithm_is_config_error() {
        let err = CliConfig::from_toml("[playback]\nshuffle_algorithm = \"chaotic\"").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn validate_rejects_blank_filter() {
        let config = CliConfig {
            log_filter: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(CliConfig::default().validate().is_ok());
    }
}
