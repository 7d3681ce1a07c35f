//! Pacing configuration for timeline generation.
//!
//! The animation driver steps through the timeline at a fixed cadence, so
//! how long playback dwells on a moment is expressed as how many times its
//! entry is repeated. These multipliers live in a YAML file (or use the
//! production defaults) and are injected into the
//! [`TimelineGenerator`](crate::timeline::TimelineGenerator).
//!
//! ```yaml
//! start_multiplier: 50
//! period_end_multiplier: 150
//! goal_multiplier: 50
//! ```

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid pacing configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// How many times each kind of timeline entry is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PacingConfig {
    /// Repetitions of the start marker.
    #[serde(default = "default_start_multiplier")]
    pub start_multiplier: usize,

    /// Repetitions of each period-end marker.
    #[serde(default = "default_period_end_multiplier")]
    pub period_end_multiplier: usize,

    /// Extra repetitions of a tick per goal reached at that tick.
    #[serde(default = "default_goal_multiplier")]
    pub goal_multiplier: usize,
}

impl PacingConfig {
    /// Load pacing from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a multiplier is unusable.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse pacing from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a multiplier is unusable.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Every multiplier set to 1.
    pub const fn unit() -> Self {
        Self {
            start_multiplier: 1,
            period_end_multiplier: 1,
            goal_multiplier: 1,
        }
    }

    /// Check that every marker is emitted at least once.
    ///
    /// A goal multiplier of 0 is allowed and disables goal pauses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the start or period-end
    /// multiplier is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_multiplier == 0 {
            return Err(ConfigError::Invalid {
                reason: "start_multiplier must be at least 1".to_owned(),
            });
        }
        if self.period_end_multiplier == 0 {
            return Err(ConfigError::Invalid {
                reason: "period_end_multiplier must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            start_multiplier: default_start_multiplier(),
            period_end_multiplier: default_period_end_multiplier(),
            goal_multiplier: default_goal_multiplier(),
        }
    }
}

const fn default_start_multiplier() -> usize {
    50
}

const fn default_period_end_multiplier() -> usize {
    150
}

const fn default_goal_multiplier() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_production_pacing() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.start_multiplier, 50);
        assert_eq!(pacing.period_end_multiplier, 150);
        assert_eq!(pacing.goal_multiplier, 50);
        assert!(pacing.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
start_multiplier: 2
period_end_multiplier: 4
goal_multiplier: 3
";
        let pacing = PacingConfig::parse(yaml);
        assert!(pacing.is_ok());
        let pacing = pacing.ok().unwrap_or_default();
        assert_eq!(
            pacing,
            PacingConfig {
                start_multiplier: 2,
                period_end_multiplier: 4,
                goal_multiplier: 3,
            }
        );
    }

    #[test]
    fn parse_minimal_yaml() {
        let pacing = PacingConfig::parse("goal_multiplier: 0\n");
        assert!(pacing.is_ok());
        let pacing = pacing.ok().unwrap_or_default();

        // Goal pauses are disabled
        assert_eq!(pacing.goal_multiplier, 0);
        // Everything else uses defaults
        assert_eq!(pacing.start_multiplier, 50);
        assert_eq!(pacing.period_end_multiplier, 150);
    }

    #[test]
    fn parse_empty_yaml() {
        let pacing = PacingConfig::parse("");
        assert!(pacing.is_ok());
    }

    #[test]
    fn zero_period_end_multiplier_is_rejected() {
        let result = PacingConfig::parse("period_end_multiplier: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn zero_start_multiplier_is_rejected() {
        let pacing = PacingConfig {
            start_multiplier: 0,
            ..PacingConfig::unit()
        };
        assert!(pacing.validate().is_err());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = PacingConfig::parse("start_multiplier: [1, 2");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PacingConfig::from_file(Path::new("/nonexistent/pacing.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
