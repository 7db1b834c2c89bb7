//! Configuration loading and typed config structures for a haunting.
//!
//! The canonical configuration lives in `haunt-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and a loader that reads the file. Every field has a default,
//! so an empty document describes the reference house with four hunters.

use std::path::Path;

use haunt_actors::ActorLimits;
use haunt_types::GhostClass;
use haunt_world::HouseLayout;
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

    /// The document parsed but describes an impossible run.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `haunt-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Rooms, connections and start room.
    #[serde(default)]
    pub house: HouseLayout,

    /// Hunter names and pacing.
    #[serde(default)]
    pub hunters: HuntersConfig,

    /// Ghost pacing, kind and start room.
    #[serde(default)]
    pub ghost: GhostConfig,

    /// Boredom, fear, evidence and tick limits.
    #[serde(default)]
    pub limits: ActorLimits,

    /// Master seed; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log output settings for the binary.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Semantic checks the YAML schema cannot express. Room graph problems
    /// are left to house construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.evidence_goal == 0 {
            return Err(invalid("limits.evidence_goal", "must be at least 1"));
        }
        if self.limits.boredom_max == 0 {
            return Err(invalid("limits.boredom_max", "must be at least 1"));
        }
        if self.limits.fear_max == 0 {
            return Err(invalid("limits.fear_max", "must be at least 1"));
        }
        if let Some(blank) = self.hunters.names.iter().find(|n| n.trim().is_empty()) {
            return Err(invalid("hunters.names", format!("blank name {blank:?}")));
        }
        for (i, name) in self.hunters.names.iter().enumerate() {
            if self.hunters.names.iter().skip(i.saturating_add(1)).any(|n| n == name) {
                return Err(invalid("hunters.names", format!("duplicate name {name:?}")));
            }
        }
        let unknown_room = self
            .ghost
            .start_room
            .as_ref()
            .filter(|room| !self.house.rooms.contains(room));
        if let Some(room) = unknown_room {
            return Err(invalid("ghost.start_room", format!("no room named {room:?}")));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Hunter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HuntersConfig {
    /// One entry per hunter, in spawn order.
    #[serde(default = "default_hunter_names")]
    pub names: Vec<String>,

    /// Milliseconds each hunter rests between ticks.
    #[serde(default = "default_rest_ms")]
    pub rest_ms: u64,
}

impl Default for HuntersConfig {
    fn default() -> Self {
        Self {
            names: default_hunter_names(),
            rest_ms: default_rest_ms(),
        }
    }
}

/// Ghost settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GhostConfig {
    /// Milliseconds the ghost rests between ticks.
    #[serde(default = "default_rest_ms")]
    pub rest_ms: u64,

    /// Fixed ghost kind; drawn uniformly when absent.
    #[serde(default)]
    pub class: Option<GhostClass>,

    /// Fixed start room; drawn uniformly over all rooms when absent.
    #[serde(default)]
    pub start_room: Option<String>,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            rest_ms: default_rest_ms(),
            class: None,
            start_room: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_hunter_names() -> Vec<String> {
    ["Hunter 1", "Hunter 2", "Hunter 3", "Hunter 4"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect()
}

const fn default_rest_ms() -> u64 {
    10
}

fn default_log_level() -> String {
    String::from("info")
}
