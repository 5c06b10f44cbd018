//! Roster configuration.
//!
//! ```
//! use roster::{NameListComponent, RosterConfig, RosterError};
//!
//! # fn main() -> Result<(), RosterError> {
//! let config = RosterConfig::from_json_str(r#"{ "seed": [{ "first": "Ada", "last": "Lovelace" }] }"#)?;
//! let list = NameListComponent::mount_with(&config);
//! assert_eq!(list.items(), vec!["Lovelace, Ada"]);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A name the store starts with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedName {
    pub first: String,
    pub last: String,
}

impl SeedName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        SeedName {
            first: first.into(),
            last: last.into(),
        }
    }
}

/// Names every freshly mounted list starts with.
pub fn default_seed() -> Vec<SeedName> {
    vec![
        SeedName::new("Hans", "Emil"),
        SeedName::new("Max", "Mustermann"),
        SeedName::new("Roman", "Teach"),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub seed: Vec<SeedName>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            seed: default_seed(),
        }
    }
}

impl RosterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {}", path, message)
            }
            ConfigError::Parse(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
