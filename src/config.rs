//! Engine configuration.
//!
//! Every field has a default, so a config file only needs to list the values
//! it overrides:
//!
//! ```json
//! { "name": "territory", "thresholds": { "reinforce_cap": 255 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::decision::Thresholds;
use crate::eval::ScoringWeights;

/// Default bot name sent during the handshake.
pub const DEFAULT_NAME: &str = "territory";

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Settings of one engine session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name announced to the game engine.
    pub name: String,
    /// Evaluate cells on the rayon pool instead of one by one.
    pub parallel: bool,
    pub weights: ScoringWeights,
    pub thresholds: Thresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            parallel: false,
            weights: ScoringWeights::default(),
            thresholds: Thresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Loads a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
