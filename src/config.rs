use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    board::windows,
    error::ConfigError,
    evaluation::{Weights, WIN_SCORE},
    CONNECT, HEIGHT, WIDTH,
};

/// The search depth the agent was tuned at
pub const DEFAULT_DEPTH: i32 = 7;

/// Agent configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Search depth in plies
    pub depth: i32,
    pub weights: Weights,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: Weights::default(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth < 0 {
            return Err(ConfigError::Validation(format!(
                "depth must be >= 0, got {}",
                self.depth
            )));
        }

        let threat = &self.weights.threat;
        if threat.len() != CONNECT {
            return Err(ConfigError::Validation(format!(
                "weights.threat must have {} entries, got {}",
                CONNECT,
                threat.len()
            )));
        }
        if threat[0] != 0 {
            return Err(ConfigError::Validation(
                "weights.threat[0] must be 0, an empty window is not a threat".into(),
            ));
        }
        if threat.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::Validation(
                "weights.threat must be strictly increasing".into(),
            ));
        }

        let bonus = &self.weights.centre_bonus;
        if bonus.is_empty() {
            return Err(ConfigError::Validation(
                "weights.centre_bonus must not be empty".into(),
            ));
        }
        if bonus.iter().any(|&b| b < 0) || bonus.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(ConfigError::Validation(
                "weights.centre_bonus must be non-negative and strictly decreasing".into(),
            ));
        }

        // heuristic scores must stay clear of the proven win/loss band
        let ceiling = windows().count() as i64 * threat[CONNECT - 1] as i64
            + (WIDTH * HEIGHT) as i64 * bonus[0] as i64;
        let floor = (WIN_SCORE - (WIDTH * HEIGHT) as i32) as i64;
        if ceiling >= floor {
            return Err(ConfigError::Validation(format!(
                "weights allow heuristic scores up to {}, which overlaps proven results at {}",
                ceiling, floor
            )));
        }

        Ok(())
    }
}
