use std::path::Path;

use crate::ai::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use crate::error::ConfigError;
use crate::game::placement::MAX_PIECES;
use crate::game::Side;

/// Longest game, in rounds, that the configuration accepts.
pub const MAX_TURN_LIMIT: usize = 1000;

/// Game parameters, fixed before the first ply and loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pieces per side.
    pub piece_count: usize,
    /// Number of full rounds (one ply each) before the game is decided.
    pub turn_limit: usize,
    /// Side played from the console; the computer plays the other one.
    pub human_side: Side,
    /// Upper bound on search lookahead.
    pub max_depth: usize,
    /// Place pieces randomly instead of asking for coordinates.
    pub random_placement: bool,
    /// Seed for random placement. Unset means a fresh seed every game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            piece_count: 4,
            turn_limit: 10,
            human_side: Side::A,
            max_depth: DEFAULT_MAX_DEPTH,
            random_placement: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.piece_count == 0 || self.piece_count > MAX_PIECES {
            return Err(ConfigError::Validation(format!(
                "piece_count must be in [1, {MAX_PIECES}]"
            )));
        }
        if self.turn_limit == 0 || self.turn_limit > MAX_TURN_LIMIT {
            return Err(ConfigError::Validation(format!(
                "turn_limit must be in [1, {MAX_TURN_LIMIT}]"
            )));
        }
        if self.max_depth == 0 || self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::Validation(format!(
                "max_depth must be in [1, {MAX_SUPPORTED_DEPTH}]"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
