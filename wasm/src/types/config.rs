use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTOSAVE_INTERVAL_MS, DEFAULT_GRID_DIMENSION, DEFAULT_PLAYER_NAME, DEFAULT_STORAGE_KEY,
    MAX_GRID_TILES,
};

use super::error::GameError;

/// Host-supplied session configuration. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_dimension: usize,
    pub autosave_interval_ms: f64,
    /// Fixed seed for reproducible sessions; drawn from the host when absent.
    pub seed: Option<u64>,
    pub storage_key: String,
    pub player_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_dimension: DEFAULT_GRID_DIMENSION,
            autosave_interval_ms: DEFAULT_AUTOSAVE_INTERVAL_MS,
            seed: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

/// Tile count of a square grid with the given side, bounded by
/// `MAX_GRID_TILES`.
pub fn tile_count(dimension: usize) -> Result<usize, GameError> {
    match dimension.checked_mul(dimension) {
        Some(len) if (1..=MAX_GRID_TILES).contains(&len) => Ok(len),
        _ => Err(GameError::InvalidConfig(format!(
            "gridDimension {dimension} must give between 1 and {MAX_GRID_TILES} tiles"
        ))),
    }
}

impl GameConfig {
    pub fn grid_len(&self) -> Result<usize, GameError> {
        tile_count(self.grid_dimension)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.grid_len()?;
        if self.autosave_interval_ms.is_nan() || self.autosave_interval_ms <= 0.0 {
            return Err(GameError::InvalidConfig(
                "autosaveIntervalMs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
