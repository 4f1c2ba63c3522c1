mod catalog;
mod economy;
mod grid;

pub use catalog::Catalog;
pub use economy::{Economy, LevelUp};
pub use grid::Grid;

use crate::constants::{DEFAULT_GRID_DIMENSION, DEFAULT_PLAYER_NAME};
use crate::types::{BuildingKind, GameConfig, GameError, SessionSnapshot};

/// State owned by the single active game session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    economy: Economy,
    grid: Grid,
    player_name: String,
    selected_tile: Option<usize>,
    selected_building: Option<BuildingKind>,
}

impl SessionData {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self::with_grid(
            Grid::with_dimension(config.grid_dimension)?,
            config.player_name.clone(),
        ))
    }

    fn with_grid(grid: Grid, player_name: String) -> Self {
        Self {
            economy: Economy::default(),
            grid,
            player_name,
            selected_tile: None,
            selected_building: None,
        }
    }

    pub fn from_snapshot(snapshot: &SessionSnapshot, config: &GameConfig) -> Result<Self, GameError> {
        if snapshot.level == 0 || snapshot.turn == 0 {
            return Err(GameError::InvalidSnapshot(
                "level and turn start at 1".to_string(),
            ));
        }

        let grid = Grid::from_ids(&snapshot.grid, config.grid_len()?)?;
        let economy = Economy {
            gold: snapshot.gold,
            food: snapshot.food,
            soldiers: snapshot.soldiers,
            level: snapshot.level,
            experience: snapshot.experience,
            turn: snapshot.turn,
        };

        Ok(Self {
            economy,
            grid,
            player_name: snapshot.player_name.clone(),
            selected_tile: None,
            selected_building: None,
        })
    }

    pub fn snapshot(&self, save_time: f64) -> SessionSnapshot {
        SessionSnapshot {
            gold: self.economy.gold,
            food: self.economy.food,
            soldiers: self.economy.soldiers,
            level: self.economy.level,
            experience: self.economy.experience,
            turn: self.economy.turn,
            grid: self.grid.to_ids(),
            save_time,
            player_name: self.player_name.clone(),
        }
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Split borrow for passes that read tiles while mutating resources.
    pub fn parts_mut(&mut self) -> (&Grid, &mut Economy) {
        (&self.grid, &mut self.economy)
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn selected_tile(&self) -> Option<usize> {
        self.selected_tile
    }

    pub fn selected_building(&self) -> Option<BuildingKind> {
        self.selected_building
    }

    pub fn set_selected_tile(&mut self, tile: Option<usize>) {
        self.selected_tile = tile;
    }

    pub fn set_selected_building(&mut self, kind: Option<BuildingKind>) {
        self.selected_building = kind;
    }

    pub fn clear_selection(&mut self) {
        self.selected_tile = None;
        self.selected_building = None;
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self::with_grid(
            Grid::new(DEFAULT_GRID_DIMENSION * DEFAULT_GRID_DIMENSION),
            DEFAULT_PLAYER_NAME.to_string(),
        )
    }
}
