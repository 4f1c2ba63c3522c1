use tracing::{debug, info};

use crate::data::{Catalog, LevelUp, SessionData};

/// What one turn advance did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    pub productive_tiles: usize,
    pub level_up: Option<LevelUp>,
}

impl TurnReport {
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(level_up) = self.level_up {
            lines.push(level_up_message(level_up));
        }
        lines.push(format!("Turn {} began.", self.turn));
        lines
    }
}

pub fn level_up_message(level_up: LevelUp) -> String {
    format!("Reached level {}!", level_up.level)
}

pub struct TurnEngine;

impl TurnEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies every tile's yield in index order, bumps the turn once, then
    /// runs the leveling check.
    pub fn advance_turn(&self, data: &mut SessionData) -> TurnReport {
        let (grid, economy) = data.parts_mut();

        let mut productive_tiles = 0;
        for (_, kind) in grid.tiles() {
            if economy.apply_yield(Catalog::spec(kind).passive_yield) {
                productive_tiles += 1;
            }
        }

        economy.increment_turn();
        let level_up = economy.check_level_up();

        let turn = economy.turn();
        debug!(turn, productive_tiles, "turn advanced");
        if let Some(level_up) = level_up {
            info!(level = level_up.level, "level up");
        }

        TurnReport {
            turn,
            productive_tiles,
            level_up,
        }
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildingKind, Resource};

    fn session_with(buildings: &[(usize, BuildingKind)]) -> SessionData {
        let mut data = SessionData::default();
        for &(index, kind) in buildings {
            data.grid_mut().place_building(index, kind).unwrap();
        }
        data
    }

    #[test]
    fn farm_and_mine_yield_deterministically() {
        let mut data = session_with(&[(0, BuildingKind::Farm), (1, BuildingKind::Mine)]);
        let report = TurnEngine::new().advance_turn(&mut data);

        assert_eq!(data.economy().food(), 55);
        assert_eq!(data.economy().gold(), 108);
        assert_eq!(data.economy().turn(), 2);
        assert_eq!(report.productive_tiles, 2);
        assert_eq!(report.log_lines(), vec!["Turn 2 began.".to_string()]);
    }

    #[test]
    fn empty_grid_still_advances_once() {
        let mut data = SessionData::default();
        let before = data.economy().clone();
        TurnEngine::new().advance_turn(&mut data);

        assert_eq!(data.economy().turn(), before.turn() + 1);
        assert_eq!(data.economy().gold(), before.gold());
        assert_eq!(data.economy().food(), before.food());
    }

    #[test]
    fn market_adds_gold() {
        let mut data = session_with(&[(5, BuildingKind::Market)]);
        TurnEngine::new().advance_turn(&mut data);
        assert_eq!(data.economy().gold(), 105);
    }

    #[test]
    fn earlier_barracks_can_starve_later_one() {
        let mut data = session_with(&[(0, BuildingKind::Barracks), (1, BuildingKind::Barracks)]);
        data.economy_mut().debit(Resource::Food, 47).unwrap(); // 3 food left

        let report = TurnEngine::new().advance_turn(&mut data);

        assert_eq!(data.economy().food(), 1);
        assert_eq!(data.economy().soldiers(), 11);
        assert_eq!(report.productive_tiles, 1);
    }

    #[test]
    fn farm_before_barracks_feeds_it() {
        let mut data = session_with(&[(0, BuildingKind::Farm), (1, BuildingKind::Barracks)]);
        data.economy_mut().debit(Resource::Food, 50).unwrap();

        TurnEngine::new().advance_turn(&mut data);

        assert_eq!(data.economy().food(), 3);
        assert_eq!(data.economy().soldiers(), 11);
    }

    #[test]
    fn reports_pending_level_up() {
        let mut data = SessionData::default();
        data.economy_mut().experience = 100;

        let report = TurnEngine::new().advance_turn(&mut data);

        assert_eq!(report.level_up, Some(LevelUp { level: 2 }));
        assert_eq!(data.economy().level(), 2);
        assert_eq!(
            report.log_lines(),
            vec!["Reached level 2!".to_string(), "Turn 2 began.".to_string()]
        );
    }
}
