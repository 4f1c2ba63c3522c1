use tracing::warn;

use crate::types::{tile_count, BuildingKind, GameError};

use super::catalog::Catalog;

/// Fixed-length tile layout. The castle sits at the centre index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<BuildingKind>,
}

impl Grid {
    pub fn new(len: usize) -> Self {
        let mut tiles = vec![BuildingKind::Empty; len];
        if let Some(centre) = tiles.get_mut(len / 2) {
            *centre = BuildingKind::Castle;
        }
        Self { tiles }
    }

    pub fn with_dimension(dimension: usize) -> Result<Self, GameError> {
        Ok(Self::new(tile_count(dimension)?))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn centre(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn tile_at(&self, index: usize) -> Result<BuildingKind, GameError> {
        self.tiles
            .get(index)
            .copied()
            .ok_or(GameError::OutOfBounds {
                index,
                len: self.tiles.len(),
            })
    }

    pub fn is_buildable(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.tile_at(index)? == BuildingKind::Empty)
    }

    pub fn place_building(&mut self, index: usize, kind: BuildingKind) -> Result<(), GameError> {
        if !self.is_buildable(index)? || !Catalog::spec(kind).is_buildable() {
            return Err(GameError::NotBuildable(index));
        }
        self.tiles[index] = kind;
        Ok(())
    }

    /// Tiles in index order. Call again to restart.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, BuildingKind)> + '_ {
        self.tiles.iter().copied().enumerate()
    }

    pub fn count(&self, kind: BuildingKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn to_ids(&self) -> Vec<String> {
        self.tiles.iter().map(|kind| kind.as_str().to_string()).collect()
    }

    /// Rebuilds a grid from saved ids. Unknown ids become empty land, and the
    /// castle is put back at the centre as the only one.
    pub fn from_ids(ids: &[String], expected_len: usize) -> Result<Self, GameError> {
        if ids.len() != expected_len {
            return Err(GameError::InvalidSnapshot(format!(
                "grid has {} tiles, expected {}",
                ids.len(),
                expected_len
            )));
        }

        let centre = expected_len / 2;
        let tiles = ids
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let kind = id.parse().unwrap_or_else(|_| {
                    warn!(index, id = %id, "unknown building in saved grid, restoring as empty");
                    BuildingKind::Empty
                });
                match (index == centre, kind) {
                    (true, BuildingKind::Castle) => kind,
                    (true, _) => {
                        warn!(index, id = %id, "saved grid lost its castle, restoring it");
                        BuildingKind::Castle
                    }
                    (false, BuildingKind::Castle) => {
                        warn!(index, "extra castle in saved grid, restoring as empty");
                        BuildingKind::Empty
                    }
                    (false, _) => kind,
                }
            })
            .collect();
        Ok(Self { tiles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_castle_at_centre() {
        let grid = Grid::with_dimension(5).unwrap();
        assert_eq!(grid.len(), 25);
        assert_eq!(grid.centre(), 12);
        assert_eq!(grid.tile_at(12).unwrap(), BuildingKind::Castle);
        assert_eq!(grid.count(BuildingKind::Castle), 1);
        assert_eq!(grid.count(BuildingKind::Empty), 24);
        assert!(!grid.is_buildable(12).unwrap());
    }

    #[test]
    fn places_on_empty_tile_only() {
        let mut grid = Grid::with_dimension(5).unwrap();
        grid.place_building(0, BuildingKind::Mine).unwrap();
        assert_eq!(grid.tile_at(0).unwrap(), BuildingKind::Mine);
        assert_eq!(
            grid.place_building(0, BuildingKind::Farm),
            Err(GameError::NotBuildable(0))
        );
        assert_eq!(
            grid.place_building(12, BuildingKind::Farm),
            Err(GameError::NotBuildable(12))
        );
        assert_eq!(grid.tile_at(0).unwrap(), BuildingKind::Mine);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut grid = Grid::with_dimension(5).unwrap();
        assert_eq!(
            grid.place_building(25, BuildingKind::Farm),
            Err(GameError::OutOfBounds { index: 25, len: 25 })
        );
        assert!(grid.tile_at(100).is_err());
    }

    #[test]
    fn refuses_non_buildable_kinds() {
        let mut grid = Grid::with_dimension(5).unwrap();
        assert_eq!(
            grid.place_building(3, BuildingKind::Castle),
            Err(GameError::NotBuildable(3))
        );
        assert_eq!(grid.count(BuildingKind::Castle), 1);
    }

    #[test]
    fn tiles_iterate_in_index_order_and_restart() {
        let mut grid = Grid::with_dimension(3).unwrap();
        grid.place_building(0, BuildingKind::Farm).unwrap();
        let first: Vec<_> = grid.tiles().collect();
        let second: Vec<_> = grid.tiles().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], (0, BuildingKind::Farm));
        assert_eq!(first[4], (4, BuildingKind::Castle));
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn restores_unknown_ids_as_empty() {
        let ids: Vec<String> = ["farm", "castle", "wizard_tower"]
            .iter()
            .map(|id| id.to_string())
            .collect();
        let grid = Grid::from_ids(&ids, 3).unwrap();
        assert_eq!(grid.tile_at(0).unwrap(), BuildingKind::Farm);
        assert_eq!(grid.tile_at(2).unwrap(), BuildingKind::Empty);
    }

    #[test]
    fn restore_rejects_length_mismatch() {
        let ids = vec!["empty".to_string(); 9];
        assert!(matches!(
            Grid::from_ids(&ids, 25),
            Err(GameError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn round_trips_ids() {
        let mut grid = Grid::with_dimension(5).unwrap();
        grid.place_building(7, BuildingKind::Market).unwrap();
        let restored = Grid::from_ids(&grid.to_ids(), 25).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn restore_keeps_single_castle_at_centre() {
        let ids = vec!["castle".to_string(); 25];
        let grid = Grid::from_ids(&ids, 25).unwrap();
        assert_eq!(grid.count(BuildingKind::Castle), 1);
        assert_eq!(grid.tile_at(12).unwrap(), BuildingKind::Castle);
        assert_eq!(grid.count(BuildingKind::Empty), 24);
    }

    #[test]
    fn restore_puts_missing_castle_back() {
        let mut ids = vec!["empty".to_string(); 25];
        ids[12] = "farm".to_string();
        ids[3] = "mine".to_string();
        let grid = Grid::from_ids(&ids, 25).unwrap();
        assert_eq!(grid.tile_at(12).unwrap(), BuildingKind::Castle);
        assert!(!grid.is_buildable(12).unwrap());
        assert_eq!(grid.tile_at(3).unwrap(), BuildingKind::Mine);
        assert_eq!(grid.count(BuildingKind::Castle), 1);
    }

    #[test]
    fn rejects_oversized_dimension() {
        assert!(matches!(
            Grid::with_dimension(usize::MAX),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
