use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Identifier of a registered building kind.
///
/// Serialized as the lowercase string id used in saved grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    Empty,
    Castle,
    Farm,
    Mine,
    Barracks,
    Market,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 6] = [
        BuildingKind::Empty,
        BuildingKind::Castle,
        BuildingKind::Farm,
        BuildingKind::Mine,
        BuildingKind::Barracks,
        BuildingKind::Market,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildingKind::Empty => "empty",
            BuildingKind::Castle => "castle",
            BuildingKind::Farm => "farm",
            BuildingKind::Mine => "mine",
            BuildingKind::Barracks => "barracks",
            BuildingKind::Market => "market",
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildingKind {
    type Err = GameError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        BuildingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == id)
            .ok_or_else(|| GameError::UnknownBuilding(id.to_string()))
    }
}

/// Pool resources that buildings and actions move around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Gold,
    Food,
    Soldiers,
}

/// Per-turn resource delta produced by one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassiveYield {
    None,
    /// Unconditional production.
    Produce { resource: Resource, amount: u32 },
    /// Produces only when the input can be paid in full that turn.
    Convert {
        input: Resource,
        input_amount: u32,
        output: Resource,
        output_amount: u32,
    },
}

/// Static catalog entry for a building kind.
#[derive(Debug, Clone, Copy)]
pub struct BuildingSpec {
    pub kind: BuildingKind,
    pub name: &'static str,
    pub benefit: &'static str,
    /// Gold cost, `None` for kinds the player cannot place.
    pub cost: Option<u32>,
    pub passive_yield: PassiveYield,
}

impl BuildingSpec {
    pub fn is_buildable(&self) -> bool {
        self.cost.is_some()
    }
}
