use crate::types::{BuildingKind, BuildingSpec, GameError, PassiveYield, Resource};

// Indexed by `BuildingKind` discriminant.
const CATALOG: [BuildingSpec; 6] = [
    BuildingSpec {
        kind: BuildingKind::Empty,
        name: "Empty land",
        benefit: "",
        cost: None,
        passive_yield: PassiveYield::None,
    },
    BuildingSpec {
        kind: BuildingKind::Castle,
        name: "Castle",
        benefit: "Command centre",
        cost: None,
        passive_yield: PassiveYield::None,
    },
    BuildingSpec {
        kind: BuildingKind::Farm,
        name: "Farm",
        benefit: "Produces food",
        cost: Some(20),
        passive_yield: PassiveYield::Produce {
            resource: Resource::Food,
            amount: 5,
        },
    },
    BuildingSpec {
        kind: BuildingKind::Mine,
        name: "Mine",
        benefit: "Produces gold",
        cost: Some(30),
        passive_yield: PassiveYield::Produce {
            resource: Resource::Gold,
            amount: 8,
        },
    },
    BuildingSpec {
        kind: BuildingKind::Barracks,
        name: "Barracks",
        benefit: "Trains soldiers",
        cost: Some(50),
        passive_yield: PassiveYield::Convert {
            input: Resource::Food,
            input_amount: 2,
            output: Resource::Soldiers,
            output_amount: 1,
        },
    },
    BuildingSpec {
        kind: BuildingKind::Market,
        name: "Market",
        benefit: "Extra income",
        cost: Some(40),
        passive_yield: PassiveYield::Produce {
            resource: Resource::Gold,
            amount: 5,
        },
    },
];

/// Read-only registry of building kinds.
pub struct Catalog;

impl Catalog {
    pub fn spec(kind: BuildingKind) -> &'static BuildingSpec {
        &CATALOG[kind as usize]
    }

    pub fn lookup(id: &str) -> Result<&'static BuildingSpec, GameError> {
        let kind: BuildingKind = id.parse()?;
        Ok(Self::spec(kind))
    }

    pub fn buildable() -> impl Iterator<Item = &'static BuildingSpec> {
        CATALOG.iter().filter(|spec| spec.is_buildable())
    }
}
