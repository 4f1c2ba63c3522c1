pub mod action;
pub mod building;
pub mod config;
pub mod error;
pub mod snapshot;

pub use action::{ActionRequest, ActionResult, FailureReason};
pub use building::{BuildingKind, BuildingSpec, PassiveYield, Resource};
pub use config::{tile_count, GameConfig};
pub use error::GameError;
pub use snapshot::SessionSnapshot;
