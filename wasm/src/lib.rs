// ============================================================================
// Empire economy engine
// ============================================================================
//
// Layers, leaf to root:
//   types      - plain serializable values shared with the host
//   data       - building catalog, tile grid, resource pool
//   logic      - turn engine, action processor, session orchestration
//   dependency - randomness, snapshot stores, clock
//   service    - the `GameHandler` exported to JavaScript

pub mod constants;
pub mod data;
pub mod dependency;
pub mod logic;
pub mod service;
pub mod types;

pub use data::{Catalog, Economy, Grid, SessionData};
pub use dependency::{ChaChaSource, MemoryStore, RandomSource, SnapshotStore};
pub use logic::{ActionProcessor, GameLogic, TurnEngine};
pub use service::GameHandler;
pub use types::{
    ActionRequest, ActionResult, BuildingKind, GameConfig, GameError, Resource, SessionSnapshot,
};
