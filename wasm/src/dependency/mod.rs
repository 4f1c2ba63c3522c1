mod clock;
mod random;
mod snapshot_store;

pub use clock::{entropy_seed, now_ms};
pub use random::{ChaChaSource, RandomSource};
pub use snapshot_store::{MemoryStore, SnapshotStore};

#[cfg(target_arch = "wasm32")]
pub use snapshot_store::LocalStorageStore;

#[cfg(test)]
pub use random::ScriptedSource;
