use crate::types::{GameError, SessionSnapshot};

/// Persistence backend for session snapshots.
pub trait SnapshotStore {
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError>;
    fn load(&self) -> Result<Option<SessionSnapshot>, GameError>;
}

/// Holds the latest save as JSON text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            data: Some(json.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError> {
        self.data = Some(snapshot.to_json()?);
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, GameError> {
        self.data
            .as_deref()
            .map(SessionSnapshot::from_json)
            .transpose()
            .map_err(GameError::from)
    }
}

/// Browser `localStorage` under a fixed key.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn open(key: &str) -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self {
            storage,
            key: key.to_string(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl SnapshotStore for LocalStorageStore {
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), GameError> {
        let json = snapshot.to_json()?;
        self.storage
            .set_item(&self.key, &json)
            .map_err(|err| GameError::Storage(format!("{err:?}")))
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, GameError> {
        let json = self
            .storage
            .get_item(&self.key)
            .map_err(|err| GameError::Storage(format!("{err:?}")))?;
        json.as_deref()
            .map(SessionSnapshot::from_json)
            .transpose()
            .map_err(GameError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SessionData;

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saves_camel_case_json() {
        let mut store = MemoryStore::new();
        let snapshot = SessionData::default().snapshot(1000.0);
        store.save(&snapshot).unwrap();

        let raw = store.raw().unwrap();
        assert!(raw.contains("\"saveTime\":1000.0"));
        assert!(raw.contains("\"playerName\":\"Emperor\""));
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn corrupt_save_is_invalid_snapshot() {
        let store = MemoryStore::with_json("{not json");
        assert!(matches!(store.load(), Err(GameError::InvalidSnapshot(_))));
    }
}
