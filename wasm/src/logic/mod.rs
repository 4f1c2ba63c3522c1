mod action_processor;
mod autosave;
mod turn_engine;

pub use action_processor::ActionProcessor;
pub use autosave::AutosaveSchedule;
pub use turn_engine::{TurnEngine, TurnReport};

use tracing::{info, warn};

use crate::data::{Catalog, SessionData};
use crate::dependency::{
    entropy_seed, now_ms, ChaChaSource, MemoryStore, RandomSource, SnapshotStore,
};
use crate::types::{
    ActionRequest, ActionResult, BuildingKind, GameConfig, GameError, SessionSnapshot,
};

/// Owns the session and routes every host request through the core.
pub struct GameLogic {
    config: GameConfig,
    data: SessionData,
    /// Starting state for `config`; new sessions are cloned from it.
    fresh: SessionData,
    processor: ActionProcessor,
    rng: Box<dyn RandomSource>,
    store: Box<dyn SnapshotStore>,
    autosave: AutosaveSchedule,
    intro_log: Vec<String>,
}

impl GameLogic {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let store = default_store(&config);
        Self::with_parts(config, Box::new(ChaChaSource::seeded(seed)), store)
    }

    /// Builds a session on explicit collaborators and restores whatever the
    /// store holds.
    pub fn with_parts(
        config: GameConfig,
        rng: Box<dyn RandomSource>,
        store: Box<dyn SnapshotStore>,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let saved = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not load saved session");
            None
        });

        let fresh = SessionData::new(&config)?;
        let mut logic = Self {
            data: fresh.clone(),
            fresh,
            processor: ActionProcessor::new(),
            rng,
            store,
            autosave: AutosaveSchedule::new(config.autosave_interval_ms, now_ms()),
            intro_log: Vec::new(),
            config,
        };
        logic.intro_log = logic.initialize_or_restore(saved);
        Ok(logic)
    }

    /// Starts a fresh session, or resumes from `snapshot` when it fits the
    /// current configuration.
    pub fn initialize_or_restore(&mut self, snapshot: Option<SessionSnapshot>) -> Vec<String> {
        self.data = self.fresh.clone();
        let mut restored = false;

        if let Some(snapshot) = snapshot {
            match SessionData::from_snapshot(&snapshot, &self.config) {
                Ok(data) => {
                    self.data = data;
                    restored = true;
                    info!(turn = self.data.economy().turn(), "restored saved session");
                }
                Err(err) => {
                    warn!(error = %err, "discarding saved session");
                }
            }
        } else {
            info!(grid_len = self.data.grid().len(), "started new session");
        }

        let mut log = vec![format!(
            "Welcome, {}! Build your empire...",
            self.data.player_name()
        )];
        if restored {
            log.push("Saved game loaded.".to_string());
        }
        log
    }

    pub fn take_intro_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.intro_log)
    }

    pub fn submit_action(&mut self, request: &ActionRequest) -> ActionResult {
        let result = self
            .processor
            .submit(&mut self.data, self.rng.as_mut(), request);
        if result.succeeded {
            self.persist_quietly(now_ms());
        }
        result
    }

    /// Empty tiles become the build target; occupied ones are described.
    pub fn select_tile(&mut self, index: usize) -> ActionResult {
        let kind = match self.data.grid().tile_at(index) {
            Ok(kind) => kind,
            Err(err) => return ActionResult::failure(&err),
        };

        if kind == BuildingKind::Empty {
            self.data.set_selected_tile(Some(index));
            self.data.set_selected_building(None);
            return ActionResult::success(Vec::new());
        }

        let spec = Catalog::spec(kind);
        ActionResult::success(vec![format!("This is a {}. {}", spec.name, spec.benefit)])
    }

    pub fn select_building(&mut self, id: &str) -> ActionResult {
        match Catalog::lookup(id) {
            Ok(spec) => {
                self.data.set_selected_building(Some(spec.kind));
                ActionResult::success(Vec::new())
            }
            Err(err) => ActionResult::failure(&err),
        }
    }

    pub fn cancel_build(&mut self) {
        self.data.clear_selection();
    }

    /// Builds on the current selection. The selection survives a failure so
    /// the player can pick something cheaper.
    pub fn confirm_build(&mut self) -> ActionResult {
        let request = ActionRequest::Build {
            tile: self.data.selected_tile(),
            kind: self
                .data
                .selected_building()
                .map(|kind| kind.as_str().to_string()),
        };
        let result = self.submit_action(&request);
        if result.succeeded {
            self.data.clear_selection();
        }
        result
    }

    /// Periodic host trigger. Saves when the autosave interval has elapsed and
    /// reports whether it did; never touches game state.
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, GameError> {
        if !self.autosave.is_due(now_ms) {
            return Ok(false);
        }
        self.persist(now_ms)?;
        Ok(true)
    }

    pub fn save_now(&mut self) -> Result<(), GameError> {
        self.persist(now_ms())
    }

    pub fn reset(&mut self) -> Vec<String> {
        let log = self.initialize_or_restore(None);
        self.persist_quietly(now_ms());
        log
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.data.snapshot(now_ms())
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    fn persist(&mut self, now_ms: f64) -> Result<(), GameError> {
        let snapshot = self.data.snapshot(now_ms);
        self.store.save(&snapshot)?;
        self.autosave.mark_saved(now_ms);
        Ok(())
    }

    fn persist_quietly(&mut self, now_ms: f64) {
        if let Err(err) = self.persist(now_ms) {
            warn!(error = %err, "failed to save session");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn default_store(config: &GameConfig) -> Box<dyn SnapshotStore> {
    match crate::dependency::LocalStorageStore::open(&config.storage_key) {
        Some(store) => Box::new(store),
        None => {
            warn!("localStorage unavailable, session will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store(_config: &GameConfig) -> Box<dyn SnapshotStore> {
    Box::new(MemoryStore::new())
}
