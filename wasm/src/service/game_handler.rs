use serde::Serialize;
use serde_wasm_bindgen;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::data::Catalog;
use crate::logic::GameLogic;
use crate::types::{ActionRequest, ActionResult, GameConfig, GameError, SessionSnapshot};

/// Buildable entry shown in the host's build dialog.
#[derive(Debug, Clone, Serialize)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    benefit: &'static str,
    cost: u32,
}

#[wasm_bindgen]
pub struct GameHandler {
    logic: GameLogic,
}

#[wasm_bindgen]
impl GameHandler {
    /// Creates the session, restoring the last save when one exists.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GameHandler, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::with_config(config).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn submit_action(&mut self, request: JsValue) -> Result<JsValue, JsValue> {
        let request: ActionRequest = serde_wasm_bindgen::from_value(request)?;
        Ok(respond(&self.logic.submit_action(&request)))
    }

    #[wasm_bindgen]
    pub fn collect_tax(&mut self) -> JsValue {
        respond(&self.logic.submit_action(&ActionRequest::CollectTax))
    }

    #[wasm_bindgen]
    pub fn train_soldiers(&mut self) -> JsValue {
        respond(&self.logic.submit_action(&ActionRequest::TrainSoldiers))
    }

    #[wasm_bindgen]
    pub fn diplomacy(&mut self) -> JsValue {
        respond(&self.logic.submit_action(&ActionRequest::Diplomacy))
    }

    #[wasm_bindgen]
    pub fn attack(&mut self) -> JsValue {
        respond(&self.logic.submit_action(&ActionRequest::Attack))
    }

    #[wasm_bindgen]
    pub fn select_tile(&mut self, index: usize) -> JsValue {
        respond(&self.logic.select_tile(index))
    }

    #[wasm_bindgen]
    pub fn select_building(&mut self, kind: &str) -> JsValue {
        respond(&self.logic.select_building(kind))
    }

    #[wasm_bindgen]
    pub fn cancel_build(&mut self) {
        self.logic.cancel_build();
    }

    #[wasm_bindgen]
    pub fn confirm_build(&mut self) -> JsValue {
        respond(&self.logic.confirm_build())
    }

    /// Periodic autosave hook; `now_ms` is epoch milliseconds (`Date.now()`).
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.logic.tick(now_ms) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(error = %err, "autosave failed");
                false
            }
        }
    }

    /// Host calls this when the page is about to be hidden.
    #[wasm_bindgen]
    pub fn save_now(&mut self) -> Result<(), JsValue> {
        self.logic.save_now().map_err(to_js_error)
    }

    /// Replaces the session with a save fetched by the host (e.g. cloud
    /// storage). Returns the log lines to show.
    #[wasm_bindgen]
    pub fn restore(&mut self, json: Option<String>) -> Result<Vec<String>, JsValue> {
        let snapshot = json
            .as_deref()
            .map(SessionSnapshot::from_json)
            .transpose()
            .map_err(|err| to_js_error(GameError::from(err)))?;
        Ok(self.logic.initialize_or_restore(snapshot))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> Vec<String> {
        self.logic.reset()
    }

    #[wasm_bindgen]
    pub fn take_intro_log(&mut self) -> Vec<String> {
        self.logic.take_intro_log()
    }

    #[wasm_bindgen]
    pub fn get_snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.logic.snapshot()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> Result<String, JsValue> {
        self.logic
            .snapshot()
            .to_json()
            .map_err(|err| to_js_error(GameError::from(err)))
    }

    #[wasm_bindgen]
    pub fn get_catalog(&self) -> JsValue {
        let entries: Vec<CatalogEntry> = Catalog::buildable()
            .filter_map(|spec| {
                Some(CatalogEntry {
                    id: spec.kind.as_str(),
                    name: spec.name,
                    benefit: spec.benefit,
                    cost: spec.cost?,
                })
            })
            .collect();
        serde_wasm_bindgen::to_value(&entries).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_gold(&self) -> u32 {
        self.logic.data().economy().gold()
    }

    #[wasm_bindgen]
    pub fn get_food(&self) -> u32 {
        self.logic.data().economy().food()
    }

    #[wasm_bindgen]
    pub fn get_soldiers(&self) -> u32 {
        self.logic.data().economy().soldiers()
    }

    #[wasm_bindgen]
    pub fn get_level(&self) -> u32 {
        self.logic.data().economy().level()
    }

    #[wasm_bindgen]
    pub fn get_experience(&self) -> u32 {
        self.logic.data().economy().experience()
    }

    #[wasm_bindgen]
    pub fn get_turn(&self) -> u64 {
        self.logic.data().economy().turn()
    }

    #[wasm_bindgen]
    pub fn get_grid_len(&self) -> usize {
        self.logic.data().grid().len()
    }

    #[wasm_bindgen]
    pub fn get_tile(&self, index: usize) -> Option<String> {
        self.logic
            .data()
            .grid()
            .tile_at(index)
            .ok()
            .map(|kind| kind.as_str().to_string())
    }

    #[wasm_bindgen]
    pub fn get_selected_tile(&self) -> Option<usize> {
        self.logic.data().selected_tile()
    }

    #[wasm_bindgen]
    pub fn get_player_name(&self) -> String {
        self.logic.data().player_name().to_string()
    }
}

impl GameHandler {
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            logic: GameLogic::new(config)?,
        })
    }
}

fn respond(result: &ActionResult) -> JsValue {
    serde_wasm_bindgen::to_value(result).unwrap_or(JsValue::NULL)
}

fn to_js_error(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
impl GameHandler {
    pub fn logic_mut(&mut self) -> &mut GameLogic {
        &mut self.logic
    }
}
