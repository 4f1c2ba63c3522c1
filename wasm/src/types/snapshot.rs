use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PLAYER_NAME;

/// Flat persisted copy of the economy and the grid.
///
/// Grid entries stay raw ids so a save written against a different
/// catalog still decodes; the restore path decides what to do with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub gold: u32,
    pub food: u32,
    pub soldiers: u32,
    pub level: u32,
    pub experience: u32,
    pub turn: u64,
    pub grid: Vec<String>,
    #[serde(default)]
    pub save_time: f64,
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
