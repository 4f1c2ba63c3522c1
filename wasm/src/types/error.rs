use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("tile {index} is outside the grid (0..{len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("tile {0} cannot be built on")]
    NotBuildable(usize),
    #[error("no tile or building selected")]
    NoSelection,
    #[error("not enough gold")]
    InsufficientFunds,
    #[error("not enough resources")]
    InsufficientResources,
    #[error("not enough soldiers")]
    InsufficientSoldiers,
    #[error("unknown building kind `{0}`")]
    UnknownBuilding(String),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Stable machine-readable code handed to the host.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::OutOfBounds { .. } => "OutOfBounds",
            GameError::NotBuildable(_) => "NotBuildable",
            GameError::NoSelection => "NoSelection",
            GameError::InsufficientFunds => "InsufficientFunds",
            GameError::InsufficientResources => "InsufficientResources",
            GameError::InsufficientSoldiers => "InsufficientSoldiers",
            GameError::UnknownBuilding(_) => "UnknownBuilding",
            GameError::InvalidSnapshot(_) => "InvalidSnapshot",
            GameError::Storage(_) => "Storage",
            GameError::InvalidConfig(_) => "InvalidConfig",
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::InvalidSnapshot(err.to_string())
    }
}
