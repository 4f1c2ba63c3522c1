use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Player action submitted by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ActionRequest {
    Build {
        #[serde(default)]
        tile: Option<usize>,
        /// Catalog id, resolved by the processor so an unknown id fails as
        /// `UnknownBuilding`.
        #[serde(default)]
        kind: Option<String>,
    },
    CollectTax,
    TrainSoldiers,
    Diplomacy,
    Attack,
}

impl ActionRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ActionRequest::Build { .. } => "build",
            ActionRequest::CollectTax => "collect-tax",
            ActionRequest::TrainSoldiers => "train-soldiers",
            ActionRequest::Diplomacy => "diplomacy",
            ActionRequest::Attack => "attack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    pub code: String,
    pub message: String,
}

impl From<&GameError> for FailureReason {
    fn from(err: &GameError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of an action, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub succeeded: bool,
    pub reason: Option<FailureReason>,
    pub turn_advanced: bool,
    pub log: Vec<String>,
}

impl ActionResult {
    pub fn success(log: Vec<String>) -> Self {
        Self {
            succeeded: true,
            reason: None,
            turn_advanced: false,
            log,
        }
    }

    pub fn failure(err: &GameError) -> Self {
        Self {
            succeeded: false,
            reason: Some(FailureReason::from(err)),
            turn_advanced: false,
            log: vec![format!("Failed: {err}")],
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        self.reason.as_ref().map(|reason| reason.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_host_action_tags() {
        let request: ActionRequest =
            serde_json::from_str(r#"{"action":"collect-tax"}"#).unwrap();
        assert_eq!(request, ActionRequest::CollectTax);

        let request: ActionRequest =
            serde_json::from_str(r#"{"action":"build","tile":3,"kind":"farm"}"#).unwrap();
        assert_eq!(
            request,
            ActionRequest::Build {
                tile: Some(3),
                kind: Some("farm".to_string())
            }
        );
    }

    #[test]
    fn unknown_building_id_still_decodes() {
        let request: ActionRequest =
            serde_json::from_str(r#"{"action":"build","tile":0,"kind":"tower"}"#).unwrap();
        assert_eq!(
            request,
            ActionRequest::Build {
                tile: Some(0),
                kind: Some("tower".to_string())
            }
        );
    }

    #[test]
    fn build_without_selection_decodes_to_none() {
        let request: ActionRequest = serde_json::from_str(r#"{"action":"build"}"#).unwrap();
        assert_eq!(request, ActionRequest::Build { tile: None, kind: None });
    }

    #[test]
    fn failure_carries_error_code() {
        let result = ActionResult::failure(&GameError::InsufficientSoldiers);
        assert!(!result.succeeded);
        assert_eq!(result.error_code(), Some("InsufficientSoldiers"));
        assert!(!result.turn_advanced);
    }
}
