//! JSON facade for adapters that talk strings (scripted runs, UI bridges).
//!
//! Request:
//! ```json
//! { "schema_version": 1, "seed": 42, "plays": ["run-left", "pass-deep"], "config": { "variant": "hex" } }
//! ```
//! Errors come back as `"CODE: message"`.

use serde::{Deserialize, Serialize};

use crate::engine::{DriveSimulator, DriveTransition, SimConfig};
use crate::error::DriveError;
use crate::models::PlayType;
use crate::state::GameState;
use crate::SCHEMA_VERSION;

const E_SCHEMA_VERSION: &str = "E_SCHEMA_VERSION";

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

impl From<DriveError> for String {
    fn from(err: DriveError) -> Self {
        err_code(err.code(), err)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Wire names or menu indices, resolved in order
    pub plays: Vec<String>,
    #[serde(default)]
    pub config: Option<SimConfig>,
    /// Resume from this state instead of a fresh game
    #[serde(default)]
    pub initial_state: Option<GameState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary {
    pub play: PlayType,
    pub yards: i32,
    pub completed: bool,
    pub transition: DriveTransition,
    pub messages: Vec<String>,
    pub down_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriveResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub outcomes: Vec<OutcomeSummary>,
    pub final_state: GameState,
    pub down_text: String,
    /// Newest first
    pub log: Vec<String>,
}

pub fn simulate_drive(request: &DriveRequest) -> Result<DriveResponse, String> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            E_SCHEMA_VERSION,
            format!("expected {SCHEMA_VERSION}, got {}", request.schema_version),
        ));
    }

    let plays = request
        .plays
        .iter()
        .map(|name| name.parse::<PlayType>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = request.config.clone().unwrap_or_default();
    let mut sim = DriveSimulator::with_seed(config, request.seed)?;
    if let Some(state) = &request.initial_state {
        sim.restore(state.clone())?;
    }

    let outcomes = plays
        .into_iter()
        .map(|play| {
            let outcome = sim.run_play(play);
            OutcomeSummary {
                play,
                yards: outcome.result.yards,
                completed: outcome.result.completed,
                transition: outcome.transition,
                messages: outcome.events.into_iter().map(|e| e.message).collect(),
                down_text: outcome.state.down_text(),
            }
        })
        .collect();

    Ok(DriveResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        outcomes,
        final_state: sim.state().clone(),
        down_text: sim.down_text(),
        log: sim.log().to_vec(),
    })
}

pub fn simulate_drive_json(request_json: &str) -> Result<String, String> {
    let request: DriveRequest =
        serde_json::from_str(request_json).map_err(|e| String::from(DriveError::from(e)))?;
    let response = simulate_drive(&request)?;
    serde_json::to_string(&response).map_err(|e| String::from(DriveError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_request() {
        let request = json!({
            "schema_version": 1,
            "seed": 42,
            "plays": ["run-left", "pass-short", "3"]
        });

        let result = simulate_drive_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["outcomes"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["outcomes"][2]["play"], "run-right");
        assert!(parsed["final_state"]["home_score"].is_number());
        assert!(parsed["log"].as_array().unwrap().len() <= 10);
    }

    #[test]
    fn test_same_seed_same_bytes() {
        let request = json!({
            "schema_version": 1,
            "seed": 999,
            "plays": ["pass-deep", "pass-deep", "run-middle", "pass-medium", "pass-deep"],
            "config": { "variant": "hex" }
        })
        .to_string();

        assert_eq!(simulate_drive_json(&request).unwrap(), simulate_drive_json(&request).unwrap());
    }

    #[test]
    fn test_rejects_schema_version() {
        let request = json!({ "schema_version": 2, "seed": 1, "plays": [] });
        let err = simulate_drive_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_SCHEMA_VERSION:"), "{err}");
    }

    #[test]
    fn test_rejects_unknown_play() {
        let request = json!({ "schema_version": 1, "seed": 1, "plays": ["run-left", "flea-flicker"] });
        let err = simulate_drive_json(&request.to_string()).unwrap_err();
        assert_eq!(err, "E_INVALID_PLAY: Invalid play: flea-flicker");
    }

    #[test]
    fn test_rejects_bad_json_and_config() {
        let err = simulate_drive_json("{not json").unwrap_err();
        assert!(err.starts_with("E_INVALID_JSON:"), "{err}");

        let request = json!({ "schema_version": 1, "seed": 1, "plays": [], "config": { "log_capacity": 0 } });
        let err = simulate_drive_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_INVALID_CONFIG:"), "{err}");
    }

    #[test]
    fn test_rejects_yardage_bounds_beyond_field() {
        let request = json!({
            "schema_version": 1,
            "seed": 1,
            "plays": ["run-middle"],
            "config": {
                "play_table": {
                    "run_middle": { "min_yards": i32::MIN, "max_yards": i32::MAX }
                }
            }
        });
        let err = simulate_drive_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_INVALID_CONFIG:"), "{err}");
    }

    #[test]
    fn test_resume_from_initial_state() {
        let request = json!({
            "schema_version": 1,
            "seed": 3,
            "plays": [],
            "initial_state": {
                "home_score": 14, "away_score": 7, "quarter": 1, "possession": "away",
                "down": 3, "distance": 4, "ball": { "variant": "flat", "yard_line": 61 }
            }
        });
        let response: serde_json::Value =
            serde_json::from_str(&simulate_drive_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(response["final_state"]["home_score"], 14);
        assert_eq!(response["down_text"], "3rd & 4");
    }
}
