//! # gridiron_core - Drive Simulator for Gridiron Strategy
//!
//! Rules engine for a down-and-distance football game: the offense picks a
//! play, a randomized outcome is resolved, and score, down, distance and
//! field position update. Rendering and input belong to adapters.
//!
//! ## Features
//! - Flat yard-line field or hex-grid field with end zones and safeties
//! - Injectable randomness (seeded ChaCha8 or scripted samples)
//! - Bounded play-by-play log, newest first
//! - JSON API for string-based adapters

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod state;

pub use api::{simulate_drive_json, DriveRequest, DriveResponse};
pub use engine::{
    DrivePhase, DriveSimulator, DriveTransition, FieldPosition, FieldVariant, HexCoord,
    PlayOutcome, PlayRng, SafetyHandling, ScriptedRng, SeededRng, SimConfig,
};
pub use error::{DriveError, Result};
pub use models::{DriveEvent, EventType, PlayResult, PlayType, TeamSide};
pub use state::{format_down_and_distance, GameState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_game_loop_through_public_api() {
        let mut sim = DriveSimulator::with_seed(SimConfig::default(), 2026).unwrap();
        let mut touchdowns = 0;
        let mut turnovers = 0;

        for i in 0..500 {
            sim.select_play(PlayType::ALL[i % PlayType::ALL.len()]);
            let outcome = sim.execute_play().expect("play was selected");
            match outcome.transition {
                DriveTransition::Touchdown { .. } => touchdowns += 1,
                DriveTransition::TurnoverOnDowns => turnovers += 1,
                _ => {}
            }
        }

        let state = sim.state();
        assert_eq!((state.home_score + state.away_score) / 7, touchdowns);
        assert!(touchdowns + turnovers > 0);
        assert_eq!(state.quarter, 1);
    }
}
