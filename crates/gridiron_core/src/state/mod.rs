//! Game State
//!
//! `GameState` is a plain value owned by one `DriveSimulator`; there is no
//! process-wide instance. Adapters receive clones through play outcomes.

use serde::{Deserialize, Serialize};

use crate::engine::field::{FieldPosition, FieldVariant};
use crate::error::{DriveError, Result};
use crate::models::{PlayType, TeamSide};

/// Yards to gain for a fresh set of downs
pub const FIRST_DOWN_DISTANCE: i32 = 10;
/// Touchdown plus conversion
pub const TOUCHDOWN_POINTS: u32 = 7;
pub const MAX_DOWNS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub home_score: u32,
    pub away_score: u32,
    /// Tracked for display; no rule advances it
    pub quarter: u8,
    pub possession: TeamSide,
    pub down: u8,
    pub distance: i32,
    pub ball: FieldPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_play: Option<PlayType>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(FieldVariant::default())
    }
}

impl GameState {
    /// Kickoff state: 0-0, Q1, Home ball, 1st & 10 at the Home 20
    pub fn new(variant: FieldVariant) -> Self {
        Self {
            home_score: 0,
            away_score: 0,
            quarter: 1,
            possession: TeamSide::Home,
            down: 1,
            distance: FIRST_DOWN_DISTANCE,
            ball: FieldPosition::own_twenty(variant),
            selected_play: None,
        }
    }

    pub fn variant(&self) -> FieldVariant {
        self.ball.variant()
    }

    pub fn score(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home_score,
            TeamSide::Away => self.away_score,
        }
    }

    pub fn add_touchdown(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home_score += TOUCHDOWN_POINTS,
            TeamSide::Away => self.away_score += TOUCHDOWN_POINTS,
        }
    }

    /// Fresh set of downs at the current spot
    pub fn reset_downs(&mut self) {
        self.down = 1;
        self.distance = FIRST_DOWN_DISTANCE;
    }

    /// New drive for `offense` from its own 20
    pub fn start_drive(&mut self, offense: TeamSide) {
        self.possession = offense;
        self.ball = FieldPosition::own_twenty(self.variant());
        self.reset_downs();
    }

    /// e.g. `"3rd & 7"`
    pub fn down_text(&self) -> String {
        format_down_and_distance(self.down, self.distance)
    }

    /// Checks the invariants that hold between plays
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DOWNS).contains(&self.down) {
            return Err(DriveError::InvariantViolation(format!("down {} outside 1..=4", self.down)));
        }
        if self.distance < 1 {
            return Err(DriveError::InvariantViolation(format!("distance {} below 1", self.distance)));
        }
        if self.home_score % TOUCHDOWN_POINTS != 0 || self.away_score % TOUCHDOWN_POINTS != 0 {
            return Err(DriveError::InvariantViolation(format!(
                "score {}-{} not a multiple of {TOUCHDOWN_POINTS}",
                self.home_score, self.away_score
            )));
        }
        if !self.ball.in_bounds() {
            return Err(DriveError::InvariantViolation(format!("ball out of bounds: {:?}", self.ball)));
        }
        if self.quarter == 0 {
            return Err(DriveError::InvariantViolation("quarter must start at 1".to_string()));
        }
        Ok(())
    }
}

pub fn ordinal_suffix(down: u8) -> &'static str {
    match down {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn format_down_and_distance(down: u8, distance: i32) -> String {
    format!("{down}{} & {distance}", ordinal_suffix(down))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::field::HexCoord;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(FieldVariant::Flat);
        assert_eq!((state.home_score, state.away_score), (0, 0));
        assert_eq!(state.quarter, 1);
        assert_eq!(state.possession, TeamSide::Home);
        assert_eq!((state.down, state.distance), (1, 10));
        assert_eq!(state.ball, FieldPosition::Flat { yard_line: 20 });
        assert_eq!(state.selected_play, None);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_initial_hex_state() {
        let state = GameState::new(FieldVariant::Hex);
        assert_eq!(state.ball, FieldPosition::Hex(HexCoord { q: 0, r: 30 }));
        assert_eq!(state.variant(), FieldVariant::Hex);
    }

    #[test]
    fn test_down_text_suffixes() {
        assert_eq!(format_down_and_distance(1, 10), "1st & 10");
        assert_eq!(format_down_and_distance(2, 4), "2nd & 4");
        assert_eq!(format_down_and_distance(3, 12), "3rd & 12");
        assert_eq!(format_down_and_distance(4, 1), "4th & 1");
        assert_eq!(format_down_and_distance(5, 3), "5th & 3");
    }

    #[test]
    fn test_touchdown_scoring() {
        let mut state = GameState::default();
        state.add_touchdown(TeamSide::Away);
        state.add_touchdown(TeamSide::Away);
        assert_eq!(state.score(TeamSide::Away), 14);
        assert_eq!(state.score(TeamSide::Home), 0);
    }

    #[test]
    fn test_start_drive_resets_spot_and_downs() {
        let mut state = GameState::new(FieldVariant::Hex);
        state.down = 3;
        state.distance = 2;
        state.ball = FieldPosition::Hex(HexCoord::new(5, 90));
        state.start_drive(TeamSide::Away);
        assert_eq!(state.possession, TeamSide::Away);
        assert_eq!(state.ball, FieldPosition::Hex(HexCoord { q: 0, r: 30 }));
        assert_eq!(state.down_text(), "1st & 10");
    }

    #[test]
    fn test_validate_catches_violations() {
        let state = GameState { down: 5, ..GameState::default() };
        assert!(matches!(state.validate(), Err(DriveError::InvariantViolation(_))));

        let state = GameState { distance: 0, ..GameState::default() };
        assert!(state.validate().is_err());

        let state = GameState { home_score: 3, ..GameState::default() };
        assert!(state.validate().is_err());
    }
}
