//! Play calls offered to the offense and the raw result of running one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DriveError;

/// Offensive play call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "kebab-case")]
pub enum PlayType {
    RunLeft,
    RunMiddle,
    RunRight,
    PassShort,
    PassMedium,
    PassDeep,
}

impl PlayType {
    /// All play calls in menu order (menu index = position + 1)
    pub const ALL: [PlayType; 6] = [
        PlayType::RunLeft,
        PlayType::RunMiddle,
        PlayType::RunRight,
        PlayType::PassShort,
        PlayType::PassMedium,
        PlayType::PassDeep,
    ];

    pub fn is_run(&self) -> bool {
        matches!(self, PlayType::RunLeft | PlayType::RunMiddle | PlayType::RunRight)
    }

    pub fn is_pass(&self) -> bool {
        !self.is_run()
    }

    /// Wire name, e.g. `"pass-deep"`
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::RunLeft => "run-left",
            PlayType::RunMiddle => "run-middle",
            PlayType::RunRight => "run-right",
            PlayType::PassShort => "pass-short",
            PlayType::PassMedium => "pass-medium",
            PlayType::PassDeep => "pass-deep",
        }
    }

    /// Human label for menus
    pub fn label(&self) -> &'static str {
        match self {
            PlayType::RunLeft => "Run Left",
            PlayType::RunMiddle => "Run Middle",
            PlayType::RunRight => "Run Right",
            PlayType::PassShort => "Short Pass",
            PlayType::PassMedium => "Medium Pass",
            PlayType::PassDeep => "Deep Pass",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayType {
    type Err = DriveError;

    /// Accepts the wire name, its snake_case spelling, or the menu index `1..=6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| PlayType::ALL.get(i).copied())
                .ok_or_else(|| DriveError::InvalidPlay(trimmed.to_string()));
        }

        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        PlayType::ALL
            .iter()
            .copied()
            .find(|play| play.as_str() == normalized)
            .ok_or_else(|| DriveError::InvalidPlay(trimmed.to_string()))
    }
}

/// Outcome of a single snap before it is applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResult {
    /// Net yards toward the opponent's goal line (negative = loss)
    pub yards: i32,
    /// False only for an incomplete pass
    pub completed: bool,
}

impl PlayResult {
    pub fn incomplete() -> Self {
        Self { yards: 0, completed: false }
    }
}
