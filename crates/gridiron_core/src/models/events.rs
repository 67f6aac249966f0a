use serde::{Deserialize, Serialize};

use super::TeamSide;

/// One log-worthy happening inside a play. Every play-log line is the
/// `message` of exactly one event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriveEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Team the event is credited to (offense, or the new offense after a turnover)
    pub team: TeamSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards: Option<i32>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    FirstDown,
    Gain,
    Loss,
    NoGain,
    Touchdown,
    /// Hex field only
    Safety,
    TurnoverOnDowns,
}

impl DriveEvent {
    pub fn new(event_type: EventType, team: TeamSide, message: impl Into<String>) -> Self {
        Self { event_type, team, yards: None, message: message.into() }
    }

    pub fn with_yards(mut self, yards: i32) -> Self {
        self.yards = Some(yards);
        self
    }
}
