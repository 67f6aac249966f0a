//! Drive Simulator
//!
//! Owns one game: state, play log, config and randomness. An adapter
//! selects a play, executes it, and renders from the returned outcome.
//!
//! ## Per-play order
//! 1. Resolve the play into yards.
//! 2. Move the ball.
//! 3. Touchdown: score 7, flip possession, new drive at the 20. Ends the play.
//! 4. Safety (hex only): spot at the 20 with 1st & 10. Ends the play unless
//!    [`SafetyHandling::ContinueToDownCheck`].
//! 5. First down, or next down with reduced distance.
//! 6. Past 4th down: turnover, flip possession, mirror the spot.

use serde::{Deserialize, Serialize};

use super::config::{SafetyHandling, SimConfig};
use super::field::FieldPosition;
use super::play_log::{PlayLog, WELCOME_MESSAGE};
use super::resolution::resolve_play;
use super::rng::{PlayRng, SeededRng};
use crate::error::{DriveError, Result};
use crate::models::{DriveEvent, EventType, PlayResult, PlayType, TeamSide};
use crate::state::{GameState, MAX_DOWNS};

/// The one drive transition a play produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriveTransition {
    Touchdown { scoring_team: TeamSide },
    Safety,
    TurnoverOnDowns,
    FirstDown,
    /// Next down, same possession
    Continue,
}

impl DriveTransition {
    pub fn ends_drive(&self) -> bool {
        matches!(self, DriveTransition::Touchdown { .. } | DriveTransition::TurnoverOnDowns)
    }
}

/// Where the adapter stands between plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivePhase {
    AwaitingSelection,
    PlaySelected(PlayType),
}

/// Everything an adapter needs after a snap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub play: PlayType,
    pub result: PlayResult,
    pub transition: DriveTransition,
    /// In emission order; each one is also a play-log line
    pub events: Vec<DriveEvent>,
    pub state: GameState,
}

impl PlayOutcome {
    /// Newest log line this play produced
    pub fn log_message(&self) -> Option<&str> {
        self.events.last().map(|event| event.message.as_str())
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.message.as_str()).collect()
    }
}

pub struct DriveSimulator<R: PlayRng = SeededRng> {
    config: SimConfig,
    state: GameState,
    log: PlayLog,
    rng: R,
}

impl DriveSimulator<SeededRng> {
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self> {
        Self::new(config, SeededRng::from_seed(seed))
    }
}

impl<R: PlayRng> DriveSimulator<R> {
    /// Validates `config` and starts a fresh game
    pub fn new(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut sim = Self {
            state: GameState::new(config.variant),
            log: PlayLog::new(config.log_capacity),
            config,
            rng,
        };
        sim.reset();
        Ok(sim)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &PlayLog {
        &self.log
    }

    pub fn down_text(&self) -> String {
        self.state.down_text()
    }

    pub fn phase(&self) -> DrivePhase {
        match self.state.selected_play {
            Some(play) => DrivePhase::PlaySelected(play),
            None => DrivePhase::AwaitingSelection,
        }
    }

    /// New game: initial state and a log holding only the welcome line
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new(self.config.variant);
        self.log.clear();
        self.log.push(WELCOME_MESSAGE);
        log::info!("New game on {:?} field", self.config.variant);
        &self.state
    }

    /// Replaces the game state, e.g. to resume a game an adapter kept around
    pub fn restore(&mut self, state: GameState) -> Result<()> {
        if state.variant() != self.config.variant {
            return Err(DriveError::InvalidConfig(format!(
                "state uses {:?} field but simulator is configured for {:?}",
                state.variant(),
                self.config.variant
            )));
        }
        state.validate()?;
        self.state = state;
        Ok(())
    }

    /// Records the pending play; nothing else changes
    pub fn select_play(&mut self, play: PlayType) {
        self.state.selected_play = Some(play);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_play = None;
    }

    pub fn selected_play(&self) -> Option<PlayType> {
        self.state.selected_play
    }

    /// Runs the pending play. `None` (and no change at all) when nothing is selected.
    /// The selection is always cleared once a play runs.
    pub fn execute_play(&mut self) -> Option<PlayOutcome> {
        let play = self.state.selected_play.take()?;
        Some(self.snap(play))
    }

    /// Select and execute in one call
    pub fn run_play(&mut self, play: PlayType) -> PlayOutcome {
        self.state.selected_play = None;
        self.snap(play)
    }

    fn snap(&mut self, play: PlayType) -> PlayOutcome {
        let result = resolve_play(play, &self.config.play_table, &mut self.rng);
        log::debug!(
            "{} {play}: {} yards (completed: {})",
            self.state.possession,
            result.yards,
            result.completed
        );

        let mut events = Vec::new();
        let transition = self.apply_result(result.yards, &mut events);

        for event in &events {
            self.log.push(event.message.clone());
        }
        self.check_invariants();

        PlayOutcome { play, result, transition, events, state: self.state.clone() }
    }

    fn apply_result(&mut self, yards: i32, events: &mut Vec<DriveEvent>) -> DriveTransition {
        let offense = self.state.possession;
        self.state.ball = self.state.ball.advance(yards);

        if self.state.ball.is_touchdown() {
            return self.score_touchdown(offense, yards, events);
        }

        let safety = self.state.ball.is_safety();
        if safety {
            self.record_safety(offense, events);
            if self.config.safety_handling == SafetyHandling::EndPlay {
                return DriveTransition::Safety;
            }
        }

        let first_down = yards >= self.state.distance;
        if first_down {
            self.state.reset_downs();
            let message = format!(
                "First down! Gained {yards} yards. Ball at {} yard line.",
                self.state.ball.yard_line()
            );
            events.push(DriveEvent::new(EventType::FirstDown, offense, message).with_yards(yards));
        } else {
            self.state.down += 1;
            self.state.distance -= yards;
            let down_text = self.state.down_text();
            let (event_type, message) = if yards > 0 {
                (EventType::Gain, format!("Gained {yards} yards. {down_text}"))
            } else if yards < 0 {
                (EventType::Loss, format!("Loss of {} yards. {down_text}", yards.abs()))
            } else {
                (EventType::NoGain, format!("No gain. {down_text}"))
            };
            events.push(DriveEvent::new(event_type, offense, message).with_yards(yards));
        }

        if self.state.down > MAX_DOWNS {
            return self.turnover_on_downs(offense, events);
        }

        if safety {
            DriveTransition::Safety
        } else if first_down {
            DriveTransition::FirstDown
        } else {
            DriveTransition::Continue
        }
    }

    fn score_touchdown(
        &mut self,
        scoring_team: TeamSide,
        yards: i32,
        events: &mut Vec<DriveEvent>,
    ) -> DriveTransition {
        self.state.add_touchdown(scoring_team);
        let message = format!("TOUCHDOWN! {scoring_team} team scores! (+7)");
        events.push(DriveEvent::new(EventType::Touchdown, scoring_team, message).with_yards(yards));

        self.state.start_drive(scoring_team.opponent());
        log::info!(
            "Touchdown {scoring_team}: {}-{}",
            self.state.home_score,
            self.state.away_score
        );
        DriveTransition::Touchdown { scoring_team }
    }

    fn record_safety(&mut self, offense: TeamSide, events: &mut Vec<DriveEvent>) {
        self.state.ball = FieldPosition::own_twenty(self.state.variant());
        self.state.reset_downs();
        let message =
            format!("Safety! Ball spotted at the {} yard line.", self.state.ball.yard_line());
        events.push(DriveEvent::new(EventType::Safety, offense, message));
        log::info!("Safety against {offense}");
    }

    fn turnover_on_downs(&mut self, offense: TeamSide, events: &mut Vec<DriveEvent>) -> DriveTransition {
        let new_offense = offense.opponent();
        let message = format!("Turnover on downs! {new_offense} team takes over.");
        events.push(DriveEvent::new(EventType::TurnoverOnDowns, new_offense, message));

        self.state.possession = new_offense;
        self.state.ball = self.state.ball.mirrored();
        self.state.reset_downs();
        log::info!("Turnover on downs: {new_offense} ball at its {}", self.state.ball.yard_line());
        DriveTransition::TurnoverOnDowns
    }

    fn check_invariants(&self) {
        if let Err(err) = self.state.validate() {
            log::error!("{err}");
            #[cfg(feature = "strict_contracts")]
            panic!("{err}");
        }
    }
}
