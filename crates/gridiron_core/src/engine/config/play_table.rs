//! Outcome table for the six play calls

use serde::{Deserialize, Serialize};

use crate::engine::field::FieldVariant;
use crate::models::PlayType;

/// How one play call turns randomness into yards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayProfile {
    /// A pass completes when the first sample is strictly above this value.
    /// `None` for runs, which always "complete".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_threshold: Option<f64>,
    pub min_yards: i32,
    pub max_yards: i32,
}

impl PlayProfile {
    pub const fn run(min_yards: i32, max_yards: i32) -> Self {
        Self { completion_threshold: None, min_yards, max_yards }
    }

    pub const fn pass(completion_threshold: f64, min_yards: i32, max_yards: i32) -> Self {
        Self { completion_threshold: Some(completion_threshold), min_yards, max_yards }
    }

    /// Probability the play is not incomplete
    pub fn completion_rate(&self) -> f64 {
        self.completion_threshold.map_or(1.0, |t| 1.0 - t)
    }
}

/// Per-play profiles (default: the arcade table the game ships with)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayTable {
    pub run_left: PlayProfile,
    pub run_middle: PlayProfile,
    pub run_right: PlayProfile,
    pub pass_short: PlayProfile,
    pub pass_medium: PlayProfile,
    pub pass_deep: PlayProfile,
}

impl Default for PlayTable {
    fn default() -> Self {
        Self {
            // -2..=8 yards
            run_left: PlayProfile::run(-2, 8),
            run_middle: PlayProfile::run(-2, 8),
            run_right: PlayProfile::run(-2, 8),
            // 70% / 50% / 30% completion
            pass_short: PlayProfile::pass(0.3, 0, 12),
            pass_medium: PlayProfile::pass(0.5, 5, 20),
            pass_deep: PlayProfile::pass(0.7, 15, 40),
        }
    }
}

impl PlayTable {
    pub fn get(&self, play: PlayType) -> &PlayProfile {
        match play {
            PlayType::RunLeft => &self.run_left,
            PlayType::RunMiddle => &self.run_middle,
            PlayType::RunRight => &self.run_right,
            PlayType::PassShort => &self.pass_short,
            PlayType::PassMedium => &self.pass_medium,
            PlayType::PassDeep => &self.pass_deep,
        }
    }

    /// Yardage must stay within one field length either way on `variant`
    pub fn validate(&self, variant: FieldVariant) -> Result<(), String> {
        let limit = variant.field_length();
        for play in PlayType::ALL {
            let profile = self.get(play);
            for yards in [profile.min_yards, profile.max_yards] {
                if !(-limit..=limit).contains(&yards) {
                    return Err(format!("{play}: {yards} yards outside -{limit}..={limit}"));
                }
            }
            if profile.min_yards > profile.max_yards {
                return Err(format!(
                    "{play}: min_yards {} exceeds max_yards {}",
                    profile.min_yards, profile.max_yards
                ));
            }
            match (play.is_run(), profile.completion_threshold) {
                (true, Some(_)) => {
                    return Err(format!("{play}: runs cannot have a completion_threshold"));
                }
                (false, None) => {
                    return Err(format!("{play}: passes need a completion_threshold"));
                }
                (false, Some(t)) if !(0.0..1.0).contains(&t) => {
                    return Err(format!("{play}: completion_threshold {t} outside [0, 1)"));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_shipped_odds() {
        let table = PlayTable::default();
        assert_eq!(table.get(PlayType::RunMiddle), &PlayProfile::run(-2, 8));
        assert!((table.pass_short.completion_rate() - 0.7).abs() < 1e-9);
        assert!((table.pass_medium.completion_rate() - 0.5).abs() < 1e-9);
        assert!((table.pass_deep.completion_rate() - 0.3).abs() < 1e-9);
        assert_eq!((table.pass_deep.min_yards, table.pass_deep.max_yards), (15, 40));
        assert!(table.validate(FieldVariant::Flat).is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut table = PlayTable::default();
        table.pass_medium.min_yards = 30;
        let err = table.validate(FieldVariant::Flat).unwrap_err();
        assert!(err.contains("pass-medium"), "{err}");
    }

    #[test]
    fn test_validate_rejects_yardage_beyond_field_length() {
        let mut table = PlayTable::default();
        table.run_middle = PlayProfile::run(i32::MIN, i32::MAX);
        let err = table.validate(FieldVariant::Flat).unwrap_err();
        assert!(err.contains("run-middle"), "{err}");

        let mut table = PlayTable::default();
        table.pass_deep.max_yards = 120;
        assert!(table.validate(FieldVariant::Flat).is_err());
        assert!(table.validate(FieldVariant::Hex).is_ok());

        table.run_left.min_yards = -121;
        assert!(table.validate(FieldVariant::Hex).is_err());
    }

    #[test]
    fn test_validate_rejects_threshold_on_run() {
        let mut table = PlayTable::default();
        table.run_left.completion_threshold = Some(0.2);
        assert!(table.validate(FieldVariant::Flat).is_err());
    }

    #[test]
    fn test_validate_rejects_threshold_of_one() {
        let mut table = PlayTable::default();
        table.pass_deep.completion_threshold = Some(1.0);
        assert!(table.validate(FieldVariant::Flat).is_err());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let table: PlayTable = serde_json::from_str(
            r#"{"pass_deep":{"completion_threshold":0.6,"min_yards":20,"max_yards":50}}"#,
        )
        .unwrap();
        assert_eq!(table.pass_deep.max_yards, 50);
        assert_eq!(table.pass_short, PlayTable::default().pass_short);
    }
}
