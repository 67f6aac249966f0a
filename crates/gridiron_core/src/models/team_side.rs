//! Team side: which club holds the ball.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Team side
///
/// Possession flips only on a touchdown or a turnover on downs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    /// The other team
    #[inline]
    pub fn opponent(&self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    #[inline]
    pub fn is_home_team(&self) -> bool {
        matches!(self, TeamSide::Home)
    }

    #[inline]
    pub fn is_away_team(&self) -> bool {
        matches!(self, TeamSide::Away)
    }

    /// Capitalized name used in log lines ("Home", "Away")
    pub fn display_name(&self) -> &'static str {
        match self {
            TeamSide::Home => "Home",
            TeamSide::Away => "Away",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
        assert_eq!(TeamSide::Home.opponent().opponent(), TeamSide::Home);
    }

    #[test]
    fn test_default_is_home() {
        assert!(TeamSide::default().is_home_team());
        assert!(TeamSide::Away.is_away_team());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&TeamSide::Away).unwrap(), "\"away\"");
        let side: TeamSide = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(side, TeamSide::Home);
    }
}
