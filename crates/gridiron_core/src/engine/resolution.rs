//! Play resolution: play call + randomness -> yards.
//!
//! Two independent samples per snap. The first decides completion and is
//! always drawn, even for runs. The second sets the yardage and is drawn only
//! when the play did not fail. Field position plays no part.

use super::config::PlayTable;
use super::rng::{uniform_int, PlayRng};
use crate::models::{PlayResult, PlayType};

pub fn resolve_play<R: PlayRng + ?Sized>(play: PlayType, table: &PlayTable, rng: &mut R) -> PlayResult {
    let profile = table.get(play);
    let roll = rng.next_unit();

    if let Some(threshold) = profile.completion_threshold {
        if roll <= threshold {
            return PlayResult::incomplete();
        }
    }

    let yards = uniform_int(rng, profile.min_yards, profile.max_yards);
    PlayResult { yards, completed: true }
}
