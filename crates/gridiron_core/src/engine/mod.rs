pub mod config;
pub mod drive;
pub mod field;
pub mod play_log;
pub mod resolution;
pub mod rng;

pub use config::{PlayProfile, PlayTable, SafetyHandling, SimConfig};
pub use drive::{DrivePhase, DriveSimulator, DriveTransition, PlayOutcome};
pub use field::{FieldPosition, FieldVariant, HexCoord};
pub use play_log::{PlayLog, WELCOME_MESSAGE};
pub use resolution::resolve_play;
pub use rng::{PlayRng, ScriptedRng, SeededRng};
