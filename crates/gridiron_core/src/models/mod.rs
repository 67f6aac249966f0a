pub mod events;
pub mod play;
pub mod team_side;

pub use events::{DriveEvent, EventType};
pub use play::{PlayResult, PlayType};
pub use team_side::TeamSide;
