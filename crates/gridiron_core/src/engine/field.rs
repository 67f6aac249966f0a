//! Ball spot on the field for both field variants.
//!
//! Positions are always measured in the offense's direction of travel:
//! the offense's own goal line is the low end, the opponent's the high end.
//!
//! - Flat: single yard line, `0..=100`, no end zones.
//! - Hex: axial coordinates `(q, r)`. `r` runs `0..=120` with a 10-unit end
//!   zone at each end; `q` is a lateral offset in `-8..=8` used for display only.

use serde::{Deserialize, Serialize};

/// Which field representation a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldVariant {
    #[default]
    Flat,
    Hex,
}

impl FieldVariant {
    /// Total length used for the turnover mirror
    pub const fn field_length(&self) -> i32 {
        match self {
            FieldVariant::Flat => FLAT_FIELD_LENGTH,
            FieldVariant::Hex => HexCoord::R_MAX,
        }
    }
}

pub const FLAT_FIELD_LENGTH: i32 = 100;

/// Yard line a new drive starts from (the offense's own 20)
pub const DRIVE_START_YARD_LINE: i32 = 20;

/// Axial hex coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const Q_MIN: i32 = -8;
    pub const Q_MAX: i32 = 8;
    pub const R_MAX: i32 = 120;
    pub const END_ZONE_DEPTH: i32 = 10;
    /// First row past the opponent's goal line
    pub const OPPONENT_GOAL_R: i32 = Self::R_MAX - Self::END_ZONE_DEPTH;

    /// Clamps both axes into the playable grid
    pub fn new(q: i32, r: i32) -> Self {
        Self { q: q.clamp(Self::Q_MIN, Self::Q_MAX), r: r.clamp(0, Self::R_MAX) }
    }

    /// Row for a yard line measured from the offense's goal line
    pub const fn row_for_yard_line(yard_line: i32) -> i32 {
        yard_line + Self::END_ZONE_DEPTH
    }
}

/// Where the ball is spotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum FieldPosition {
    Flat { yard_line: i32 },
    Hex(HexCoord),
}

impl FieldPosition {
    /// Drive start spot: the offense's own 20-yard line, centered
    pub fn own_twenty(variant: FieldVariant) -> Self {
        match variant {
            FieldVariant::Flat => FieldPosition::Flat { yard_line: DRIVE_START_YARD_LINE },
            FieldVariant::Hex => {
                FieldPosition::Hex(HexCoord::new(0, HexCoord::row_for_yard_line(DRIVE_START_YARD_LINE)))
            }
        }
    }

    pub fn variant(&self) -> FieldVariant {
        match self {
            FieldPosition::Flat { .. } => FieldVariant::Flat,
            FieldPosition::Hex(_) => FieldVariant::Hex,
        }
    }

    /// Moves the ball `yards` toward the opponent's goal line.
    ///
    /// The flat field stops at 0 since it has no end zone behind the offense.
    pub fn advance(&self, yards: i32) -> Self {
        match *self {
            FieldPosition::Flat { yard_line } => {
                FieldPosition::Flat { yard_line: (yard_line + yards).clamp(0, FLAT_FIELD_LENGTH) }
            }
            FieldPosition::Hex(coord) => FieldPosition::Hex(HexCoord::new(coord.q, coord.r + yards)),
        }
    }

    /// Ball reached or crossed the opponent's goal line
    pub fn is_touchdown(&self) -> bool {
        match *self {
            FieldPosition::Flat { yard_line } => yard_line >= FLAT_FIELD_LENGTH,
            FieldPosition::Hex(coord) => coord.r >= HexCoord::OPPONENT_GOAL_R,
        }
    }

    /// Ball is inside the offense's own end zone (hex only)
    pub fn is_safety(&self) -> bool {
        match *self {
            FieldPosition::Flat { .. } => false,
            FieldPosition::Hex(coord) => coord.r < HexCoord::END_ZONE_DEPTH,
        }
    }

    /// Same physical spot seen from the other team's direction of travel
    pub fn mirrored(&self) -> Self {
        let length = self.variant().field_length();
        match *self {
            FieldPosition::Flat { yard_line } => FieldPosition::Flat { yard_line: length - yard_line },
            FieldPosition::Hex(coord) => FieldPosition::Hex(HexCoord::new(-coord.q, length - coord.r)),
        }
    }

    /// Yards from the offense's own goal line, as shown in logs
    pub fn yard_line(&self) -> i32 {
        match *self {
            FieldPosition::Flat { yard_line } => yard_line,
            FieldPosition::Hex(coord) => coord.r - HexCoord::END_ZONE_DEPTH,
        }
    }

    pub fn in_bounds(&self) -> bool {
        match *self {
            FieldPosition::Flat { yard_line } => (0..=FLAT_FIELD_LENGTH).contains(&yard_line),
            FieldPosition::Hex(coord) => {
                (0..=HexCoord::R_MAX).contains(&coord.r)
                    && (HexCoord::Q_MIN..=HexCoord::Q_MAX).contains(&coord.q)
            }
        }
    }
}
