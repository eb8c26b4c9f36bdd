use strum::VariantArray;

use crate::cell::Slant;
use crate::location::Location;

/// Relative position of one governed cell around a clue corner.
///
/// Declaration order is the canonical order in which a corner's cells are visited; the derived
/// `VARIANTS` array iterates it.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Quadrant {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Quadrant {
    /// The cell this quadrant names, relative to the corner at `corner`.
    ///
    /// The result may lie outside any grid; callers decide via a bounds-checked lookup.
    pub(crate) fn of(&self, corner: Location) -> Location {
        match self {
            Self::UpLeft => corner.offset_by((-1, -1)),
            Self::UpRight => corner.offset_by((0, -1)),
            Self::DownLeft => corner.offset_by((-1, 0)),
            Self::DownRight => corner.offset_by((0, 0)),
        }
    }

    /// The orientation under which this quadrant's cell points at the corner, counting one
    /// toward its clue.
    pub(crate) fn connecting(&self) -> Slant {
        match self {
            Self::UpLeft | Self::DownRight => Slant::Backward,
            Self::UpRight | Self::DownLeft => Slant::Forward,
        }
    }

    /// The orientation under which this quadrant's cell points away from the corner.
    pub(crate) fn disconnecting(&self) -> Slant {
        match self {
            Self::UpLeft | Self::DownRight => Slant::Forward,
            Self::UpRight | Self::DownLeft => Slant::Backward,
        }
    }
}
