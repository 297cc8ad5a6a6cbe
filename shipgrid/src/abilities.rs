//! Area-of-effect shapes that abilities project onto the board.
use std::fmt;

pub use self::mask::Mask;

mod mask;

/// The shapes an ability can take.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AbilityShape {
    /// Apex at the center, widening one column per side for each row below it.
    Cone,
    /// Full center row and center column.
    Cross,
    /// Every cell within Manhattan distance `MASK_SIZE / 2` of the center.
    Diamond,
}

impl AbilityShape {
    /// All ability shapes.
    pub const ALL: &'static [AbilityShape] =
        &[AbilityShape::Cone, AbilityShape::Cross, AbilityShape::Diamond];

    /// Build a fresh mask for this shape.
    pub fn mask(self) -> Mask {
        match self {
            AbilityShape::Cone => Mask::cone(),
            AbilityShape::Cross => Mask::cross(),
            AbilityShape::Diamond => Mask::diamond(),
        }
    }

    /// Lower-case name of this shape.
    pub fn name(self) -> &'static str {
        match self {
            AbilityShape::Cone => "cone",
            AbilityShape::Cross => "cross",
            AbilityShape::Diamond => "diamond",
        }
    }
}

impl fmt::Display for AbilityShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
