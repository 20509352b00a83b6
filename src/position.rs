//! Board and section coordinates.

use serde::{Deserialize, Serialize};

/// Number of boxes along one side of the board.
pub const BOXES_PER_SIDE: u8 = 9;

/// Number of sections along one side of the board.
pub const SECTIONS_PER_SIDE: u8 = 3;

/// A box on the 9x9 board, addressed by (x, y) in [0, 9).
///
/// Pure value type. Positions are not range-checked here; bounds
/// checking is the engine's job, and coordinate arithmetic is only
/// performed on in-range positions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct BoxPosition {
    x: u8,
    y: u8,
}

impl BoxPosition {
    /// The x coordinate (column).
    pub fn x(self) -> u8 {
        self.x
    }

    /// The y coordinate (row).
    pub fn y(self) -> u8 {
        self.y
    }

    /// The section containing this box.
    pub fn section(self) -> SectionPosition {
        SectionPosition::new(self.x / SECTIONS_PER_SIDE, self.y / SECTIONS_PER_SIDE)
    }

    /// Component-wise translation towards the bottom-right.
    ///
    /// Used to map a section-local position into board-global
    /// coordinates by adding the section's top-left offset.
    pub fn increase_by(self, other: BoxPosition) -> BoxPosition {
        BoxPosition::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise translation towards the top-left.
    ///
    /// Inverse of [`BoxPosition::increase_by`]; maps a board-global
    /// position into section-local coordinates.
    pub fn decrease_by(self, other: BoxPosition) -> BoxPosition {
        BoxPosition::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for BoxPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the nine 3x3 sections, addressed by (x, y) in [0, 3).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct SectionPosition {
    x: u8,
    y: u8,
}

impl SectionPosition {
    /// The x coordinate (column).
    pub fn x(self) -> u8 {
        self.x
    }

    /// The y coordinate (row).
    pub fn y(self) -> u8 {
        self.y
    }

    /// The board-global position of this section's top-left box.
    pub fn top_left(self) -> BoxPosition {
        BoxPosition::new(self.x * SECTIONS_PER_SIDE, self.y * SECTIONS_PER_SIDE)
    }
}

impl std::fmt::Display for SectionPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_containing_box() {
        assert_eq!(BoxPosition::new(0, 0).section(), SectionPosition::new(0, 0));
        assert_eq!(BoxPosition::new(2, 2).section(), SectionPosition::new(0, 0));
        assert_eq!(BoxPosition::new(3, 2).section(), SectionPosition::new(1, 0));
        assert_eq!(BoxPosition::new(8, 8).section(), SectionPosition::new(2, 2));
    }

    #[test]
    fn test_section_top_left() {
        assert_eq!(SectionPosition::new(0, 0).top_left(), BoxPosition::new(0, 0));
        assert_eq!(SectionPosition::new(1, 2).top_left(), BoxPosition::new(3, 6));
        assert_eq!(SectionPosition::new(2, 2).top_left(), BoxPosition::new(6, 6));
    }

    #[test]
    fn test_translation_round_trip() {
        let global = BoxPosition::new(7, 4);
        let offset = global.section().top_left();
        let local = global.decrease_by(offset);

        assert_eq!(local, BoxPosition::new(1, 1));
        assert_eq!(local.increase_by(offset), global);
    }
}
