//! Core domain types: players and winning lines.

use crate::position::BoxPosition;
use serde::{Deserialize, Serialize};

/// Owner of a box or section.
///
/// `Unowned` is the absence marker: the default owner of every box and
/// section, and never a legal move target.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// No owner.
    #[default]
    Unowned,
    /// The first player; always moves first.
    One,
    /// The second player.
    Two,
}

impl Player {
    /// The opposing player. `Unowned` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Player::Unowned => Player::Unowned,
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Ordinal used by the save-string encoding.
    pub fn ordinal(self) -> u8 {
        match self {
            Player::Unowned => 0,
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Inverse of [`Player::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Player::Unowned),
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// The three-in-a-row that won a section, in board-global coordinates.
///
/// A section filled to a draw has no line.
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
pub struct Line {
    start: BoxPosition,
    end: BoxPosition,
}

impl Line {
    /// First box of the winning triple.
    pub fn start(self) -> BoxPosition {
        self.start
    }

    /// Last box of the winning triple.
    pub fn end(self) -> BoxPosition {
        self.end
    }
}
