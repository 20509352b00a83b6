//! First-class move type and the reasons a move can be rejected.
//!
//! Moves are domain events: they carry the player's intent and can be
//! validated, replayed from a save string, and logged independently of
//! the board they apply to.

use crate::position::{BoxPosition, SectionPosition};
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player claiming one box on the board.
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
pub struct Move {
    position: BoxPosition,
    player: Player,
}

impl Move {
    /// The box this move claims.
    pub fn position(self) -> BoxPosition {
        self.position
    }

    /// The player making the move.
    pub fn player(self) -> Player {
        self.player
    }

    /// The section this move lands in.
    pub fn section(self) -> SectionPosition {
        self.position.section()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a proposed move is illegal.
///
/// The engine's boolean surface (`is_valid_move` / `apply_move_if_valid`)
/// collapses these to a silent rejection; callers that want to surface
/// the reason use [`crate::engine::validate`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// `Unowned` is a marker, not a playable side.
    #[display("Unowned cannot make moves")]
    UnownedPlayer,

    /// The position lies outside the 9x9 board.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(BoxPosition),

    /// The move would break strict turn alternation.
    #[display("It is not {}'s turn", _0)]
    OutOfTurn(Player),

    /// The move is outside the required section, which still has open boxes.
    #[display("Must play in section {}", _0)]
    WrongSection(SectionPosition),

    /// The target box already has an owner.
    #[display("Box {} is already owned", _0)]
    BoxOwned(BoxPosition),
}

impl std::error::Error for MoveError {}
