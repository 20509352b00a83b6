//! Compact save-string codec for games and the section cursor.
//!
//! Each move encodes to three ASCII digits (x, y, player ordinal),
//! appended oldest-first with no delimiters; the section cursor
//! encodes to two digits. These strings are the long-term persisted
//! save format and must stay stable.

use crate::action::Move;
use crate::board::BoardState;
use crate::engine;
use crate::position::{BOXES_PER_SIDE, BoxPosition, SECTIONS_PER_SIDE, SectionPosition};
use crate::types::Player;
use tracing::instrument;

/// Width of one encoded move.
const MOVE_WIDTH: usize = 3;

/// Error decoding a persisted save string.
///
/// Decoding fails loudly on genuinely unparseable fragments; silently
/// building a corrupt board would be worse than stopping. A trailing
/// fragment shorter than one full move is not an error (see
/// [`board_from_string`]).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DecodeError {
    /// A fragment was not three ASCII digits.
    #[display("Unparseable fragment {:?}", _0)]
    NotNumeric(String),

    /// A fragment carried a player ordinal with no matching player.
    #[display("No player with ordinal {}", _0)]
    UnknownPlayer(u8),

    /// A fragment carried a coordinate off the grid it addresses.
    #[display("Coordinate ({}, {}) is out of range", _0, _1)]
    OutOfRange(u8, u8),
}

impl std::error::Error for DecodeError {}

/// Encodes the full move history, oldest move first.
pub fn board_to_string(board: &BoardState) -> String {
    board.history().iter().map(|mov| move_to_string(*mov)).collect()
}

/// Rebuilds a board by replaying a save string.
///
/// Moves are applied unconditionally: persisted data is treated as
/// pre-validated, and re-validating against the replayed cursor could
/// reject a legitimately saved game. A trailing fragment shorter than
/// one full move is ignored so a partially written string still loads.
/// The empty string yields an empty board.
#[instrument]
pub fn board_from_string(saved: &str) -> Result<BoardState, DecodeError> {
    let mut board = BoardState::new();
    for chunk in saved.as_bytes().chunks_exact(MOVE_WIDTH) {
        let mov = parse_move(chunk)?;
        engine::apply_move_unchecked(&mut board, mov);
    }
    Ok(board)
}

/// Encodes the section cursor as two digits.
pub fn section_to_string(section: SectionPosition) -> String {
    format!("{}{}", section.x(), section.y())
}

/// Decodes a two-digit section cursor.
pub fn section_from_string(saved: &str) -> Result<SectionPosition, DecodeError> {
    let value = parse_digits(saved.as_bytes())?;

    let x = (value / 10) as u8;
    let y = (value % 10) as u8;
    if x >= SECTIONS_PER_SIDE || y >= SECTIONS_PER_SIDE {
        return Err(DecodeError::OutOfRange(x, y));
    }

    Ok(SectionPosition::new(x, y))
}

fn move_to_string(mov: Move) -> String {
    format!(
        "{}{}{}",
        mov.position().x(),
        mov.position().y(),
        mov.player().ordinal(),
    )
}

fn parse_move(chunk: &[u8]) -> Result<Move, DecodeError> {
    let value = parse_digits(chunk)?;

    let ordinal = (value % 10) as u8;
    let player = Player::from_ordinal(ordinal).ok_or(DecodeError::UnknownPlayer(ordinal))?;
    let x = (value / 100) as u8;
    let y = (value / 10 % 10) as u8;
    if x >= BOXES_PER_SIDE || y >= BOXES_PER_SIDE {
        return Err(DecodeError::OutOfRange(x, y));
    }

    Ok(Move::new(BoxPosition::new(x, y), player))
}

fn parse_digits(fragment: &[u8]) -> Result<u32, DecodeError> {
    if fragment.is_empty() || !fragment.iter().all(u8::is_ascii_digit) {
        return Err(DecodeError::NotNumeric(
            String::from_utf8_lossy(fragment).into_owned(),
        ));
    }

    Ok(fragment
        .iter()
        .fold(0u32, |value, digit| value * 10 + u32::from(digit - b'0')))
}
