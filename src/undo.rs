//! Reversal of the most recent move.
//!
//! Undo is the exact inverse of apply for the latest move: the box
//! reverts to `Unowned`, section ownership is cleared only when the
//! undone move was what held it, and the required-section cursor is
//! recomputed from the move now on top of the history stack.

use crate::action::Move;
use crate::board::BoardState;
use crate::engine;
use crate::rules;
use crate::types::Player;
use tracing::instrument;

/// Undoes the most recent move. Safe no-op when no moves have been
/// made.
#[instrument(skip(board))]
pub fn undo_last_move(board: &mut BoardState) {
    let Some(top) = board.pop_move() else {
        return;
    };

    board.set_box_owner(top.position(), Player::Unowned);

    if move_lost_ownership(board, top) {
        board.set_section_owner(top.section(), None, Player::Unowned);
    }

    restore_section_to_play_in(board, top);
}

/// True when the undone move was holding its section: the section is
/// owned by the move's player and, with the box reverted, no completed
/// line remains. A section owned by the other player is never touched.
fn move_lost_ownership(board: &BoardState, top: Move) -> bool {
    if board.section_owner(top.section()) != top.player() {
        return false;
    }

    rules::section_winner(board, top.section()) == Player::Unowned
}

fn restore_section_to_play_in(board: &mut BoardState, top: Move) {
    let restored = match board.history().last() {
        // The previous move dictates the cursor, same rule as apply.
        Some(previous) => engine::next_section(previous.position()),
        // First move undone: it could only have been legal in the
        // section it landed in.
        None => top.section(),
    };

    board.set_section_to_play_in(restored);
}
