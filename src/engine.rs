//! Move validation and application.
//!
//! The legality rules, in the order they are checked:
//!
//! 1. the player is a real side (not `Unowned`),
//! 2. the position is on the 9x9 board,
//! 3. the move keeps strict turn alternation (`One` first),
//! 4. the move lands in the required section, unless that section is
//!    already full, in which case any section is legal,
//! 5. the target box is unowned.

use crate::action::{Move, MoveError};
use crate::board::BoardState;
use crate::position::{BoxPosition, SECTIONS_PER_SIDE, SectionPosition};
use crate::rules;
use crate::types::Player;
use tracing::instrument;

/// Checks every legality rule for a proposed move, reporting the first
/// rule that fails.
#[instrument(skip(board))]
pub fn validate(board: &BoardState, mov: Move) -> Result<(), MoveError> {
    if mov.player() == Player::Unowned {
        return Err(MoveError::UnownedPlayer);
    }
    if !board.is_inside_bounds(mov.position()) {
        return Err(MoveError::OutOfBounds(mov.position()));
    }
    if !is_in_order(board, mov) {
        return Err(MoveError::OutOfTurn(mov.player()));
    }
    if !is_in_correct_section(board, mov) {
        return Err(MoveError::WrongSection(board.section_to_play_in()));
    }
    if board.box_owner(mov.position()) != Player::Unowned {
        return Err(MoveError::BoxOwned(mov.position()));
    }
    Ok(())
}

/// True when the move passes every legality rule.
pub fn is_valid_move(board: &BoardState, mov: Move) -> bool {
    validate(board, mov).is_ok()
}

/// Applies the move if it is legal; an illegal move leaves the board
/// untouched. Rejection is silent here, the caller is responsible for
/// only offering legal moves and surfacing refusals.
#[instrument(skip(board))]
pub fn apply_move_if_valid(board: &mut BoardState, mov: Move) {
    if is_valid_move(board, mov) {
        apply_move_unchecked(board, mov);
    }
}

/// Applies a move without validation.
///
/// The save-string decoder replays persisted games through this path:
/// moves loaded from storage are treated as pre-validated and must
/// apply even where they would fail validation against the replayed
/// cursor. Test fixtures staging mid-game positions use it too.
pub fn apply_move_unchecked(board: &mut BoardState, mov: Move) {
    board.record_move(mov);
    board.set_section_to_play_in(next_section(mov.position()));
    update_section_owner(board, mov);
}

/// The section the opponent must play in after a move at `position`:
/// the move's sub-position within its own section, read as a section
/// coordinate.
pub fn next_section(position: BoxPosition) -> SectionPosition {
    let local = position.decrease_by(position.section().top_left());
    SectionPosition::new(local.x(), local.y())
}

/// Winner of the whole game, scanning the 3x3 grid of section owners.
pub fn winner(board: &BoardState) -> Player {
    rules::grid_winner(board.section_owners())
}

/// The player whose turn it is; `One` whenever the counts are level.
pub fn next_player(board: &BoardState) -> Player {
    if board.player_count(Player::One) == board.player_count(Player::Two) {
        Player::One
    } else {
        Player::Two
    }
}

/// True when all 81 boxes are owned.
pub fn board_is_full(board: &BoardState) -> bool {
    BoardState::sections().all(|section| section_is_full(board, section))
}

fn is_in_order(board: &BoardState, mov: Move) -> bool {
    let mut one = board.player_count(Player::One);
    let mut two = board.player_count(Player::Two);

    match mov.player() {
        Player::One => one += 1,
        _ => two += 1,
    }

    one == two || one == two + 1
}

fn is_in_correct_section(board: &BoardState, mov: Move) -> bool {
    let required = board.section_to_play_in();
    mov.section() == required || section_is_full(board, required)
}

fn section_is_full(board: &BoardState, section: SectionPosition) -> bool {
    let offset = section.top_left();
    for x in 0..SECTIONS_PER_SIDE {
        for y in 0..SECTIONS_PER_SIDE {
            let position = BoxPosition::new(x, y).increase_by(offset);
            if board.box_owner(position) == Player::Unowned {
                return false;
            }
        }
    }
    true
}

fn update_section_owner(board: &mut BoardState, mov: Move) {
    let section = mov.section();

    // A section can never be taken from its current owner.
    if board.section_owner(section) != Player::Unowned {
        return;
    }

    let winner = rules::section_winner(board, section);
    if winner != Player::Unowned {
        let line = rules::section_winning_line(board, section);
        board.set_section_owner(section, line, winner);
    }
}
