//! History/grid consistency invariant.

use super::Invariant;
use crate::board::BoardState;
use crate::position::{BOXES_PER_SIDE, BoxPosition};
use crate::types::Player;

/// The move history exactly explains the grid: every recorded move is
/// reflected in its box's owner, and the number of owned boxes equals
/// the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardState> for HistoryConsistentInvariant {
    fn holds(state: &BoardState) -> bool {
        for mov in state.history() {
            if state.box_owner(mov.position()) != mov.player() {
                return false;
            }
        }

        owned_boxes(state) == state.history().len()
    }

    fn description() -> &'static str {
        "Move history matches the grid of box owners"
    }
}

fn owned_boxes(state: &BoardState) -> usize {
    let mut count = 0;
    for x in 0..BOXES_PER_SIDE {
        for y in 0..BOXES_PER_SIDE {
            if state.box_owner(BoxPosition::new(x, y)) != Player::Unowned {
                count += 1;
            }
        }
    }
    count
}
