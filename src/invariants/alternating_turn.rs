//! Turn-order invariant.

use super::Invariant;
use crate::board::BoardState;
use crate::types::Player;

/// Player `One` moves first and the two move counts never drift apart
/// by more than one.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(state: &BoardState) -> bool {
        let one = state.player_count(Player::One);
        let two = state.player_count(Player::Two);

        one == two || one == two + 1
    }

    fn description() -> &'static str {
        "Move counts satisfy count(One) - count(Two) in {0, 1}"
    }
}
