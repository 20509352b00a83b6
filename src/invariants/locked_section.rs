//! Section-ownership invariant.

use super::Invariant;
use crate::board::BoardState;
use crate::rules;
use crate::types::Player;

/// Every owned section still contains a completed line for its owner,
/// and every owned section has its winning line recorded.
///
/// The scan-order winner of the section's grid may differ from the
/// owner once the opponent later completes an earlier-scanned line in
/// the same section; ownership is lock-once, so it is enough that some
/// line belongs to the owner.
pub struct LockedSectionInvariant;

impl Invariant<BoardState> for LockedSectionInvariant {
    fn holds(state: &BoardState) -> bool {
        BoardState::sections().all(|section| {
            let owner = state.section_owner(section);
            if owner == Player::Unowned {
                return true;
            }

            rules::has_line_for(state, section, owner) && state.section_line(section).is_some()
        })
    }

    fn description() -> &'static str {
        "Owned sections hold a completed line for their owner"
    }
}
