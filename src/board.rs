//! The board aggregate: box owners, section owners, winning lines,
//! move history, and the required-section cursor.

use crate::action::Move;
use crate::position::{BOXES_PER_SIDE, BoxPosition, SECTIONS_PER_SIDE, SectionPosition};
use crate::types::{Line, Player};
use serde::{Deserialize, Serialize};

/// Full state of one ultimate tic-tac-toe game.
///
/// A `BoardState` is owned exclusively by one game session and mutated
/// through [`crate::engine`] and [`crate::undo`], which take it by
/// `&mut`. The history vector doubles as the undo log and the
/// serialization source: pushed on apply, popped on undo, iterated
/// oldest-first when encoding.
///
/// Per-player move counts are derived from the history on demand rather
/// than tracked incrementally, so there is a single source of truth.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct BoardState {
    /// Owner of every box, indexed `[x][y]`.
    box_owners: [[Player; 9]; 9],
    /// Owner of every section, indexed `[x][y]`. Set at most once going
    /// forward; only undo may clear an entry back to `Unowned`.
    section_owners: [[Player; 3]; 3],
    /// The line that won each section, where one exists.
    section_lines: [[Option<Line>; 3]; 3],
    /// The section the next move must land in, unless that section is
    /// already full.
    #[getter(skip)]
    section_to_play_in: SectionPosition,
    /// Every applied move, oldest first.
    history: Vec<Move>,
}

impl BoardState {
    /// Creates an empty board. The opening move is required in section
    /// (0, 0).
    pub fn new() -> Self {
        Self::with_starting_section(SectionPosition::new(0, 0))
    }

    /// Creates an empty board whose opening move is required in the
    /// given section.
    pub fn with_starting_section(section: SectionPosition) -> Self {
        Self {
            box_owners: [[Player::Unowned; 9]; 9],
            section_owners: [[Player::Unowned; 3]; 3],
            section_lines: [[None; 3]; 3],
            section_to_play_in: section,
            history: Vec::new(),
        }
    }

    /// Owner of the box at `position`.
    pub fn box_owner(&self, position: BoxPosition) -> Player {
        self.box_owners[position.x() as usize][position.y() as usize]
    }

    /// Sets the owner of a single box.
    ///
    /// The engine and undo are the normal mutators; this is exposed for
    /// collaborators (and test fixtures) that stage board positions
    /// directly.
    pub fn set_box_owner(&mut self, position: BoxPosition, owner: Player) {
        self.box_owners[position.x() as usize][position.y() as usize] = owner;
    }

    /// Owner of the given section.
    pub fn section_owner(&self, section: SectionPosition) -> Player {
        self.section_owners[section.x() as usize][section.y() as usize]
    }

    /// Sets a section's owner together with the line that won it.
    pub fn set_section_owner(
        &mut self,
        section: SectionPosition,
        line: Option<Line>,
        owner: Player,
    ) {
        self.section_owners[section.x() as usize][section.y() as usize] = owner;
        self.section_lines[section.x() as usize][section.y() as usize] = line;
    }

    /// The line that won the given section, if it was won rather than
    /// drawn.
    pub fn section_line(&self, section: SectionPosition) -> Option<Line> {
        self.section_lines[section.x() as usize][section.y() as usize]
    }

    /// The section the next move must land in.
    pub fn section_to_play_in(&self) -> SectionPosition {
        self.section_to_play_in
    }

    /// Moves the required-section cursor.
    pub fn set_section_to_play_in(&mut self, section: SectionPosition) {
        self.section_to_play_in = section;
    }

    /// True when `position` lies on the 9x9 board.
    pub fn is_inside_bounds(&self, position: BoxPosition) -> bool {
        position.x() < BOXES_PER_SIDE && position.y() < BOXES_PER_SIDE
    }

    /// Number of moves the given player has made, derived from history.
    pub fn player_count(&self, player: Player) -> usize {
        self.history.iter().filter(|m| m.player() == player).count()
    }

    /// Iterates every section position in row-major order.
    pub fn sections() -> impl Iterator<Item = SectionPosition> {
        (0..SECTIONS_PER_SIDE).flat_map(|y| {
            (0..SECTIONS_PER_SIDE).map(move |x| SectionPosition::new(x, y))
        })
    }

    /// Records an applied move: claims the box and pushes onto history.
    pub(crate) fn record_move(&mut self, mov: Move) {
        self.set_box_owner(mov.position(), mov.player());
        self.history.push(mov);
    }

    /// Pops the most recent move off the history stack.
    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        self.history.pop()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
