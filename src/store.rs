//! Persistence collaborator for saved games.
//!
//! The engine only commits to the save-string contract in
//! [`crate::codec`]; everything else about storage lives behind the
//! [`GameStore`] trait. [`MemoryStore`] is the reference key-value
//! implementation, used by tests and as the model for real backends.

use crate::board::BoardState;
use crate::codec::{self, DecodeError};
use crate::position::SectionPosition;
use std::collections::HashMap;

const BOARD_KEY: &str = "board";
const SECTION_KEY: &str = "selected_section";

/// Storage contract for a single saved game.
pub trait GameStore {
    /// True when the persisted board differs from a fresh empty board.
    fn saved_game_exists(&self) -> Result<bool, DecodeError> {
        Ok(self.load_board()? != BoardState::new())
    }

    /// Rebuilds the persisted board. An absent save yields an empty
    /// board.
    fn load_board(&self) -> Result<BoardState, DecodeError>;

    /// The persisted section cursor, falling back to the board's own
    /// cursor when none was saved.
    fn load_selected_section(&self, board: &BoardState) -> Result<SectionPosition, DecodeError>;

    /// Persists the section cursor.
    fn save_selected_section(&mut self, section: SectionPosition);

    /// Persists the board's move history.
    fn save_board(&mut self, board: &BoardState);

    /// Clears all persisted state.
    fn reset(&mut self);
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load_board(&self) -> Result<BoardState, DecodeError> {
        match self.entries.get(BOARD_KEY) {
            Some(saved) => codec::board_from_string(saved),
            None => Ok(BoardState::new()),
        }
    }

    fn load_selected_section(&self, board: &BoardState) -> Result<SectionPosition, DecodeError> {
        match self.entries.get(SECTION_KEY) {
            Some(saved) => codec::section_from_string(saved),
            None => Ok(board.section_to_play_in()),
        }
    }

    fn save_selected_section(&mut self, section: SectionPosition) {
        self.entries
            .insert(SECTION_KEY.to_string(), codec::section_to_string(section));
    }

    fn save_board(&mut self, board: &BoardState) {
        self.entries
            .insert(BOARD_KEY.to_string(), codec::board_to_string(board));
    }

    fn reset(&mut self) {
        self.entries.remove(BOARD_KEY);
        self.entries.remove(SECTION_KEY);
    }
}
