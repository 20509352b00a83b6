//! Ultimate tic-tac-toe rules engine.
//!
//! The game is played on a 9x9 board divided into nine 3x3 sections.
//! Winning a section claims it; winning three sections in a row wins
//! the game. Each move dictates the section the opponent must play in
//! next, via the move's sub-position within its own section.
//!
//! # Architecture
//!
//! - **Engine**: move validation and application ([`engine`])
//! - **Undo**: exact reversal of the most recent move ([`undo`])
//! - **Rules**: 3x3 win-pattern scans ([`rules`])
//! - **Codec**: the persisted save-string format ([`codec`])
//! - **Store**: the persistence collaborator contract ([`GameStore`])
//! - **Invariants**: first-class, independently testable game
//!   guarantees ([`invariants`])
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{BoardState, BoxPosition, Move, Player, engine};
//!
//! let mut board = BoardState::new();
//! let mov = Move::new(BoxPosition::new(1, 1), Player::One);
//!
//! assert!(engine::is_valid_move(&board, mov));
//! engine::apply_move_if_valid(&mut board, mov);
//!
//! assert_eq!(board.box_owner(BoxPosition::new(1, 1)), Player::One);
//! assert_eq!(engine::next_player(&board), Player::Two);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod codec;
pub mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod store;
mod types;
pub mod undo;

pub use action::{Move, MoveError};
pub use board::BoardState;
pub use codec::DecodeError;
pub use position::{BOXES_PER_SIDE, BoxPosition, SECTIONS_PER_SIDE, SectionPosition};
pub use store::{GameStore, MemoryStore};
pub use types::{Line, Player};
