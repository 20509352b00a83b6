//! Win detection over 3x3 owner grids.

mod win;

pub use win::{grid_winner, has_line_for, section_winner, section_winning_line};
