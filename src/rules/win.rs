//! Scans for three-in-a-row patterns.
//!
//! The same eight lines are checked for a section's box grid and for
//! the whole-board grid of section owners. The scan order is fixed
//! (rows top-to-bottom, columns left-to-right, then the two diagonals)
//! so the first matching line is deterministic.

use crate::board::BoardState;
use crate::position::{BoxPosition, SectionPosition};
use crate::types::{Line, Player};

/// The eight tic-tac-toe lines in local (x, y) coordinates, in scan
/// order.
const LINES: [[(u8, u8); 3]; 8] = [
    // Rows, top to bottom
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns, left to right
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// The player holding a completed line within the given section, or
/// `Unowned` if no line is complete.
pub fn section_winner(board: &BoardState, section: SectionPosition) -> Player {
    match find_line(board, section) {
        Some((player, _)) => player,
        None => Player::Unowned,
    }
}

/// The first completed line within the given section, in board-global
/// coordinates, or `None` if no line is complete.
pub fn section_winning_line(board: &BoardState, section: SectionPosition) -> Option<Line> {
    find_line(board, section).map(|(_, line)| line)
}

/// True when the given player holds any completed line within the
/// section, regardless of which line the scan would report first.
pub fn has_line_for(board: &BoardState, section: SectionPosition, player: Player) -> bool {
    if player == Player::Unowned {
        return false;
    }
    let offset = section.top_left();
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(x, y)| board.box_owner(BoxPosition::new(x, y).increase_by(offset)) == player)
    })
}

/// The winner of an arbitrary 3x3 owner grid indexed `[x][y]`, used
/// for the whole-board section-owner scan.
pub fn grid_winner(owners: &[[Player; 3]; 3]) -> Player {
    for line in &LINES {
        let [(ax, ay), (bx, by), (cx, cy)] = *line;
        let owner = owners[ax as usize][ay as usize];
        if owner != Player::Unowned
            && owner == owners[bx as usize][by as usize]
            && owner == owners[cx as usize][cy as usize]
        {
            return owner;
        }
    }
    Player::Unowned
}

fn find_line(board: &BoardState, section: SectionPosition) -> Option<(Player, Line)> {
    let offset = section.top_left();
    for line in &LINES {
        let [(ax, ay), (bx, by), (cx, cy)] = *line;
        let start = BoxPosition::new(ax, ay).increase_by(offset);
        let middle = BoxPosition::new(bx, by).increase_by(offset);
        let end = BoxPosition::new(cx, cy).increase_by(offset);

        let owner = board.box_owner(start);
        if owner != Player::Unowned
            && owner == board.box_owner(middle)
            && owner == board.box_owner(end)
        {
            return Some((owner, Line::new(start, end)));
        }
    }
    None
}
