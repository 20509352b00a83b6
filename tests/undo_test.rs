//! Integration tests for undo.
//!
//! Undo must be the exact inverse of apply for the most recent move:
//! after undoing, the whole board compares equal to its pre-move
//! snapshot.

use ultimate_tictactoe::{
    BoardState, BoxPosition, Line, Move, Player, SectionPosition, engine, undo,
};

#[test]
fn test_undo_with_no_moves_is_a_no_op() {
    let mut board = BoardState::new();
    let snapshot = board.clone();

    undo::undo_last_move(&mut board);
    undo::undo_last_move(&mut board);

    assert_eq!(board, snapshot);
}

#[test]
fn test_undo_restores_pre_move_snapshot() {
    let mut board = BoardState::new();
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(1, 1), Player::One));
    let snapshot = board.clone();

    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(3, 3), Player::Two));
    undo::undo_last_move(&mut board);

    assert_eq!(board, snapshot);
}

#[test]
fn test_undo_first_move_restores_empty_board() {
    let mut board = BoardState::new();
    let snapshot = board.clone();

    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(2, 1), Player::One));
    undo::undo_last_move(&mut board);

    assert_eq!(board, snapshot);
}

#[test]
fn test_undo_move_played_outside_full_section() {
    let mut board = BoardState::new();
    engine::apply_move_unchecked(&mut board, Move::new(BoxPosition::new(1, 1), Player::One));

    let full = SectionPosition::new(1, 1);
    fill_section(&mut board, full);
    board.set_section_to_play_in(full);
    let snapshot = board.clone();

    // Required section is full, so the move escapes to (8, 8)
    engine::apply_move_unchecked(&mut board, Move::new(BoxPosition::new(8, 8), Player::One));
    undo::undo_last_move(&mut board);

    assert_eq!(board, snapshot);
}

#[test]
fn test_undo_section_winning_move_releases_section() {
    let mut board = BoardState::new();
    let section = SectionPosition::new(0, 0);
    win_section(&mut board, section, Player::One);

    assert_eq!(board.section_owner(section), Player::One);

    undo::undo_last_move(&mut board);

    assert_eq!(board.section_owner(section), Player::Unowned);
    assert_eq!(board.section_line(section), None);
}

#[test]
fn test_undo_non_winning_move_keeps_section() {
    let mut board = BoardState::new();
    let section = SectionPosition::new(0, 0);
    win_section(&mut board, section, Player::One);

    // A later move in the already-won section changes nothing when undone
    board.set_section_to_play_in(section);
    engine::apply_move_unchecked(&mut board, Move::new(BoxPosition::new(2, 2), Player::One));

    undo::undo_last_move(&mut board);

    assert_eq!(board.section_owner(section), Player::One);
    assert_eq!(
        board.section_line(section),
        Some(Line::new(BoxPosition::new(0, 0), BoxPosition::new(2, 0))),
    );
}

#[test]
fn test_undo_never_releases_other_players_section() {
    let mut board = BoardState::new();
    let section = SectionPosition::new(0, 0);
    win_section(&mut board, section, Player::One);

    // Two plays into One's section; undoing must leave ownership alone
    engine::apply_move_unchecked(&mut board, Move::new(BoxPosition::new(2, 2), Player::Two));
    undo::undo_last_move(&mut board);

    assert_eq!(board.section_owner(section), Player::One);
}

#[test]
fn test_reapplying_an_undone_move_reproduces_state() {
    let mut board = BoardState::new();
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(1, 1), Player::One));

    let mov = Move::new(BoxPosition::new(4, 4), Player::Two);
    engine::apply_move_if_valid(&mut board, mov);
    let applied = board.clone();

    undo::undo_last_move(&mut board);
    engine::apply_move_if_valid(&mut board, mov);

    assert_eq!(board, applied);
}

#[test]
fn test_undo_walks_a_whole_game_back_to_empty() {
    let mut board = BoardState::new();
    let fresh = board.clone();

    let moves = [
        Move::new(BoxPosition::new(1, 1), Player::One),
        Move::new(BoxPosition::new(4, 4), Player::Two),
        Move::new(BoxPosition::new(3, 3), Player::One),
        Move::new(BoxPosition::new(0, 0), Player::Two),
        Move::new(BoxPosition::new(2, 2), Player::One),
    ];

    let mut snapshots = Vec::new();
    for mov in moves {
        snapshots.push(board.clone());
        assert!(engine::is_valid_move(&board, mov), "rejected {mov}");
        engine::apply_move_if_valid(&mut board, mov);
    }

    for snapshot in snapshots.into_iter().rev() {
        undo::undo_last_move(&mut board);
        assert_eq!(board, snapshot);
    }
    assert_eq!(board, fresh);
}

fn fill_section(board: &mut BoardState, section: SectionPosition) {
    let offset = section.top_left();
    for x in 0..3 {
        for y in 0..3 {
            let position = BoxPosition::new(x, y).increase_by(offset);
            if board.box_owner(position) == Player::Unowned {
                board.set_box_owner(position, Player::One);
            }
        }
    }
}

fn win_section(board: &mut BoardState, section: SectionPosition, player: Player) {
    let mut current = section.top_left();
    for _ in 0..3 {
        board.set_section_to_play_in(section);
        engine::apply_move_unchecked(board, Move::new(current, player));
        current = current.increase_by(BoxPosition::new(1, 0));
    }
}
