//! Integration tests for the persistence collaborator.

use ultimate_tictactoe::{
    BoardState, BoxPosition, GameStore, MemoryStore, Move, Player, SectionPosition, engine,
};

#[test]
fn test_fresh_store_has_no_saved_game() {
    let store = MemoryStore::new();

    assert!(!store.saved_game_exists().unwrap());
    assert_eq!(store.load_board().unwrap(), BoardState::new());
}

#[test]
fn test_saved_board_round_trips() {
    let mut board = BoardState::new();
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(1, 1), Player::One));
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(4, 4), Player::Two));

    let mut store = MemoryStore::new();
    store.save_board(&board);

    assert!(store.saved_game_exists().unwrap());
    assert_eq!(store.load_board().unwrap(), board);
}

#[test]
fn test_saving_an_empty_board_counts_as_no_game() {
    let mut store = MemoryStore::new();
    store.save_board(&BoardState::new());

    assert!(!store.saved_game_exists().unwrap());
}

#[test]
fn test_selected_section_falls_back_to_board_cursor() {
    let mut board = BoardState::new();
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(2, 1), Player::One));

    let mut store = MemoryStore::new();
    assert_eq!(
        store.load_selected_section(&board).unwrap(),
        board.section_to_play_in(),
    );

    store.save_selected_section(SectionPosition::new(0, 2));
    assert_eq!(
        store.load_selected_section(&board).unwrap(),
        SectionPosition::new(0, 2),
    );
}

#[test]
fn test_reset_clears_everything() {
    let mut board = BoardState::new();
    engine::apply_move_if_valid(&mut board, Move::new(BoxPosition::new(1, 1), Player::One));

    let mut store = MemoryStore::new();
    store.save_board(&board);
    store.save_selected_section(SectionPosition::new(2, 2));

    store.reset();

    assert!(!store.saved_game_exists().unwrap());
    assert_eq!(
        store.load_selected_section(&board).unwrap(),
        board.section_to_play_in(),
    );
}
