//! Tests for make_move / undo_move and the four-color rotation.

mod common;

use common::{board_from_fen, generate_legal_moves, positions};
use quadra::board::Board;
use quadra::board_utils::file_rank_to_sq;
use quadra::move_generation::MoveGen;
use quadra::piece_types::{Color, Piece};

fn apply(board: &mut Board, move_gen: &MoveGen, text: &str) {
    let mv = generate_legal_moves(board, move_gen)
        .into_iter()
        .find(|m| m.to_string() == text)
        .unwrap_or_else(|| panic!("move {} should be legal", text));
    board.make_move(mv);
}

#[test]
fn every_opening_move_round_trips_exactly() {
    let move_gen = MoveGen::new();
    let mut board = Board::new();
    let original = board.clone();
    for mv in generate_legal_moves(&board, &move_gen) {
        board.make_move(mv);
        board.undo_move(mv);
        assert_eq!(board, original, "round trip failed for {}", mv);
    }
}

#[test]
fn turn_rotates_through_all_four_armies() {
    let move_gen = MoveGen::new();
    let mut board = Board::new();
    assert_eq!(board.turn(), Color::Red);
    apply(&mut board, &move_gen, "d2d3");
    assert_eq!(board.turn(), Color::Blue);
    apply(&mut board, &move_gen, "b4c4");
    assert_eq!(board.turn(), Color::Yellow);
    apply(&mut board, &move_gen, "d13d12");
    assert_eq!(board.turn(), Color::Green);
    apply(&mut board, &move_gen, "m4l4");
    assert_eq!(board.turn(), Color::Red);
}

#[test]
fn rotation_skips_an_eliminated_army() {
    let move_gen = MoveGen::new();
    let mut board = board_from_fen(positions::BLUE_KINGLESS_START);
    assert!(!board.has_king(Color::Blue));
    apply(&mut board, &move_gen, "d2d3");
    assert_eq!(board.turn(), Color::Yellow);
}

#[test]
fn clock_resets_on_pawn_moves_and_captures_only() {
    let move_gen = MoveGen::new();
    let mut board = Board::new();
    // Knight move: reversible, clock ticks up.
    apply(&mut board, &move_gen, "e1f3");
    assert_eq!(board.clock(), 1);
    // Another reversible move keeps counting.
    apply(&mut board, &move_gen, "a5c6");
    assert_eq!(board.clock(), 2);
    // A pawn move resets.
    apply(&mut board, &move_gen, "d13d12");
    assert_eq!(board.clock(), 0);

    // A capture resets too.
    let mut board = board_from_fen(&positions::HANGING_QUEEN.replace(" r 0", " r 7"));
    assert_eq!(board.clock(), 7);
    apply(&mut board, &move_gen, "d4d10");
    assert_eq!(board.clock(), 0);
}

#[test]
fn promotion_is_applied_and_reverted() {
    let move_gen = MoveGen::new();
    let mut board = board_from_fen(
        "XXX3yK4XXX/XXX1rP6XXX/XXX8XXX/14/14/14/13gK/bK13/14/14/14/XXX8XXX/XXX8XXX/XXX4rK3XXX r 0",
    );
    let original = board.clone();
    let e14 = file_rank_to_sq(4, 13);
    let e13 = file_rank_to_sq(4, 12);
    assert_eq!(board.cell(e13).piece(), Piece::Pawn);

    let mv = generate_legal_moves(&board, &move_gen)
        .into_iter()
        .find(|m| m.promotion.is_some())
        .expect("pawn on e13 can promote");
    assert_eq!(mv.to_string(), "e13e14q");

    board.make_move(mv);
    assert_eq!(board.cell(e14).piece(), Piece::Queen);
    assert_eq!(board.cell(e14).color(), Color::Red);
    assert!(board.cell(e13).is_empty());

    board.undo_move(mv);
    assert_eq!(board, original);
}

#[test]
fn a_full_playout_undoes_to_the_starting_position() {
    let move_gen = MoveGen::new();
    let mut board = Board::new();
    let original = board.clone();
    let mut played = Vec::new();
    // Walk sixteen plies picking the middle legal move each time.
    for _ in 0..16 {
        let legal = generate_legal_moves(&board, &move_gen);
        assert!(!legal.is_empty());
        let mv = legal[legal.len() / 2];
        board.make_move(mv);
        played.push(mv);
    }
    for mv in played.into_iter().rev() {
        board.undo_move(mv);
    }
    assert_eq!(board, original);
}
