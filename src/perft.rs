//! Perft: legal-move tree enumeration for validating the generator and
//! make/undo together.

use crate::board::Board;
use crate::move_generation::MoveGen;
use crate::move_types::{Move, MoveList};
use rayon::prelude::*;

/// Number of legal leaf nodes `depth` plies below this position.
pub fn perft(board: &mut Board, move_gen: &MoveGen, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut list = MoveList::new();
    move_gen.gen_noisy_moves(board, &mut list);
    move_gen.gen_quiet_moves(board, &mut list);

    let mover = board.turn();
    let mut nodes = 0;
    for i in 0..list.len() {
        let mv = list[i];
        board.make_move(mv);
        if move_gen.is_royal_safe(board, mover) {
            nodes += perft(board, move_gen, depth - 1);
        }
        board.undo_move(mv);
    }
    nodes
}

/// Per-root-move leaf counts, one entry per legal root move in generator
/// order. Root moves are counted in parallel, each on its own scratch
/// board.
pub fn perft_split(board: &Board, move_gen: &MoveGen, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut list = MoveList::new();
    move_gen.gen_noisy_moves(board, &mut list);
    move_gen.gen_quiet_moves(board, &mut list);
    let moves: Vec<Move> = list.to_vec();

    let mover = board.turn();
    moves
        .par_iter()
        .filter_map(|&mv| {
            let mut scratch = board.clone();
            scratch.make_move(mv);
            if !move_gen.is_royal_safe(&scratch, mover) {
                return None;
            }
            Some((mv, perft(&mut scratch, move_gen, depth - 1)))
        })
        .collect()
}
