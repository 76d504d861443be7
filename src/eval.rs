//! Static evaluation: material plus light mobility.
//!
//! The score is always from the side-to-move's perspective: own material
//! minus the combined material of the three other armies, plus a small
//! mobility term comparing pseudo-legal move counts the same way. In a
//! four-army game every side is outnumbered three to one, so the raw value
//! is deeply negative for everyone; the search only ever compares scores
//! between siblings, where the common offset cancels.

use crate::board::Board;
use crate::board_utils::NUM_SQUARES;
use crate::move_generation::MoveGen;
use crate::move_types::MoveList;
use crate::piece_types::{Color, COLOR_NB};

/// Weight of the mobility term. Kept tiny so material dominates.
pub const MOBILITY_WEIGHT: i32 = 1;

const COLORS: [Color; COLOR_NB] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

/// Pseudo-legal move count for `who`, computed on a scratch copy so the
/// caller's position is untouched.
fn count_moves_for(board: &Board, move_gen: &MoveGen, who: Color) -> i32 {
    let mut scratch = board.clone();
    scratch.set_turn(who);
    let mut list = MoveList::new();
    let mut count = move_gen.gen_noisy_moves(&scratch, &mut list);
    count += move_gen.gen_quiet_moves(&scratch, &mut list);
    count as i32
}

/// Static score of the position from the side-to-move's perspective.
pub fn evaluate(board: &Board, move_gen: &MoveGen) -> i32 {
    let mut material = [0i32; COLOR_NB];
    for sq in 0..NUM_SQUARES {
        let cell = board.cell(sq);
        if cell.is_occupied() {
            material[cell.color() as usize] += cell.piece().value();
        }
    }

    let stm = board.turn();
    let total: i32 = material.iter().sum();
    let own = material[stm as usize];
    let others = total - own;

    let own_moves = count_moves_for(board, move_gen, stm);
    let mut other_moves = 0;
    for color in COLORS {
        if color != stm {
            other_moves += count_moves_for(board, move_gen, color);
        }
    }

    (own - others) + MOBILITY_WEIGHT * (own_moves - other_moves)
}
