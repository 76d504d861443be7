//! Square indexing and geometry helpers for the 14x14 board.
//!
//! Squares are `usize` indices `rank * 14 + file` with files a..n mapping to
//! 0..13 and ranks 1..14 mapping to 0..13. [`OFFBOARD`] is a sentinel one
//! past the last square; coordinate shifts that leave the grid return it, so
//! sliding walks detect the rim without separate bounds tests.

use crate::piece_types::Color;

/// Index of a square on the 14x14 grid, or [`OFFBOARD`].
pub type Square = usize;

/// Board side length.
pub const BOARD_SIZE: usize = 14;

/// Number of squares on the grid.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Sentinel for "not a square".
pub const OFFBOARD: Square = NUM_SQUARES;

/// File index (0 = a .. 13 = n) of an on-board square.
pub fn sq_to_file(sq: Square) -> usize {
    sq % BOARD_SIZE
}

/// Rank index (0 = rank 1 .. 13 = rank 14) of an on-board square.
pub fn sq_to_rank(sq: Square) -> usize {
    sq / BOARD_SIZE
}

/// Square index from file and rank indices.
pub fn file_rank_to_sq(file: usize, rank: usize) -> Square {
    rank * BOARD_SIZE + file
}

/// Moves `sq` by a (file, rank) delta, returning [`OFFBOARD`] past the rim.
pub fn sq_shift(sq: Square, d_file: i32, d_rank: i32) -> Square {
    let file = sq_to_file(sq) as i32 + d_file;
    let rank = sq_to_rank(sq) as i32 + d_rank;
    if file < 0 || file >= BOARD_SIZE as i32 || rank < 0 || rank >= BOARD_SIZE as i32 {
        OFFBOARD
    } else {
        file_rank_to_sq(file as usize, rank as usize)
    }
}

/// True for squares inside one of the four 3x3 corner dead-zones.
pub fn is_corner(sq: Square) -> bool {
    let file = sq_to_file(sq);
    let rank = sq_to_rank(sq);
    (file < 3 || file > 10) && (rank < 3 || rank > 10)
}

/// Algebraic name of a square, e.g. `a1` or `n14`.
pub fn sq_name(sq: Square) -> String {
    if sq >= NUM_SQUARES {
        return "--".to_string();
    }
    format!(
        "{}{}",
        (b'a' + sq_to_file(sq) as u8) as char,
        sq_to_rank(sq) + 1
    )
}

/// The line a color's pawns start on, as a (coordinate-is-file, index) pair
/// resolved by [`on_home_line`].
fn home_line(color: Color) -> (bool, usize) {
    match color {
        Color::Red => (false, 1),
        Color::Blue => (true, 1),
        Color::Yellow => (false, 12),
        Color::Green => (true, 12),
        Color::None => (false, usize::MAX),
    }
}

/// True if a pawn of `color` on `sq` may still take its double step.
pub fn on_home_line(color: Color, sq: Square) -> bool {
    let (is_file, index) = home_line(color);
    if is_file {
        sq_to_file(sq) == index
    } else {
        sq_to_rank(sq) == index
    }
}

/// True if `sq` lies on the far edge where `color`'s pawns promote.
pub fn on_promotion_edge(color: Color, sq: Square) -> bool {
    match color {
        Color::Red => sq_to_rank(sq) == 13,
        Color::Blue => sq_to_file(sq) == 13,
        Color::Yellow => sq_to_rank(sq) == 0,
        Color::Green => sq_to_file(sq) == 0,
        Color::None => false,
    }
}
