//! Pseudo-legal move generation and the royal-safety oracle.
//!
//! [`MoveGen`] produces moves in two classes: noisy (captures and
//! promotions) and quiet (everything else). Generation is pseudo-legal; it
//! never targets the rim, a stone, or a friendly piece, but it does not
//! check whether the mover's own king is left attacked. The search makes
//! each move, consults [`MoveGen::is_royal_safe`], and undoes it if the
//! king is exposed.
//!
//! Attack queries run in reverse: from the queried square, jump tables are
//! probed for knights and kings, rays are walked for sliders, and the two
//! backward diagonals of each army's pawn direction are inspected.

use crate::board::Board;
use crate::board_utils::{on_home_line, on_promotion_edge, sq_shift, Square, NUM_SQUARES, OFFBOARD};
use crate::move_types::{Move, MoveFlag, MoveList};
use crate::piece_types::{Color, Piece, PieceCell};

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Move generator with per-square jump tables precomputed once at startup.
pub struct MoveGen {
    knight_moves: Vec<Vec<Square>>,
    king_moves: Vec<Vec<Square>>,
}

impl MoveGen {
    pub fn new() -> MoveGen {
        let mut knight_moves = Vec::with_capacity(NUM_SQUARES);
        let mut king_moves = Vec::with_capacity(NUM_SQUARES);
        for sq in 0..NUM_SQUARES {
            knight_moves.push(jump_targets(sq, &KNIGHT_JUMPS));
            king_moves.push(jump_targets(sq, &KING_STEPS));
        }
        MoveGen {
            knight_moves,
            king_moves,
        }
    }

    /// Writes all pseudo-legal captures and promotions for the side to move
    /// into `list` and returns how many were written.
    pub fn gen_noisy_moves(&self, board: &Board, list: &mut MoveList) -> usize {
        let before = list.len();
        let turn = board.turn();
        for from in 0..NUM_SQUARES {
            let cell = board.cell(from);
            if cell.color() != turn {
                continue;
            }
            match cell.piece() {
                Piece::Pawn => self.pawn_noisy(board, turn, from, list),
                Piece::Knight => {
                    for &to in &self.knight_moves[from] {
                        if is_enemy(board.cell(to), turn) {
                            list.push(capture(board, from, to));
                        }
                    }
                }
                Piece::King => {
                    for &to in &self.king_moves[from] {
                        if is_enemy(board.cell(to), turn) {
                            list.push(capture(board, from, to));
                        }
                    }
                }
                Piece::Bishop => self.slider_noisy(board, turn, from, &BISHOP_DIRS, list),
                Piece::Rook => self.slider_noisy(board, turn, from, &ROOK_DIRS, list),
                Piece::Queen => {
                    self.slider_noisy(board, turn, from, &BISHOP_DIRS, list);
                    self.slider_noisy(board, turn, from, &ROOK_DIRS, list);
                }
                Piece::Empty | Piece::Stone => {}
            }
        }
        list.len() - before
    }

    /// Writes all pseudo-legal non-capture, non-promotion moves for the side
    /// to move into `list` and returns how many were written.
    pub fn gen_quiet_moves(&self, board: &Board, list: &mut MoveList) -> usize {
        let before = list.len();
        let turn = board.turn();
        for from in 0..NUM_SQUARES {
            let cell = board.cell(from);
            if cell.color() != turn {
                continue;
            }
            match cell.piece() {
                Piece::Pawn => self.pawn_quiet(board, turn, from, list),
                Piece::Knight => {
                    for &to in &self.knight_moves[from] {
                        if board.cell(to).is_empty() {
                            list.push(quiet(from, to));
                        }
                    }
                }
                Piece::King => {
                    for &to in &self.king_moves[from] {
                        if board.cell(to).is_empty() {
                            list.push(quiet(from, to));
                        }
                    }
                }
                Piece::Bishop => self.slider_quiet(board, from, &BISHOP_DIRS, list),
                Piece::Rook => self.slider_quiet(board, from, &ROOK_DIRS, list),
                Piece::Queen => {
                    self.slider_quiet(board, from, &BISHOP_DIRS, list);
                    self.slider_quiet(board, from, &ROOK_DIRS, list);
                }
                Piece::Empty | Piece::Stone => {}
            }
        }
        list.len() - before
    }

    fn pawn_noisy(&self, board: &Board, turn: Color, from: Square, list: &mut MoveList) {
        let (df, dr) = turn.pawn_direction();
        // Diagonal captures: the two forward diagonals, promoting on the
        // far edge.
        for (lf, lr) in [(dr, df), (-dr, -df)] {
            let to = sq_shift(from, df + lf, dr + lr);
            if to == OFFBOARD {
                continue;
            }
            let target = board.cell(to);
            if is_enemy(target, turn) {
                let promotion = promotion_on(turn, to);
                list.push(Move::new(from, to, MoveFlag::Noisy, target, promotion));
            }
        }
        // A push onto the far edge is a promotion, which is noisy.
        let to = sq_shift(from, df, dr);
        if to != OFFBOARD && board.cell(to).is_empty() && on_promotion_edge(turn, to) {
            list.push(Move::new(
                from,
                to,
                MoveFlag::Noisy,
                PieceCell::empty(),
                Some(Piece::Queen),
            ));
        }
    }

    fn pawn_quiet(&self, board: &Board, turn: Color, from: Square, list: &mut MoveList) {
        let (df, dr) = turn.pawn_direction();
        let single = sq_shift(from, df, dr);
        if single == OFFBOARD || !board.cell(single).is_empty() {
            return;
        }
        if !on_promotion_edge(turn, single) {
            list.push(quiet(from, single));
        }
        if on_home_line(turn, from) {
            let double = sq_shift(from, 2 * df, 2 * dr);
            if double != OFFBOARD && board.cell(double).is_empty() {
                list.push(quiet(from, double));
            }
        }
    }

    fn slider_noisy(
        &self,
        board: &Board,
        turn: Color,
        from: Square,
        dirs: &[(i32, i32); 4],
        list: &mut MoveList,
    ) {
        for &(df, dr) in dirs {
            let mut to = sq_shift(from, df, dr);
            while to != OFFBOARD {
                let target = board.cell(to);
                if target.is_empty() {
                    to = sq_shift(to, df, dr);
                    continue;
                }
                if is_enemy(target, turn) {
                    list.push(capture(board, from, to));
                }
                break;
            }
        }
    }

    fn slider_quiet(
        &self,
        board: &Board,
        from: Square,
        dirs: &[(i32, i32); 4],
        list: &mut MoveList,
    ) {
        for &(df, dr) in dirs {
            let mut to = sq_shift(from, df, dr);
            while to != OFFBOARD && board.cell(to).is_empty() {
                list.push(quiet(from, to));
                to = sq_shift(to, df, dr);
            }
        }
    }

    /// True iff any piece of `by` pseudo-legally attacks `sq`.
    pub fn is_square_attacked(&self, board: &Board, sq: Square, by: Color) -> bool {
        for &from in &self.knight_moves[sq] {
            let cell = board.cell(from);
            if cell.piece() == Piece::Knight && cell.color() == by {
                return true;
            }
        }
        for &from in &self.king_moves[sq] {
            let cell = board.cell(from);
            if cell.piece() == Piece::King && cell.color() == by {
                return true;
            }
        }
        for &(df, dr) in &ROOK_DIRS {
            if let Some(cell) = first_along(board, sq, df, dr) {
                if cell.color() == by
                    && (cell.piece() == Piece::Rook || cell.piece() == Piece::Queen)
                {
                    return true;
                }
            }
        }
        for &(df, dr) in &BISHOP_DIRS {
            if let Some(cell) = first_along(board, sq, df, dr) {
                if cell.color() == by
                    && (cell.piece() == Piece::Bishop || cell.piece() == Piece::Queen)
                {
                    return true;
                }
            }
        }
        // A pawn of `by` attacks sq from one step backward along its
        // advance, one step to either side.
        let (df, dr) = by.pawn_direction();
        for (lf, lr) in [(dr, df), (-dr, -df)] {
            let from = sq_shift(sq, -(df + lf), -(dr + lr));
            if from != OFFBOARD {
                let cell = board.cell(from);
                if cell.piece() == Piece::Pawn && cell.color() == by {
                    return true;
                }
            }
        }
        false
    }

    /// True iff `color`'s king is not attacked by any other army. A color
    /// whose king has been captured has no royal left to protect and is
    /// reported safe.
    pub fn is_royal_safe(&self, board: &Board, color: Color) -> bool {
        let king = board.king_square(color);
        if king == OFFBOARD {
            return true;
        }
        let mut attacker = color.next();
        while attacker != color {
            if self.is_square_attacked(board, king, attacker) {
                return false;
            }
            attacker = attacker.next();
        }
        true
    }
}

impl Default for MoveGen {
    fn default() -> MoveGen {
        MoveGen::new()
    }
}

fn jump_targets(sq: Square, offsets: &[(i32, i32); 8]) -> Vec<Square> {
    offsets
        .iter()
        .map(|&(df, dr)| sq_shift(sq, df, dr))
        .filter(|&to| to != OFFBOARD)
        .collect()
}

/// First non-empty cell walking from `sq` along a direction, if any.
fn first_along(board: &Board, sq: Square, df: i32, dr: i32) -> Option<PieceCell> {
    let mut to = sq_shift(sq, df, dr);
    while to != OFFBOARD {
        let cell = board.cell(to);
        if !cell.is_empty() {
            return Some(cell);
        }
        to = sq_shift(to, df, dr);
    }
    None
}

fn is_enemy(cell: PieceCell, turn: Color) -> bool {
    cell.is_occupied() && cell.color() != turn
}

fn promotion_on(turn: Color, to: Square) -> Option<Piece> {
    if on_promotion_edge(turn, to) {
        Some(Piece::Queen)
    } else {
        None
    }
}

fn capture(board: &Board, from: Square, to: Square) -> Move {
    Move::new(from, to, MoveFlag::Noisy, board.cell(to), None)
}

fn quiet(from: Square, to: Square) -> Move {
    Move::new(from, to, MoveFlag::Quiet, PieceCell::empty(), None)
}
