//! The mutable position: board cells plus the reversible state stack.
//!
//! A [`Board`] holds the 196 cells of the 14x14 grid and a non-empty stack
//! of [`GameState`] records. The top of the stack is the current side to
//! move and halfmove clock; each [`Board::make_move`] pushes one record and
//! each [`Board::undo_move`] pops it, restoring the position bit for bit.
//! Turn order rotates Red, Blue, Yellow, Green, skipping any color whose
//! king has left the board.

use crate::board_utils::{is_corner, sq_name, Square, BOARD_SIZE, NUM_SQUARES, OFFBOARD};
use crate::fen::{parse_fen, FEN_MODERN};
use crate::move_types::Move;
use crate::piece_types::{Color, Piece, PieceCell, COLOR_NB};
use std::fmt;

/// One ply of reversible history. The `turn` and `clock` fields are the
/// values in force while this record is on top of the stack; `captured` is
/// the cell the move that pushed the record overwrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub turn: Color,
    pub clock: u16,
    pub captured: PieceCell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [PieceCell; NUM_SQUARES],
    /// King square per color, `OFFBOARD` once captured.
    kings: [Square; COLOR_NB],
    states: Vec<GameState>,
}

impl Board {
    /// The modern four-player starting position, Red to move.
    pub fn new() -> Board {
        parse_fen(FEN_MODERN).expect("built-in starting position parses")
    }

    /// An empty board: stones in the corners, every other square empty,
    /// `turn` to move, clock zero.
    pub fn empty(turn: Color) -> Board {
        let mut cells = [PieceCell::empty(); NUM_SQUARES];
        for (sq, cell) in cells.iter_mut().enumerate() {
            if is_corner(sq) {
                *cell = PieceCell::stone();
            }
        }
        Board {
            cells,
            kings: [OFFBOARD; COLOR_NB],
            states: vec![GameState {
                turn,
                clock: 0,
                captured: PieceCell::empty(),
            }],
        }
    }

    pub fn cell(&self, sq: Square) -> PieceCell {
        self.cells[sq]
    }

    /// Places a cell during position setup. Not for use mid-game; it does
    /// not touch the state stack.
    pub fn set_cell(&mut self, sq: Square, cell: PieceCell) {
        if self.cells[sq].piece() == Piece::King {
            self.kings[self.cells[sq].color() as usize] = OFFBOARD;
        }
        self.cells[sq] = cell;
        if cell.piece() == Piece::King {
            self.kings[cell.color() as usize] = sq;
        }
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.states[self.states.len() - 1].turn
    }

    /// Halfmove clock: plies since the last capture or pawn move.
    pub fn clock(&self) -> u16 {
        self.states[self.states.len() - 1].clock
    }

    /// King square of `color`, or `OFFBOARD` if the king has been captured.
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color as usize]
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.kings[color as usize] != OFFBOARD
    }

    /// Overrides the side to move in place. Setup and evaluation helper;
    /// history is not recorded.
    pub(crate) fn set_turn(&mut self, turn: Color) {
        let top = self.states.len() - 1;
        self.states[top].turn = turn;
    }

    /// Overrides the halfmove clock in place. Setup helper.
    pub(crate) fn set_clock(&mut self, clock: u16) {
        let top = self.states.len() - 1;
        self.states[top].clock = clock;
    }

    /// The color that takes the next turn after `color`: rotation order with
    /// eliminated (kingless) colors skipped. Falls back to `color` itself if
    /// every other army has lost its king.
    fn next_turn(&self, color: Color) -> Color {
        let mut candidate = color.next();
        for _ in 0..COLOR_NB - 1 {
            if self.has_king(candidate) {
                return candidate;
            }
            candidate = candidate.next();
        }
        color
    }

    /// Plays `mv` for the side to move and pushes the matching history
    /// record. The move must come from the generator for this position.
    pub fn make_move(&mut self, mv: Move) {
        let mover = self.turn();
        let moving = self.cells[mv.from];
        let captured = self.cells[mv.to];

        let clock = if captured.is_occupied() || moving.piece() == Piece::Pawn {
            0
        } else {
            self.clock() + 1
        };

        if captured.piece() == Piece::King {
            self.kings[captured.color() as usize] = OFFBOARD;
        }
        self.cells[mv.to] = match mv.promotion {
            Some(piece) => PieceCell::new(piece, mover),
            None => moving,
        };
        self.cells[mv.from] = PieceCell::empty();
        if moving.piece() == Piece::King {
            self.kings[mover as usize] = mv.to;
        }

        self.states.push(GameState {
            turn: self.next_turn(mover),
            clock,
            captured,
        });
    }

    /// Reverses the most recent [`Board::make_move`]. A make/undo pair is
    /// the identity on the whole position, state stack included.
    pub fn undo_move(&mut self, mv: Move) {
        let popped = self.states.pop().expect("undo without a matching make");
        let mover = self.turn();

        let landed = self.cells[mv.to];
        self.cells[mv.from] = match mv.promotion {
            Some(_) => PieceCell::new(Piece::Pawn, mover),
            None => landed,
        };
        self.cells[mv.to] = popped.captured;

        if landed.piece() == Piece::King {
            self.kings[mover as usize] = mv.from;
        }
        if popped.captured.piece() == Piece::King {
            self.kings[popped.captured.color() as usize] = mv.to;
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{:>2} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                write!(f, " {}", self.cells[rank * BOARD_SIZE + file])?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for file in 0..BOARD_SIZE {
            write!(f, "  {}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "turn {}  clock {}  kings {}",
            self.turn().letter(),
            self.clock(),
            [Color::Red, Color::Blue, Color::Yellow, Color::Green]
                .iter()
                .map(|&c| format!("{}:{}", c.letter(), sq_name(self.king_square(c))))
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
