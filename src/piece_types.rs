//! Piece kinds, colors, and the packed board cell.
//!
//! A cell on the 14x14 board is a single byte packing a [`Piece`] and a
//! [`Color`]. The four corner dead-zones hold [`Piece::Stone`] cells, which
//! never move and are never captured; unoccupied playable squares hold
//! [`Piece::Empty`]. Both carry [`Color::None`].

use std::fmt;

/// The kind of piece occupying a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
    Empty = 6,
    Stone = 7,
}

/// One of the four armies, or `None` for Empty/Stone cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
    None = 4,
}

/// Number of playing colors.
pub const COLOR_NB: usize = 4;

impl Piece {
    /// Centipawn material value used by the evaluator and move ordering.
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 300,
            Piece::Bishop => 300,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King | Piece::Empty | Piece::Stone => 0,
        }
    }

    /// Lowercase letter used in move text for promotions.
    pub const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
            Piece::Empty => '.',
            Piece::Stone => '#',
        }
    }

    const fn from_bits(bits: u8) -> Piece {
        match bits {
            0 => Piece::Pawn,
            1 => Piece::Knight,
            2 => Piece::Bishop,
            3 => Piece::Rook,
            4 => Piece::Queen,
            5 => Piece::King,
            6 => Piece::Empty,
            _ => Piece::Stone,
        }
    }
}

impl Color {
    /// The next army in turn order: Red, Blue, Yellow, Green, Red, ...
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Green,
            Color::Green => Color::Red,
            Color::None => Color::None,
        }
    }

    /// Forward direction of this army's pawns as a (file, rank) delta.
    pub const fn pawn_direction(self) -> (i32, i32) {
        match self {
            Color::Red => (0, 1),
            Color::Blue => (1, 0),
            Color::Yellow => (0, -1),
            Color::Green => (-1, 0),
            Color::None => (0, 0),
        }
    }

    /// Lowercase letter used in the FEN dialect.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::None => '-',
        }
    }

    const fn from_bits(bits: u8) -> Color {
        match bits {
            0 => Color::Red,
            1 => Color::Blue,
            2 => Color::Yellow,
            3 => Color::Green,
            _ => Color::None,
        }
    }
}

/// A packed (piece, color) pair: piece in the high three bits, color in the
/// low three. The two projections are total for every byte the board can
/// contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceCell(u8);

impl PieceCell {
    pub const fn new(piece: Piece, color: Color) -> PieceCell {
        PieceCell(((piece as u8) << 3) | color as u8)
    }

    /// An unoccupied playable square.
    pub const fn empty() -> PieceCell {
        PieceCell::new(Piece::Empty, Color::None)
    }

    /// An immovable corner blocker.
    pub const fn stone() -> PieceCell {
        PieceCell::new(Piece::Stone, Color::None)
    }

    pub const fn piece(self) -> Piece {
        Piece::from_bits(self.0 >> 3)
    }

    pub const fn color(self) -> Color {
        Color::from_bits(self.0 & 0b111)
    }

    /// True for actual men: anything that is not Empty or Stone.
    pub const fn is_occupied(self) -> bool {
        (self.0 >> 3) < Piece::Empty as u8
    }

    pub const fn is_empty(self) -> bool {
        (self.0 >> 3) == Piece::Empty as u8
    }

    pub const fn is_stone(self) -> bool {
        (self.0 >> 3) == Piece::Stone as u8
    }
}

impl fmt::Display for PieceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece() {
            Piece::Empty => write!(f, " ."),
            Piece::Stone => write!(f, " #"),
            p => write!(
                f,
                "{}{}",
                self.color().letter(),
                p.letter().to_ascii_uppercase()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_projections_round_trip() {
        for (piece, color) in [
            (Piece::Pawn, Color::Red),
            (Piece::Knight, Color::Blue),
            (Piece::Queen, Color::Yellow),
            (Piece::King, Color::Green),
        ] {
            let cell = PieceCell::new(piece, color);
            assert_eq!(cell.piece(), piece);
            assert_eq!(cell.color(), color);
            assert!(cell.is_occupied());
        }
        assert_eq!(PieceCell::empty().piece(), Piece::Empty);
        assert_eq!(PieceCell::empty().color(), Color::None);
        assert_eq!(PieceCell::stone().piece(), Piece::Stone);
        assert!(!PieceCell::stone().is_occupied());
    }

    #[test]
    fn turn_order_cycles_through_four_colors() {
        assert_eq!(Color::Red.next(), Color::Blue);
        assert_eq!(Color::Blue.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Red);
    }
}
