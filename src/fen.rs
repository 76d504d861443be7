//! Position setup from the four-player FEN dialect.
//!
//! A position is three whitespace-separated fields: the board, the side to
//! move, and the halfmove clock. The board lists the 14 ranks from rank 14
//! down to rank 1, joined by `/`. Within a rank, a decimal number is a run
//! of empty squares, `X` is a corner stone, and a piece is a two-character
//! pair: its color (`r`, `b`, `y`, `g`) followed by its kind (`P`, `N`,
//! `B`, `R`, `Q`, `K`). Example side-to-move/clock tail: `r 0`.

use crate::board::Board;
use crate::board_utils::{file_rank_to_sq, is_corner, sq_name, BOARD_SIZE};
use crate::piece_types::{Color, Piece, PieceCell};
use std::fmt;

/// Modern starting position: queens on the g1/h14/a8/n7 cross.
pub const FEN_MODERN: &str = "XXXyRyNyByKyQyByNyRXXX/XXXyPyPyPyPyPyPyPyPXXX/XXX8XXX/\
bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bQbP10gPgK/bKbP10gPgQ/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
XXX8XXX/XXXrPrPrPrPrPrPrPrPXXX/XXXrRrNrBrQrKrBrNrRXXX r 0";

/// Classic starting position: Yellow's and Green's king and queen mirrored
/// relative to the modern setup.
pub const FEN_CLASSIC: &str = "XXXyRyNyByQyKyByNyRXXX/XXXyPyPyPyPyPyPyPyPXXX/XXX8XXX/\
bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bQbP10gPgQ/bKbP10gPgK/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
XXX8XXX/XXXrPrPrPrPrPrPrPrPXXX/XXXrRrNrBrQrKrBrNrRXXX r 0";

/// Why a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    InvalidPiece(char),
    InvalidColor(char),
    /// A rank row was missing, too short, or too long.
    NonRectangular,
    MissingFields,
    InvalidTurn(String),
    InvalidClock(String),
    /// A stone outside the corner zones, or a corner square without one.
    MisplacedStone(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::InvalidPiece(c) => write!(f, "invalid piece letter: {}", c),
            FenError::InvalidColor(c) => write!(f, "invalid color letter: {}", c),
            FenError::NonRectangular => write!(f, "board is not 14 rows of 14 squares"),
            FenError::MissingFields => write!(f, "expected board, side to move, and clock"),
            FenError::InvalidTurn(s) => write!(f, "invalid side to move: {}", s),
            FenError::InvalidClock(s) => write!(f, "invalid halfmove clock: {}", s),
            FenError::MisplacedStone(sq) => write!(f, "stone placement mismatch at {}", sq),
        }
    }
}

impl std::error::Error for FenError {}

fn piece_from_letter(c: char) -> Result<Piece, FenError> {
    match c {
        'P' => Ok(Piece::Pawn),
        'N' => Ok(Piece::Knight),
        'B' => Ok(Piece::Bishop),
        'R' => Ok(Piece::Rook),
        'Q' => Ok(Piece::Queen),
        'K' => Ok(Piece::King),
        _ => Err(FenError::InvalidPiece(c)),
    }
}

fn color_from_letter(c: char) -> Result<Color, FenError> {
    match c {
        'r' => Ok(Color::Red),
        'b' => Ok(Color::Blue),
        'y' => Ok(Color::Yellow),
        'g' => Ok(Color::Green),
        _ => Err(FenError::InvalidColor(c)),
    }
}

/// Builds a [`Board`] from the dialect described in the module docs.
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let mut fields = fen.split_whitespace();
    let rows = fields.next().ok_or(FenError::MissingFields)?;
    let turn_field = fields.next().ok_or(FenError::MissingFields)?;
    let clock_field = fields.next().ok_or(FenError::MissingFields)?;

    let turn = match turn_field {
        "r" => Color::Red,
        "b" => Color::Blue,
        "y" => Color::Yellow,
        "g" => Color::Green,
        other => return Err(FenError::InvalidTurn(other.to_string())),
    };
    let clock: u16 = clock_field
        .parse()
        .map_err(|_| FenError::InvalidClock(clock_field.to_string()))?;

    let rows: Vec<&str> = rows.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(FenError::NonRectangular);
    }

    let mut board = Board::empty(turn);
    board.set_clock(clock);

    for (row_index, row) in rows.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - row_index;
        let mut file = 0usize;
        let mut chars = row.chars().peekable();
        while let Some(c) = chars.next() {
            if file >= BOARD_SIZE {
                return Err(FenError::NonRectangular);
            }
            let sq = file_rank_to_sq(file, rank);
            if let Some(first) = c.to_digit(10) {
                let mut run = first as usize;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    run = run * 10 + d as usize;
                    chars.next();
                }
                for offset in 0..run {
                    if file + offset >= BOARD_SIZE {
                        return Err(FenError::NonRectangular);
                    }
                    let empty_sq = file_rank_to_sq(file + offset, rank);
                    if is_corner(empty_sq) {
                        return Err(FenError::MisplacedStone(sq_name(empty_sq)));
                    }
                }
                file += run;
            } else if c == 'X' {
                if !is_corner(sq) {
                    return Err(FenError::MisplacedStone(sq_name(sq)));
                }
                file += 1;
            } else {
                let color = color_from_letter(c)?;
                let piece_letter = chars.next().ok_or(FenError::NonRectangular)?;
                let piece = piece_from_letter(piece_letter)?;
                if is_corner(sq) {
                    return Err(FenError::MisplacedStone(sq_name(sq)));
                }
                board.set_cell(sq, PieceCell::new(piece, color));
                file += 1;
            }
        }
        if file != BOARD_SIZE {
            return Err(FenError::NonRectangular);
        }
    }

    Ok(board)
}

/// Writes a board back out in the dialect accepted by [`parse_fen`].
pub fn write_fen(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for rank in (0..BOARD_SIZE).rev() {
        let mut row = String::new();
        let mut empties = 0usize;
        for file in 0..BOARD_SIZE {
            let cell = board.cell(file_rank_to_sq(file, rank));
            if cell.is_empty() {
                empties += 1;
                continue;
            }
            if empties > 0 {
                row.push_str(&empties.to_string());
                empties = 0;
            }
            if cell.is_stone() {
                row.push('X');
            } else {
                row.push(cell.color().letter());
                row.push(cell.piece().letter().to_ascii_uppercase());
            }
        }
        if empties > 0 {
            row.push_str(&empties.to_string());
        }
        rows.push(row);
    }
    format!(
        "{} {} {}",
        rows.join("/"),
        board.turn().letter(),
        board.clock()
    )
}
