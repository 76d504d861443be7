//! Move encoding and the fixed-capacity move buffer.
//!
//! A [`Move`] records everything needed to play it forward and take it back:
//! source, target, its noisy/quiet flag, the cell it captures (if any), and
//! the promotion piece (if any). Equality is structural over all fields.
//! The text form is source square + target square, with a lowercase piece
//! letter appended for promotions; the null move and the terminal sentinels
//! print as `0000`.

use crate::board_utils::{sq_name, Square, OFFBOARD};
use crate::piece_types::{Piece, PieceCell};
use std::fmt;

/// Upper bound on pseudo-legal moves in one position, sized for four armies
/// on the 14x14 board.
pub const MAX_MOVES: usize = 512;

/// Whether a move changes material: captures and promotions are noisy,
/// everything else is quiet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Quiet,
    Noisy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,
    /// Contents of the target square before the move.
    pub captured: PieceCell,
    pub promotion: Option<Piece>,
}

/// The no-move value.
pub const NULL_MOVE: Move = Move {
    from: OFFBOARD,
    to: OFFBOARD,
    flag: MoveFlag::Quiet,
    captured: PieceCell::empty(),
    promotion: None,
};

/// Root sentinel: the game is drawn by the fifty-move rule.
pub const MOVE_DRAW_FIFTY_MOVE: Move = Move {
    from: OFFBOARD,
    to: 0,
    flag: MoveFlag::Quiet,
    captured: PieceCell::empty(),
    promotion: None,
};

/// Root sentinel: the side to move is checkmated.
pub const MOVE_CHECKMATE: Move = Move {
    from: OFFBOARD,
    to: 1,
    flag: MoveFlag::Quiet,
    captured: PieceCell::empty(),
    promotion: None,
};

/// Root sentinel: the side to move is stalemated.
pub const MOVE_STALEMATE: Move = Move {
    from: OFFBOARD,
    to: 2,
    flag: MoveFlag::Quiet,
    captured: PieceCell::empty(),
    promotion: None,
};

impl Move {
    pub const fn new(
        from: Square,
        to: Square,
        flag: MoveFlag,
        captured: PieceCell,
        promotion: Option<Piece>,
    ) -> Move {
        Move {
            from,
            to,
            flag,
            captured,
            promotion,
        }
    }

    pub const fn null() -> Move {
        NULL_MOVE
    }

    /// True for the null move and the three terminal sentinels.
    pub const fn is_sentinel(self) -> bool {
        self.from == OFFBOARD
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", sq_name(self.from), sq_name(self.to))?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

/// A per-frame move buffer: a stack-allocated array of capacity
/// [`MAX_MOVES`] that generators append into. Dereferences to the filled
/// slice.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [NULL_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MoveList {
    fn default() -> MoveList {
        MoveList::new()
    }
}

impl std::ops::Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_utils::file_rank_to_sq;
    use crate::piece_types::Color;

    #[test]
    fn move_text_is_source_target_with_promotion_letter() {
        let quiet = Move::new(
            file_rank_to_sq(3, 1),
            file_rank_to_sq(3, 3),
            MoveFlag::Quiet,
            PieceCell::empty(),
            None,
        );
        assert_eq!(quiet.to_string(), "d2d4");

        let promo = Move::new(
            file_rank_to_sq(4, 12),
            file_rank_to_sq(4, 13),
            MoveFlag::Noisy,
            PieceCell::empty(),
            Some(Piece::Queen),
        );
        assert_eq!(promo.to_string(), "e13e14q");
    }

    #[test]
    fn sentinels_are_distinct_and_print_as_null() {
        assert_ne!(MOVE_DRAW_FIFTY_MOVE, MOVE_CHECKMATE);
        assert_ne!(MOVE_CHECKMATE, MOVE_STALEMATE);
        assert_ne!(MOVE_STALEMATE, NULL_MOVE);
        for sentinel in [NULL_MOVE, MOVE_DRAW_FIFTY_MOVE, MOVE_CHECKMATE, MOVE_STALEMATE] {
            assert!(sentinel.is_sentinel());
            assert_eq!(sentinel.to_string(), "0000");
        }
    }

    #[test]
    fn list_exposes_only_the_filled_prefix() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(
            0,
            1,
            MoveFlag::Noisy,
            PieceCell::new(Piece::Pawn, Color::Blue),
            None,
        );
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert_eq!(list.iter().count(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
