/// Shared test utilities for the Quadra test suite
use quadra::board::Board;
use quadra::fen::{parse_fen, FEN_MODERN};
use quadra::move_generation::MoveGen;
use quadra::move_types::{Move, MoveList};

/// Initialize a board from FEN, panicking on malformed test data.
pub fn board_from_fen(fen: &str) -> Board {
    parse_fen(fen).expect("test position parses")
}

/// All pseudo-legal moves for the side to move, in generator order.
pub fn generate_pseudo_legal(board: &Board, move_gen: &MoveGen) -> Vec<Move> {
    let mut list = MoveList::new();
    move_gen.gen_noisy_moves(board, &mut list);
    move_gen.gen_quiet_moves(board, &mut list);
    list.to_vec()
}

/// All legal moves: pseudo-legal filtered by making each move and checking
/// that the mover's king survives.
pub fn generate_legal_moves(board: &Board, move_gen: &MoveGen) -> Vec<Move> {
    let mover = board.turn();
    let mut scratch = board.clone();
    generate_pseudo_legal(board, move_gen)
        .into_iter()
        .filter(|&mv| {
            scratch.make_move(mv);
            let safe = move_gen.is_royal_safe(&scratch, mover);
            scratch.undo_move(mv);
            safe
        })
        .collect()
}

/// The modern start with the halfmove clock already at the fifty-move
/// threshold.
pub fn fifty_move_start() -> Board {
    board_from_fen(&FEN_MODERN.replace(" r 0", " r 100"))
}

/// Test positions with known properties. Kings are placed for all four
/// armies unless a position deliberately eliminates one.
pub mod positions {
    /// Red to move and checkmated: the king on h1 is pinned down by the
    /// Yellow rooks on d1 and d2.
    pub const CHECKMATED_RED: &str = "XXX3yK4XXX/XXX8XXX/XXX8XXX/14/14/14/13gK/bK13/\
14/14/14/XXX8XXX/XXXyR7XXX/XXXyR3rK3XXX r 0";

    /// Red to move and stalemated: the lone king on d1 is hemmed in by
    /// Yellow pawns marching south, none of which gives check.
    pub const STALEMATED_RED: &str = "XXX3yK4XXX/XXX8XXX/XXX8XXX/14/14/14/13gK/bK13/\
14/14/14/XXX1yPyP5XXX/XXX2yP5XXX/XXXrK7XXX r 0";

    /// Red to move with the rook on d4 staring up the open d-file at an
    /// undefended Blue queen on d10.
    pub const HANGING_QUEEN: &str = "XXX3yK4XXX/XXX8XXX/XXX8XXX/14/3bQ10/14/13gK/bK13/\
14/14/3rR10/XXX8XXX/XXX8XXX/XXX4rK3XXX r 0";

    /// The modern start with Blue's king removed: Blue is eliminated, so
    /// the turn passes from Red straight to Yellow.
    pub const BLUE_KINGLESS_START: &str =
        "XXXyRyNyByKyQyByNyRXXX/XXXyPyPyPyPyPyPyPyPXXX/XXX8XXX/\
bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bQbP10gPgK/1bP10gPgQ/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
XXX8XXX/XXXrPrPrPrPrPrPrPrPXXX/XXXrRrNrBrQrKrBrNrRXXX r 0";
}
