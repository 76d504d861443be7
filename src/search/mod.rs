//! The search engine: negamax with alpha-beta pruning and a quiescence
//! extension at the leaves.

pub mod alpha_beta;
pub mod quiescence;

pub use alpha_beta::negamax;
pub use quiescence::quiesce;

use crate::move_types::Move;

/// Window bound; no reachable score exceeds it.
pub const SCORE_INFINITY: i32 = 100_000;

/// Returned at a node whose side to move has been mated. Just below
/// infinity.
pub const SCORE_CHECKMATE: i32 = 99_999;

/// Stalemate and fifty-move result.
pub const SCORE_DRAW: i32 = 0;

/// Hard bound on search depth in plies.
pub const MAX_PLAY: i32 = 256;

/// Accumulated output of one search: the root score and move, the node
/// count, and an optional principal variation.
#[derive(Clone, Debug)]
pub struct SearchThread {
    pub score: i32,
    pub best_move: Move,
    pub nodes: u64,
    pub pv: Vec<Move>,
}

impl SearchThread {
    pub fn new() -> SearchThread {
        SearchThread {
            score: 0,
            best_move: Move::null(),
            nodes: 0,
            pv: Vec::new(),
        }
    }
}

impl Default for SearchThread {
    fn default() -> SearchThread {
        SearchThread::new()
    }
}
