//! Quadra: a four-player chess engine for the 14x14 board.
//!
//! Four armies (Red, Blue, Yellow, Green) share one board whose corner
//! dead-zones are filled with immovable stones. The crate provides the
//! position model with reversible make/undo, a pseudo-legal move generator
//! with a royal-safety oracle, a material-plus-mobility evaluator, and a
//! negamax alpha-beta search with quiescence at the leaves. A UCI-style
//! command shell in [`uci`] wires it all to stdin/stdout.

pub mod board;
pub mod board_utils;
pub mod eval;
pub mod fen;
pub mod move_generation;
pub mod move_types;
pub mod perft;
pub mod piece_types;
pub mod search;
pub mod uci;
