//! Main entry point for the Quadra four-player chess engine.
//!
//! Runs the UCI-style protocol handler for communication with front-ends.

use quadra::uci::UCIEngine;

fn main() {
    let mut engine = UCIEngine::new();
    engine.run();
}
