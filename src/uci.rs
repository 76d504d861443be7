//! UCI-style command shell.
//!
//! Reads commands line by line from stdin and answers on stdout. The
//! dialect follows UCI where four-player chess allows: `position` accepts
//! the named setups `modern` and `classic` or a `fen` string in the
//! crate's dialect, `go depth N` runs a fixed-depth search, and `perft`
//! exposes the move-path enumerator. Errors in user input surface as
//! `info string` diagnostics; the loop never panics on bad commands.

use crate::board::Board;
use crate::fen::{parse_fen, write_fen, FEN_CLASSIC, FEN_MODERN};
use crate::move_generation::MoveGen;
use crate::move_types::MoveList;
use crate::perft::{perft, perft_split};
use crate::search::{negamax, SearchThread, SCORE_INFINITY};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::time::Instant;

const ENGINE_NAME: &str = "Quadra";
const ENGINE_AUTHOR: &str = "the Quadra developers";
const DEFAULT_DEPTH: i32 = 3;

/// Runtime switches settable over the protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub debug: bool,
}

pub struct UCIEngine {
    board: Board,
    move_gen: MoveGen,
    config: EngineConfig,
}

impl UCIEngine {
    pub fn new() -> UCIEngine {
        UCIEngine {
            board: Board::new(),
            move_gen: MoveGen::new(),
            config: EngineConfig::default(),
        }
    }

    /// Blocks on stdin until `quit` or end of input.
    pub fn run(&mut self) {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if self.handle_command(&line) {
                break;
            }
        }
    }

    /// Dispatches one command line. Returns true when the engine should
    /// exit.
    pub fn handle_command(&mut self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = tokens.first() else {
            return false;
        };

        match command {
            "uci" => {
                println!("id name {}", ENGINE_NAME);
                println!("id author {}", ENGINE_AUTHOR);
                println!("option name debug type check default false");
                println!("uciok");
            }
            "isready" => println!("readyok"),
            "setoption" => self.handle_setoption(&tokens[1..]),
            "ucinewgame" => self.board = Board::new(),
            "position" => self.handle_position(&tokens[1..]),
            "go" => self.handle_go(&tokens[1..]),
            "perft" => self.handle_perft(&tokens[1..]),
            "print" => self.handle_print(&tokens[1..]),
            "stop" => {
                // Search is synchronous; nothing is running to stop.
            }
            "quit" => return true,
            _ => println!("info string unknown command: {}", command),
        }
        false
    }

    fn handle_setoption(&mut self, args: &[&str]) {
        match args {
            ["name", "debug", "value", "on"] => self.config.debug = true,
            ["name", "debug", "value", "off"] => self.config.debug = false,
            _ => println!("info string expected: setoption name debug value on|off"),
        }
    }

    fn handle_position(&mut self, args: &[&str]) {
        let Some(&mode) = args.first() else {
            println!("info string expected: position modern|classic|fen <fen> [moves ...]");
            return;
        };

        let (board, rest) = match mode {
            "modern" => (parse_fen(FEN_MODERN), &args[1..]),
            "classic" => (parse_fen(FEN_CLASSIC), &args[1..]),
            "fen" => {
                // The dialect is three whitespace-separated fields.
                if args.len() < 4 {
                    println!("info string fen requires board, side to move, and clock");
                    return;
                }
                let fen = args[1..4].join(" ");
                (parse_fen(&fen), &args[4..])
            }
            other => {
                println!("info string unknown position mode: {}", other);
                return;
            }
        };

        let board = match board {
            Ok(board) => board,
            Err(err) => {
                println!("info string {}", err);
                return;
            }
        };
        self.board = board;

        if rest.is_empty() {
            return;
        }
        if rest[0] != "moves" {
            println!("info string expected 'moves' keyword");
            return;
        }
        for text in &rest[1..] {
            if !self.apply_move_text(text) {
                println!("info string no such move: {}", text);
                return;
            }
        }
    }

    /// Matches `text` against the generated moves for the current position
    /// and plays it if found.
    fn apply_move_text(&mut self, text: &str) -> bool {
        let mut list = MoveList::new();
        self.move_gen.gen_noisy_moves(&self.board, &mut list);
        self.move_gen.gen_quiet_moves(&self.board, &mut list);
        for &mv in list.iter() {
            if mv.to_string() == text {
                self.board.make_move(mv);
                return true;
            }
        }
        false
    }

    fn handle_go(&mut self, args: &[&str]) {
        let mut depth = DEFAULT_DEPTH;
        for pair in args.windows(2) {
            if pair[0] == "depth" {
                depth = pair[1].parse().unwrap_or(DEFAULT_DEPTH);
                break;
            }
        }

        if self.config.debug {
            println!("info string fen {}", write_fen(&self.board));
        }

        let start = Instant::now();
        let mut thread = SearchThread::new();
        let score = negamax(
            &mut self.board,
            &self.move_gen,
            &mut thread,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            depth,
            0,
        );
        let ms = start.elapsed().as_millis() as u64;
        let nps = if ms > 0 { thread.nodes * 1000 / ms } else { 0 };

        println!(
            "info depth {} score cp {} nodes {} time {} nps {} pv {}",
            depth, score, thread.nodes, ms, nps, thread.best_move
        );
        println!("bestmove {}", thread.best_move);
    }

    fn handle_perft(&mut self, args: &[&str]) {
        let Some(depth) = args.first().and_then(|d| d.parse::<u32>().ok()) else {
            println!("info string expected: perft <depth> [split]");
            return;
        };
        let split = args.contains(&"split");

        let start = Instant::now();
        let total = if split {
            let counts = perft_split(&self.board, &self.move_gen, depth);
            for (mv, nodes) in &counts {
                println!("{}: {}", mv, nodes);
            }
            counts.iter().map(|(_, n)| n).sum()
        } else {
            perft(&mut self.board, &self.move_gen, depth)
        };
        let ms = start.elapsed().as_millis() as u64;
        let nps = if ms > 0 { total * 1000 / ms } else { 0 };
        println!("info depth {} nodes {} time {} nps {}", depth, total, ms, nps);
    }

    fn handle_print(&self, args: &[&str]) {
        if args.contains(&"--fen") || args.contains(&"-f") {
            println!("{}", write_fen(&self.board));
        } else if args.contains(&"--config") || args.contains(&"-c") {
            match serde_json::to_string(&self.config) {
                Ok(json) => println!("{}", json),
                Err(err) => println!("info string {}", err),
            }
        } else {
            print!("{}", self.board);
        }
    }
}

impl Default for UCIEngine {
    fn default() -> UCIEngine {
        UCIEngine::new()
    }
}
