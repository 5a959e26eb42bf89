//! Search-cost measurements over a fixed set of positions.

use std::time::{Duration, Instant};

use log::trace;
use thiserror::Error;

use crate::board::{Board, Coordinate, NotationParseError, TicTacToe};
use crate::difficulty::{Difficulty, DifficultyModulator};
use crate::minimax_searcher::{SearchContext, SearchError};
use crate::recorder::DecisionRecord;

/// Name and notation of each analysed position, from the opening to a
/// nearly full board.
pub const ANALYSIS_POSITIONS: [(&str, &str); 4] = [
    ("empty board", ".../.../... x"),
    ("opening", "X../.O./... x"),
    ("middle game", "XOX/OX./... o"),
    ("near the end", "XOX/OXO/... x"),
];

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid analysis position: {error}")]
    Notation {
        #[from]
        error: NotationParseError,
    },
    #[error("Search failed: {error}")]
    Search {
        #[from]
        error: SearchError,
    },
}

pub struct DifficultyMeasurement {
    pub position: &'static str,
    pub difficulty: Difficulty,
    pub chosen_move: Coordinate,
    pub nodes_evaluated: usize,
    pub elapsed: Duration,
}

pub struct PruningComparison {
    pub depth: u8,
    pub nodes_without_pruning: usize,
    pub nodes_with_pruning: usize,
}

impl PruningComparison {
    /// Share of the unpruned tree that pruning skipped, in percent.
    pub fn reduction_percent(&self) -> f64 {
        if self.nodes_without_pruning == 0 {
            return 0.0;
        }
        let skipped = self
            .nodes_without_pruning
            .saturating_sub(self.nodes_with_pruning);
        skipped as f64 / self.nodes_without_pruning as f64 * 100.0
    }
}

pub struct DifficultyAnalysis {
    pub measurements: Vec<DifficultyMeasurement>,
    pub records: Vec<DecisionRecord>,
}

/// Lets the AI pick a move on every analysis position at every difficulty.
/// The side to move in each position plays as the AI.
pub fn analyze_difficulties(seed: u64) -> Result<DifficultyAnalysis, AnalysisError> {
    let mut modulator = DifficultyModulator::seeded(true, seed);
    let mut measurements = Vec::with_capacity(ANALYSIS_POSITIONS.len() * Difficulty::ALL.len());

    for &(name, notation) in ANALYSIS_POSITIONS.iter() {
        let board: Board = notation.parse()?;
        let game = TicTacToe::new(board.to_move());

        for difficulty in Difficulty::ALL.iter() {
            let chosen_move = modulator.choose_move(&game, &board, difficulty.profile())?;
            if let Some(record) = modulator.last_record() {
                measurements.push(DifficultyMeasurement {
                    position: name,
                    difficulty: *difficulty,
                    chosen_move,
                    nodes_evaluated: record.nodes_evaluated,
                    elapsed: record.elapsed,
                });
            }
        }
    }

    Ok(DifficultyAnalysis {
        measurements,
        records: modulator.records().to_vec(),
    })
}

/// Searches the empty board at each depth from 1 to `max_depth`, once with
/// and once without alpha-beta pruning.
pub fn compare_pruning(max_depth: u8) -> Result<Vec<PruningComparison>, SearchError> {
    let board = Board::new();
    let game = TicTacToe::new(board.to_move());
    let mut with_pruning = SearchContext::new(true);
    let mut without_pruning = SearchContext::new(false);

    (1..=max_depth)
        .map(|depth| {
            let started = Instant::now();
            without_pruning.decide(&game, &board, depth, true)?;
            with_pruning.decide(&game, &board, depth, true)?;
            trace!("depth {} compared in {:?}", depth, started.elapsed());

            Ok(PruningComparison {
                depth,
                nodes_without_pruning: without_pruning.searched_position_count(),
                nodes_with_pruning: with_pruning.searched_position_count(),
            })
        })
        .collect()
}
