use log::info;
use thiserror::Error;

use crate::board::{Board, BoardError, Coordinate, GameEnding, Player, TicTacToe};
use crate::difficulty::{Difficulty, DifficultyModulator};
use crate::minimax_searcher::{SearchError, SearchStats};
use crate::recorder::DecisionRecord;

/// Session configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub human_player: Player,
    pub alpha_beta_enabled: bool,
    /// Seed for the AI's random moves; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_player: Player::X,
            alpha_beta_enabled: true,
            seed: None,
            starting_position: Board::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {error}")]
    InvalidMove { error: BoardError },
    #[error("It is not your turn")]
    NotYourTurn,
    #[error("The game is already over")]
    GameOver,
    #[error("Search error: {error}")]
    Search { error: SearchError },
}

/// A human-versus-AI game session: the current board, the active difficulty,
/// and the decision log of every AI move made since the last reset.
pub struct Engine {
    board: Board,
    starting_position: Board,
    human_player: Player,
    difficulty: Difficulty,
    game: TicTacToe,
    modulator: DifficultyModulator,
    last_move: Option<Coordinate>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let modulator = match config.seed {
            Some(seed) => DifficultyModulator::seeded(config.alpha_beta_enabled, seed),
            None => DifficultyModulator::new(config.alpha_beta_enabled),
        };

        Self {
            board: config.starting_position,
            starting_position: config.starting_position,
            human_player: config.human_player,
            difficulty: config.difficulty,
            game: TicTacToe::new(config.human_player.opponent()),
            modulator,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_player(&self) -> Player {
        self.human_player
    }

    pub fn ai_player(&self) -> Player {
        self.game.maximizer()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("difficulty set to {}", difficulty);
        self.difficulty = difficulty;
    }

    pub fn set_alpha_beta(&mut self, enabled: bool) {
        info!("alpha-beta pruning {}", if enabled { "enabled" } else { "disabled" });
        self.modulator.set_alpha_beta(enabled);
    }

    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.board.game_ending()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.board.to_move() == self.ai_player()
    }

    pub fn make_human_move(&mut self, coordinate: Coordinate) -> Result<(), EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(EngineError::NotYourTurn);
        }

        self.board = self
            .board
            .place(coordinate)
            .map_err(|error| EngineError::InvalidMove { error })?;
        self.last_move = Some(coordinate);
        Ok(())
    }

    pub fn make_ai_move(&mut self) -> Result<Coordinate, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(EngineError::NotYourTurn);
        }

        let coordinate = self
            .modulator
            .choose_move(&self.game, &self.board, self.difficulty.profile())
            .map_err(|error| EngineError::Search { error })?;
        self.board = self
            .board
            .place(coordinate)
            .map_err(|error| EngineError::InvalidMove { error })?;
        self.last_move = Some(coordinate);

        if let Some(record) = self.modulator.last_record() {
            info!(
                "AI played {} ({} nodes, depth {}, {:?})",
                coordinate, record.nodes_evaluated, record.depth_used, record.elapsed
            );
        }
        Ok(coordinate)
    }

    pub fn search_stats(&self) -> SearchStats {
        self.modulator.search_stats()
    }

    pub fn records(&self) -> &[DecisionRecord] {
        self.modulator.records()
    }

    pub fn last_record(&self) -> Option<&DecisionRecord> {
        self.modulator.last_record()
    }

    /// Starts a new game and keeps the decision log.
    pub fn new_game(&mut self) {
        self.board = self.starting_position;
        self.last_move = None;
    }

    /// Starts a new game and clears the decision log.
    pub fn reset(&mut self) {
        self.new_game();
        self.modulator.clear_records();
    }
}
