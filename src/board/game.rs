use smallvec::SmallVec;

use super::board::{Board, Coordinate};
use super::error::BoardError;
use super::player::Player;
use crate::minimax_searcher::{Game, Score};

pub const WIN_SCORE: Score = 1;
pub const LOSS_SCORE: Score = -1;
pub const DRAW_SCORE: Score = 0;

pub type MoveList = SmallVec<[Coordinate; 9]>;

/// Tic-tac-toe rules, scored from `maximizer`'s point of view.
#[derive(Clone, Copy, Debug)]
pub struct TicTacToe {
    maximizer: Player,
}

impl TicTacToe {
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }
}

impl Game for TicTacToe {
    type State = Board;
    type Move = Coordinate;
    type MoveList = MoveList;
    type Error = BoardError;

    fn is_terminal(&self, board: &Board) -> bool {
        board.game_ending().is_some()
    }

    fn evaluate(&self, board: &Board) -> Score {
        match board.winner() {
            Some(player) if player == self.maximizer => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }

    fn legal_moves(&self, board: &Board) -> MoveList {
        if self.is_terminal(board) {
            return MoveList::new();
        }
        board.empty_squares().collect()
    }

    fn apply_move(&self, board: &Board, coordinate: &Coordinate) -> Result<Board, BoardError> {
        board.place(*coordinate)
    }
}
