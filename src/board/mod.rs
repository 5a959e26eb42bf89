//! Tic-tac-toe: the board, its rules, and the `Game` implementation the searcher plays.

mod board;
pub mod error;
pub mod game;
mod macros;
pub mod notation;
mod player;

pub use board::{Board, Coordinate, GameEnding, BOARD_SIZE};
pub use error::BoardError;
pub use game::TicTacToe;
pub use notation::{NotationParseError, EMPTY_BOARD_NOTATION};
pub use player::{Cell, Player};
