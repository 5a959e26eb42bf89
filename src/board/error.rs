use thiserror::Error;

use super::Coordinate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Coordinate ({row}, {col}) is off the board, rows and columns go from 0 to 2")]
    OutOfBounds { row: u8, col: u8 },
    #[error("Cannot place a mark on {coordinate}, the square is already occupied")]
    SquareOccupied { coordinate: Coordinate },
    #[error("Cannot place a mark, the game is already over")]
    GameOver,
}
