use std::fmt;

use super::error::BoardError;
use super::player::{Cell, Player};

pub const BOARD_SIZE: usize = 3;

/// Rows, columns and diagonals, as (row, col) triples.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A square on the board, addressed by row and column (both 0-2).
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate if it lies on the board.
    pub fn checked(row: u8, col: u8) -> Result<Self, BoardError> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self::new(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum GameEnding {
    Win(Player),
    Draw,
}

/// A 3x3 position together with the player whose turn it is.
///
/// The side to move is stored rather than derived from the number of marks,
/// so a board set up by hand means exactly what it says.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with X to move.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    pub fn starting_with(to_move: Player) -> Self {
        Self::from_rows([[Cell::Empty; BOARD_SIZE]; BOARD_SIZE], to_move)
    }

    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE], to_move: Player) -> Self {
        Self { cells, to_move }
    }

    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.row as usize][coordinate.col as usize]
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coordinate::new(row, col)))
            .filter(move |coordinate| self.get(*coordinate).is_empty())
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = *line;
            let first = self.cells[a.0][a.1];
            match first.player() {
                Some(player) if first == self.cells[b.0][b.1] && first == self.cells[c.0][c.1] => {
                    Some(player)
                }
                _ => None,
            }
        })
    }

    pub fn game_ending(&self) -> Option<GameEnding> {
        if let Some(player) = self.winner() {
            return Some(GameEnding::Win(player));
        }
        if self.is_full() {
            return Some(GameEnding::Draw);
        }
        None
    }

    /// Places the side to move's mark and hands the turn to the opponent.
    /// The board itself is left untouched.
    pub fn place(&self, coordinate: Coordinate) -> Result<Board, BoardError> {
        if !coordinate.is_on_board() {
            return Err(BoardError::OutOfBounds {
                row: coordinate.row,
                col: coordinate.col,
            });
        }
        if self.game_ending().is_some() {
            return Err(BoardError::GameOver);
        }
        if !self.get(coordinate).is_empty() {
            return Err(BoardError::SquareOccupied { coordinate });
        }

        let mut next = *self;
        next.cells[coordinate.row as usize][coordinate.col as usize] = self.to_move.into();
        next.to_move = self.to_move.opponent();
        Ok(next)
    }
}
