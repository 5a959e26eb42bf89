//! Text notation for boards: three `/`-separated rows followed by the side to move,
//! e.g. `"XO./.X./... o"`. Rows use `X`, `O` and `.` (or `_` for empty squares).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::board::{Board, BOARD_SIZE};
use super::player::{Cell, Player};

#[derive(Error, Debug, PartialEq)]
pub enum NotationParseError {
    #[error("Wrong number of fields, expected rows and side to move")]
    WrongNumberOfFields,
    #[error("Wrong number of rows: 3 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row must have 3 squares: {invalid_row:?}")]
    InvalidRowLength { invalid_row: String },
    #[error("Invalid square character: {invalid_character:?}")]
    InvalidSquareCharacter { invalid_character: char },
    #[error("Invalid side to move: {invalid_side:?}")]
    InvalidSideToMove { invalid_side: String },
}

type NotationResult<T> = Result<T, NotationParseError>;

pub const EMPTY_BOARD_NOTATION: &str = ".../.../... x";

pub fn parse_notation(notation: &str) -> NotationResult<Board> {
    let fields: Vec<&str> = notation.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(NotationParseError::WrongNumberOfFields);
    }

    let cells = parse_rows(fields[0])?;
    let to_move = parse_side_to_move(fields[1])?;
    Ok(Board::from_rows(cells, to_move))
}

fn parse_rows(field: &str) -> NotationResult<[[Cell; BOARD_SIZE]; BOARD_SIZE]> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row_index, row) in rows.iter().enumerate() {
        if row.chars().count() != BOARD_SIZE {
            return Err(NotationParseError::InvalidRowLength {
                invalid_row: row.to_string(),
            });
        }
        for (col_index, c) in row.chars().enumerate() {
            cells[row_index][col_index] = Cell::from_char(c).ok_or(
                NotationParseError::InvalidSquareCharacter {
                    invalid_character: c,
                },
            )?;
        }
    }

    Ok(cells)
}

fn parse_side_to_move(field: &str) -> NotationResult<Player> {
    match field {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        _ => Err(NotationParseError::InvalidSideToMove {
            invalid_side: field.to_string(),
        }),
    }
}

pub fn to_notation(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_char()).collect())
        .collect();
    let side = board.to_move().to_char().to_ascii_lowercase();
    format!("{} {}", rows.join("/"), side)
}

impl FromStr for Board {
    type Err = NotationParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_notation(input)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_notation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coordinate;

    #[test]
    fn test_parse_empty_board() {
        let board: Board = EMPTY_BOARD_NOTATION.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_side_to_move_is_explicit() {
        // Two marks on the board, yet O is to move because the notation says so
        let board: Board = "X../.X./... o".parse().unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(board.get(Coordinate::new(1, 1)), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_analysis_boards_round_trip() {
        for notation in [
            ".../.../... x",
            "X../.O./... x",
            "XOX/OX./... o",
            "XOX/OXO/... x",
        ]
        .iter()
        {
            let board: Board = notation.parse().unwrap();
            assert_eq!(&board.to_string(), notation);
        }
    }

    #[test]
    fn test_underscore_is_empty() {
        let board: Board = "X__/_O_/___ x".parse().unwrap();
        assert_eq!(board.to_string(), "X../.O./... x");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_str("XOX/OXO/..."),
            Err(NotationParseError::WrongNumberOfFields)
        );
        assert_eq!(
            Board::from_str("XOX/OXO x"),
            Err(NotationParseError::InvalidRowCount { row_count: 2 })
        );
        assert_eq!(
            Board::from_str("XOXX/OXO/... x"),
            Err(NotationParseError::InvalidRowLength {
                invalid_row: "XOXX".to_string()
            })
        );
        assert_eq!(
            Board::from_str("XOZ/OXO/... x"),
            Err(NotationParseError::InvalidSquareCharacter {
                invalid_character: 'Z'
            })
        );
        assert_eq!(
            Board::from_str("XOX/OXO/... z"),
            Err(NotationParseError::InvalidSideToMove {
                invalid_side: "z".to_string()
            })
        );
    }
}
