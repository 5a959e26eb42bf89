//! Move and menu input parsing.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;
use crate::difficulty::Difficulty;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?[ \t]*([0-2])[ \t]*,?[ \t]*([0-2])[ \t]*\)?$").expect("COORD_RE regex should be valid")
});
static DIFFICULTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^d[ \t]+([a-z]+)$").expect("DIFFICULTY_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("input closed")]
    EndOfInput,
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Coordinate(Coordinate),
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum MenuInput {
    StartOver,
    ChangeDifficulty(Difficulty),
    Exit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = COORD_RE.captures(trimmed) {
            // The regex only admits single digits 0-2
            let row = caps[1].parse().map_err(|_| invalid(input))?;
            let col = caps[2].parse().map_err(|_| invalid(input))?;
            return Ok(MoveInput::Coordinate(Coordinate::new(row, col)));
        }

        Err(invalid(input))
    }
}

impl FromStr for MenuInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "r" => return Ok(MenuInput::StartOver),
            "q" => return Ok(MenuInput::Exit),
            _ => (),
        };

        if let Some(caps) = DIFFICULTY_RE.captures(&trimmed) {
            let difficulty = caps[1].parse().map_err(|_| invalid(input))?;
            return Ok(MenuInput::ChangeDifficulty(difficulty));
        }

        Err(invalid(input))
    }
}

fn invalid(input: &str) -> InputError {
    InputError::InvalidInput {
        input: input.trim().to_string(),
    }
}

/// Reads one line from `reader` and parses it.
pub fn read_input<R, T>(reader: &mut R) -> Result<T, InputError>
where
    R: BufRead,
    T: FromStr<Err = InputError>,
{
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::EndOfInput);
    }
    line.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinates() {
        let expected = MoveInput::Coordinate(Coordinate::new(1, 2));
        for input in ["1 2", "1,2", "12", " 1 , 2 ", "(1, 2)"].iter() {
            assert_eq!(input.parse::<MoveInput>().unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_rejects_off_board_coordinates() {
        for input in ["3 0", "0 3", "1", "a b", "1 2 3", ""].iter() {
            assert!(input.parse::<MoveInput>().is_err(), "{}", input);
        }
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("q".parse::<MoveInput>().unwrap(), MoveInput::Quit);
        assert_eq!("Q".parse::<MenuInput>().unwrap(), MenuInput::Exit);
    }

    #[test]
    fn test_parse_menu() {
        assert_eq!("r".parse::<MenuInput>().unwrap(), MenuInput::StartOver);
        assert_eq!(
            "d impossible".parse::<MenuInput>().unwrap(),
            MenuInput::ChangeDifficulty(Difficulty::Impossible)
        );
        assert!("d nightmare".parse::<MenuInput>().is_err());
        assert!("x".parse::<MenuInput>().is_err());
    }

    #[test]
    fn test_read_input_from_reader() {
        let mut reader = Cursor::new("0 0\n");
        let input: MoveInput = read_input(&mut reader).unwrap();
        assert_eq!(input, MoveInput::Coordinate(Coordinate::new(0, 0)));

        let result: Result<MoveInput, _> = read_input(&mut reader);
        assert!(matches!(result, Err(InputError::EndOfInput)));
    }
}
