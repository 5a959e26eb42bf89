//! Console input for the interactive game.

pub mod input;

pub use input::{read_input, InputError, MenuInput, MoveInput};
