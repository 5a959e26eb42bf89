//! A human-versus-AI tic-tac-toe session and its console front end.

pub mod analysis;
pub mod display;
pub mod engine;
pub mod r#loop; // `loop` is a reserved keyword

pub use engine::{Engine, EngineConfig, EngineError};
