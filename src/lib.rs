pub mod board;
pub mod difficulty;
pub mod game;
pub mod input_handler;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod minimax_searcher;
pub mod recorder;
