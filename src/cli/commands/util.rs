//! Shared utilities for CLI commands.

use std::time::Duration;

use tictactoe::difficulty::Difficulty;
use tictactoe::game::EngineConfig;

pub(crate) fn create_config(
    difficulty: Difficulty,
    alpha_beta_enabled: bool,
    seed: Option<u64>,
) -> EngineConfig {
    EngineConfig {
        difficulty,
        alpha_beta_enabled,
        seed,
        ..EngineConfig::default()
    }
}

pub(crate) fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
