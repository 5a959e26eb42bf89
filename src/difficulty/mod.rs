//! Difficulty presets and the modulator that applies them to the searcher.

pub mod modulator;
pub mod profile;

pub use modulator::DifficultyModulator;
pub use profile::{Difficulty, DifficultyProfile, ProfileError};
