//! Generic minimax searcher for two-player, zero-sum, perfect-information games.

mod search;
mod traits;

pub use search::{minimax, SearchContext, SearchError, SearchOutcome, SearchStats};
pub use traits::{Game, MoveCollection, Score};

#[cfg(test)]
mod tests;
