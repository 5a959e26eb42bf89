use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::profile::DifficultyProfile;
use crate::minimax_searcher::{Game, MoveCollection, SearchContext, SearchError, SearchStats};
use crate::recorder::{DecisionRecord, DecisionRecorder};

/// Nodes and depth recorded for a move that was picked at random.
const RANDOM_MOVE_COST: usize = 1;
const RANDOM_MOVE_DEPTH: u8 = 1;

/// Shapes the searcher's strength according to a `DifficultyProfile` and
/// records what every decision cost.
///
/// The modulator always searches from the maximizing side: the game it is
/// handed must score positions from the AI's point of view.
pub struct DifficultyModulator<R: Rng = StdRng> {
    search_context: SearchContext,
    recorder: DecisionRecorder,
    rng: R,
}

impl DifficultyModulator<StdRng> {
    pub fn new(alpha_beta_enabled: bool) -> Self {
        Self::with_rng(alpha_beta_enabled, StdRng::from_entropy())
    }

    pub fn seeded(alpha_beta_enabled: bool, seed: u64) -> Self {
        Self::with_rng(alpha_beta_enabled, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DifficultyModulator<R> {
    pub fn with_rng(alpha_beta_enabled: bool, rng: R) -> Self {
        Self {
            search_context: SearchContext::new(alpha_beta_enabled),
            recorder: DecisionRecorder::new(),
            rng,
        }
    }

    /// Picks the AI's move for `state`.
    ///
    /// With probability `profile.random_move_probability` a uniformly random
    /// legal move is returned without searching; otherwise the searcher runs to
    /// `profile.search_depth`. Either way one `DecisionRecord` is appended.
    ///
    /// # Returns
    ///
    /// - `Ok(move)` - The chosen move
    /// - `Err(SearchError::NoAvailableMoves)` - If `state` is terminal or has no legal moves
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn choose_move<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        profile: &DifficultyProfile,
    ) -> Result<G::Move, SearchError> {
        let start = Instant::now();

        if game.is_terminal(state) {
            return Err(SearchError::NoAvailableMoves);
        }
        let candidates = game.legal_moves(state);
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let roll: f64 = self.rng.gen();
        if roll < profile.random_move_probability {
            let chosen = candidates
                .as_ref()
                .choose(&mut self.rng)
                .cloned()
                .ok_or(SearchError::NoAvailableMoves)?;
            debug!(
                "{}: random move {:?} (roll {:.3} < {})",
                profile.label, chosen, roll, profile.random_move_probability
            );
            self.recorder.append(
                RANDOM_MOVE_COST,
                RANDOM_MOVE_DEPTH,
                start.elapsed(),
                profile.label,
            );
            return Ok(chosen);
        }

        let outcome = self
            .search_context
            .decide(game, state, profile.search_depth, true)?;
        let chosen = outcome.best_move.ok_or(SearchError::NoAvailableMoves)?;
        let nodes_evaluated = self.search_context.searched_position_count();
        debug!(
            "{}: searched move {:?} (score {}, {} nodes at depth {})",
            profile.label, chosen, outcome.score, nodes_evaluated, profile.search_depth
        );
        self.recorder.append(
            nodes_evaluated,
            profile.search_depth,
            start.elapsed(),
            profile.label,
        );

        Ok(chosen)
    }

    pub fn search_stats(&self) -> SearchStats {
        self.search_context.stats()
    }

    pub fn set_alpha_beta(&mut self, enabled: bool) {
        self.search_context.set_alpha_beta(enabled);
    }

    pub fn records(&self) -> &[DecisionRecord] {
        self.recorder.records()
    }

    pub fn last_record(&self) -> Option<&DecisionRecord> {
        self.recorder.last()
    }

    pub fn clear_records(&mut self) {
        self.recorder.clear();
    }
}
