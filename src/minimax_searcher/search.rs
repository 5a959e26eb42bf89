//! Minimax search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Minimax walks the game tree to a fixed depth, alternately maximizing and minimizing the
//! score returned by the game's evaluator. Leaves are positions at depth 0 or terminal
//! positions; they are scored directly and never carry a move.
//!
//! # Alpha-Beta Pruning
//!
//! Pruning maintains a window [alpha, beta] representing the range of scores that matter.
//! Once `beta <= alpha` the remaining siblings cannot change the result and are skipped.
//! It is a toggle on the same algorithm: with pruning disabled the bounds are ignored and
//! every child is explored. The returned score is identical either way; only the number of
//! visited nodes differs.
//!
//! # Tie Breaking
//!
//! A child replaces the running best only when it is strictly better, so the first move (in
//! the game's own move order) that reaches the best score wins. The search is therefore a
//! deterministic function of its inputs.
//!
//! # Node Counting
//!
//! The node count is an explicit accumulator threaded through the recursion. The
//! `SearchContext` only stores the final count of the last top-level call.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Game, Score};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("failed to apply move during search: {0}")]
    MoveApplication(String),
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug)]
struct SearchConfig {
    alpha_beta_enabled: bool,
}

/// Statistics collected during the most recent top-level search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchStats {
    pub nodes_evaluated: usize,
    pub alpha_beta_enabled: bool,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
}

impl SearchStats {
    fn new(alpha_beta_enabled: bool) -> Self {
        Self {
            nodes_evaluated: 0,
            alpha_beta_enabled,
            last_score: None,
            last_search_duration: None,
        }
    }
}

/// The score of a searched position and the move that achieves it.
/// `best_move` is `None` when the position was scored as a leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SearchContext {
    pub fn new(alpha_beta_enabled: bool) -> Self {
        Self {
            config: SearchConfig { alpha_beta_enabled },
            stats: SearchStats::new(alpha_beta_enabled),
        }
    }

    pub fn set_alpha_beta(&mut self, enabled: bool) {
        self.config.alpha_beta_enabled = enabled;
    }

    pub fn is_alpha_beta_enabled(&self) -> bool {
        self.config.alpha_beta_enabled
    }

    /// Snapshot of the last search. Only meaningful after `decide` has returned.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.nodes_evaluated
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_search_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::new(self.config.alpha_beta_enabled);
    }

    /// Searches `state` to `depth` plies with an unbounded window.
    ///
    /// # Returns
    ///
    /// - `Ok(outcome)` - The best score and, for a live position, the first move reaching it
    /// - `Err(SearchError::MoveApplication)` - If the game rejected one of its own legal moves
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut context = SearchContext::default();
    /// let outcome = context.decide(&game, &board, 9, true)?;
    /// println!("{} nodes evaluated", context.stats().nodes_evaluated);
    /// ```
    #[must_use = "search returns the best score and move found"]
    pub fn decide<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u8,
        maximizing: bool,
    ) -> Result<SearchOutcome<G::Move>, SearchError> {
        self.decide_within(game, state, depth, maximizing, Score::MIN, Score::MAX)
    }

    /// Like `decide`, but starting from an explicit [alpha, beta] window.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn decide_within<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Result<SearchOutcome<G::Move>, SearchError> {
        self.reset_stats();
        debug!(
            "minimax search depth: {}, maximizing: {}, alpha-beta: {}",
            depth, maximizing, self.config.alpha_beta_enabled
        );

        let start = Instant::now();
        let mut nodes_evaluated = 0;
        let outcome = minimax(
            game,
            state,
            depth,
            maximizing,
            alpha,
            beta,
            self.config.alpha_beta_enabled,
            &mut nodes_evaluated,
        )?;

        self.stats.nodes_evaluated = nodes_evaluated;
        self.stats.last_score = Some(outcome.score);
        self.stats.last_search_duration = Some(start.elapsed());
        debug!(
            "search finished: score {}, move {:?}, {} nodes",
            outcome.score, outcome.best_move, nodes_evaluated
        );

        Ok(outcome)
    }
}

/// Updates best score and move if new score is better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut Score,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = best_move.is_none()
        || if maximizing_player {
            score > *best_score
        } else {
            score < *best_score
        };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Recursive minimax over `game`, counting every visited node into `nodes_evaluated`.
///
/// The bounds only matter when `alpha_beta_enabled` is set.
#[allow(clippy::too_many_arguments)]
pub fn minimax<G: Game>(
    game: &G,
    state: &G::State,
    depth: u8,
    maximizing_player: bool,
    mut alpha: Score,
    mut beta: Score,
    alpha_beta_enabled: bool,
    nodes_evaluated: &mut usize,
) -> Result<SearchOutcome<G::Move>, SearchError> {
    *nodes_evaluated += 1;

    if depth == 0 || game.is_terminal(state) {
        let score = game.evaluate(state);
        trace!("leaf score: {}", score);
        return Ok(SearchOutcome {
            score,
            best_move: None,
        });
    }

    let candidates = game.legal_moves(state);
    let mut best_score = if maximizing_player {
        Score::MIN
    } else {
        Score::MAX
    };
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let child = game
            .apply_move(state, game_move)
            .map_err(|error| SearchError::MoveApplication(format!("{:?}", error)))?;

        let child_outcome = minimax(
            game,
            &child,
            depth - 1,
            !maximizing_player,
            alpha,
            beta,
            alpha_beta_enabled,
            nodes_evaluated,
        )?;
        let score = child_outcome.score;

        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if alpha_beta_enabled {
            if maximizing_player {
                alpha = max(alpha, score);
            } else {
                beta = min(beta, score);
            }
            if beta <= alpha {
                break;
            }
        }
    }

    if best_move.is_none() {
        // A game that is not terminal yet has no moves: score it as a leaf.
        best_score = game.evaluate(state);
    }

    Ok(SearchOutcome {
        score: best_score,
        best_move,
    })
}
