//! Core traits for generic minimax search.

use std::fmt::Debug;

/// Score of a position. Higher scores favor the maximizing player.
///
/// `Score::MIN` and `Score::MAX` stand in for negative and positive infinity,
/// so game scores must lie strictly between them.
pub type Score = i16;

/// A two-player, perfect-information, zero-sum game the searcher can play.
///
/// Every operation is pure: states are snapshots, and applying a move yields a
/// new state rather than editing the one passed in.
pub trait Game {
    type State: Clone + Debug;
    type Move: Clone + PartialEq + Debug;
    type MoveList: MoveCollection<Self::Move>;
    type Error: Debug;

    /// Returns true if no further play is possible (a win or a draw).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Scores the given state from the maximizing player's perspective.
    /// Non-terminal states reached at a depth cutoff should score 0.
    fn evaluate(&self, state: &Self::State) -> Score;

    /// Generates all legal moves for the side to move. The order is the
    /// tie-break priority: the first move reaching the best score is chosen.
    fn legal_moves(&self, state: &Self::State) -> Self::MoveList;

    /// Applies a legal move, returning the resulting state.
    fn apply_move(
        &self,
        state: &Self::State,
        game_move: &Self::Move,
    ) -> Result<Self::State, Self::Error>;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: smallvec::Array> MoveCollection<A::Item> for smallvec::SmallVec<A> {}
