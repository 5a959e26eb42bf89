//! Domain-agnostic tests for the minimax searcher using Nim.
//!
//! Test coverage:
//! - Basic search functionality (winning moves, losing positions, both sides)
//! - Leaf handling (terminal states, depth 0)
//! - Alpha-beta pruning (same scores, fewer nodes, bounds ignored when disabled)
//! - Statistics (exact node counts, reset between searches)
//! - Error handling (game rejecting its own moves)

use super::*;

/// State of a Nim game: players take 1-3 objects, last to take wins.
#[derive(Clone, Debug)]
struct NimState {
    pile: u8,
    is_player_one_turn: bool,
}

impl NimState {
    fn new(pile: u8) -> Self {
        Self {
            pile,
            is_player_one_turn: true,
        }
    }

    fn player_two_to_move(pile: u8) -> Self {
        Self {
            pile,
            is_player_one_turn: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NimMove {
    take: u8,
}

/// Player one maximizes.
struct Nim;

impl Game for Nim {
    type State = NimState;
    type Move = NimMove;
    type MoveList = Vec<NimMove>;
    type Error = &'static str;

    fn is_terminal(&self, state: &NimState) -> bool {
        state.pile == 0
    }

    fn evaluate(&self, state: &NimState) -> Score {
        if state.pile > 0 {
            return 0;
        }
        // Player to move has nothing left: the other player took the last object
        if state.is_player_one_turn {
            -1
        } else {
            1
        }
    }

    fn legal_moves(&self, state: &NimState) -> Vec<NimMove> {
        (1..=std::cmp::min(3, state.pile))
            .map(|take| NimMove { take })
            .collect()
    }

    fn apply_move(&self, state: &NimState, game_move: &NimMove) -> Result<NimState, Self::Error> {
        if game_move.take > state.pile || game_move.take == 0 || game_move.take > 3 {
            return Err("Invalid move");
        }
        Ok(NimState {
            pile: state.pile - game_move.take,
            is_player_one_turn: !state.is_player_one_turn,
        })
    }
}

/// Nim variant whose move generator offers a move its rules reject.
struct BrokenNim;

impl Game for BrokenNim {
    type State = NimState;
    type Move = NimMove;
    type MoveList = Vec<NimMove>;
    type Error = &'static str;

    fn is_terminal(&self, state: &NimState) -> bool {
        Nim.is_terminal(state)
    }

    fn evaluate(&self, state: &NimState) -> Score {
        Nim.evaluate(state)
    }

    fn legal_moves(&self, _state: &NimState) -> Vec<NimMove> {
        vec![NimMove { take: 4 }]
    }

    fn apply_move(&self, state: &NimState, game_move: &NimMove) -> Result<NimState, Self::Error> {
        Nim.apply_move(state, game_move)
    }
}

fn search(pile: u8, depth: u8, alpha_beta_enabled: bool) -> (SearchOutcome<NimMove>, usize) {
    let mut context = SearchContext::new(alpha_beta_enabled);
    let outcome = context
        .decide(&Nim, &NimState::new(pile), depth, true)
        .unwrap();
    (outcome, context.stats().nodes_evaluated)
}

#[test]
fn test_nim_finds_winning_move_from_5() {
    let (outcome, _) = search(5, 10, true);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 1 }),
        "From pile of 5, should take 1 to leave opponent with 4"
    );
    assert_eq!(outcome.score, 1);
}

#[test]
fn test_nim_finds_winning_move_from_6() {
    let (outcome, _) = search(6, 10, true);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 2 }),
        "From pile of 6, should take 2 to leave opponent with 4"
    );
}

#[test]
fn test_nim_finds_winning_move_from_7() {
    let (outcome, _) = search(7, 10, false);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 3 }),
        "From pile of 7, should take 3 to leave opponent with 4"
    );
}

#[test]
fn test_nim_losing_position_keeps_first_move() {
    let (outcome, _) = search(4, 10, false);

    // Every move loses, so the first one in move order is kept
    assert_eq!(outcome.score, -1);
    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
}

#[test]
fn test_nim_minimizing_player() {
    let mut context = SearchContext::default();
    let outcome = context
        .decide(&Nim, &NimState::player_two_to_move(5), 10, false)
        .unwrap();

    assert_eq!(outcome.score, -1);
    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
}

#[test]
fn test_terminal_state_returns_evaluation_without_move() {
    for depth in 0..5 {
        let mut context = SearchContext::default();
        let outcome = context.decide(&Nim, &NimState::new(0), depth, true).unwrap();

        assert_eq!(outcome.score, -1);
        assert_eq!(outcome.best_move, None);
        assert_eq!(context.stats().nodes_evaluated, 1);
    }
}

#[test]
fn test_depth_zero_scores_live_position_neutrally() {
    let (outcome, nodes) = search(5, 0, true);

    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.best_move, None);
    assert_eq!(nodes, 1);
}

#[test]
fn test_shallow_search_cannot_see_the_win() {
    // Depth 1 only reaches non-terminal children, which all score 0
    let (outcome, _) = search(5, 1, true);

    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
}

#[test]
fn test_exact_node_count_without_pruning() {
    // pile 3 -> {2, 1, 0}; 2 -> {1, 0}; 1 -> {0}
    let (_, nodes) = search(3, 3, false);
    assert_eq!(nodes, 8);
}

#[test]
fn test_pruning_preserves_scores_and_never_visits_more_nodes() {
    for pile in 0..=12 {
        for depth in 0..=8 {
            let (pruned, pruned_nodes) = search(pile, depth, true);
            let (full, full_nodes) = search(pile, depth, false);

            assert_eq!(
                pruned.score, full.score,
                "pile {} depth {}: pruning changed the score",
                pile, depth
            );
            assert!(
                pruned_nodes <= full_nodes,
                "pile {} depth {}: {} pruned nodes > {} full nodes",
                pile,
                depth,
                pruned_nodes,
                full_nodes
            );
        }
    }
}

#[test]
fn test_pruning_skips_nodes_on_deep_search() {
    let (_, pruned_nodes) = search(10, 10, true);
    let (_, full_nodes) = search(10, 10, false);

    assert!(pruned_nodes < full_nodes);
}

#[test]
fn test_search_is_deterministic() {
    let mut context = SearchContext::default();
    let state = NimState::new(9);

    let first = context.decide(&Nim, &state, 7, true).unwrap();
    let first_nodes = context.stats().nodes_evaluated;
    let second = context.decide(&Nim, &state, 7, true).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_nodes, context.stats().nodes_evaluated);
}

#[test]
fn test_stats_reset_between_searches() {
    let mut context = SearchContext::new(false);

    let _ = context.decide(&Nim, &NimState::new(10), 8, true).unwrap();
    assert!(context.stats().nodes_evaluated > 8);

    let _ = context.decide(&Nim, &NimState::new(3), 3, true).unwrap();
    assert_eq!(context.stats().nodes_evaluated, 8);
    assert_eq!(context.last_score(), Some(1));
    assert!(context.last_search_duration().is_some());
}

#[test]
fn test_stats_report_pruning_flag() {
    let mut context = SearchContext::new(false);
    assert!(!context.stats().alpha_beta_enabled);

    context.set_alpha_beta(true);
    let _ = context.decide(&Nim, &NimState::new(2), 2, true).unwrap();
    assert!(context.stats().alpha_beta_enabled);
    assert!(context.is_alpha_beta_enabled());
}

#[test]
fn test_bounds_are_ignored_without_pruning() {
    let mut context = SearchContext::new(false);
    let state = NimState::new(6);

    let unbounded = context.decide(&Nim, &state, 6, true).unwrap();
    let unbounded_nodes = context.stats().nodes_evaluated;
    let windowed = context.decide_within(&Nim, &state, 6, true, 0, 0).unwrap();

    assert_eq!(unbounded, windowed);
    assert_eq!(unbounded_nodes, context.stats().nodes_evaluated);
}

#[test]
fn test_rejected_move_is_reported() {
    let mut context = SearchContext::default();
    let result = context.decide(&BrokenNim, &NimState::new(2), 3, true);

    assert!(matches!(result, Err(SearchError::MoveApplication(_))));
}

#[test]
fn test_free_function_accumulates_into_caller_counter() {
    let mut nodes = 100;
    let outcome = minimax(
        &Nim,
        &NimState::new(3),
        3,
        true,
        Score::MIN,
        Score::MAX,
        false,
        &mut nodes,
    )
    .unwrap();

    assert_eq!(nodes, 108);
    assert_eq!(outcome.best_move, Some(NimMove { take: 3 }));
}
