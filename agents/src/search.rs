use connect_core::{Column, GameState, Player};

use crate::evaluation::{evaluate, Score};

/// Sentinel search bound, far outside any reachable evaluation.
pub const INFINITY: Score = 1_000_000_000_000;

/// Outcome of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move at the root, None if the root is already terminal.
    pub best_move: Option<Column>,
    /// Value of the position for the maximizing player.
    pub score: Score,
    /// Number of nodes visited, including the root.
    pub nodes: u64,
}

/// Shared base-case check for both search variants: stop and evaluate
/// when out of depth or when the position has no successors.
fn is_cutoff(state: &GameState, depth: u8) -> bool {
    depth == 0 || state.legal_moves().is_empty()
}

/// Exhaustive fixed-depth minimax.
///
/// The perspective is fixed: `maximizing` never changes down the tree,
/// only the max/min combination flips with the side to move. Visits
/// every reachable node up to the depth limit.
pub fn minimax(state: &GameState, depth: u8, maximizing: Player) -> SearchResult {
    let mut nodes = 1;

    if is_cutoff(state, depth) {
        return SearchResult {
            best_move: None,
            score: evaluate(state, maximizing),
            nodes,
        };
    }

    let maximize = state.turn == maximizing;
    let mut best_move = None;
    let mut best = if maximize { -INFINITY } else { INFINITY };

    for col in state.legal_moves() {
        let child = state.apply_move(col);
        let score = minimax_score(&child, depth - 1, maximizing, &mut nodes);
        let improved = if maximize { score > best } else { score < best };
        if best_move.is_none() || improved {
            best = score;
            best_move = Some(col);
        }
    }

    SearchResult {
        best_move,
        score: best,
        nodes,
    }
}

fn minimax_score(state: &GameState, depth: u8, maximizing: Player, nodes: &mut u64) -> Score {
    *nodes += 1;

    if is_cutoff(state, depth) {
        return evaluate(state, maximizing);
    }

    let maximize = state.turn == maximizing;
    let mut best = if maximize { -INFINITY } else { INFINITY };

    for col in state.legal_moves() {
        let child = state.apply_move(col);
        let score = minimax_score(&child, depth - 1, maximizing, nodes);
        best = if maximize {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Alpha-beta pruned search. Returns the same score as [`minimax`] for
/// every input while skipping subtrees that cannot change the result.
///
/// Alpha is the best value the maximizing side can already force along
/// the current path, beta the minimizing side's counterpart. Both are
/// threaded by value down the recursion; a node stops enumerating its
/// children as soon as alpha exceeds beta.
pub fn alpha_beta(state: &GameState, depth: u8, maximizing: Player) -> SearchResult {
    let mut nodes = 1;

    if is_cutoff(state, depth) {
        return SearchResult {
            best_move: None,
            score: evaluate(state, maximizing),
            nodes,
        };
    }

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let maximize = state.turn == maximizing;
    let mut best_move = None;
    let mut best = if maximize { -INFINITY } else { INFINITY };

    for col in state.legal_moves() {
        let child = state.apply_move(col);
        let score = alpha_beta_score(&child, depth - 1, alpha, beta, maximizing, &mut nodes);
        let improved = if maximize { score > best } else { score < best };
        if best_move.is_none() || improved {
            best = score;
            best_move = Some(col);
        }
        if maximize {
            alpha = alpha.max(best);
        } else {
            beta = beta.min(best);
        }
        if alpha > beta {
            break;
        }
    }

    SearchResult {
        best_move,
        score: best,
        nodes,
    }
}

fn alpha_beta_score(
    state: &GameState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: Player,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if is_cutoff(state, depth) {
        return evaluate(state, maximizing);
    }

    if state.turn == maximizing {
        // Running best seeded at the bound already guaranteed elsewhere.
        let mut best = alpha;
        for col in state.legal_moves() {
            let child = state.apply_move(col);
            let score = alpha_beta_score(&child, depth - 1, alpha, beta, maximizing, nodes);
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha > beta {
                break;
            }
        }
        best
    } else {
        let mut best = beta;
        for col in state.legal_moves() {
            let child = state.apply_move(col);
            let score = alpha_beta_score(&child, depth - 1, alpha, beta, maximizing, nodes);
            best = best.min(score);
            beta = beta.min(best);
            if alpha > beta {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::line_weight;
    use connect_core::{Board, Column, Player, HEIGHT};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn col(index: u8) -> Column {
        Column::new(index).unwrap()
    }

    /// Plays up to `moves` random legal moves from the start.
    fn random_state(rng: &mut StdRng, moves: usize) -> GameState {
        let mut state = GameState::new();
        for _ in 0..moves {
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }
            state = state.apply_move(legal[rng.gen_range(0..legal.len())]);
        }
        state
    }

    #[test]
    fn test_depth_zero_is_the_static_evaluation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let state = random_state(&mut rng, 12);
            for player in [Player::Red, Player::Yellow] {
                let expected = evaluate(&state, player);
                assert_eq!(minimax(&state, 0, player).score, expected);
                assert_eq!(alpha_beta(&state, 0, player).score, expected);
            }
        }
    }

    #[test]
    fn test_terminal_position_ignores_depth() {
        // Red wins with four in column 1; no successors remain.
        let state = GameState::from_moves("1212121").unwrap();
        assert!(state.legal_moves().is_empty());

        for player in [Player::Red, Player::Yellow] {
            let expected = evaluate(&state, player);
            for depth in [0, 1, 3, 8] {
                let result = minimax(&state, depth, player);
                assert_eq!(result.score, expected);
                assert_eq!(result.best_move, None);
                assert_eq!(result.nodes, 1);
                assert_eq!(alpha_beta(&state, depth, player), result);
            }
        }
    }

    #[test]
    fn test_variants_return_identical_scores() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..30 {
            let moves = rng.gen_range(0..20);
            let state = random_state(&mut rng, moves);
            for depth in 0..=4 {
                for player in [Player::Red, Player::Yellow] {
                    let plain = minimax(&state, depth, player);
                    let pruned = alpha_beta(&state, depth, player);
                    assert_eq!(
                        plain.score, pruned.score,
                        "variants diverged (round {round}, depth {depth}, {player})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_score_is_mirror_invariant() {
        // Mirroring the board reverses the successor enumeration order
        // without changing the position's value.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let moves = rng.gen_range(0..16);
            let state = random_state(&mut rng, moves);
            let mirrored = GameState {
                board: state.board.mirrored(),
                turn: state.turn,
            };
            for depth in 0..=4 {
                assert_eq!(
                    alpha_beta(&state, depth, Player::Red).score,
                    alpha_beta(&mirrored, depth, Player::Red).score
                );
                assert_eq!(
                    minimax(&state, depth, Player::Red).score,
                    minimax(&mirrored, depth, Player::Red).score
                );
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let state = GameState::from_moves("44").unwrap();

        let plain = minimax(&state, 5, Player::Red);
        let pruned = alpha_beta(&state, 5, Player::Red);

        assert_eq!(plain.score, pruned.score);
        assert!(
            pruned.nodes < plain.nodes,
            "expected a strict node reduction: {} vs {}",
            pruned.nodes,
            plain.nodes
        );
    }

    #[test]
    fn test_forced_win_is_found_and_valued_exactly() {
        // Red has three in column 1; Yellow's pieces are scattered with
        // no lines at all. Dropping in column 1 makes exactly one
        // four-line for Red.
        let state = GameState::from_moves("131517").unwrap();
        assert_eq!(state.turn, Player::Red);

        let leaf = state.apply_move(col(0));
        assert!(leaf.legal_moves().is_empty());
        assert_eq!(evaluate(&leaf, Player::Red), line_weight(4));

        for depth in [1, 2] {
            let result = alpha_beta(&state, depth, Player::Red);
            assert_eq!(result.score, line_weight(4));
            assert_eq!(result.best_move, Some(col(0)));
            assert_eq!(minimax(&state, depth, Player::Red).score, result.score);
        }
    }

    #[test]
    fn test_lineless_dead_position_scores_zero() {
        // Every column is blocked at the top by an isolated piece, so no
        // successors exist, and no player has a line of length two.
        let mut board = Board::empty();
        for c in 0..7u8 {
            let piece = if c % 2 == 0 {
                Player::Red
            } else {
                Player::Yellow
            };
            board.set_cell(col(c), HEIGHT - 1, Some(piece));
        }
        let state = GameState {
            board,
            turn: Player::Red,
        };
        assert!(state.legal_moves().is_empty());

        for depth in [0, 4] {
            assert_eq!(minimax(&state, depth, Player::Red).score, 0);
            assert_eq!(alpha_beta(&state, depth, Player::Yellow).score, 0);
        }
    }
}
