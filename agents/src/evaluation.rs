use connect_core::{GameState, Player};

/// A position assessment. Higher is better for the player the score was
/// computed for. Wide enough that base-100 line weights cannot overflow
/// on a 7x6 board.
pub type Score = i64;

/// Weight base for line features: a line of length n scores 100^n, so a
/// single longer line outweighs any realistic number of shorter ones.
const LINE_WEIGHT_BASE: Score = 100;

/// Shortest line length that contributes to the evaluation.
const MIN_SCORED_LENGTH: usize = 2;
/// Longest line length that contributes to the evaluation.
const MAX_SCORED_LENGTH: usize = 4;

/// Returns the weight of a line of the given length.
pub fn line_weight(length: usize) -> Score {
    LINE_WEIGHT_BASE.pow(length as u32)
}

/// Evaluates a position from the given player's perspective.
/// Positive scores favor `player`, negative favor the opponent.
pub fn evaluate(state: &GameState, player: Player) -> Score {
    advantage(state, player) - advantage(state, player.opponent())
}

/// Sums the weighted line features for a single player.
fn advantage(state: &GameState, player: Player) -> Score {
    (MIN_SCORED_LENGTH..=MAX_SCORED_LENGTH)
        .map(|length| Score::from(state.board.line_count(length, player)) * line_weight(length))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_core::{Board, Column, GameState};

    fn col(index: u8) -> Column {
        Column::new(index).unwrap()
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Player::Red), 0);
        assert_eq!(evaluate(&state, Player::Yellow), 0);
    }

    #[test]
    fn test_antisymmetry() {
        let state = GameState::from_moves("443256112").unwrap();

        let red_eval = evaluate(&state, Player::Red);
        let yellow_eval = evaluate(&state, Player::Yellow);

        assert_eq!(red_eval, -yellow_eval);
        assert_ne!(red_eval, 0, "position with runs should not be balanced");
    }

    #[test]
    fn test_lone_connect_four_scores_exactly_its_weight() {
        let mut board = Board::empty();
        for row in 0..4 {
            board.set_cell(col(0), row, Some(Player::Red));
        }
        let state = GameState {
            board,
            turn: Player::Yellow,
        };

        assert_eq!(evaluate(&state, Player::Red), line_weight(4));
        assert_eq!(evaluate(&state, Player::Red), 100_000_000);
        assert_eq!(evaluate(&state, Player::Yellow), -line_weight(4));
    }

    #[test]
    fn test_longer_lines_dominate() {
        // More 2- and 3-runs of every plausible count still lose to one
        // 4-run: the board holds fewer than 100 runs of any length.
        assert!(line_weight(4) > 99 * line_weight(3));
        assert!(line_weight(3) > 99 * line_weight(2));

        // Red: one 4-line. Yellow: two 3-lines and a 2-line.
        let mut board = Board::empty();
        for row in 0..4 {
            board.set_cell(col(0), row, Some(Player::Red));
        }
        for c in 2..5 {
            board.set_cell(col(c), 0, Some(Player::Yellow));
            board.set_cell(col(c), 2, Some(Player::Yellow));
        }
        board.set_cell(col(6), 0, Some(Player::Yellow));
        board.set_cell(col(6), 1, Some(Player::Yellow));
        let state = GameState {
            board,
            turn: Player::Red,
        };

        assert_eq!(state.board.line_count(3, Player::Yellow), 2);
        assert_eq!(state.board.line_count(2, Player::Yellow), 1);
        assert!(
            evaluate(&state, Player::Red) > 0,
            "a connect four should outweigh shorter lines: {}",
            evaluate(&state, Player::Red)
        );
    }

    #[test]
    fn test_symmetric_position_is_balanced() {
        // Mirrored drops for both players.
        let state = GameState::from_moves("1726").unwrap();
        assert_eq!(evaluate(&state, Player::Red), 0);
    }
}
