use std::fmt;

use crate::board::{Board, WIN_LENGTH};
use crate::types::{Column, Player};

/// Move-string parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    InvalidColumn(char),
    IllegalMove(Column),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::InvalidColumn(c) => write!(f, "Invalid column character: '{c}'"),
            ParseMoveError::IllegalMove(col) => write!(f, "Illegal move in column {col}"),
        }
    }
}

impl std::error::Error for ParseMoveError {}

/// Complete game state: the board plus whose turn it is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// The player to move next.
    pub turn: Player,
}

impl GameState {
    /// Creates the starting position with an empty board. Red moves first.
    pub const fn new() -> Self {
        Self {
            board: Board::empty(),
            turn: Player::Red,
        }
    }

    /// Parses a position from a string of column digits, e.g. "4453"
    /// means Red drops in column 4, Yellow in 4, Red in 5, Yellow in 3.
    pub fn from_moves(moves: &str) -> Result<Self, ParseMoveError> {
        let mut state = Self::new();

        for c in moves.chars() {
            let col = Column::from_char(c).ok_or(ParseMoveError::InvalidColumn(c))?;
            if !state.is_legal(col) {
                return Err(ParseMoveError::IllegalMove(col));
            }
            state = state.apply_move(col);
        }

        Ok(state)
    }

    /// Returns true if dropping in the column is legal in this state.
    pub fn is_legal(&self, col: Column) -> bool {
        self.winner().is_none() && self.board.is_playable(col)
    }

    /// Returns the legal moves in left-to-right column order.
    /// Empty once the game is decided or the board is full.
    pub fn legal_moves(&self) -> Vec<Column> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Column::all()
            .filter(|&col| self.board.is_playable(col))
            .collect()
    }

    /// Applies a move and returns the resulting state.
    /// The column must be legal for this state.
    pub fn apply_move(&self, col: Column) -> Self {
        debug_assert!(self.is_legal(col), "illegal drop in column {col}");
        let mut board = self.board.clone();
        let _ = board.drop_piece(col, self.turn);
        Self {
            board,
            turn: self.turn.opponent(),
        }
    }

    /// Returns the player who has connected four or more, if any.
    pub fn winner(&self) -> Option<Player> {
        for player in [Player::Red, Player::Yellow] {
            if self.board.has_run_of(WIN_LENGTH, player) {
                return Some(player);
            }
        }
        None
    }

    /// Returns true if the game is over: decided or the board is full.
    pub fn is_over(&self) -> bool {
        self.legal_moves().is_empty()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
