use std::fmt;

use crate::board::WIDTH;

/// Represents one of the two players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Returns the single-character mark used in board rendering.
    pub const fn to_char(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

/// A column on the board. A move is fully described by the column the
/// piece is dropped into, so this doubles as the move type.
/// Using a newtype ensures type safety and valid range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Column(u8);

impl Column {
    /// Creates a new column from index (0-6).
    /// Returns None if index is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index < WIDTH as u8 {
            Some(Column(index))
        } else {
            None
        }
    }

    /// Creates a column from a digit character ('1'-'7').
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='7' => Column::new(c as u8 - b'1'),
            _ => None,
        }
    }

    /// Returns the column as a digit character ('1'-'7').
    pub const fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Returns the zero-based column index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all columns, left to right.
    pub fn all() -> impl Iterator<Item = Column> {
        (0..WIDTH as u8).map(Column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
