use std::fmt;

use crate::types::{Column, Player};

/// Number of columns on the board.
pub const WIDTH: usize = 7;
/// Number of rows on the board.
pub const HEIGHT: usize = 6;
/// Run length that decides the game.
pub const WIN_LENGTH: usize = 4;

/// The four scan directions for run counting: horizontal, vertical and
/// both diagonals. Each run is scanned once, from its lowest/leftmost end.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Array-based board representation with gravity drops.
/// Row 0 is the bottom row; pieces stack upward.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// cells[column][row]
    cells: [[Option<Player>; HEIGHT]; WIDTH],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; HEIGHT]; WIDTH],
        }
    }

    /// Gets the piece at the given column and row.
    /// Returns None for an empty cell or an out-of-range row.
    pub fn cell(&self, col: Column, row: usize) -> Option<Player> {
        if row < HEIGHT {
            self.cells[col.index()][row]
        } else {
            None
        }
    }

    /// Sets the cell at the given column and row.
    pub fn set_cell(&mut self, col: Column, row: usize, piece: Option<Player>) {
        self.cells[col.index()][row] = piece;
    }

    /// Returns true if the column has room for another piece.
    pub fn is_playable(&self, col: Column) -> bool {
        self.cells[col.index()][HEIGHT - 1].is_none()
    }

    /// Returns the row a piece dropped into the column would land on,
    /// or None if the column is full.
    pub fn drop_height(&self, col: Column) -> Option<usize> {
        self.cells[col.index()].iter().position(Option::is_none)
    }

    /// Drops a piece into the column and returns the row it landed on,
    /// or None if the column is full.
    pub fn drop_piece(&mut self, col: Column, player: Player) -> Option<usize> {
        let row = self.drop_height(col)?;
        self.cells[col.index()][row] = Some(player);
        Some(row)
    }

    /// Returns the total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }

    fn at(&self, col: i32, row: i32) -> Option<Player> {
        if (0..WIDTH as i32).contains(&col) && (0..HEIGHT as i32).contains(&row) {
            self.cells[col as usize][row as usize]
        } else {
            None
        }
    }

    /// Length of the run of `player` pieces starting at (col, row) in the
    /// given direction. Zero if the starting cell is not the player's.
    fn run_length(&self, col: i32, row: i32, dc: i32, dr: i32, player: Player) -> usize {
        let mut len = 0;
        let (mut c, mut r) = (col, row);
        while self.at(c, r) == Some(player) {
            len += 1;
            c += dc;
            r += dr;
        }
        len
    }

    /// Counts the maximal contiguous runs of exactly `length` same-player
    /// cells, over all four directions. A run is counted once, from the
    /// end that has no same-player cell behind it.
    pub fn line_count(&self, length: usize, player: Player) -> u32 {
        if length == 0 {
            return 0;
        }

        let mut count = 0;
        for (dc, dr) in DIRECTIONS {
            for col in 0..WIDTH as i32 {
                for row in 0..HEIGHT as i32 {
                    if self.at(col, row) != Some(player) {
                        continue;
                    }
                    // Only the first cell of a run starts a scan.
                    if self.at(col - dc, row - dr) == Some(player) {
                        continue;
                    }
                    if self.run_length(col, row, dc, dr, player) == length {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Returns true if the player has a run of at least `length` pieces.
    pub fn has_run_of(&self, length: usize, player: Player) -> bool {
        (length..=WIDTH.max(HEIGHT)).any(|len| self.line_count(len, player) > 0)
    }

    /// Returns the board reflected left-to-right.
    pub fn mirrored(&self) -> Self {
        let mut cells = [[None; HEIGHT]; WIDTH];
        for col in 0..WIDTH {
            cells[col] = self.cells[WIDTH - 1 - col];
        }
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            write!(f, "|")?;
            for col in Column::all() {
                match self.cell(col, row) {
                    Some(player) => write!(f, " {}", player.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " |")?;
        }
        write!(f, " ")?;
        for col in Column::all() {
            write!(f, " {col}")?;
        }
        Ok(())
    }
}
