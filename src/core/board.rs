//! Immutable 3×3 board.
//!
//! A `Board` is a `Copy` value. Placing a mark produces a new board and
//! never alters the original, so positions can be threaded through search
//! without undo bookkeeping.
//!
//! Boards built from outside input are validated: X is never behind O and
//! never more than one mark ahead, at most one player owns a completed
//! line, and no mark follows the winning one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::{Action, CELLS, SIZE};
use super::player::{Cell, Player};
use crate::error::{Error, Result};

/// The eight winning lines as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[Cell; 3]; 3]", into = "[[Cell; 3]; 3]")]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// The empty starting board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from rows, validating piece counts and winners.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Result<Self> {
        let mut cells = [Cell::Empty; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Self::from_cells(cells)
    }

    /// Build a board from row-major cells, validating piece counts and winners.
    pub fn from_cells(cells: [Cell; CELLS]) -> Result<Self> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<()> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);
        if x_count < o_count || x_count > o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        let mut owners = self.completed_lines();
        let Some(winner) = owners.next() else {
            return Ok(());
        };
        if owners.any(|p| p != winner) {
            return Err(Error::MultipleWinners);
        }

        // The winner made the last move.
        let last_mover = if x_count > o_count { Player::X } else { Player::O };
        if winner != last_mover {
            return Err(Error::MoveAfterWin { winner });
        }
        Ok(())
    }

    /// Contents of the cell named by `action`.
    #[must_use]
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// The board as three rows.
    #[must_use]
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = *cell;
        }
        rows
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of marks placed so far.
    #[must_use]
    pub fn marks_placed(&self) -> usize {
        CELLS - self.count(Cell::Empty)
    }

    /// Check if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Owners of every completed line, one entry per line.
    pub fn completed_lines(&self) -> impl Iterator<Item = Player> + '_ {
        LINES.iter().filter_map(move |&[a, b, c]| {
            let owner = self.cells[a].owner()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(owner)
        })
    }

    /// Copy of this board with one cell replaced.
    ///
    /// Performs no rule checks; callers go through [`crate::rules::apply`].
    #[must_use]
    pub(crate) fn with_mark(&self, action: Action, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[action.index()] = cell;
        next
    }
}

impl TryFrom<[[Cell; SIZE]; SIZE]> for Board {
    type Error = Error;

    fn try_from(rows: [[Cell; SIZE]; SIZE]) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[Cell; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters; `/`, `|` and line breaks are separators.
    ///
    /// ```
    /// use balanced_ttt::core::Board;
    ///
    /// let board: Board = "XO./.X./..O".parse().unwrap();
    /// assert_eq!(board.marks_placed(), 4);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; CELLS];
        let mut len = 0;
        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                context: s.to_string(),
            })?;
            if len < CELLS {
                cells[len] = cell;
            }
            len += 1;
        }
        if len != CELLS {
            return Err(Error::InvalidBoardLength {
                got: len,
                context: s.to_string(),
            });
        }
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.marks_placed(), 0);
        assert!(!board.is_full());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX.\nOO.\n...".parse().unwrap();
        assert_eq!(board.count(Cell::X), 2);
        assert_eq!(board.count(Cell::O), 2);
        assert_eq!(board.to_string(), "XX.\nOO.\n...");

        let same: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board, same);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "XX".parse::<Board>(),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            "XX?......".parse::<Board>(),
            Err(Error::InvalidCellCharacter { character: '?', .. })
        ));
    }

    #[test]
    fn test_piece_count_validation() {
        assert_eq!(
            "XX.......".parse::<Board>(),
            Err(Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
        );
        assert_eq!(
            "O........".parse::<Board>(),
            Err(Error::InvalidPieceCounts { x_count: 0, o_count: 1 })
        );
    }

    #[test]
    fn test_multiple_winners_rejected() {
        assert_eq!("XXX/OOO/...".parse::<Board>(), Err(Error::MultipleWinners));
    }

    #[test]
    fn test_mark_after_win_rejected() {
        // O moved after X's row.
        assert_eq!(
            "XXX/OO./O..".parse::<Board>(),
            Err(Error::MoveAfterWin { winner: Player::X })
        );
        // X moved after O's row.
        assert_eq!(
            "XX./OOO/X.X".parse::<Board>(),
            Err(Error::MoveAfterWin { winner: Player::O })
        );
        assert!("XX./OOO/X..".parse::<Board>().is_ok());
    }

    #[test]
    fn test_double_line_same_owner_allowed() {
        // X completes a row and a column with one final move.
        let board: Board = "XXX/XOO/XOO".parse().unwrap();
        assert_eq!(board.completed_lines().count(), 2);
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::empty();
        let action = Action::new(1, 1).unwrap();
        let next = board.with_mark(action, Cell::X);
        assert_eq!(board.get(action), Cell::Empty);
        assert_eq!(next.get(action), Cell::X);
    }

    #[test]
    fn test_serde_rows() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);

        let bad = r#"[["X","X","X"],["X","Empty","Empty"],["Empty","Empty","Empty"]]"#;
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }
}
