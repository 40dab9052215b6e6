//! Action representation: a coordinate on the 3×3 grid.
//!
//! An `Action` is always in bounds; whether it is *legal* depends on the
//! board it is applied to (the target cell must be empty).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Legal actions for one position.
///
/// Inline capacity covers the empty board, so enumeration never allocates.
pub type ActionList = SmallVec<[Action; CELLS]>;

/// A (row, column) coordinate in `[0, 3) × [0, 3)`.
///
/// ## Example
///
/// ```
/// use balanced_ttt::core::Action;
///
/// let corner = Action::new(0, 2).unwrap();
/// assert_eq!(corner.index(), 2);
/// assert!(Action::new(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Action {
    row: u8,
    col: u8,
}

impl Action {
    /// Create an action, rejecting coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create an action from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= CELLS {
            return Err(Error::OutOfBounds {
                row: index / SIZE,
                col: index % SIZE,
            });
        }
        Ok(Self::at(index))
    }

    /// In-bounds constructor for internal enumeration.
    pub(crate) const fn at(index: usize) -> Self {
        Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        }
    }

    /// Row (0-2).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..CELLS).map(Action::at)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Action {
    type Error = Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Self::new(row, col)
    }
}

impl TryFrom<[usize; 2]> for Action {
    type Error = Error;

    fn try_from([row, col]: [usize; 2]) -> Result<Self> {
        Self::new(row, col)
    }
}

impl From<Action> for [usize; 2] {
    fn from(action: Action) -> Self {
        [action.row(), action.col()]
    }
}

impl From<Action> for (usize, usize) {
    fn from(action: Action) -> Self {
        (action.row(), action.col())
    }
}
