//! Board and rule bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Board};
use crate::error::Error;
use crate::rules;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Board.
///
/// Immutable: `apply` returns a new board.
#[pyclass(name = "Board", frozen)]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board from nine cell characters (`X`, `O`, `.`), or an
    /// empty board when no text is given.
    #[new]
    #[pyo3(signature = (text = None))]
    fn new(text: Option<&str>) -> PyResult<Self> {
        match text {
            Some(text) => Ok(Self(text.parse()?)),
            None => Ok(Self(Board::empty())),
        }
    }

    /// The player to move, "X" or "O".
    fn player(&self) -> String {
        rules::player(&self.0).to_string()
    }

    /// Legal moves as (row, col) pairs.
    fn legal_actions(&self) -> Vec<(usize, usize)> {
        rules::legal_actions(&self.0)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// The board after the player to move marks (row, col).
    fn apply(&self, row: usize, col: usize) -> PyResult<Self> {
        let action = Action::new(row, col)?;
        Ok(Self(rules::apply(&self.0, action)?))
    }

    /// "X", "O" or None.
    fn winner(&self) -> Option<String> {
        rules::winner(&self.0).map(|p| p.to_string())
    }

    /// Check if the game is over.
    fn terminal(&self) -> bool {
        rules::terminal(&self.0)
    }

    /// +1 X won, -1 O won, 0 tie. Raises on a game in progress.
    fn utility(&self) -> PyResult<i8> {
        Ok(rules::utility(&self.0)?)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Board({:?})", self.0.to_string().replace('\n', "/"))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
