//! Python bindings for the balanced engine.
//!
//! Lets an external UI hold the board and ask for moves.
//!
//! # Quick Start
//!
//! ```python
//! import balanced_ttt as ttt
//!
//! engine = ttt.Engine(p_random=0.5, seed=42)
//! board = ttt.Board()
//!
//! while not board.terminal():
//!     row, col = engine.choose_move(board)
//!     board = board.apply(row, col)
//!
//! print(board.winner())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// balanced_ttt: a tunable tic-tac-toe opponent.
#[pymodule]
fn balanced_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyEngine>()?;
    Ok(())
}
