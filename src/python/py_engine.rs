//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::search::{BalancedEngine, Difficulty, EngineConfig};

use super::py_core::PyBoard;

/// Python wrapper for BalancedEngine.
#[pyclass(name = "Engine", frozen)]
pub struct PyEngine {
    engine: BalancedEngine,
}

#[pymethods]
impl PyEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - p_random: chance of a random move instead of searching
    /// - p_noise: chance of scaling a child value by noise in [0.5, 1.5]
    /// - p_skip_prune: chance of ignoring an alpha-beta cutoff
    /// - seed: RNG seed; None draws a fresh seed per move
    #[new]
    #[pyo3(signature = (p_random = 0.5, p_noise = 0.3, p_skip_prune = 0.3, seed = None))]
    fn new(p_random: f64, p_noise: f64, p_skip_prune: f64, seed: Option<u64>) -> PyResult<Self> {
        let config = EngineConfig {
            p_random,
            p_noise,
            p_skip_prune,
            seed,
        };
        Ok(Self {
            engine: BalancedEngine::new(config)?,
        })
    }

    /// Create an engine from a named preset ("easy", "balanced", "hard", "perfect").
    #[staticmethod]
    #[pyo3(signature = (name, seed = None))]
    fn from_difficulty(name: &str, seed: Option<u64>) -> PyResult<Self> {
        let difficulty: Difficulty = name.parse()?;
        let mut config = difficulty.config();
        config.seed = seed;
        Ok(Self {
            engine: BalancedEngine::new(config)?,
        })
    }

    /// Choose a move as (row, col). Raises on a finished game.
    fn choose_move(&self, board: &PyBoard) -> PyResult<(usize, usize)> {
        Ok(self.engine.choose_move(&board.0)?.into())
    }

    fn __repr__(&self) -> String {
        let c = self.engine.config();
        format!(
            "Engine(p_random={}, p_noise={}, p_skip_prune={}, seed={:?})",
            c.p_random, c.p_noise, c.p_skip_prune, c.seed
        )
    }
}
