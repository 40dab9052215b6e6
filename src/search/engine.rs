//! Move selection: the random-bypass policy in front of the search.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Action, Board, GameRng};
use crate::error::{Error, Result};
use crate::rules::{legal_actions, player, terminal};

use super::alphabeta::AlphaBeta;
use super::config::EngineConfig;
use super::stats::SearchStats;

/// A chosen move together with how it was found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The move to play.
    pub action: Action,

    /// Root value reported by the search. `None` when the random bypass
    /// fired. May differ from the true game value if noise was injected.
    pub value: Option<f64>,

    /// Search diagnostics.
    pub stats: SearchStats,
}

/// Tunable tic-tac-toe opponent.
///
/// Holds a validated [`EngineConfig`]. Each call builds its own RNG from
/// the config's seed (or from entropy when there is none), so a seeded
/// engine always answers the same board with the same move.
///
/// ## Example
///
/// ```
/// use balanced_ttt::core::{Action, Board};
/// use balanced_ttt::search::{BalancedEngine, EngineConfig};
///
/// let engine = BalancedEngine::new(EngineConfig::perfect().with_seed(7)).unwrap();
/// let board: Board = "XX./OO./...".parse().unwrap();
///
/// assert_eq!(engine.choose_move(&board).unwrap(), Action::new(0, 2).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct BalancedEngine {
    config: EngineConfig,
}

impl BalancedEngine {
    /// Create an engine, rejecting probabilities outside [0, 1].
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for the player to move on `board`.
    ///
    /// Fails with [`Error::GameOver`] if `board` is terminal.
    pub fn choose_move(&self, board: &Board) -> Result<Action> {
        self.decide(board).map(|decision| decision.action)
    }

    /// Choose a move and report how it was found.
    pub fn decide(&self, board: &Board) -> Result<Decision> {
        let rng = GameRng::from_optional_seed(self.config.seed);
        self.decide_with_rng(board, rng)
    }

    /// Choose a move using `seed` in place of the configured seed.
    pub fn decide_seeded(&self, board: &Board, seed: u64) -> Result<Decision> {
        self.decide_with_rng(board, GameRng::new(seed))
    }

    fn decide_with_rng(&self, board: &Board, mut rng: GameRng) -> Result<Decision> {
        if terminal(board) {
            return Err(Error::GameOver);
        }

        let start = Instant::now();
        let mut stats = SearchStats {
            seed: rng.seed(),
            ..SearchStats::default()
        };

        let actions = legal_actions(board);
        let bypass = rng.gen_bool(self.config.p_random);

        let (action, value) = if bypass {
            stats.random_bypass = true;
            // Non-terminal boards always have an empty cell.
            let action = *rng.choose(&actions).ok_or(Error::GameOver)?;
            (action, None)
        } else {
            let (value, action) =
                AlphaBeta::new(&self.config, &mut rng, &mut stats)?.search(board);
            (action.ok_or(Error::GameOver)?, Some(value))
        };

        stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            player = %player(board),
            %action,
            ?value,
            bypass,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            skipped_prunes = stats.skipped_prunes,
            noise_injections = stats.noise_injections,
            seed = stats.seed,
            "chose move"
        );

        Ok(Decision { action, value, stats })
    }
}

/// Validate `config` and choose a move for `board`.
///
/// Convenience wrapper over [`BalancedEngine`]: fails with a configuration
/// error for bad probabilities, or [`Error::GameOver`] on a terminal board.
pub fn choose_move(board: &Board, config: &EngineConfig) -> Result<Action> {
    BalancedEngine::new(config.clone())?.choose_move(board)
}
