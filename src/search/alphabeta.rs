//! Randomized minimax search with alpha-beta pruning.
//!
//! One recursive function serves both sides; the acting player's [`Role`]
//! decides whether a node maximizes (X) or minimizes (O). Three deliberate
//! perturbations make the result non-deterministic:
//!
//! - Actions are shuffled at every node, so equal-valued moves vary.
//! - With probability `p_noise` a child's value is scaled by a uniform
//!   factor from [0.5, 1.5] before it is compared. The returned value is
//!   then no longer a true game-theoretic value.
//! - With probability `p_skip_prune` a valid cutoff is ignored and the
//!   node keeps exploring.
//!
//! There is no transposition table: every search draws its own randomness.

use crate::core::{Action, Board, GameRng, Player};
use crate::error::Result;
use crate::rules::{legal_actions, player, utility};

use super::config::EngineConfig;
use super::stats::SearchStats;

/// Lower bound of a noisy child value relative to its true value.
pub const NOISE_MIN: f64 = 0.5;

/// Upper bound of a noisy child value relative to its true value.
pub const NOISE_MAX: f64 = 1.5;

/// Which direction a node optimizes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// X to move: prefers higher values.
    Max,
    /// O to move: prefers lower values.
    Min,
}

impl Role {
    /// The role of the player to move.
    #[must_use]
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => Role::Max,
            Player::O => Role::Min,
        }
    }

    /// Starting value any real child beats.
    #[must_use]
    pub fn worst(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
        }
    }

    /// Check if `candidate` is strictly better than `best`.
    ///
    /// Strict, so ties keep the first action encountered.
    #[must_use]
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Role::Max => candidate > best,
            Role::Min => candidate < best,
        }
    }
}

/// Search context for one move decision.
///
/// Borrows the RNG and statistics owned by the caller so that a single
/// random stream drives the whole tree.
pub struct AlphaBeta<'a> {
    config: &'a EngineConfig,
    rng: &'a mut GameRng,
    stats: &'a mut SearchStats,
}

impl<'a> AlphaBeta<'a> {
    /// Create a search context.
    ///
    /// Fails with a configuration error if any probability in `config` lies
    /// outside [0, 1].
    pub fn new(
        config: &'a EngineConfig,
        rng: &'a mut GameRng,
        stats: &'a mut SearchStats,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng, stats })
    }

    /// Search from `board` with an open window.
    ///
    /// Returns the (possibly noisy) value and the best action. The action
    /// is `None` only when `board` is terminal.
    pub fn search(&mut self, board: &Board) -> (f64, Option<Action>) {
        self.value(board, f64::NEG_INFINITY, f64::INFINITY)
    }

    fn value(&mut self, board: &Board, mut alpha: f64, mut beta: f64) -> (f64, Option<Action>) {
        self.stats.nodes += 1;

        if let Ok(score) = utility(board) {
            return (f64::from(score), None);
        }

        let mover = player(board);
        let role = Role::for_player(mover);

        let mut actions = legal_actions(board);
        self.rng.shuffle(&mut actions);

        let mut best_value = role.worst();
        let mut best_action = None;

        for action in actions {
            // Legal by construction: the cell came from legal_actions on a
            // non-terminal board.
            let child = board.with_mark(action, mover.mark());
            let (mut child_value, _) = self.value(&child, alpha, beta);

            if self.rng.gen_bool(self.config.p_noise) {
                child_value *= self.rng.gen_uniform(NOISE_MIN, NOISE_MAX);
                self.stats.noise_injections += 1;
            }

            if role.improves(child_value, best_value) {
                best_value = child_value;
                best_action = Some(action);
            }

            match role {
                Role::Max => alpha = alpha.max(best_value),
                Role::Min => beta = beta.min(best_value),
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if self.rng.gen_bool(self.config.p_skip_prune) {
                    self.stats.skipped_prunes += 1;
                } else {
                    break;
                }
            }
        }

        (best_value, best_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(board: &str, config: &EngineConfig, seed: u64) -> ((f64, Option<Action>), SearchStats) {
        let board: Board = board.parse().unwrap();
        let mut rng = GameRng::new(seed);
        let mut stats = SearchStats::new();
        let result = AlphaBeta::new(config, &mut rng, &mut stats).unwrap().search(&board);
        (result, stats)
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        for config in [
            EngineConfig::perfect().with_noise(1.5),
            EngineConfig::perfect().with_skip_prune(-0.1),
            EngineConfig::perfect().with_noise(f64::NAN),
        ] {
            let err = AlphaBeta::new(&config, &mut rng, &mut stats).err().unwrap();
            assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
        }
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_role_ordering() {
        assert!(Role::Max.improves(1.0, 0.0));
        assert!(!Role::Max.improves(0.0, 0.0));
        assert!(Role::Min.improves(-1.0, 0.0));
        assert!(!Role::Min.improves(0.0, 0.0));
        assert!(Role::Max.improves(-1.0, Role::Max.worst()));
        assert!(Role::Min.improves(1.0, Role::Min.worst()));
    }

    #[test]
    fn test_terminal_board_returns_utility() {
        let ((value, action), stats) = run("XXX/OO./...", &EngineConfig::perfect(), 1);
        assert_eq!(value, 1.0);
        assert_eq!(action, None);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        for seed in 0..5 {
            let ((value, action), _) = run(".........", &EngineConfig::perfect(), seed);
            assert_eq!(value, 0.0);
            assert!(action.is_some());
        }
    }

    #[test]
    fn test_finds_immediate_win() {
        let ((value, action), _) = run("XX./OO./...", &EngineConfig::perfect(), 3);
        assert_eq!(value, 1.0);
        assert_eq!(action, Some(Action::new(0, 2).unwrap()));
    }

    #[test]
    fn test_no_noise_without_probability() {
        let (_, stats) = run(".........", &EngineConfig::perfect(), 11);
        assert_eq!(stats.noise_injections, 0);
        assert_eq!(stats.skipped_prunes, 0);
        assert!(stats.cutoffs > 0);
    }

    #[test]
    fn test_always_noise_and_skip() {
        let config = EngineConfig::perfect().with_noise(1.0).with_skip_prune(1.0);
        let (_, stats) = run("X../.O./...", &config, 5);
        // Every child evaluation is noisy, and no cutoff ever prunes.
        assert_eq!(stats.noise_injections, stats.nodes - 1);
        assert_eq!(stats.skipped_prunes, stats.cutoffs);
    }

    #[test]
    fn test_skip_prune_visits_more_nodes() {
        let pruning = EngineConfig::perfect();
        let exhaustive = EngineConfig::perfect().with_skip_prune(1.0);
        let (_, pruned) = run(".........", &pruning, 8);
        let (_, full) = run(".........", &exhaustive, 8);
        // Full minimax tree from the empty board.
        assert_eq!(full.nodes, 549_946);
        assert!(pruned.nodes < full.nodes);
    }
}
