//! Move policies: anything that can pick an action for a board.

use crate::core::{Action, Board, GameRng};
use crate::error::{Error, Result};
use crate::rules::{legal_actions, terminal};
use crate::search::{BalancedEngine, EngineConfig};

/// Something that chooses moves.
///
/// The play loop only calls `select` on non-terminal boards where it is
/// this policy's turn.
pub trait MovePolicy {
    /// Choose an action for the player to move on `board`.
    fn select(&mut self, board: &Board) -> Result<Action>;
}

impl<F> MovePolicy for F
where
    F: FnMut(&Board) -> Result<Action>,
{
    fn select(&mut self, board: &Board) -> Result<Action> {
        self(board)
    }
}

/// Plays the balanced engine over a whole game.
///
/// Every move gets its own seed forked from one game seed, so a game is
/// reproducible while each move still draws fresh randomness.
pub struct EnginePlayer {
    engine: BalancedEngine,
    rng: GameRng,
}

impl EnginePlayer {
    /// Create a player. Fails if `config` is invalid.
    ///
    /// The game seed is `config.seed`, or drawn from entropy when unset.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::from_optional_seed(config.seed);
        Ok(Self {
            engine: BalancedEngine::new(config)?,
            rng,
        })
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &BalancedEngine {
        &self.engine
    }
}

impl MovePolicy for EnginePlayer {
    fn select(&mut self, board: &Board) -> Result<Action> {
        let seed = self.rng.next_seed();
        Ok(self.engine.decide_seeded(board, seed)?.action)
    }
}

/// Picks uniformly among legal actions.
pub struct UniformRandomPlayer {
    rng: GameRng,
}

impl UniformRandomPlayer {
    /// Create a seeded random player.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MovePolicy for UniformRandomPlayer {
    fn select(&mut self, board: &Board) -> Result<Action> {
        if terminal(board) {
            return Err(Error::GameOver);
        }
        let actions = legal_actions(board);
        self.rng.choose(&actions).copied().ok_or(Error::GameOver)
    }
}

/// Replays a fixed list of moves, then fails with [`Error::GameOver`].
pub struct ScriptedPlayer {
    moves: std::vec::IntoIter<Action>,
}

impl ScriptedPlayer {
    /// Create a player that plays `moves` in order.
    #[must_use]
    pub fn new(moves: Vec<Action>) -> Self {
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl MovePolicy for ScriptedPlayer {
    fn select(&mut self, _board: &Board) -> Result<Action> {
        self.moves.next().ok_or(Error::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply;

    #[test]
    fn test_uniform_player_returns_legal_moves() {
        let mut player = UniformRandomPlayer::new(42);
        let board: Board = "XO./.X./...".parse().unwrap();
        for _ in 0..50 {
            let action = player.select(&board).unwrap();
            assert!(board.get(action).is_empty());
        }
    }

    #[test]
    fn test_uniform_player_rejects_terminal() {
        let mut player = UniformRandomPlayer::new(1);
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(player.select(&board), Err(Error::GameOver));
    }

    #[test]
    fn test_engine_player_is_reproducible() {
        let config = EngineConfig::default().with_seed(17);
        let mut a = EnginePlayer::new(config.clone()).unwrap();
        let mut b = EnginePlayer::new(config).unwrap();

        let mut board = Board::empty();
        for _ in 0..3 {
            let move_a = a.select(&board).unwrap();
            let move_b = b.select(&board).unwrap();
            assert_eq!(move_a, move_b);
            board = apply(&board, move_a).unwrap();
        }
    }

    #[test]
    fn test_engine_player_rejects_bad_config() {
        assert!(EnginePlayer::new(EngineConfig::default().with_skip_prune(3.0)).is_err());
    }

    #[test]
    fn test_closure_policy() {
        let corner = Action::new(0, 0).unwrap();
        let mut policy = |_: &Board| -> Result<Action> { Ok(corner) };
        assert_eq!(policy.select(&Board::empty()), Ok(corner));
    }

    #[test]
    fn test_scripted_player() {
        let moves = vec![Action::new(1, 1).unwrap(), Action::new(0, 0).unwrap()];
        let mut player = ScriptedPlayer::new(moves.clone());
        assert_eq!(player.select(&Board::empty()), Ok(moves[0]));
        assert_eq!(player.select(&Board::empty()), Ok(moves[1]));
        assert_eq!(player.select(&Board::empty()), Err(Error::GameOver));
    }
}
