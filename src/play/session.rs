//! Game loop and result tallying.
//!
//! A game starts from the empty board. The policy for the player to move is
//! asked for an action, the action is applied through the rule oracle, and
//! the loop repeats until the board is terminal.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::core::{Action, Board, Player};
use crate::error::{Error, Result};
use crate::rules::{apply, outcome, player, terminal, GameOutcome};

use super::policy::MovePolicy;

/// A single move in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The action taken.
    pub action: Action,
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every move in order.
    pub moves: Vec<MoveRecord>,

    /// The terminal board.
    pub final_board: Board,

    /// How the game ended. Never `InProgress`.
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every board of the game, starting with the empty board.
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::empty();
        boards.push(board);
        for record in &self.moves {
            board = apply(&board, record.action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

/// Play one game from the empty board.
pub fn play_game(x: &mut dyn MovePolicy, o: &mut dyn MovePolicy) -> Result<GameRecord> {
    play_from(Board::empty(), x, o)
}

/// Play out a game from `start` until it is terminal.
///
/// An action a policy returns that the board rejects ends the game with
/// that error.
#[instrument(skip_all, fields(start = %start.to_string().replace('\n', "/")))]
pub fn play_from(
    start: Board,
    x: &mut dyn MovePolicy,
    o: &mut dyn MovePolicy,
) -> Result<GameRecord> {
    let mut board = start;
    let mut moves = Vec::new();

    while !terminal(&board) {
        let mover = player(&board);
        let action = match mover {
            Player::X => x.select(&board)?,
            Player::O => o.select(&board)?,
        };
        board = apply(&board, action)?;
        trace!(player = %mover, %action, "move");
        moves.push(MoveRecord {
            player: mover,
            action,
        });
    }

    let outcome = outcome(&board);
    trace!(?outcome, moves = moves.len(), "game over");

    Ok(GameRecord {
        moves,
        final_board: board,
        outcome,
    })
}

/// Win/loss/tie tally from one side's point of view.
///
/// Kept in memory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Scoreboard {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game for `side`.
    ///
    /// Fails with [`Error::NotTerminal`] for an outcome still in progress.
    pub fn record(&mut self, outcome: GameOutcome, side: Player) -> Result<()> {
        match outcome {
            GameOutcome::Win(p) if p == side => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => return Err(Error::NotTerminal),
        }
        Ok(())
    }

    /// Total games counted.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Clear the tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wins: {} Ties: {} Losses: {}", self.wins, self.ties, self.losses)
    }
}
