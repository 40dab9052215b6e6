//! Pure rule functions over [`Board`] values.
//!
//! None of these functions mutate their input. They are the only way the
//! search and the play loop interact with the game:
//! - Whose turn it is
//! - What actions are legal
//! - How an action produces the next board
//! - Win/tie conditions and terminal utility

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionList, Board, Cell, Player};
use crate::error::{Error, Result};

/// State of a game as seen from a single board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Empty cells remain and nobody has a line.
    InProgress,
    /// One player completed a line.
    Win(Player),
    /// Board full with no line.
    Tie,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Win(p) if *p == player)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// The player who moves next: whoever has fewer marks, X on equal counts.
#[must_use]
pub fn player(board: &Board) -> Player {
    if board.count(Cell::X) > board.count(Cell::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Every empty coordinate, in row-major order.
#[must_use]
pub fn legal_actions(board: &Board) -> ActionList {
    Action::all().filter(|&a| board.get(a).is_empty()).collect()
}

/// The board after the player to move marks `action`.
///
/// Fails with [`Error::CellOccupied`] if the cell is taken and with
/// [`Error::GameOver`] if someone has already won. `board` is untouched
/// either way.
pub fn apply(board: &Board, action: Action) -> Result<Board> {
    if !board.get(action).is_empty() {
        return Err(Error::CellOccupied {
            row: action.row(),
            col: action.col(),
        });
    }
    if winner(board).is_some() {
        return Err(Error::GameOver);
    }
    Ok(board.with_mark(action, player(board).mark()))
}

/// The owner of a completed row, column or diagonal.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    board.completed_lines().next()
}

/// Check if the game is over: a line is complete or no cell is empty.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Score of a finished game: +1 X won, -1 O won, 0 tie.
///
/// Fails with [`Error::NotTerminal`] on a board still in progress.
pub fn utility(board: &Board) -> Result<i8> {
    match outcome(board) {
        GameOutcome::Win(Player::X) => Ok(1),
        GameOutcome::Win(Player::O) => Ok(-1),
        GameOutcome::Tie => Ok(0),
        GameOutcome::InProgress => Err(Error::NotTerminal),
    }
}

/// Classify a board.
#[must_use]
pub fn outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(p) => GameOutcome::Win(p),
        None if board.is_full() => GameOutcome::Tie,
        None => GameOutcome::InProgress,
    }
}

/// Every board reachable from the empty board by legal play.
///
/// Tic-tac-toe has 5478 such positions, terminal ones included.
#[must_use]
pub fn reachable_boards() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut frontier = vec![Board::empty()];
    seen.insert(Board::empty());

    while let Some(board) = frontier.pop() {
        if terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            let next = board.with_mark(action, player(&board).mark());
            if seen.insert(next) {
                frontier.push(next);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn at(row: usize, col: usize) -> Action {
        Action::new(row, col).unwrap()
    }

    #[test]
    fn test_player_alternates() {
        let empty = Board::empty();
        assert_eq!(player(&empty), Player::X);

        let after_x = apply(&empty, at(1, 1)).unwrap();
        assert_eq!(player(&after_x), Player::O);

        let after_o = apply(&after_x, at(0, 0)).unwrap();
        assert_eq!(player(&after_o), Player::X);
    }

    #[test]
    fn test_legal_actions_count() {
        assert_eq!(legal_actions(&Board::empty()).len(), 9);

        let b = board("XO./.X./...");
        let actions = legal_actions(&b);
        assert_eq!(actions.len(), 6);
        assert!(actions.iter().all(|&a| b.get(a).is_empty()));
        assert!(!actions.spilled());
    }

    #[test]
    fn test_apply_occupied() {
        let b = board("X../.../...");
        let before = b;
        assert_eq!(
            apply(&b, at(0, 0)),
            Err(Error::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(b, before);
    }

    #[test]
    fn test_apply_after_win() {
        let b = board("XXX/OO./...");
        assert_eq!(apply(&b, at(2, 2)), Err(Error::GameOver));
    }

    #[test]
    fn test_winner_lines() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
        assert_eq!(winner(&board("XX./OOO/X..")), Some(Player::O));
        assert_eq!(winner(&board("XO./XO./X..")), Some(Player::X));
        assert_eq!(winner(&board("OXX/XO./..O")), Some(Player::O));
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Player::X));
        assert_eq!(winner(&Board::empty()), None);
    }

    #[test]
    fn test_terminal_and_utility() {
        let x_win = board("XXX/OO./...");
        assert!(terminal(&x_win));
        assert_eq!(utility(&x_win), Ok(1));

        let o_win = board("XX./OOO/X..");
        assert_eq!(utility(&o_win), Ok(-1));

        let tie = board("XOX/XOO/OXX");
        assert!(terminal(&tie));
        assert_eq!(winner(&tie), None);
        assert_eq!(utility(&tie), Ok(0));

        assert_eq!(utility(&Board::empty()), Err(Error::NotTerminal));
    }

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(&Board::empty()), GameOutcome::InProgress);
        assert_eq!(outcome(&board("XOX/XOO/OXX")), GameOutcome::Tie);

        let win = outcome(&board("XXX/OO./..."));
        assert!(win.is_winner(Player::X));
        assert!(!win.is_winner(Player::O));
        assert!(win.is_over());
    }

    #[test]
    fn test_reachable_board_count() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);
        assert!(boards.contains(&Board::empty()));
    }
}
