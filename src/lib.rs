//! # balanced-ttt
//!
//! A tic-tac-toe opponent that is strong but deliberately imperfect.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: Boards are `Copy` values. Applying a move
//!    returns a new board.
//!
//! 2. **Derived Turn Order**: Whose turn it is comes from the mark counts,
//!    never from stored state.
//!
//! 3. **Explicit Randomness**: Every random draw comes from a seeded
//!    `GameRng` threaded through the search, so a fixed seed reproduces
//!    the move exactly.
//!
//! ## Architecture
//!
//! - **Random Bypass**: With probability `p_random` the engine skips search
//!   and plays a random legal move.
//!
//! - **Perturbed Alpha-Beta**: Otherwise an exhaustive minimax runs with
//!   shuffled move order, value-noise injection and probabilistic
//!   cutoff skipping.
//!
//! ## Modules
//!
//! - `core`: Cells, players, actions, boards, RNG
//! - `rules`: Rule oracle (turn, legal actions, apply, winner, utility)
//! - `search`: Engine configuration, alpha-beta search, move selection
//! - `play`: Game loop, move policies, scoreboard
//! - `error`: Error type shared by every module

pub mod core;
pub mod error;
pub mod play;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Action, ActionList, Board, Cell, GameRng, Player};

pub use crate::error::{Error, ErrorKind, Result};

pub use crate::rules::{
    apply, legal_actions, outcome, player, terminal, utility, winner, GameOutcome,
};

pub use crate::search::{
    choose_move, BalancedEngine, Decision, Difficulty, EngineConfig, SearchStats,
};

pub use crate::play::{
    play_game, EnginePlayer, GameRecord, MovePolicy, Scoreboard, UniformRandomPlayer,
};
