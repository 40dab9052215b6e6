//! Core value types: cells, players, actions, boards, RNG.
//!
//! Everything here is a plain value. Game rules over these types live in
//! [`crate::rules`].

pub mod action;
pub mod board;
pub mod player;
pub mod rng;

pub use action::{Action, ActionList, CELLS, SIZE};
pub use board::{Board, LINES};
pub use player::{Cell, Player};
pub use rng::GameRng;
