//! Rule oracle for tic-tac-toe.
//!
//! Free functions over immutable boards:
//! - Whose turn it is and which actions are legal
//! - How an action produces the next board
//! - Winner, terminal test and utility
//!
//! The search engine calls into these functions but never inspects cells
//! directly.

pub mod oracle;

pub use oracle::{
    apply, legal_actions, outcome, player, reachable_boards, terminal, utility, winner,
    GameOutcome,
};
