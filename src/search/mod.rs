//! Balanced decision engine.
//!
//! ## Overview
//!
//! Moves are chosen in two stages:
//!
//! - **Random bypass**: with probability `p_random` the engine plays a
//!   uniformly random legal move without searching.
//! - **Search**: otherwise an exhaustive alpha-beta minimax runs, with
//!   shuffled move order, value-noise injection (`p_noise`) and
//!   probabilistic cutoff skipping (`p_skip_prune`).
//!
//! With every probability at zero the engine plays perfectly. Raising them
//! trades strength for variety.
//!
//! ## Usage
//!
//! ```rust
//! use balanced_ttt::core::Board;
//! use balanced_ttt::rules::apply;
//! use balanced_ttt::search::{BalancedEngine, EngineConfig};
//!
//! let engine = BalancedEngine::new(EngineConfig::default().with_seed(42)).unwrap();
//! let board = Board::empty();
//!
//! let action = engine.choose_move(&board).unwrap();
//! let next = apply(&board, action).unwrap();
//! assert_eq!(next.marks_placed(), 1);
//! ```

pub mod alphabeta;
pub mod config;
pub mod engine;
pub mod stats;

pub use alphabeta::{AlphaBeta, Role};
pub use config::{Difficulty, EngineConfig};
pub use engine::{choose_move, BalancedEngine, Decision};
pub use stats::SearchStats;
