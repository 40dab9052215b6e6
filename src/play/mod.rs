//! Playing full games.
//!
//! - `MovePolicy`: anything that picks moves (engine, random, scripted, closures)
//! - `play_game`: runs two policies against each other until the game ends
//! - `Scoreboard`: in-memory win/loss/tie tally

mod policy;
mod session;

pub use policy::{EnginePlayer, MovePolicy, ScriptedPlayer, UniformRandomPlayer};
pub use session::{play_from, play_game, GameRecord, MoveRecord, Scoreboard};
