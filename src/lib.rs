//! Flipside - full-depth minimax engine for Othello/Reversi

pub mod ai;
pub mod core;
pub mod driver;
pub mod engine;
pub mod players;
pub mod utils;

// Re-export commonly used items
pub use crate::ai::{decide, search, SearchResult};
pub use crate::core::{Board, GameState, Loc, Side};
pub use crate::engine::Engine;
