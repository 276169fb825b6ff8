//! Core game representations and rules

pub mod board;
pub mod convert;
pub mod display;
pub mod fen;
pub mod game;
pub mod loc;
pub mod side;

pub use board::Board;
pub use convert::{FromIndex, ToIndex};
pub use game::{GameConfig, GameState};
pub use loc::Loc;
pub use side::{Side, SideArray};

/// Score of a position: a disc count, so bounded by the number of cells
pub type Value = i32;
