use anyhow::Result;

use crate::ai::decide;
use crate::core::{Board, Loc, Side};

use super::Player;

/// Plays the move with the best full-depth minimax value for its side
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    side: Side,
}

impl MinimaxPlayer {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Player for MinimaxPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "minimax"
    }

    fn get_move(&mut self, board: &Board) -> Result<Loc> {
        // maximise our own disc count even when moving second
        decide(board, self.side)
    }
}
