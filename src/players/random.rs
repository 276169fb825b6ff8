use anyhow::{ensure, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::{Board, Loc, Side};

use super::Player;

/// Picks uniformly among the legal moves
pub struct RandomPlayer {
    side: Side,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(side: Side, rng: StdRng) -> Self {
        Self { side, rng }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "random"
    }

    fn get_move(&mut self, board: &Board) -> Result<Loc> {
        let moves = board.legal_moves(self.side);
        ensure!(!moves.is_empty(), "No legal moves for {}", self.side.symbol());

        Ok(moves[self.rng.random_range(0..moves.len())])
    }
}
