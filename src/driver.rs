//! Plays a full game between two players

use anyhow::{bail, ensure, Result};
use tracing::{info, warn};

use crate::core::{Board, GameState, Side, SideArray, Value};
use crate::players::Player;

/// Illegal moves tolerated from one player on a single turn
pub const MAX_ILLEGAL_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub scores: SideArray<Value>,
    /// `None` on a draw
    pub winner: Option<Side>,
    pub plies: u32,
    pub final_board: Board,
}

pub struct GameDriver {
    state: GameState,
    players: SideArray<Box<dyn Player>>,
    pub verbose: bool,
}

impl GameDriver {
    pub fn new(state: GameState, x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Result<Self> {
        ensure!(x_player.side() == Side::X, "First player must play X");
        ensure!(o_player.side() == Side::O, "Second player must play O");

        Ok(Self {
            state,
            players: SideArray::new(x_player, o_player),
            verbose: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play one turn: a move if the side to move has one, a pass otherwise
    pub fn step(&mut self) -> Result<()> {
        let side = self.state.side_to_move;

        if !self.state.board.has_legal_moves_remaining(side) {
            info!(side = %side.symbol(), "no legal move, passing");
            if self.verbose {
                println!("{} can't move", side);
            }
            return self.state.pass();
        }

        let player = &mut self.players[side];
        for attempt in 1..=MAX_ILLEGAL_ATTEMPTS {
            let mv = player.get_move(&self.state.board)?;

            if self.state.board.is_legal_move(mv.col, mv.row, side) {
                info!(side = %side.symbol(), player = player.name(), mv = %mv, "move played");
                self.state.play(mv)?;

                if self.verbose {
                    println!("{} plays {}", side, mv);
                    println!("{}", self.state.board);
                }
                return Ok(());
            }

            warn!(side = %side.symbol(), mv = %mv, attempt, "illegal move");
            if self.verbose {
                println!("Invalid move {}", mv);
            }
        }

        bail!("{} made {} illegal moves in a row", side.symbol(), MAX_ILLEGAL_ATTEMPTS)
    }

    /// Play until neither side can move
    pub fn run(&mut self) -> Result<Outcome> {
        while !self.state.is_over() {
            self.step()?;
        }

        let outcome = Outcome {
            scores: self.state.scores(),
            winner: self.state.winner(),
            plies: self.state.ply,
            final_board: self.state.board.clone(),
        };

        info!(
            x = outcome.scores[Side::X],
            o = outcome.scores[Side::O],
            plies = outcome.plies,
            "game over"
        );

        Ok(outcome)
    }
}
