use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::ai::{search, SearchResult};
use crate::core::{GameConfig, GameState, Loc, Side};
use crate::driver::{GameDriver, Outcome};
use crate::players::{make_player, PlayerKind};

use super::options::EngineOptions;

/// Engine manages the game state and answers search requests for the side
/// to move
pub struct Engine {
    pub config: GameConfig,
    pub state: GameState,
    pub options: EngineOptions,
}

impl Engine {
    /// Create a new engine on the default board with default options
    pub fn new() -> Result<Self> {
        let config = GameConfig::default();

        Ok(Self {
            state: GameState::new(&config)?,
            config,
            options: EngineOptions::default(),
        })
    }

    /// Start a new game with `config`
    pub fn set_config(&mut self, config: GameConfig) -> Result<()> {
        self.state = GameState::new(&config)?;
        self.config = config;
        Ok(())
    }

    pub fn reset_game(&mut self) -> Result<()> {
        self.state = GameState::new(&self.config)?;
        Ok(())
    }

    /// Load a position given as `<board> <side_to_move>`
    pub fn set_position(&mut self, fen: &str) -> Result<()> {
        let state = GameState::from_fen(fen)?;
        self.config = GameConfig::new(state.board.num_cols(), state.board.num_rows());
        self.state = state;
        Ok(())
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;
        if name == "color" {
            colored::control::set_override(self.options.color);
        }
        Ok(())
    }

    pub fn play(&mut self, loc: Loc) -> Result<()> {
        self.state.play(loc)
    }

    pub fn pass(&mut self) -> Result<()> {
        self.state.pass()
    }

    pub fn legal_moves(&self) -> Vec<Loc> {
        self.state.board.legal_moves(self.state.side_to_move)
    }

    /// Search the current position to the end of the game for the side to
    /// move. Returns the result and the time taken in seconds.
    pub fn go(&self) -> Result<(SearchResult, f64)> {
        let start_time = Instant::now();
        let result = search(&self.state.board, self.state.side_to_move)?;
        let time = start_time.elapsed().as_secs_f64();

        debug!(nodes = result.nodes_explored, time, "go finished");
        Ok((result, time))
    }

    /// Play the rest of the game from the current position
    pub fn run_match(&mut self, x_kind: PlayerKind, o_kind: PlayerKind) -> Result<Outcome> {
        let mut driver = GameDriver::new(
            self.state.clone(),
            make_player(x_kind, Side::X),
            make_player(o_kind, Side::O),
        )?;
        driver.verbose = x_kind == PlayerKind::Human || o_kind == PlayerKind::Human;

        let outcome = driver.run()?;
        self.state = driver.state().clone();

        Ok(outcome)
    }

    pub fn display(&self) {
        println!("{}", self.state);
    }

    pub fn get_fen(&self) -> String {
        self.state.to_fen()
    }
}
