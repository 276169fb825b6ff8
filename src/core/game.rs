//! Game configuration and state

use std::str::FromStr;
use anyhow::{ensure, Context, Result};

use super::{Board, Loc, Side, SideArray, Value};

/// Board dimensions for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub num_cols: usize,
    pub num_rows: usize,
}

impl GameConfig {
    pub fn new(num_cols: usize, num_rows: usize) -> Self {
        Self { num_cols, num_rows }
    }
}

impl Default for GameConfig {
    /// 4x4 keeps a full-depth search from the opening tractable
    fn default() -> Self {
        Self::new(4, 4)
    }
}

/// Parses `<cols>x<rows>`, e.g. `4x4`
impl FromStr for GameConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cols, rows) = s.trim().split_once(['x', 'X'])
            .context("Invalid board size, expected <cols>x<rows>")?;

        Ok(Self {
            num_cols: cols.parse().context("Invalid column count")?,
            num_rows: rows.parse().context("Invalid row count")?,
        })
    }
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub ply: u32,
    pub consecutive_passes: u32,
}

impl GameState {
    /// Start position for `config`, X to move
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_board(Board::new(config.num_cols, config.num_rows)?, Side::X))
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            ply: 0,
            consecutive_passes: 0,
        }
    }

    /// Convert state to text notation: `<board> <side_to_move>`
    pub fn to_fen(&self) -> String {
        format!("{} {}", self.board.to_fen(), self.side_to_move.symbol())
    }

    /// Parse state from `<board> <side_to_move>`
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let board = Board::from_fen(parts.next().context("Missing board")?)?;
        let side = parts.next().context("Missing side to move")?.parse()?;
        ensure!(parts.next().is_none(), "Trailing fields in fen: {}", fen);

        Ok(Self::from_board(board, side))
    }

    /// Play a legal move for the side to move and hand the turn over
    pub fn play(&mut self, loc: Loc) -> Result<()> {
        ensure!(!self.is_over(), "Game is over");

        self.board.play_move(loc.col, loc.row, self.side_to_move)?;
        self.board.set_last_move(loc);
        self.advance();
        self.consecutive_passes = 0;

        Ok(())
    }

    /// Pass the turn; only allowed when the side to move has no legal move
    pub fn pass(&mut self) -> Result<()> {
        ensure!(!self.is_over(), "Game is over");
        ensure!(!self.board.has_legal_moves_remaining(self.side_to_move),
            "{} has a legal move and cannot pass", self.side_to_move.symbol());

        self.advance();
        self.consecutive_passes += 1;

        Ok(())
    }

    fn advance(&mut self) {
        self.side_to_move = !self.side_to_move;
        self.ply += 1;
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn scores(&self) -> SideArray<Value> {
        SideArray::new(self.board.count_score(Side::X), self.board.count_score(Side::O))
    }

    /// Winner of a finished game; `None` while in progress or on a draw
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }

        let scores = self.scores();
        match scores[Side::X].cmp(&scores[Side::O]) {
            std::cmp::Ordering::Greater => Some(Side::X),
            std::cmp::Ordering::Less => Some(Side::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}
