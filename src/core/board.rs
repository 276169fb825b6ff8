//! Board representation and rules

use anyhow::{ensure, Result};

use super::{
    loc::{Loc, DIRECTIONS},
    side::Side,
    Value,
};

/// A rectangular Othello board. Cloning a board is the snapshot operation
/// used by the search, so it holds nothing that is shared between copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    num_cols: usize,
    num_rows: usize,
    cells: Vec<Option<Side>>,
    last_move: Option<Loc>,
}

impl Board {
    /// Create a board with the standard four-disc start
    pub fn new(num_cols: usize, num_rows: usize) -> Result<Self> {
        ensure!(num_cols >= 2 && num_rows >= 2, "Board must be at least 2x2");
        ensure!(num_cols % 2 == 0 && num_rows % 2 == 0,
            "Board dimensions must be even, got {}x{}", num_cols, num_rows);

        let mut board = Self::empty(num_cols, num_rows);
        let (c, r) = (num_cols / 2, num_rows / 2);

        board.set(c - 1, r - 1, Some(Side::O));
        board.set(c, r, Some(Side::O));
        board.set(c - 1, r, Some(Side::X));
        board.set(c, r - 1, Some(Side::X));

        Ok(board)
    }

    /// Create a board with no discs
    pub fn empty(num_cols: usize, num_rows: usize) -> Self {
        Self {
            num_cols,
            num_rows,
            cells: vec![None; num_cols * num_rows],
            last_move: None,
        }
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.num_cols && row < self.num_rows
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.num_cols + col
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Side> {
        if !self.in_bounds(col, row) {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Overwrite a cell. Out of bounds writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, cell: Option<Side>) {
        if self.in_bounds(col, row) {
            let idx = self.index(col, row);
            self.cells[idx] = cell;
        }
    }

    pub fn last_move(&self) -> Option<Loc> {
        self.last_move
    }

    pub fn set_last_move(&mut self, loc: Loc) {
        self.last_move = Some(loc);
    }

    /// Length of the run of opponent discs starting next to `from` in
    /// direction `dir` that is closed off by a disc of `side`; 0 if the run
    /// is empty or open ended.
    fn flips_in_direction(&self, from: Loc, dir: (isize, isize), side: Side) -> usize {
        let mut count = 0;
        let mut cur = from;

        while let Some(next) = cur.offset(dir, self.num_cols, self.num_rows) {
            match self.get(next.col, next.row) {
                Some(s) if s == side => return count,
                Some(_) => count += 1,
                None => return 0,
            }
            cur = next;
        }

        0
    }

    pub fn is_legal_move(&self, col: usize, row: usize, side: Side) -> bool {
        if !self.in_bounds(col, row) || self.get(col, row).is_some() {
            return false;
        }

        let from = Loc::new(col, row);
        DIRECTIONS.iter()
            .any(|&dir| self.flips_in_direction(from, dir, side) > 0)
    }

    /// All legal moves for `side`, columns outermost then rows ascending
    pub fn legal_moves(&self, side: Side) -> Vec<Loc> {
        let mut moves = Vec::new();
        for col in 0..self.num_cols {
            for row in 0..self.num_rows {
                if self.is_legal_move(col, row, side) {
                    moves.push(Loc::new(col, row));
                }
            }
        }
        moves
    }

    pub fn has_legal_moves_remaining(&self, side: Side) -> bool {
        (0..self.num_cols).any(|col|
            (0..self.num_rows).any(|row| self.is_legal_move(col, row, side)))
    }

    /// Place a disc for `side` and flip every bracketed run
    pub fn play_move(&mut self, col: usize, row: usize, side: Side) -> Result<()> {
        ensure!(self.is_legal_move(col, row, side),
            "Illegal move {},{} for {}", col, row, side.symbol());

        let from = Loc::new(col, row);
        for dir in DIRECTIONS {
            let flips = self.flips_in_direction(from, dir, side);
            let mut cur = from;
            for _ in 0..flips {
                // in bounds: flips_in_direction walked these cells
                if let Some(next) = cur.offset(dir, self.num_cols, self.num_rows) {
                    self.set(next.col, next.row, Some(side));
                    cur = next;
                }
            }
        }

        self.set(col, row, Some(side));
        Ok(())
    }

    pub fn count_score(&self, side: Side) -> Value {
        self.cells.iter()
            .filter(|cell| **cell == Some(side))
            .count() as Value
    }

    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.num_empty() == 0
    }

    /// Neither side can move
    pub fn is_terminal(&self) -> bool {
        Side::all().iter().all(|&side| !self.has_legal_moves_remaining(side))
    }
}
