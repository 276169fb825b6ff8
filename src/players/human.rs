use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::core::{Board, Loc, Side};

use super::Player;

/// Reads moves as `c,r` (or `c r`) lines from `reader`
pub struct HumanPlayer<R: BufRead> {
    side: Side,
    reader: R,
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(side: Side, reader: R) -> Self {
        Self { side, reader }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "human"
    }

    fn get_move(&mut self, board: &Board) -> Result<Loc> {
        println!("{}", board);
        print!("{} move (col,row): ", self.side);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            bail!("Input closed while waiting for a move");
        }

        line.trim().parse().context("Expected a move as col,row")
    }
}
