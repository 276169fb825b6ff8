use std::fmt;
use colored::Colorize;

use super::{
    board::Board,
    game::GameState,
    loc::Loc,
    side::Side,
};

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = self.scores();

        writeln!(f)?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;
        writeln!(f, "Score: {} | {}",
            scores[Side::X].to_string().bright_blue(),
            scores[Side::O].to_string().bright_red())?;
        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.num_cols() {
            write!(f, "{:>2} ", col)?;
        }
        writeln!(f)?;

        write!(f, "   ")?;
        writeln!(f, "{}", "─".repeat(3 * self.num_cols()))?;

        // top row first so row 0 ends up at the bottom
        for row in (0..self.num_rows()).rev() {
            write!(f, "{:2}│", row)?;

            for col in 0..self.num_cols() {
                let is_last = self.last_move() == Some(Loc::new(col, row));
                match self.get(col, row) {
                    Some(side) if is_last => write!(f, " {} ", side.to_string().underline())?,
                    Some(side) => write!(f, " {} ", side)?,
                    None => write!(f, " · ")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol().to_string();
        match self {
            Side::X => write!(f, "{}", symbol.bright_blue()),
            Side::O => write!(f, "{}", symbol.bright_red()),
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}
