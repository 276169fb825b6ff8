use crate::core::{Board, Side};
use anyhow::{bail, ensure, Context, Result};

const EMPTY_CHAR: char = '.';

fn cell_to_char(cell: Option<Side>) -> char {
    cell.map_or(EMPTY_CHAR, Side::symbol)
}

fn char_to_cell(c: char) -> Result<Option<Side>> {
    match c {
        EMPTY_CHAR | '-' => Ok(None),
        'X' | 'x' | 'O' | 'o' => Ok(Some(Side::from_symbol(c)?)),
        _ => bail!("Invalid cell char: {}", c),
    }
}

impl Board {
    /// Convert the board to its text notation
    /// <row> / <row> / ... with the top row (highest index) first.
    /// - Each cell is one of 'X', 'O' or '.'.
    pub fn to_fen(&self) -> String {
        (0..self.num_rows())
            .rev()
            .map(|row| {
                (0..self.num_cols())
                    .map(|col| cell_to_char(self.get(col, row)))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Parse a board from its text notation
    pub fn from_fen(fen: &str) -> Result<Self> {
        Self::from_rows(fen.trim().split('/'))
            .with_context(|| format!("Invalid board fen: {}", fen))
    }

    /// Parse a board written one row per line, top row first. Blank lines
    /// and surrounding whitespace are ignored.
    pub fn from_grid(grid: &str) -> Result<Self> {
        Self::from_rows(grid.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    fn from_rows<'a>(rows: impl Iterator<Item = &'a str>) -> Result<Self> {
        let rows = rows
            .map(|row| row.chars().map(char_to_cell).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        ensure!(num_rows > 0 && num_cols > 0, "Board has no cells");
        ensure!(rows.iter().all(|r| r.len() == num_cols), "Rows have unequal length");

        let mut board = Board::empty(num_cols, num_rows);
        for (i, cells) in rows.into_iter().enumerate() {
            let row = num_rows - 1 - i;
            for (col, cell) in cells.into_iter().enumerate() {
                board.set(col, row, cell);
            }
        }

        Ok(board)
    }
}
