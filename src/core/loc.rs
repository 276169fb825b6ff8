use std::str::FromStr;
use anyhow::{ensure, Context};

/// A (column, row) coordinate on the board. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub col: usize,
    pub row: usize,
}

impl Loc {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Step one cell in direction `(dc, dr)`, `None` when leaving the board
    pub fn offset(&self, (dc, dr): (isize, isize), num_cols: usize, num_rows: usize) -> Option<Loc> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;

        (col < num_cols && row < num_rows).then_some(Loc { col, row })
    }
}

impl From<(usize, usize)> for Loc {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// Accepts `c,r` as well as `c r`
impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (col, row) = s.split_once(',')
            .or_else(|| s.split_once(char::is_whitespace))
            .context("Invalid loc")?;

        let (col, row) = (col.trim(), row.trim());
        ensure!(!col.is_empty() && !row.is_empty(), "Invalid loc: {}", s);

        Ok(Loc {
            col: col.parse().context("Invalid column")?,
            row: row.parse().context("Invalid row")?,
        })
    }
}

pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1,2", Some(Loc::new(1, 2)) ; "comma")]
    #[test_case("3 0", Some(Loc::new(3, 0)) ; "space")]
    #[test_case(" 0 , 7 ", Some(Loc::new(0, 7)) ; "padded")]
    #[test_case("1,", None ; "missing row")]
    #[test_case("a,b", None ; "not numbers")]
    #[test_case("-1,0", None ; "negative")]
    #[test_case("5", None ; "single number")]
    fn test_loc_from_str(input: &str, expected: Option<Loc>) {
        assert_eq!(input.parse::<Loc>().ok(), expected);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Loc::new(0, 0);
        assert_eq!(corner.offset((-1, 0), 4, 4), None);
        assert_eq!(corner.offset((1, 1), 4, 4), Some(Loc::new(1, 1)));
        assert_eq!(Loc::new(3, 3).offset((0, 1), 4, 4), None);
    }
}
