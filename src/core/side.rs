use anyhow::{anyhow, bail, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::ops::{Index, IndexMut, Not};
use std::str::FromStr;

use super::convert::{FromIndex, ToIndex};

/// Side/player in the game. `X` is player one and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::X, Side::O]
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Symbol used on the board and in the text notation
    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Result<Self> {
        match c {
            'X' | 'x' => Ok(Side::X),
            'O' | 'o' => Ok(Side::O),
            _ => bail!("Invalid side symbol: {}", c),
        }
    }
}

impl FromIndex for Side {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid side index: {}", idx))
    }
}

impl ToIndex for Side {
    fn to_index(&self) -> usize {
        // both variants are in 0..2
        ToPrimitive::to_usize(self).unwrap_or_default()
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Side::from_symbol(c),
            _ => bail!("Invalid side: {}", s),
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

/// Array indexed by game side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideArray<T> {
    pub values: [T; 2],
}

impl<T> SideArray<T> {
    pub fn new(x: T, o: T) -> Self {
        Self {
            values: [x, o],
        }
    }

    pub fn get(&self, side: Side) -> &T {
        &self.values[side.to_index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.values[side.to_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<Side> for SideArray<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        self.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Side::X ; "x")]
    #[test_case(Side::O ; "o")]
    fn test_opponent_is_involutive(side: Side) {
        assert_ne!(side.opponent(), side);
        assert_eq!(side.opponent().opponent(), side);
        assert_eq!(!!side, side);
    }

    #[test]
    fn test_side_from_index() {
        assert_eq!(Side::from_index(0).unwrap(), Side::X);
        assert_eq!(Side::from_index(1).unwrap(), Side::O);
        assert!(Side::from_index(2).is_err());
    }

    #[test]
    fn test_side_to_index() {
        assert_eq!(Side::X.to_index(), 0);
        assert_eq!(Side::O.to_index(), 1);

        for side in Side::all() {
            assert_eq!(Side::from_index(side.to_index()).unwrap(), side);
        }
    }

    #[test_case("X", Some(Side::X) ; "upper x")]
    #[test_case("o", Some(Side::O) ; "lower o")]
    #[test_case("Z", None ; "unknown symbol")]
    #[test_case("XO", None ; "too long")]
    #[test_case("", None ; "empty")]
    fn test_side_from_str(input: &str, expected: Option<Side>) {
        assert_eq!(input.parse::<Side>().ok(), expected);
    }

    #[test]
    fn test_side_array() {
        let mut array = SideArray::new(5, 10);

        assert_eq!(*array.get(Side::X), 5);
        assert_eq!(array[Side::O], 10);

        *array.get_mut(Side::X) = 15;
        array[Side::O] += 1;

        let values: Vec<_> = array.iter().copied().collect();
        assert_eq!(values, vec![15, 11]);
    }
}
